//! Domain-level error type shared across the engine.
//!
//! Two failure families, matching how the round machine treats them:
//! `Validation` covers rejected moves (wrong turn, must follow suit, bad
//! card token) — the caller's state is untouched and the host may simply
//! retry. `Invariant` covers broken engine preconditions (dealing from an
//! exhausted deck, resolving a partial trick) — these indicate a bug
//! upstream and tests treat them as fatal.

use thiserror::Error;

/// What a validation rejection was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    PhaseMismatch,
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    BidTooLow,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or rule violation; state is unchanged.
    #[error("validation error ({kind:?}): {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
    /// Broken engine precondition; should never occur in correct operation.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// True for rejections that leave state untouched (as opposed to
    /// invariant violations, which are fatal).
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(*kind),
            Self::Invariant(_) => None,
        }
    }
}
