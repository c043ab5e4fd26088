//! Core engine for a three-handed "500" card game.
//!
//! The crate is split the same way the game is: `domain` holds the pure
//! rules (cards, bids, trump-aware evaluation, the round state machine),
//! `players` holds the controllers the machine polls for moves (a human
//! mailbox adapter and a deterministic heuristic AI), and `errors` holds
//! the shared error type. Rendering, windowing, and input sampling are a
//! host concern; the host drives the engine through `Round::tick` and the
//! read-only query surface.

pub mod domain;
pub mod errors;
pub mod players;
