//! Read-only views of table state.
//!
//! `SeatView` is the borrowed slice of state a controller may consult when
//! polled for a move — controllers never hold references back into the
//! round. `TableSnapshot` is the owned, serializable aggregate a UI host
//! reads each frame.

use serde::Serialize;

use super::bids::Bid;
use super::cards_types::Card;
use super::evaluator::{effective_rank, effective_suit, EffectiveSuit};
use super::hand::Hand;
use super::rules::PLAYERS;
use super::state::{Phase, Seat};
use super::tricks::TrickPlays;

/// What one seat is allowed to see when asked for a bid or a play.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub seat: Seat,
    pub phase: Phase,
    pub hand: &'a Hand,
    /// Highest accepted bid so far; the contract once play begins.
    pub contract: Bid,
    pub plays: &'a TrickPlays,
    pub lead_seat: Option<Seat>,
    pub lead_card: Option<Card>,
    pub tricks_won: &'a [u8; PLAYERS],
}

impl SeatView<'_> {
    /// Whether this seat would lead the trick (nothing on the table).
    pub fn is_leading(&self) -> bool {
        self.plays.iter().all(Option::is_none)
    }
}

/// Lead-card hint for UI legality highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadInfo {
    pub seat: Seat,
    pub card: Card,
    pub effective_suit: EffectiveSuit,
    pub effective_rank: u8,
}

/// Owned snapshot of everything the host renders.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub dealer: Seat,
    pub current_seat: Seat,
    pub highest_bid: Bid,
    pub highest_bidder: Option<Seat>,
    /// Seat-indexed cards of the current trick.
    pub plays: Vec<Option<Card>>,
    pub lead: Option<LeadInfo>,
    pub hands: Vec<Vec<Card>>,
    pub widow_size: usize,
    pub tricks_won: Vec<u8>,
    pub scores: Vec<i32>,
}

impl LeadInfo {
    pub fn new(seat: Seat, card: Card, contract: Bid) -> Self {
        Self {
            seat,
            card,
            effective_suit: effective_suit(card, contract),
            effective_rank: effective_rank(card, contract),
        }
    }
}

// EffectiveSuit only ever crosses the boundary inside snapshots, so its
// serde lives here with the other view plumbing.
impl Serialize for EffectiveSuit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self {
            EffectiveSuit::Clubs => "CLUBS",
            EffectiveSuit::Diamonds => "DIAMONDS",
            EffectiveSuit::Spades => "SPADES",
            EffectiveSuit::Hearts => "HEARTS",
            EffectiveSuit::Joker => "JOKER",
        };
        serializer.serialize_str(s)
    }
}
