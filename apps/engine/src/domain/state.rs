//! Phases and seat arithmetic.

use serde::Serialize;

use super::rules::PLAYERS;

/// Seat index, 0..=2. Seat 0 is conventionally the human in a UI host,
/// but the engine treats all seats alike.
pub type Seat = u8;

/// Round progression. Each round walks Dealing → Bidding → Playing →
/// Scoring; the transition back to Dealing waits for an explicit host
/// acknowledgement (`Round::advance_round`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Shuffle and deal; entered at round start and again after scoring.
    Dealing,
    /// Every seat declares a bid in turn order; passing counts.
    Bidding,
    /// Trick play until all thirty cards are down.
    Playing,
    /// Totals applied; waiting for the host to start the next round.
    Scoring,
}

/// The next seat clockwise (0 → 1 → 2 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    ((seat as usize + 1) % PLAYERS) as Seat
}

/// The seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: usize) -> Seat {
    ((start as usize + n) % PLAYERS) as Seat
}

/// First seat to bid: left of the dealer.
#[inline]
pub fn first_bidder(dealer: Seat) -> Seat {
    next_seat(dealer)
}
