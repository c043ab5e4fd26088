use crate::domain::{Bid, Card, SeatView};

/// A decision source for one seat.
///
/// Implementations must not assume they are polled exactly once per
/// move: a rejected move leaves the seat current and the controller is
/// polled again next tick. Returning `None` means "nothing ready yet"
/// and is always safe.
pub trait Player {
    /// Called each tick while it is this seat's turn, before polling.
    /// Default no-op; a UI adapter can use it to surface the turn.
    fn observe_turn(&mut self, _view: &SeatView<'_>) {}

    /// Asked while this seat is due to bid.
    fn poll_bid(&mut self, view: &SeatView<'_>) -> Option<Bid>;

    /// Asked while this seat is due to play a card.
    fn poll_play(&mut self, view: &SeatView<'_>) -> Option<Card>;
}
