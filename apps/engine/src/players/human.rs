//! Mailbox controller for a human seat.

use std::sync::{Arc, Mutex};

use crate::domain::{Bid, Card, SeatView};

use super::Player;

#[derive(Debug, Default)]
struct Inbox {
    bid: Option<Bid>,
    card: Option<Card>,
}

/// Host-side handle for forwarding UI input to a [`HumanSlot`]. A new
/// submission replaces any move still sitting unread in the mailbox.
#[derive(Debug, Clone)]
pub struct HumanInput {
    inbox: Arc<Mutex<Inbox>>,
}

impl HumanInput {
    pub fn submit_bid(&self, bid: Bid) {
        self.lock().bid = Some(bid);
    }

    pub fn submit_card(&self, card: Card) {
        self.lock().card = Some(card);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inbox> {
        // The inbox holds plain Copy data, so a poisoned lock is still usable.
        self.inbox.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A seat driven by submitted input. Polling takes the pending move, so
/// an illegal submission is consumed by its rejection and the seat waits
/// for the next one.
#[derive(Debug)]
pub struct HumanSlot {
    inbox: Arc<Mutex<Inbox>>,
}

impl HumanSlot {
    pub fn new() -> (Self, HumanInput) {
        let inbox = Arc::new(Mutex::new(Inbox::default()));
        let input = HumanInput {
            inbox: Arc::clone(&inbox),
        };
        (Self { inbox }, input)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inbox> {
        self.inbox.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Player for HumanSlot {
    fn poll_bid(&mut self, _view: &SeatView<'_>) -> Option<Bid> {
        self.lock().bid.take()
    }

    fn poll_play(&mut self, _view: &SeatView<'_>) -> Option<Card> {
        self.lock().card.take()
    }
}
