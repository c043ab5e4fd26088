//! The 33-card deal source for one table.

use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::DECK_SIZE;
use crate::errors::DomainError;

/// A fixed multiset of 33 cards: ranks seven through ace in each suit plus
/// a single joker. Cards are never destroyed; `shuffle` returns every
/// dealt card and permutes the order, and `deal_card` hands them out one
/// at a time.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.push(Card::Joker);
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards, dealt: 0 }
    }

    /// Return all dealt cards to the deck and permute (Fisher-Yates). The
    /// host supplies the randomness source, so tests and the simulator can
    /// deal deterministically from a seeded generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.dealt = 0;
    }

    pub fn cards_left(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// Deal the next card. Exhaustion is an invariant violation: the fixed
    /// 3×10+3 distribution consumes the deck exactly.
    pub fn deal_card(&mut self) -> Result<Card, DomainError> {
        if self.dealt == self.cards.len() {
            return Err(DomainError::invariant("No cards are left in the deck"));
        }
        let card = self.cards[self.dealt];
        self.dealt += 1;
        Ok(card)
    }
}
