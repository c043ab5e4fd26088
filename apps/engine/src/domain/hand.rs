//! A single player's cards for one round.

use super::bids::Bid;
use super::cards_types::Card;
use super::evaluator::{compare_for_hand, effective_suit, EffectiveSuit};
use crate::errors::{DomainError, ValidationKind};

/// An ordered sequence of cards owned by exactly one seat. Cleared and
/// repopulated each round; the deal guarantees no duplicate identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a specific card by identity.
    pub fn take(&mut self, card: Card) -> Result<Card, DomainError> {
        match self.position(card) {
            Some(pos) => Ok(self.cards.remove(pos)),
            None => Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card not in hand: {card}"),
            )),
        }
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.position(card).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sort ascending by suit group then effective rank under `contract`,
    /// so bowers and the joker sit with the trumps. The AI relies on this
    /// ordering when scanning for followers.
    pub fn sort_for_contract(&mut self, contract: Bid) {
        self.cards.sort_by(|a, b| compare_for_hand(*a, *b, contract));
    }

    /// Whether any held card follows `suit` under `contract`.
    pub fn has_effective_suit(&self, suit: EffectiveSuit, contract: Bid) -> bool {
        self.cards
            .iter()
            .any(|&c| effective_suit(c, contract) == suit)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}
