//! Trump-aware card evaluation.
//!
//! This is the one place that knows how a declared trump warps the deck:
//! both bower jacks and the joker are promoted into the trump suit group
//! while outranking ordinary trumps. Trick resolution, legality checks,
//! hand sorting, and the AI all consume cards through `effective_rank` /
//! `effective_suit` and stay free of suit special-casing.

use std::cmp::Ordering;

use super::bids::Bid;
use super::cards_types::{Card, Rank, Suit};

/// The joker always evaluates above every other card.
pub const JOKER_RANK: u8 = 20;

/// The trump-suit jack, the higher of the two bowers in this variant.
pub const HIGH_BOWER_RANK: u8 = 16;

/// The same-color jack, promoted into the trump suit just below the
/// trump-suit jack.
pub const LOW_BOWER_RANK: u8 = 15;

/// The suit group a card follows for trick purposes. The joker forms its
/// own group only when no trump is declared; under a trump contract it is
/// absorbed into the trump suit (see `effective_suit`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EffectiveSuit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
    Joker,
}

impl From<Suit> for EffectiveSuit {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => EffectiveSuit::Clubs,
            Suit::Diamonds => EffectiveSuit::Diamonds,
            Suit::Spades => EffectiveSuit::Spades,
            Suit::Hearts => EffectiveSuit::Hearts,
        }
    }
}

/// A card's rank under `contract`.
///
/// Non-jacks keep their face value. With a trump declared, the trump-suit
/// jack becomes the high bower (16) and the same-color jack the low bower
/// (15); any other jack, or any jack with no trump, stays at 11. The joker
/// is always 20.
pub fn effective_rank(card: Card, contract: Bid) -> u8 {
    let Card::Suited { suit, rank } = card else {
        return JOKER_RANK;
    };
    if rank != Rank::Jack {
        return rank.face_value();
    }
    match contract.trump_suit() {
        Some(trump) if suit == trump => HIGH_BOWER_RANK,
        Some(trump) if suit == trump.same_color() => LOW_BOWER_RANK,
        _ => rank.face_value(),
    }
}

/// The suit group `card` counts as under `contract`.
///
/// With a trump declared, the same-color bower jack and the joker both
/// report the trump suit so the whole trump group follows together;
/// everything else reports its raw suit. With no trump, the joker is its
/// own group.
pub fn effective_suit(card: Card, contract: Bid) -> EffectiveSuit {
    let trump = contract.trump_suit();
    match card {
        Card::Joker => match trump {
            Some(t) => t.into(),
            None => EffectiveSuit::Joker,
        },
        Card::Suited { suit, rank } => match trump {
            Some(t) if rank == Rank::Jack && suit == t.same_color() => t.into(),
            _ => suit.into(),
        },
    }
}

/// Hand-display ordering under `contract`: suit group first, then rank, so
/// the bowers and joker sort in with the trumps. Distinct cards never
/// compare equal because effective ranks are distinct within a group.
pub fn compare_for_hand(a: Card, b: Card, contract: Bid) -> Ordering {
    effective_suit(a, contract)
        .cmp(&effective_suit(b, contract))
        .then(effective_rank(a, contract).cmp(&effective_rank(b, contract)))
}
