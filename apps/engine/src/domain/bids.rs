//! The ordered catalog of biddable contracts (Avondale schedule).

use std::cmp::Ordering;
use std::fmt;

use super::cards_types::Suit;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Trump {
    /// The trump suit, or `None` for a no-trump contract.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Trump::Clubs => Some(Suit::Clubs),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Spades => Some(Suit::Spades),
            Trump::NoTrump => None,
        }
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Trump::Clubs,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Spades => Trump::Spades,
        }
    }
}

/// One catalog entry: a declarable contract, or the pass bid.
///
/// Entries are plain data; everything behavioral (bower suits, effective
/// ranks) lives in the evaluator. The catalog is declared in ascending
/// score order, so "declared later" and "scores more" coincide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bid {
    name: &'static str,
    /// Tricks the holder commits to win; 0 for pass.
    level: u8,
    trump: Trump,
    /// Points awarded for making the contract. Total order over the catalog.
    score: u16,
}

const fn bid(name: &'static str, level: u8, trump: Trump, score: u16) -> Bid {
    Bid {
        name,
        level,
        trump,
        score,
    }
}

/// All 26 bids in declaration order: pass, then five levels of
/// spades/clubs/diamonds/hearts/no-trump.
pub const CATALOG: [Bid; 26] = [
    Bid::PASS,
    bid("6 Spades", 6, Trump::Spades, 40),
    bid("6 Clubs", 6, Trump::Clubs, 60),
    bid("6 Diamonds", 6, Trump::Diamonds, 80),
    bid("6 Hearts", 6, Trump::Hearts, 100),
    bid("6 No Trump", 6, Trump::NoTrump, 120),
    bid("7 Spades", 7, Trump::Spades, 140),
    bid("7 Clubs", 7, Trump::Clubs, 160),
    bid("7 Diamonds", 7, Trump::Diamonds, 180),
    bid("7 Hearts", 7, Trump::Hearts, 200),
    bid("7 No Trump", 7, Trump::NoTrump, 220),
    bid("8 Spades", 8, Trump::Spades, 240),
    bid("8 Clubs", 8, Trump::Clubs, 260),
    bid("8 Diamonds", 8, Trump::Diamonds, 280),
    bid("8 Hearts", 8, Trump::Hearts, 300),
    bid("8 No Trump", 8, Trump::NoTrump, 320),
    bid("9 Spades", 9, Trump::Spades, 340),
    bid("9 Clubs", 9, Trump::Clubs, 360),
    bid("9 Diamonds", 9, Trump::Diamonds, 380),
    bid("9 Hearts", 9, Trump::Hearts, 400),
    bid("9 No Trump", 9, Trump::NoTrump, 420),
    bid("10 Spades", 10, Trump::Spades, 440),
    bid("10 Clubs", 10, Trump::Clubs, 460),
    bid("10 Diamonds", 10, Trump::Diamonds, 480),
    bid("10 Hearts", 10, Trump::Hearts, 500),
    bid("10 No Trump", 10, Trump::NoTrump, 520),
];

impl Bid {
    /// The unique minimum of the catalog ordering.
    pub const PASS: Bid = bid("Pass", 0, Trump::NoTrump, 0);

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn level(self) -> u8 {
        self.level
    }

    pub fn trump(self) -> Trump {
        self.trump
    }

    pub fn score(self) -> u16 {
        self.score
    }

    pub fn is_pass(self) -> bool {
        self == Bid::PASS
    }

    pub fn has_trump(self) -> bool {
        self.trump.suit().is_some()
    }

    /// The trump suit of this contract, if it has one.
    pub fn trump_suit(self) -> Option<Suit> {
        self.trump.suit()
    }

    /// Whether this bid beats `other` at the table.
    pub fn outranks(self, other: Bid) -> bool {
        self.score > other.score
    }

    /// The lowest catalog entry declaring `level` tricks in `trump`.
    pub fn find(level: u8, trump: Trump) -> Option<Bid> {
        CATALOG
            .iter()
            .copied()
            .find(|b| b.level == level && b.trump == trump)
    }

    /// Catalog lookup by display name (used when deserializing snapshots).
    pub fn by_name(name: &str) -> Option<Bid> {
        CATALOG.iter().copied().find(|b| b.name == name)
    }
}

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Bid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
