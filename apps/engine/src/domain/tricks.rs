//! Trick resolution and follow-suit legality.

use super::bids::Bid;
use super::cards_types::Card;
use super::evaluator::{effective_rank, effective_suit, EffectiveSuit};
use super::hand::Hand;
use super::rules::PLAYERS;
use super::state::{nth_from, Seat};
use crate::errors::DomainError;

/// Seat-indexed cards of the current trick; at most one per seat, cleared
/// when the trick resolves.
pub type TrickPlays = [Option<Card>; PLAYERS];

/// Determine who won a full trick under `contract`.
///
/// The leader starts as winner; scanning the remaining seats in seating
/// order, a candidate takes over iff it is in the joker group with a
/// higher effective rank, or it follows the lead card's effective suit
/// with a higher effective rank. Off-suit cards never win — deliberately
/// including off-suit trumps, which matches the source rules this engine
/// reimplements. Ties cannot occur: effective ranks within a suit group
/// are distinct by construction.
pub fn trick_winner(plays: &TrickPlays, lead: Seat, contract: Bid) -> Result<Seat, DomainError> {
    let card_at = |seat: Seat| -> Result<Card, DomainError> {
        plays[seat as usize]
            .ok_or_else(|| DomainError::invariant(format!("Trick is missing seat {seat}'s card")))
    };

    let lead_card = card_at(lead)?;
    let lead_suit = effective_suit(lead_card, contract);

    let mut winner = lead;
    let mut winner_rank = effective_rank(lead_card, contract);

    for offset in 1..PLAYERS {
        let seat = nth_from(lead, offset);
        let card = card_at(seat)?;
        let suit = effective_suit(card, contract);
        let rank = effective_rank(card, contract);
        if (suit == EffectiveSuit::Joker || suit == lead_suit) && rank > winner_rank {
            winner = seat;
            winner_rank = rank;
        }
    }
    Ok(winner)
}

/// Follow-suit legality: holding any card of the lead's effective suit
/// forces a card of that suit; the joker is always legal; with no lead
/// (or no matching card) anything goes.
pub fn is_legal_play(hand: &Hand, card: Card, lead_card: Option<Card>, contract: Bid) -> bool {
    let Some(lead) = lead_card else {
        return true;
    };
    let lead_suit = effective_suit(lead, contract);
    if !hand.has_effective_suit(lead_suit, contract) {
        return true;
    }
    let suit = effective_suit(card, contract);
    suit == EffectiveSuit::Joker || suit == lead_suit
}

/// The cards from `hand` that `is_legal_play` would accept.
pub fn legal_plays(hand: &Hand, lead_card: Option<Card>, contract: Bid) -> Vec<Card> {
    hand.iter()
        .filter(|&c| is_legal_play(hand, c, lead_card, contract))
        .collect()
}
