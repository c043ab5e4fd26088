//! Rule-based seat controller.
//!
//! Card play follows a fixed policy over the contract-sorted hand: lead
//! the lowest card; when following, beat the lead card with the highest
//! follower if possible and dump the lowest follower otherwise; when
//! void, throw the highest trump if any are held, else the lowest-ranked
//! card in the whole hand. Throwing trump does not check whether it can
//! actually take the trick.

use crate::domain::{
    effective_rank, effective_suit, Bid, Card, EffectiveSuit, Rank, SeatView, Suit, Trump,
};

use super::Player;

#[derive(Debug, Default)]
pub struct HeuristicAi;

impl HeuristicAi {
    pub fn new() -> Self {
        Self
    }

    /// Pick the longest suit as candidate trump, estimate tricks as that
    /// suit's length plus side aces, and bid that level if it is at least
    /// six and still outranks the table. Conservative by construction.
    fn choose_bid(&self, view: &SeatView<'_>) -> Bid {
        let mut best: Option<(Trump, usize)> = None;
        for suit in Suit::ALL {
            let trump = Trump::from(suit);
            let Some(probe) = Bid::find(6, trump) else {
                continue;
            };
            let length = view
                .hand
                .iter()
                .filter(|&c| effective_suit(c, probe) == EffectiveSuit::from(suit))
                .count();
            if best.map_or(true, |(_, len)| length > len) {
                best = Some((trump, length));
            }
        }
        let Some((trump, length)) = best else {
            return Bid::PASS;
        };
        let side_aces = view
            .hand
            .iter()
            .filter(|&c| c.rank() == Some(Rank::Ace) && c.suit() != trump.suit())
            .count();
        let estimate = length + side_aces;
        if estimate < 6 {
            return Bid::PASS;
        }
        let level = estimate.min(10) as u8;
        match Bid::find(level, trump) {
            Some(candidate) if candidate.outranks(view.contract) => candidate,
            _ => Bid::PASS,
        }
    }

    fn choose_play(&self, view: &SeatView<'_>) -> Option<Card> {
        let contract = view.contract;
        let Some(lead) = view.lead_card else {
            // Leading: lowest card of the sorted hand.
            return view.hand.get(0);
        };

        let lead_suit = effective_suit(lead, contract);
        let lead_rank = effective_rank(lead, contract);
        let followers: Vec<Card> = view
            .hand
            .iter()
            .filter(|&c| effective_suit(c, contract) == lead_suit)
            .collect();
        // The hand is kept sorted ascending within suit groups, so the
        // last follower is the strongest.
        if let Some(&best) = followers.last() {
            if effective_rank(best, contract) > lead_rank {
                return Some(best);
            }
            return followers.first().copied();
        }

        if let Some(trump) = contract.trump_suit() {
            let group = EffectiveSuit::from(trump);
            let highest_trump = view
                .hand
                .iter()
                .filter(|&c| effective_suit(c, contract) == group)
                .last();
            if highest_trump.is_some() {
                return highest_trump;
            }
        }

        // Void with nothing to trump in: shed the lowest rank held, which
        // may sit in a later suit group than the sort's first card.
        view.hand
            .iter()
            .min_by_key(|&c| effective_rank(c, contract))
    }
}

impl Player for HeuristicAi {
    fn poll_bid(&mut self, view: &SeatView<'_>) -> Option<Bid> {
        Some(self.choose_bid(view))
    }

    fn poll_play(&mut self, view: &SeatView<'_>) -> Option<Card> {
        self.choose_play(view)
    }
}
