//! Property tests: catalog ordering, deal partitioning, trick resolution,
//! and play legality over arbitrary seeds and contracts.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bids::CATALOG;
use crate::domain::deck::Deck;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS, WIDOW_SIZE};
use crate::domain::tricks::{legal_plays, trick_winner, TrickPlays};
use crate::domain::{
    effective_rank, effective_suit, Bid, Card, EffectiveSuit, Hand, Phase, Round,
};

fn any_contract() -> impl Strategy<Value = Bid> {
    (0..CATALOG.len()).prop_map(|i| CATALOG[i])
}

fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    (0..DECK_SIZE)
        .map(|_| deck.deal_card().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn catalog_order_score_order_and_outranking_agree(
        i in 0..CATALOG.len(),
        j in 0..CATALOG.len(),
    ) {
        let a = CATALOG[i];
        let b = CATALOG[j];
        prop_assert_eq!(a.outranks(b), a.score() > b.score());
        prop_assert_eq!(a.outranks(b), i > j);
        prop_assert_eq!(a > b, i > j);
    }

    #[test]
    fn any_seed_partitions_the_deck(seed in any::<u64>(), dealer in 0u8..3) {
        let mut round = Round::new(dealer);
        round.deal(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();

        let mut tokens: Vec<String> = (0..PLAYERS as u8)
            .flat_map(|s| round.hand(s).iter())
            .map(|c| c.to_string())
            .collect();
        prop_assert_eq!(tokens.len(), PLAYERS * HAND_SIZE);
        prop_assert_eq!(round.widow().len(), WIDOW_SIZE);
        tokens.extend(round.widow().iter().map(|c| c.to_string()));
        tokens.sort();
        tokens.dedup();
        prop_assert_eq!(tokens.len(), DECK_SIZE);
    }

    #[test]
    fn trick_winner_is_maximal_among_eligible_cards(
        seed in any::<u64>(),
        contract in any_contract(),
        lead in 0u8..3,
    ) {
        let cards = shuffled_deck(seed);
        let plays: TrickPlays = [Some(cards[0]), Some(cards[1]), Some(cards[2])];
        let winner = trick_winner(&plays, lead, contract).unwrap();
        let winning = plays[winner as usize].unwrap();
        let lead_suit = effective_suit(plays[lead as usize].unwrap(), contract);

        let winning_suit = effective_suit(winning, contract);
        prop_assert!(winning_suit == lead_suit || winning_suit == EffectiveSuit::Joker);

        for seat in 0..PLAYERS as u8 {
            let card = plays[seat as usize].unwrap();
            let suit = effective_suit(card, contract);
            if suit == lead_suit || suit == EffectiveSuit::Joker {
                prop_assert!(
                    effective_rank(card, contract) <= effective_rank(winning, contract)
                );
            }
        }
    }

    #[test]
    fn a_nonempty_hand_always_has_a_legal_play(
        seed in any::<u64>(),
        n in 1usize..=10,
        contract in any_contract(),
    ) {
        let cards = shuffled_deck(seed);
        let hand: Hand = cards[..n].iter().copied().collect();
        let lead = Some(cards[n]);
        prop_assert!(!legal_plays(&hand, lead, contract).is_empty());
        prop_assert!(legal_plays(&hand, None, contract).len() == n);
    }

    #[test]
    fn any_contracted_round_plays_out_to_ten_tricks(seed in any::<u64>()) {
        let mut round = Round::new(0);
        round.deal(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        round.apply_bid(1, CATALOG[1]).unwrap();
        round.apply_bid(2, Bid::PASS).unwrap();
        round.apply_bid(0, Bid::PASS).unwrap();

        while round.phase() == Phase::Playing {
            let seat = round.current_seat();
            let legal = legal_plays(round.hand(seat), round.lead_card(), round.contract());
            prop_assert!(!legal.is_empty());
            round.apply_card_play(seat, legal[0]).unwrap();
        }

        let total: u8 = (0..PLAYERS as u8).map(|s| round.tricks_won(s)).sum();
        prop_assert_eq!(total, HAND_SIZE as u8);
    }
}
