//! The round state machine.
//!
//! Owns the deck, hands, widow, and all table state for one round, and
//! drives Dealing → Bidding → Playing → Scoring. The host calls `tick`
//! once per update; each tick polls at most one controller and never
//! blocks. Mutations arrive through `apply_bid` / `apply_card_play`,
//! which reject illegal moves with no state change.

use rand::Rng;
use tracing::debug;

use super::bids::Bid;
use super::cards_types::Card;
use super::deck::Deck;
use super::hand::Hand;
use super::player_view::{LeadInfo, SeatView, TableSnapshot};
use super::rules::{DEAL_WAVES, PLAYERS, TOTAL_PLAYABLE, WIDOW_SIZE};
use super::scoring::round_score_deltas;
use super::state::{first_bidder, next_seat, Phase, Seat};
use super::tricks::{is_legal_play, trick_winner, TrickPlays};
use crate::errors::{DomainError, ValidationKind};
use crate::players::Player;

/// What an accepted card play did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    pub trick_completed: bool,
    pub trick_winner: Option<Seat>,
    pub phase_after: Phase,
}

/// What one update tick observed. Rejected moves leave state untouched;
/// the same seat will be polled again next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing ready (controller had no pending move, or waiting on the
    /// host to acknowledge scoring).
    Idle,
    Dealt,
    BidPlaced {
        seat: Seat,
        bid: Bid,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
        trick_winner: Option<Seat>,
    },
    MoveRejected {
        seat: Seat,
        kind: ValidationKind,
    },
}

#[derive(Debug, Clone)]
pub struct Round {
    phase: Phase,
    dealer: Seat,
    current: Seat,
    deck: Deck,
    hands: [Hand; PLAYERS],
    widow: Hand,
    bid_count: u8,
    highest_bid: Bid,
    highest_bidder: Option<Seat>,
    /// Leader of the trick in progress; `None` between tricks.
    lead: Option<Seat>,
    plays: TrickPlays,
    cards_played: u8,
    tricks_won: [u8; PLAYERS],
    scores: [i32; PLAYERS],
}

impl Round {
    pub fn new(dealer: Seat) -> Self {
        Self {
            phase: Phase::Dealing,
            dealer,
            current: first_bidder(dealer),
            deck: Deck::new(),
            hands: std::array::from_fn(|_| Hand::new()),
            widow: Hand::new(),
            bid_count: 0,
            highest_bid: Bid::PASS,
            highest_bidder: None,
            lead: None,
            plays: [None; PLAYERS],
            cards_played: 0,
            tricks_won: [0; PLAYERS],
            scores: [0; PLAYERS],
        }
    }

    // ---------- phase transitions ----------

    /// Reset per-round counters, shuffle, and deal the 3-4-3 waves (widow
    /// after the first wave), then open bidding left of the dealer.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        if self.phase != Phase::Dealing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Deal outside the dealing phase",
            ));
        }

        self.bid_count = 0;
        self.cards_played = 0;
        self.highest_bid = Bid::PASS;
        self.highest_bidder = None;
        self.lead = None;
        self.plays = [None; PLAYERS];
        self.tricks_won = [0; PLAYERS];
        for hand in &mut self.hands {
            hand.clear();
        }
        self.widow.clear();

        self.deck.shuffle(rng);
        for (wave, &count) in DEAL_WAVES.iter().enumerate() {
            for hand in &mut self.hands {
                for _ in 0..count {
                    hand.add(self.deck.deal_card()?);
                }
            }
            if wave == 0 {
                for _ in 0..WIDOW_SIZE {
                    self.widow.add(self.deck.deal_card()?);
                }
            }
        }
        debug_assert_eq!(self.deck.cards_left(), 0);

        for hand in &mut self.hands {
            hand.sort_for_contract(Bid::PASS);
        }

        self.current = first_bidder(self.dealer);
        self.phase = Phase::Bidding;
        debug!(dealer = self.dealer, first_bidder = self.current, "dealt");
        Ok(())
    }

    /// Record `seat`'s bid. Passing is always valid; any other bid must
    /// outrank the current highest. Once every seat has bid, the highest
    /// bidder holds the contract and leads the play, and if everyone
    /// passed the round skips straight to scoring.
    pub fn apply_bid(&mut self, seat: Seat, bid: Bid) -> Result<(), DomainError> {
        if self.phase != Phase::Bidding {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Bid outside the bidding phase",
            ));
        }
        if seat != self.current {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        if !bid.is_pass() && !bid.outranks(self.highest_bid) {
            return Err(DomainError::validation(
                ValidationKind::BidTooLow,
                format!("{bid} does not outrank {}", self.highest_bid),
            ));
        }

        self.bid_count += 1;
        if bid.outranks(self.highest_bid) {
            self.highest_bid = bid;
            self.highest_bidder = Some(seat);
        }
        self.current = next_seat(self.current);
        debug!(seat, bid = %bid, "bid recorded");

        if usize::from(self.bid_count) == PLAYERS {
            match self.highest_bidder {
                Some(holder) => {
                    self.current = holder;
                    for hand in &mut self.hands {
                        hand.sort_for_contract(self.highest_bid);
                    }
                    self.phase = Phase::Playing;
                    debug!(holder, contract = %self.highest_bid, "bidding closed");
                }
                // Passed out: nothing to play for, nothing to score.
                None => {
                    self.phase = Phase::Scoring;
                    debug!("bidding passed out");
                }
            }
        }
        Ok(())
    }

    /// Play `card` from `seat`'s hand into the trick. Rejections (wrong
    /// phase, wrong turn, card not held, must follow suit) mutate nothing.
    pub fn apply_card_play(&mut self, seat: Seat, card: Card) -> Result<PlayResult, DomainError> {
        if self.phase != Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Card play outside the playing phase",
            ));
        }
        if seat != self.current {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        let hand = &self.hands[seat as usize];
        if !hand.contains(card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card not in hand: {card}"),
            ));
        }
        if !is_legal_play(hand, card, self.lead_card(), self.highest_bid) {
            return Err(DomainError::validation(
                ValidationKind::MustFollowSuit,
                format!("{card} does not follow suit"),
            ));
        }

        if self.lead.is_none() {
            self.lead = Some(seat);
        }
        self.hands[seat as usize].take(card)?;
        self.plays[seat as usize] = Some(card);
        self.cards_played += 1;
        self.current = next_seat(self.current);
        debug!(seat, card = %card, "card played");

        let mut result = PlayResult {
            trick_completed: false,
            trick_winner: None,
            phase_after: self.phase,
        };

        if self.plays.iter().all(Option::is_some) {
            let lead = self
                .lead
                .ok_or_else(|| DomainError::invariant("Full trick with no recorded leader"))?;
            let winner = trick_winner(&self.plays, lead, self.highest_bid)?;
            self.tricks_won[winner as usize] += 1;
            self.plays = [None; PLAYERS];
            self.lead = None;
            self.current = winner;
            result.trick_completed = true;
            result.trick_winner = Some(winner);
            debug!(winner, "trick resolved");

            if usize::from(self.cards_played) == TOTAL_PLAYABLE {
                self.apply_scores();
                self.phase = Phase::Scoring;
            }
        }

        result.phase_after = self.phase;
        Ok(result)
    }

    /// Position-based variant of [`Round::apply_card_play`] for hosts that
    /// address cards by their slot in the displayed hand. An out-of-bounds
    /// position is rejected like any other illegal move, before anything
    /// is touched.
    pub fn apply_card_play_at(
        &mut self,
        seat: Seat,
        index: usize,
    ) -> Result<PlayResult, DomainError> {
        let card = self.hands[seat as usize].get(index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Hand position out of bounds: {index}"),
            )
        })?;
        self.apply_card_play(seat, card)
    }

    /// Host acknowledgement after scoring: rotate the dealer and return to
    /// the dealing phase for the next round.
    pub fn advance_round(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Scoring {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Advance outside the scoring phase",
            ));
        }
        self.dealer = next_seat(self.dealer);
        self.tricks_won = [0; PLAYERS];
        self.current = first_bidder(self.dealer);
        self.phase = Phase::Dealing;
        debug!(dealer = self.dealer, "round advanced");
        Ok(())
    }

    fn apply_scores(&mut self) {
        let deltas = round_score_deltas(&self.tricks_won, self.highest_bid, self.highest_bidder);
        for (score, delta) in self.scores.iter_mut().zip(deltas) {
            *score += delta;
        }
        debug!(?deltas, "round scored");
    }

    // ---------- polling ----------

    /// One update tick: poll the seat whose turn it is for a pending
    /// action and apply it. Illegal moves are dropped (state unchanged)
    /// and reported as `MoveRejected`; the seat stays current. Never
    /// blocks — a controller with nothing ready yields `Idle`.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        controllers: &mut [Box<dyn Player>; PLAYERS],
        rng: &mut R,
    ) -> Result<TickEvent, DomainError> {
        match self.phase {
            Phase::Dealing => {
                self.deal(rng)?;
                Ok(TickEvent::Dealt)
            }
            Phase::Bidding => {
                let seat = self.current;
                controllers[seat as usize].observe_turn(&self.seat_view(seat));
                let pending = controllers[seat as usize].poll_bid(&self.seat_view(seat));
                let Some(bid) = pending else {
                    return Ok(TickEvent::Idle);
                };
                match self.apply_bid(seat, bid) {
                    Ok(()) => Ok(TickEvent::BidPlaced { seat, bid }),
                    Err(e) if e.is_rejection() => {
                        debug!(seat, bid = %bid, %e, "bid rejected");
                        Ok(TickEvent::MoveRejected {
                            seat,
                            kind: e.validation_kind().unwrap_or(ValidationKind::BidTooLow),
                        })
                    }
                    Err(e) => Err(e),
                }
            }
            Phase::Playing => {
                let seat = self.current;
                controllers[seat as usize].observe_turn(&self.seat_view(seat));
                let pending = controllers[seat as usize].poll_play(&self.seat_view(seat));
                let Some(card) = pending else {
                    return Ok(TickEvent::Idle);
                };
                match self.apply_card_play(seat, card) {
                    Ok(result) => Ok(TickEvent::CardPlayed {
                        seat,
                        card,
                        trick_winner: result.trick_winner,
                    }),
                    Err(e) if e.is_rejection() => {
                        debug!(seat, card = %card, %e, "play rejected");
                        Ok(TickEvent::MoveRejected {
                            seat,
                            kind: e.validation_kind().unwrap_or(ValidationKind::MustFollowSuit),
                        })
                    }
                    Err(e) => Err(e),
                }
            }
            // Waiting for the host to call advance_round.
            Phase::Scoring => Ok(TickEvent::Idle),
        }
    }

    // ---------- query surface ----------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn highest_bid(&self) -> Bid {
        self.highest_bid
    }

    pub fn highest_bidder(&self) -> Option<Seat> {
        self.highest_bidder
    }

    /// The contract the evaluator plays under: the highest accepted bid.
    pub fn contract(&self) -> Bid {
        self.highest_bid
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat as usize]
    }

    pub fn widow(&self) -> &Hand {
        &self.widow
    }

    pub fn plays(&self) -> &TrickPlays {
        &self.plays
    }

    pub fn lead_seat(&self) -> Option<Seat> {
        self.lead
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.lead.and_then(|s| self.plays[s as usize])
    }

    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won[seat as usize]
    }

    pub fn score(&self, seat: Seat) -> i32 {
        self.scores[seat as usize]
    }

    pub fn seat_view(&self, seat: Seat) -> SeatView<'_> {
        SeatView {
            seat,
            phase: self.phase,
            hand: &self.hands[seat as usize],
            contract: self.highest_bid,
            plays: &self.plays,
            lead_seat: self.lead,
            lead_card: self.lead_card(),
            tricks_won: &self.tricks_won,
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase,
            dealer: self.dealer,
            current_seat: self.current,
            highest_bid: self.highest_bid,
            highest_bidder: self.highest_bidder,
            plays: self.plays.to_vec(),
            lead: self
                .lead
                .zip(self.lead_card())
                .map(|(seat, card)| LeadInfo::new(seat, card, self.highest_bid)),
            hands: self.hands.iter().map(|h| h.cards().to_vec()).collect(),
            widow_size: self.widow.len(),
            tricks_won: self.tricks_won.to_vec(),
            scores: self.scores.to_vec(),
        }
    }
}
