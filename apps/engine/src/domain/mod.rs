//! Game domain: cards, bids, the trump-aware evaluator, trick rules, and
//! the round state machine. Pure logic, no I/O; everything is driven by
//! the host through `Round`.

pub mod bids;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod player_view;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_round;

pub use bids::{Bid, Trump};
pub use cards_types::{Card, Rank, Suit};
pub use evaluator::{compare_for_hand, effective_rank, effective_suit, EffectiveSuit};
pub use hand::Hand;
pub use player_view::{LeadInfo, SeatView, TableSnapshot};
pub use round::{PlayResult, Round, TickEvent};
pub use state::{first_bidder, next_seat, Phase, Seat};
pub use tricks::{is_legal_play, legal_plays, trick_winner, TrickPlays};
