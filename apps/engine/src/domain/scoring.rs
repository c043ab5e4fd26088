//! Per-round score application.

use super::bids::Bid;
use super::rules::PLAYERS;
use super::state::Seat;

/// Score deltas for a finished round of single-player 500: the contract
/// holder gains the bid's score value for making it (tricks won at least
/// the declared level) and loses it otherwise; every other seat gains ten
/// points per trick. A passed-out round (no contract) scores nothing.
pub fn round_score_deltas(
    tricks_won: &[u8; PLAYERS],
    contract: Bid,
    holder: Option<Seat>,
) -> [i32; PLAYERS] {
    let mut deltas = [0i32; PLAYERS];
    let Some(holder) = holder else {
        return deltas;
    };
    for (seat, &tricks) in tricks_won.iter().enumerate() {
        if seat == holder as usize {
            deltas[seat] = if tricks >= contract.level() {
                i32::from(contract.score())
            } else {
                -i32::from(contract.score())
            };
        } else {
            deltas[seat] = i32::from(tricks) * 10;
        }
    }
    deltas
}
