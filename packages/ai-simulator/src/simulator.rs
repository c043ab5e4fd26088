//! In-memory game execution.
//!
//! Runs a fixed number of rounds on one table of heuristic seats, driving
//! the round state machine tick by tick exactly the way an interactive
//! host would. No I/O; results come back as plain data.

use engine::domain::rules::PLAYERS;
use engine::domain::{Phase, Round, TickEvent};
use engine::players::{HeuristicAi, Player};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Hard cap on ticks per round; a heuristic table finishes in well under
/// a hundred, so hitting this means the table stalled.
const MAX_TICKS_PER_ROUND: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: [i32; PLAYERS],
    pub rounds_played: u32,
    pub passed_out_rounds: u32,
}

pub struct Simulator {
    seed: u64,
    rounds: u32,
}

impl Simulator {
    pub fn new(seed: u64, rounds: u32) -> Self {
        Self { seed, rounds }
    }

    /// Play `rounds` rounds to completion and return the final totals.
    ///
    /// Heuristic seats only ever submit legal moves, so a rejection here
    /// is a bug and fails the game rather than being retried.
    pub fn simulate_game(&self) -> Result<GameResult, Box<dyn std::error::Error>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut round = Round::new(0);
        let mut controllers: [Box<dyn Player>; PLAYERS] = [
            Box::new(HeuristicAi::new()),
            Box::new(HeuristicAi::new()),
            Box::new(HeuristicAi::new()),
        ];

        let mut passed_out_rounds = 0;
        for n in 0..self.rounds {
            let mut ticks = 0u32;
            while round.phase() != Phase::Scoring {
                match round.tick(&mut controllers, &mut rng)? {
                    TickEvent::MoveRejected { seat, kind } => {
                        return Err(format!("seat {seat} had a move rejected ({kind:?})").into());
                    }
                    event => debug!(round = n, ?event, "tick"),
                }
                ticks += 1;
                if ticks > MAX_TICKS_PER_ROUND {
                    return Err(format!("round {n} stalled after {ticks} ticks").into());
                }
            }
            if round.highest_bidder().is_none() {
                passed_out_rounds += 1;
            }
            debug!(
                round = n,
                contract = %round.contract(),
                scores = ?[round.score(0), round.score(1), round.score(2)],
                "round finished"
            );
            round.advance_round()?;
        }

        Ok(GameResult {
            final_scores: std::array::from_fn(|s| round.score(s as u8)),
            rounds_played: self.rounds,
            passed_out_rounds,
        })
    }
}
