//! Seat controllers.
//!
//! The round never blocks on input: each tick it polls the current seat's
//! controller, which either has a move ready or does not. `HeuristicAi`
//! always answers immediately; `HumanSlot` answers once the host has
//! forwarded something from the UI.

pub mod heuristic;
pub mod human;
mod trait_def;

pub use heuristic::HeuristicAi;
pub use human::{HumanInput, HumanSlot};
pub use trait_def::Player;
