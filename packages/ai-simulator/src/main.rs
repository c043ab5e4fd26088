//! AI Simulator CLI - fast in-memory game simulation.
//!
//! Runs three-seat games entirely in memory with heuristic controllers on
//! every seat, for evaluating policy changes over many deals.

mod simulator;

use std::time::Instant;

use clap::Parser;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory three-seat game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Rounds per game
    #[arg(short, long, default_value = "10")]
    rounds: u32,

    /// Base seed for deterministic games; per-game seeds derive from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print each game result as a JSON line on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; warnings always surface.
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(base_seed, games = args.games, rounds = args.rounds, "starting simulation");

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game_num));
        match Simulator::new(seed, args.rounds).simulate_game() {
            Ok(result) => {
                if args.json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "game": game_num,
                            "seed": seed,
                            "scores": result.final_scores.to_vec(),
                            "rounds": result.rounds_played,
                            "passed_out_rounds": result.passed_out_rounds,
                        })
                    );
                }
                info!(game_num, scores = ?result.final_scores, "game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {game_num} failed: {e}");
            }
        }
    }

    print_summary(&results, errors, start.elapsed(), args.games);
    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");

    if results.is_empty() {
        return;
    }

    let seats = results[0].final_scores.len();
    let mut wins = vec![0u32; seats];
    let mut totals = vec![0i64; seats];
    let mut maxima = vec![i32::MIN; seats];
    let mut minima = vec![i32::MAX; seats];
    let mut passed_out = 0u32;

    for result in results {
        let best = result.final_scores.iter().max().copied().unwrap_or(0);
        for (seat, &score) in result.final_scores.iter().enumerate() {
            totals[seat] += i64::from(score);
            maxima[seat] = maxima[seat].max(score);
            minima[seat] = minima[seat].min(score);
            if score == best {
                wins[seat] += 1;
            }
        }
        passed_out += result.passed_out_rounds;
    }

    println!("Passed-out rounds: {passed_out}");
    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg = totals[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, avg, minima[seat], maxima[seat], wins[seat], win_rate
        );
    }
}
