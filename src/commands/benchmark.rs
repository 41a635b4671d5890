//! Benchmark command
//!
//! Plays many seeded sessions with the solver and reports how often the
//! terminal unlocks.

use crate::config::GameConfig;
use crate::error::GenerationError;
use crate::generator::generate_puzzle;
use crate::session::GameSession;
use crate::solver::{GameRecord, StrategyType, play_session};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// What to benchmark
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Game `i` is generated from seed `base_seed + i`
    pub base_seed: u64,
    pub strategy: StrategyType,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: StrategyType,
    pub total_games: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Average guesses over won games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess counts of won games
    pub distribution: HashMap<usize, usize>,
    pub duds_removed: usize,
    pub resets: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `bench.games` sessions in parallel
///
/// # Errors
///
/// Returns the first `GenerationError` hit while generating a puzzle.
pub fn run_benchmark<S: AsRef<str> + Sync>(
    dictionary: &[S],
    config: &GameConfig,
    bench: &BenchmarkConfig,
) -> Result<BenchmarkResult, GenerationError> {
    config.validate()?;
    let start = Instant::now();

    let pb = if bench.show_progress {
        let pb = ProgressBar::new(bench.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb.set_message(bench.strategy.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let records = (0..bench.games)
        .into_par_iter()
        .map(|game| -> Result<GameRecord, GenerationError> {
            let mut rng = StdRng::seed_from_u64(bench.base_seed.wrapping_add(game as u64));
            let puzzle = generate_puzzle(dictionary, config, &mut rng)?;
            let mut session = GameSession::new(puzzle, config.max_attempts);
            let record = play_session(&mut session, bench.strategy, &mut rng);
            pb.inc(1);
            Ok(record)
        })
        .collect::<Result<Vec<GameRecord>, GenerationError>>()?;

    pb.finish_and_clear();
    Ok(summarize(bench.strategy, &records, start.elapsed()))
}

fn summarize(
    strategy: StrategyType,
    records: &[GameRecord],
    duration: Duration,
) -> BenchmarkResult {
    let total_games = records.len();
    let mut wins = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.won) {
        wins += 1;
        total_guesses += record.guesses;
        min_guesses = min_guesses.min(record.guesses);
        max_guesses = max_guesses.max(record.guesses);
        *distribution.entry(record.guesses).or_insert(0) += 1;
    }

    let ratio = |n: usize, d: usize| if d == 0 { 0.0 } else { n as f64 / d as f64 };

    BenchmarkResult {
        strategy,
        total_games,
        wins,
        win_rate: ratio(wins, total_games),
        average_guesses: ratio(total_guesses, wins),
        min_guesses: if wins == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duds_removed: records.iter().map(|r| r.duds_removed).sum(),
        resets: records.iter().map(|r| r.resets).sum(),
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
