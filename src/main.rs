//! Termlink - CLI
//!
//! Password-hacking terminal with TUI and line modes, a grid generator and
//! a solver benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use termlink::{
    commands::{BenchmarkConfig, generate_grid, run_benchmark, run_simple},
    config::GameConfig,
    output::{print_benchmark_result, print_puzzle},
    solver::StrategyType,
    wordlists::{DICTIONARY, loader::load_from_file, loader::words_from_slice},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "termlink",
    about = "Terminal password-hacking puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of every candidate word
    #[arg(long, global = true, default_value_t = 5)]
    word_length: usize,

    /// Cells per grid row
    #[arg(long, global = true, default_value_t = 12)]
    width: usize,

    /// Grid rows, split evenly over the two panels
    #[arg(long, global = true, default_value_t = 34)]
    rows: usize,

    /// Wrong guesses allowed before lockout
    #[arg(long, global = true, default_value_t = 4)]
    attempts: usize,

    /// Seed for reproducible grids (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Dictionary file of whitespace-separated words (embedded list if omitted)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print a generated grid and its words
    Generate {
        /// Also print the password
        #[arg(short, long)]
        reveal: bool,

        /// Plain text without colors
        #[arg(short, long)]
        plain: bool,
    },

    /// Benchmark the solver over many seeded sessions
    Benchmark {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Strategy: random (default), minimax
        #[arg(short, long, default_value = "random")]
        strategy: String,
    },
}

impl Cli {
    const fn game_config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            row_width: self.width,
            rows: self.rows,
            max_attempts: self.attempts,
        }
    }

    fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Load the dictionary from `--dictionary`, or the embedded one
fn load_dictionary(path: Option<&PathBuf>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read dictionary {}", path.display())),
        None => Ok(words_from_slice(DICTIONARY)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let mut cli = Cli::parse();
    let config = cli.game_config();
    config.validate()?;

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    tracing::debug!(words = dictionary.len(), ?config, "dictionary loaded");

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config, cli.rng()),
        Commands::Simple => run_simple(&dictionary, &config, &mut cli.rng()),
        Commands::Generate { reveal, plain } => {
            let result = generate_grid(&dictionary, &config, &mut cli.rng())
                .context("failed to generate puzzle")?;
            print_puzzle(&result, reveal, plain);
            Ok(())
        }
        Commands::Benchmark { count, strategy } => {
            let bench = BenchmarkConfig {
                games: count,
                base_seed: cli.seed.unwrap_or_else(rand::random),
                strategy: StrategyType::from_name(&strategy),
                show_progress: true,
            };
            println!(
                "Running benchmark on {count} terminals with the {} strategy...",
                bench.strategy.name()
            );
            let result = run_benchmark(&dictionary, &config, &bench)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Vec<String>, config: GameConfig, rng: StdRng) -> Result<()> {
    use termlink::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng).context("failed to generate puzzle")?;
    run_tui(app)
}
