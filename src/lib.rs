//! Termlink
//!
//! A password-hacking terminal puzzle: a grid of garbage characters hides
//! candidate words and bracketed power-ups, and every wrong guess reports
//! how many letters sit in the right place.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use termlink::config::GameConfig;
//! use termlink::generator::generate_puzzle;
//! use termlink::session::{GameSession, GuessOutcome};
//! use termlink::wordlists::DICTIONARY;
//!
//! let config = GameConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let puzzle = generate_puzzle(DICTIONARY, &config, &mut rng).unwrap();
//! let password = puzzle.password.id;
//!
//! let mut session = GameSession::new(puzzle, config.max_attempts);
//! assert!(matches!(
//!     session.submit_guess(password),
//!     GuessOutcome::Accepted { .. }
//! ));
//! ```

// Core domain types
pub mod core;

// Puzzle shape
pub mod config;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Grid generation
pub mod generator;

// Game rules, navigation and the console controller
pub mod session;

// Likeness solver and automatic play
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
