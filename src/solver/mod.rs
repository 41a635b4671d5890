//! Likeness-driven solving
//!
//! Every denied guess reports how many positions it shares with the
//! password; only words reporting the same count against that guess can
//! still be the password.

mod engine;
pub mod minimax;
mod player;
mod strategy;

pub use engine::{Clue, Solver};
pub use player::{GameRecord, play_session};
pub use strategy::{Strategy, StrategyType};
