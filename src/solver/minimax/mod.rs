//! Worst-case guess selection
//!
//! Scores a guess by the largest group of candidates that would report the
//! same likeness, and picks the guess whose largest group is smallest.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_likeness};
pub use selector::select_best_guess;
