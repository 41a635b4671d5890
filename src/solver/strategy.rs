//! Guess selection strategies

use crate::core::WordEntry;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Picks the next word to try
pub trait Strategy {
    /// Choose a guess from `guess_pool` given the words still consistent
    /// with every clue so far
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a WordEntry],
        candidates: &[&'a WordEntry],
        rng: &mut dyn RngCore,
    ) -> Option<&'a WordEntry>;
}

/// Strategy chosen by name on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyType {
    /// Minimise the worst-case number of candidates left
    #[default]
    Minimax,
    /// Any consistent candidate, uniformly
    Random,
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random". Defaults to minimax if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Minimax,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Random => "random",
        }
    }
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a WordEntry],
        candidates: &[&'a WordEntry],
        rng: &mut dyn RngCore,
    ) -> Option<&'a WordEntry> {
        match self {
            Self::Minimax => super::minimax::select_best_guess(guess_pool, candidates)
                .map(|(best, _)| best),
            Self::Random => candidates.choose(rng).copied(),
        }
    }
}
