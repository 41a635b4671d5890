//! Minimax guess selection

use super::calculator::calculate_max_remaining;
use crate::core::WordEntry;
use rayon::prelude::*;

/// Select the guess with the smallest worst-case remainder
///
/// Ties go to a word that is itself a candidate, then to the earliest word
/// in the pool. Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a WordEntry],
    candidates: &[&WordEntry],
) -> Option<(&'a WordEntry, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(position, &guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let is_candidate = candidates.iter().any(|c| c.id == guess.id);
            (guess, max_remaining, !is_candidate, position)
        })
        .min_by_key(|&(_, max, not_candidate, position)| (max, not_candidate, position))
        .map(|(guess, max, _, _)| (guess, max))
}
