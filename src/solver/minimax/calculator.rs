//! Worst-case calculation over likeness replies

use crate::core::WordEntry;
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// A candidate identical to the guess ends the game, so it never counts
/// toward a remaining group.
///
/// # Examples
/// ```
/// use termlink::core::{WordEntry, WordId};
/// use termlink::solver::minimax::calculate_max_remaining;
///
/// let words = [
///     WordEntry::new(WordId(0), "CRANE"),
///     WordEntry::new(WordId(1), "SLATE"),
///     WordEntry::new(WordId(2), "IRATE"),
/// ];
/// let candidates: Vec<&WordEntry> = words.iter().collect();
///
/// // SLATE matches CRANE in two positions, IRATE in three
/// assert_eq!(calculate_max_remaining(&words[0], &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &WordEntry, candidates: &[&WordEntry]) -> usize {
    group_by_likeness(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Count candidates by the likeness they would report for `guess`
#[must_use]
pub fn group_by_likeness(guess: &WordEntry, candidates: &[&WordEntry]) -> FxHashMap<usize, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if candidate.id == guess.id {
            continue;
        }
        *counts.entry(guess.likeness(candidate)).or_insert(0) += 1;
    }

    counts
}
