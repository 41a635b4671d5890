//! Main solver interface

use super::strategy::Strategy;
use crate::core::WordEntry;
use rand::RngCore;

/// A denied guess and the likeness it reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub guess: WordEntry,
    pub likeness: usize,
}

impl Clue {
    #[must_use]
    pub const fn new(guess: WordEntry, likeness: usize) -> Self {
        Self { guess, likeness }
    }

    /// Whether `candidate` could be the password given this clue
    #[must_use]
    pub fn admits(&self, candidate: &WordEntry) -> bool {
        candidate.id != self.guess.id && self.guess.likeness(candidate) == self.likeness
    }
}

/// Narrows the words on the grid down to the password
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [WordEntry],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the words that can still be guessed
    pub const fn new(strategy: S, words: &'a [WordEntry]) -> Self {
        Self { strategy, words }
    }

    /// Get the next guess given the clues so far
    ///
    /// Returns `None` if no word is consistent with the history.
    pub fn next_guess(&self, history: &[Clue], rng: &mut dyn RngCore) -> Option<&'a WordEntry> {
        let candidates = self.filter_candidates(history);

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => {
                let pool: Vec<&'a WordEntry> = self.words.iter().collect();
                self.strategy.select_guess(&pool, &candidates, rng)
            }
        }
    }

    /// Words that would have produced every observed likeness
    fn filter_candidates(&self, history: &[Clue]) -> Vec<&'a WordEntry> {
        self.words
            .iter()
            .filter(|&candidate| history.iter().all(|clue| clue.admits(candidate)))
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[Clue]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[Clue]) -> Vec<&'a WordEntry> {
        self.filter_candidates(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordId;
    use crate::solver::StrategyType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words() -> Vec<WordEntry> {
        ["CRANE", "SLATE", "IRATE", "CRATE", "GRATE"]
            .iter()
            .enumerate()
            .map(|(i, w)| WordEntry::new(WordId(i), *w))
            .collect()
    }

    #[test]
    fn no_history_keeps_every_word() {
        let words = words();
        let solver = Solver::new(StrategyType::Minimax, &words);
        assert_eq!(solver.count_candidates(&[]), 5);
    }

    #[test]
    fn likeness_filters_candidates() {
        let words = words();
        let solver = Solver::new(StrategyType::Minimax, &words);

        // CRANE denied with likeness 3: IRATE and GRATE remain
        let history = [Clue::new(words[0].clone(), 3)];
        let texts: Vec<&str> = solver
            .get_candidates(&history)
            .iter()
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(texts, ["IRATE", "GRATE"]);
    }

    #[test]
    fn denied_guess_is_never_a_candidate() {
        let words = words();
        let clue = Clue::new(words[3].clone(), 5);
        assert!(!clue.admits(&words[3]));
    }

    #[test]
    fn single_candidate_is_guessed() {
        let words = words();
        let solver = Solver::new(StrategyType::Random, &words);
        let history = [Clue::new(words[0].clone(), 2)];
        let mut rng = StdRng::seed_from_u64(0);

        // Only SLATE matches CRANE in exactly two positions
        let guess = solver.next_guess(&history, &mut rng).unwrap();
        assert_eq!(guess.text, "SLATE");
    }

    #[test]
    fn inconsistent_history_has_no_guess() {
        let words = words();
        let solver = Solver::new(StrategyType::Minimax, &words);
        let history = [Clue::new(words[0].clone(), 0)];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(solver.next_guess(&history, &mut rng).is_none());
    }
}
