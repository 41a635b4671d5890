//! Procedural puzzle generation
//!
//! Alternates garble chunks with candidate words and the occasional
//! power-up until the grid is filled exactly, then draws the password from
//! the words that made it in.

mod builder;
pub mod garble;

pub use builder::GridBuilder;

use crate::config::GameConfig;
use crate::core::{Grid, WordEntry};
use crate::error::GenerationError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;

/// Chance that an iteration tries a power-up instead of a word
pub const POWER_UP_CHANCE: f64 = 0.3;

/// Lengths a power-up group may have, brackets included
pub const POWER_UP_LENGTHS: RangeInclusive<usize> = 3..=8;

/// Number of distinct garble chunk sizes above the floor
const GARBLE_SPREAD: usize = 15;

/// A generated grid with its candidate words and the true password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words in the order they were placed; ids index into this list
    pub placed_words: Vec<WordEntry>,
    pub password: WordEntry,
}

/// Builds puzzles of a fixed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGenerator {
    word_length: usize,
    total_length: usize,
    row_width: usize,
}

impl GridGenerator {
    #[must_use]
    pub const fn new(word_length: usize, total_length: usize, row_width: usize) -> Self {
        Self {
            word_length,
            total_length,
            row_width,
        }
    }

    #[must_use]
    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.word_length, config.total_length(), config.row_width)
    }

    /// Smallest garble chunk between placements
    ///
    /// Longer words get less padding so the grid still holds a useful number of them.
    const fn garble_floor(&self) -> usize {
        let floor = GARBLE_SPREAD.saturating_sub(self.word_length);
        if floor == 0 { 1 } else { floor }
    }

    /// Whether `length` more cells fit while leaving room for trailing garble
    const fn fits(&self, placed: usize, length: usize) -> bool {
        placed + length < self.total_length
    }

    /// Generate a puzzle from an already shuffled word list
    ///
    /// Words are consumed in order; a word or power-up that does not fit is
    /// skipped for that round without advancing the word cursor. The final
    /// garble chunk is clipped so the grid is exactly `total_length` cells.
    /// The password is drawn uniformly from every placed word.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::NoWordsPlaced` if no word fits in the grid.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use termlink::generator::GridGenerator;
    ///
    /// let words: Vec<String> = ["ALPHA", "BRAVO", "CHARL"].map(String::from).to_vec();
    /// let mut rng = StdRng::seed_from_u64(8);
    /// let puzzle = GridGenerator::new(5, 120, 12).generate(&words, &mut rng).unwrap();
    ///
    /// assert_eq!(puzzle.grid.len(), 120);
    /// assert!(puzzle.placed_words.contains(&puzzle.password));
    /// ```
    pub fn generate<S, R>(&self, words: &[S], rng: &mut R) -> Result<Puzzle, GenerationError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut builder = GridBuilder::with_capacity(self.total_length);
        let mut next_word = 0;

        while builder.len() < self.total_length {
            let remaining = self.total_length - builder.len();
            let chunk = (self.garble_floor() + rng.random_range(0..GARBLE_SPREAD)).min(remaining);
            builder.push_garble(garble::garble(chunk, rng));

            if rng.random_bool(POWER_UP_CHANCE) {
                let length = rng.random_range(POWER_UP_LENGTHS);
                if self.fits(builder.len(), length) {
                    let cells = garble::power_up_cells(builder.next_power_up_id(), length, rng);
                    builder.push_power_up_cells(cells);
                }
            } else if let Some(word) = words.get(next_word) {
                let word: &str = word.as_ref();
                if self.fits(builder.len(), word.chars().count()) {
                    builder.push_word(word);
                    next_word += 1;
                }
            }
        }

        let power_ups = builder.power_up_count();
        let (grid, placed_words) = builder.finish(self.row_width);
        let password = placed_words
            .choose(rng)
            .cloned()
            .ok_or(GenerationError::NoWordsPlaced {
                total_length: self.total_length,
            })?;

        tracing::debug!(
            cells = grid.len(),
            words = placed_words.len(),
            power_ups,
            "generated puzzle"
        );

        Ok(Puzzle {
            grid,
            placed_words,
            password,
        })
    }
}

/// Select words from `dictionary` and generate a puzzle for `config`
///
/// # Errors
///
/// Returns a `GenerationError` if the configuration is invalid, the
/// dictionary has no words of the configured length, or none fit.
pub fn generate_puzzle<S, R>(
    dictionary: &[S],
    config: &GameConfig,
    rng: &mut R,
) -> Result<Puzzle, GenerationError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    config.validate()?;
    let words = crate::wordlists::select(dictionary, config.word_length, rng)?;
    GridGenerator::from_config(config).generate(&words, rng)
}
