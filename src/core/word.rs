//! Candidate password words and likeness scoring

use super::WordId;
use std::fmt;

/// A candidate word embedded in the grid
///
/// The contiguous run of cells carrying `CellRole::Word(id)` spells `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(id: WordId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Number of positions where this word and `other` share a character
    #[inline]
    #[must_use]
    pub fn likeness(&self, other: &Self) -> usize {
        likeness(&self.text, &other.text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Count of character positions where `guess` and `password` agree
///
/// Exact per-position equality; words of different length are compared over
/// the shorter prefix. Placed words always share one length.
///
/// # Examples
/// ```
/// use termlink::core::likeness;
///
/// assert_eq!(likeness("ALPHA", "ALPHA"), 5);
/// assert_eq!(likeness("ALPHX", "ALPHA"), 4);
/// assert_eq!(likeness("BRAVO", "ALPHA"), 0);
/// ```
#[must_use]
pub fn likeness(guess: &str, password: &str) -> usize {
    guess
        .chars()
        .zip(password.chars())
        .filter(|(g, p)| g == p)
        .count()
}
