//! Dictionaries and candidate word selection
//!
//! Provides the embedded dictionary and the word pool that feeds the grid generator.

mod embedded;
pub mod loader;
pub mod pool;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use pool::select;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_single_words() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn dictionary_supports_reference_word_length() {
        let five = DICTIONARY.iter().filter(|w| w.len() == 5).count();
        assert!(five >= 20, "only {five} five-letter words");
    }
}
