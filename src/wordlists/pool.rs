//! Word pool: picks and shuffles the candidate passwords

use crate::error::GenerationError;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Normalize a dictionary entry, rejecting anything that is not a plain word
///
/// Words are upper-cased; entries with digits or punctuation are dropped so
/// they can never blend into the garble.
fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

/// Select every distinct dictionary word of `length` letters, shuffled
///
/// # Errors
///
/// Returns `GenerationError::NoWordsOfLength` if nothing in the dictionary
/// has the requested length.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use termlink::wordlists::select;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let words = select(&["alpha", "bravo", "hi", "Alpha"], 5, &mut rng).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words.iter().all(|w| w.len() == 5));
/// ```
pub fn select<S, R>(
    dictionary: &[S],
    length: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerationError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut seen = FxHashSet::default();
    let mut words: Vec<String> = dictionary
        .iter()
        .filter_map(|w| normalize(w.as_ref()))
        .filter(|w| w.len() == length)
        .filter(|w| seen.insert(w.clone()))
        .collect();

    if words.is_empty() {
        return Err(GenerationError::NoWordsOfLength { length });
    }

    words.shuffle(rng);
    tracing::debug!(length, candidates = words.len(), "selected word pool");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DICT: &[&str] = &["alpha", "bravo", "charl", "delta", "epsil", "fox", "golfing"];

    #[test]
    fn keeps_only_requested_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = select(DICT, 5, &mut rng).unwrap();

        assert_eq!(words.len(), 5);
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["ALPHA", "BRAVO", "CHARL", "DELTA", "EPSIL"]);
    }

    #[test]
    fn fails_when_no_word_matches() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select(DICT, 12, &mut rng),
            Err(GenerationError::NoWordsOfLength { length: 12 })
        );
    }

    #[test]
    fn drops_duplicates_and_non_words() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sorted =
            select(&["alpha", "ALPHA", "alp4a", "al-ha", " bravo "], 5, &mut rng).unwrap();
        sorted.sort();
        assert_eq!(sorted, vec!["ALPHA", "BRAVO"]);
    }

    #[test]
    fn same_seed_same_order() {
        let a = select(DICT, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = select(DICT, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn order_varies_across_seeds() {
        let first = select(DICT, 5, &mut StdRng::seed_from_u64(0)).unwrap();
        let varied =
            (1..20).any(|seed| select(DICT, 5, &mut StdRng::seed_from_u64(seed)).unwrap() != first);
        assert!(varied, "shuffle never changed the order");
    }
}
