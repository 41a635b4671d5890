//! Generate command
//!
//! Builds one puzzle and returns it for printing, without playing it.

use crate::config::GameConfig;
use crate::core::HexCounter;
use crate::error::GenerationError;
use crate::generator::{Puzzle, generate_puzzle};
use rand::Rng;

/// A generated puzzle with the address gutter it would be shown with
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub addresses: Vec<u32>,
}

/// Generate a single puzzle for `config`
///
/// # Errors
///
/// Returns a `GenerationError` if no puzzle can be built.
pub fn generate_grid<S: AsRef<str>, R: Rng + ?Sized>(
    dictionary: &[S],
    config: &GameConfig,
    rng: &mut R,
) -> Result<GenerateResult, GenerationError> {
    let puzzle = generate_puzzle(dictionary, config, rng)?;
    let addresses = HexCounter::new(rng).take_rows(puzzle.grid.rows(), rng);
    Ok(GenerateResult { puzzle, addresses })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn one_address_per_row() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_grid(DICTIONARY, &config, &mut rng).unwrap();

        assert_eq!(result.puzzle.grid.len(), config.total_length());
        assert_eq!(result.addresses.len(), config.rows);
    }

    #[test]
    fn same_seed_same_grid() {
        let config = GameConfig::default();
        let a = generate_grid(DICTIONARY, &config, &mut StdRng::seed_from_u64(2)).unwrap();
        let b = generate_grid(DICTIONARY, &config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.puzzle, b.puzzle);
        assert_eq!(a.addresses, b.addresses);
    }
}
