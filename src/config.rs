//! Puzzle configuration

use crate::error::GenerationError;

/// Shape and difficulty of one hacking session
///
/// The default is the reference terminal: two columns of 17 rows, 12 cells
/// per row, five-letter passwords and four attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub row_width: usize,
    pub rows: usize,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            row_width: 12,
            rows: 2 * 17,
            max_attempts: 4,
        }
    }
}

impl GameConfig {
    /// Total number of cells in the grid
    #[must_use]
    pub const fn total_length(&self) -> usize {
        self.rows * self.row_width
    }

    /// Check the configuration can produce a grid
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidConfig` when any dimension is zero or
    /// a word could never fit with garble around it.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.word_length == 0 {
            return Err(GenerationError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.row_width == 0 || self.rows == 0 {
            return Err(GenerationError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.row_width
            )));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "at least one attempt is required".to_string(),
            ));
        }
        if self.total_length() <= self.word_length + 1 {
            return Err(GenerationError::InvalidConfig(format!(
                "{} cells cannot hold a {}-letter word",
                self.total_length(),
                self.word_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration() {
        let config = GameConfig::default();
        assert_eq!(config.total_length(), 408);
        assert_eq!(config.max_attempts, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = GameConfig {
            row_width: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));

        let config = GameConfig {
            word_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_grid_too_small_for_a_word() {
        let config = GameConfig {
            word_length: 5,
            row_width: 3,
            rows: 2,
            max_attempts: 4,
        };
        assert!(config.validate().is_err());
    }
}
