//! Grid cells and the ids that tie them to words and power-ups

use std::fmt;

/// Stable reference to a word placed in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub usize);

/// Stable reference to a power-up group placed in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PowerUpId(pub usize);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word#{}", self.0)
    }
}

impl fmt::Display for PowerUpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "power-up#{}", self.0)
    }
}

/// What a cell belongs to
///
/// A cell is part of at most one group. Encoding this as a sum type makes a
/// cell that is both a word and a power-up unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellRole {
    /// Filler punctuation with no meaning
    #[default]
    Garble,
    /// One character of a candidate password
    Word(WordId),
    /// One character of a bracketed power-up group
    PowerUp(PowerUpId),
}

impl CellRole {
    /// The selectable group this role belongs to, if any
    #[inline]
    #[must_use]
    pub const fn group(self) -> Option<GroupRef> {
        match self {
            Self::Garble => None,
            Self::Word(id) => Some(GroupRef::Word(id)),
            Self::PowerUp(id) => Some(GroupRef::PowerUp(id)),
        }
    }
}

/// A selectable run of cells: either a word or a power-up group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRef {
    Word(WordId),
    PowerUp(PowerUpId),
}

/// One character position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub role: CellRole,
}

impl Cell {
    #[must_use]
    pub const fn garble(glyph: char) -> Self {
        Self {
            glyph,
            role: CellRole::Garble,
        }
    }

    #[must_use]
    pub const fn word(glyph: char, id: WordId) -> Self {
        Self {
            glyph,
            role: CellRole::Word(id),
        }
    }

    #[must_use]
    pub const fn power_up(glyph: char, id: PowerUpId) -> Self {
        Self {
            glyph,
            role: CellRole::PowerUp(id),
        }
    }

    #[inline]
    #[must_use]
    pub const fn group(&self) -> Option<GroupRef> {
        self.role.group()
    }
}
