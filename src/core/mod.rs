//! Core domain types for the hacking puzzle
//!
//! The grid is an arena of cells; words and power-up groups are referenced by
//! stable ids through reverse indices built once at generation time.

mod address;
mod cell;
mod grid;
mod word;

pub use address::{HexCounter, format_address};
pub use cell::{Cell, CellRole, GroupRef, PowerUpId, WordId};
pub use grid::{BracketStyle, Grid, PowerUpGroup};
pub use word::{WordEntry, likeness};
