//! Incremental grid assembly
//!
//! Hands out word and power-up ids in placement order and collects the
//! placed words alongside the cells.

use crate::core::{BracketStyle, Cell, Grid, PowerUpId, WordEntry, WordId};

#[derive(Debug, Default)]
pub struct GridBuilder {
    cells: Vec<Cell>,
    words: Vec<WordEntry>,
    power_ups: usize,
}

impl GridBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Cells placed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub const fn power_up_count(&self) -> usize {
        self.power_ups
    }

    pub fn push_garble(&mut self, glyphs: impl IntoIterator<Item = char>) -> &mut Self {
        self.cells.extend(glyphs.into_iter().map(Cell::garble));
        self
    }

    pub fn push_word(&mut self, text: &str) -> WordId {
        let id = WordId(self.words.len());
        self.cells.extend(text.chars().map(|c| Cell::word(c, id)));
        self.words.push(WordEntry::new(id, text));
        id
    }

    /// Append a power-up from pre-built cells, retagging them with the next id
    pub fn push_power_up_cells(&mut self, cells: impl IntoIterator<Item = Cell>) -> PowerUpId {
        let id = self.next_power_up_id();
        self.cells
            .extend(cells.into_iter().map(|cell| Cell::power_up(cell.glyph, id)));
        self.power_ups += 1;
        id
    }

    /// Append a power-up with a fixed interior
    pub fn push_power_up(&mut self, style: BracketStyle, interior: &str) -> PowerUpId {
        let glyphs = std::iter::once(style.open())
            .chain(interior.chars())
            .chain(std::iter::once(style.close()));
        self.push_power_up_cells(glyphs.map(Cell::garble))
    }

    #[must_use]
    pub const fn next_power_up_id(&self) -> PowerUpId {
        PowerUpId(self.power_ups)
    }

    /// Finish into a grid of rows `width` cells wide plus the placed words
    #[must_use]
    pub fn finish(self, width: usize) -> (Grid, Vec<WordEntry>) {
        (Grid::new(self.cells, width), self.words)
    }
}
