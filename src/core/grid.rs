//! The puzzle grid and its reverse indices
//!
//! Cells live in one flat vector (the arena). Words and power-up groups are
//! located through indices built once when the grid is created, so lookups
//! never need to scan the grid.

use super::{Cell, CellRole, GroupRef, PowerUpId, WordId};
use rustc_hash::FxHashMap;

/// Glyph written over the cells of a removed dud
pub const DUD_GLYPH: char = '.';

/// Bracket pair framing a power-up group (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketStyle {
    Square,
    Angle,
    Round,
}

impl BracketStyle {
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Square => '[',
            Self::Angle => '<',
            Self::Round => '(',
        }
    }

    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Square => ']',
            Self::Angle => '>',
            Self::Round => ')',
        }
    }

    /// Recognize a style from its opening bracket
    #[must_use]
    pub const fn from_open(glyph: char) -> Option<Self> {
        match glyph {
            '[' => Some(Self::Square),
            '<' => Some(Self::Angle),
            '(' => Some(Self::Round),
            _ => None,
        }
    }
}

/// A one-shot bracketed group that removes a dud or resets attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUpGroup {
    pub id: PowerUpId,
    /// Grid indices in reading order, brackets included
    pub cells: Vec<usize>,
    pub style: BracketStyle,
    pub consumed: bool,
}

/// Fixed-size grid of cells viewed as rows of `width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    word_cells: FxHashMap<WordId, Vec<usize>>,
    power_ups: FxHashMap<PowerUpId, PowerUpGroup>,
}

impl Grid {
    /// Build a grid from its cells, indexing every word and power-up group
    ///
    /// A width of zero is treated as one so row arithmetic stays defined.
    #[must_use]
    pub fn new(cells: Vec<Cell>, width: usize) -> Self {
        let mut word_cells: FxHashMap<WordId, Vec<usize>> = FxHashMap::default();
        let mut power_up_cells: FxHashMap<PowerUpId, Vec<usize>> = FxHashMap::default();

        for (index, cell) in cells.iter().enumerate() {
            match cell.role {
                CellRole::Garble => {}
                CellRole::Word(id) => word_cells.entry(id).or_default().push(index),
                CellRole::PowerUp(id) => power_up_cells.entry(id).or_default().push(index),
            }
        }

        let power_ups = power_up_cells
            .into_iter()
            .map(|(id, indices)| {
                let style = BracketStyle::from_open(cells[indices[0]].glyph)
                    .unwrap_or(BracketStyle::Round);
                let group = PowerUpGroup {
                    id,
                    cells: indices,
                    style,
                    consumed: false,
                };
                (id, group)
            })
            .collect();

        Self {
            cells,
            width: width.max(1),
            word_cells,
            power_ups,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, counting a trailing partial row
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.width)
    }

    #[inline]
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.width
    }

    #[inline]
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.width
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row * self.width).min(self.cells.len());
        let end = (start + self.width).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Group the cell at `index` belongs to, if any
    #[must_use]
    pub fn group_at(&self, index: usize) -> Option<GroupRef> {
        self.cell(index).and_then(Cell::group)
    }

    /// Indices of a word's cells, or `None` once it has been removed
    #[must_use]
    pub fn word_cells(&self, id: WordId) -> Option<&[usize]> {
        self.word_cells.get(&id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn power_up(&self, id: PowerUpId) -> Option<&PowerUpGroup> {
        self.power_ups.get(&id)
    }

    /// Power-up groups that can still be activated, ordered by id
    #[must_use]
    pub fn active_power_ups(&self) -> Vec<&PowerUpGroup> {
        let mut groups: Vec<&PowerUpGroup> =
            self.power_ups.values().filter(|g| !g.consumed).collect();
        groups.sort_by_key(|g| g.id);
        groups
    }

    /// Total number of power-up groups ever placed
    #[must_use]
    pub fn power_up_count(&self) -> usize {
        self.power_ups.len()
    }

    /// Whether the word still occupies cells on the grid
    #[must_use]
    pub fn contains_word(&self, id: WordId) -> bool {
        self.word_cells.contains_key(&id)
    }

    /// Ids of words still on the grid, ordered by id
    #[must_use]
    pub fn word_ids(&self) -> Vec<WordId> {
        let mut ids: Vec<WordId> = self.word_cells.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Indices of every cell in a group
    ///
    /// Consumed power-ups and removed words have no selectable cells.
    #[must_use]
    pub fn group_cells(&self, group: GroupRef) -> &[usize] {
        match group {
            GroupRef::Word(id) => self.word_cells(id).unwrap_or(&[]),
            GroupRef::PowerUp(id) => self
                .power_ups
                .get(&id)
                .filter(|g| !g.consumed)
                .map(|g| g.cells.as_slice())
                .unwrap_or_default(),
        }
    }

    /// Text spelled by a group's cells
    #[must_use]
    pub fn group_text(&self, group: GroupRef) -> String {
        self.group_cells(group)
            .iter()
            .map(|&i| self.cells[i].glyph)
            .collect()
    }

    /// Text of whatever is selected at `index`: the whole group, or the single glyph
    #[must_use]
    pub fn selection_text(&self, index: usize) -> String {
        match self.group_at(index) {
            Some(group) => self.group_text(group),
            None => self.cell(index).map(|c| c.glyph.to_string()).unwrap_or_default(),
        }
    }

    /// Last index of the group containing `index`, or `index` itself
    #[must_use]
    pub fn group_end(&self, index: usize) -> usize {
        self.group_at(index)
            .and_then(|group| self.group_cells(group).last().copied())
            .unwrap_or(index)
    }

    /// Blank a word's cells so it can no longer be guessed
    ///
    /// Returns `false` when the word is not on the grid.
    pub(crate) fn remove_word(&mut self, id: WordId) -> bool {
        let Some(indices) = self.word_cells.remove(&id) else {
            return false;
        };
        for index in indices {
            self.cells[index] = Cell::garble(DUD_GLYPH);
        }
        true
    }

    /// Mark a power-up group consumed and strip its cells of the power-up role
    ///
    /// Returns the group's text, or `None` when it is unknown or already used.
    pub(crate) fn consume_power_up(&mut self, id: PowerUpId) -> Option<String> {
        let group = self.power_ups.get_mut(&id).filter(|g| !g.consumed)?;
        group.consumed = true;

        let text: String = group.cells.iter().map(|&i| self.cells[i].glyph).collect();
        for &index in &group.cells {
            self.cells[index].role = CellRole::Garble;
        }
        Some(text)
    }

    /// One string per row, glyphs only
    #[must_use]
    pub fn text_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `..ALPHA..[#]` on a width-4 grid (12 cells, three rows)
    fn sample_grid() -> Grid {
        let mut cells = vec![Cell::garble('.'), Cell::garble('!')];
        cells.extend("ALPHA".chars().map(|c| Cell::word(c, WordId(0))));
        cells.push(Cell::garble('?'));
        cells.push(Cell::garble(';'));
        cells.push(Cell::power_up('[', PowerUpId(0)));
        cells.push(Cell::power_up('#', PowerUpId(0)));
        cells.push(Cell::power_up(']', PowerUpId(0)));
        Grid::new(cells, 4)
    }

    #[test]
    fn indexes_words_and_power_ups() {
        let grid = sample_grid();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.word_cells(WordId(0)), Some(&[2, 3, 4, 5, 6][..]));

        let group = grid.power_up(PowerUpId(0)).unwrap();
        assert_eq!(group.cells, vec![9, 10, 11]);
        assert_eq!(group.style, BracketStyle::Square);
        assert!(!group.consumed);
    }

    #[test]
    fn row_and_column_math() {
        let grid = sample_grid();
        assert_eq!(grid.row_of(5), 1);
        assert_eq!(grid.column_of(5), 1);
        assert_eq!(grid.row(2).len(), 4);
        assert_eq!(grid.text_rows(), vec![".!AL", "PHA?", ";[#]"]);
    }

    #[test]
    fn selection_text_spans_groups() {
        let grid = sample_grid();
        assert_eq!(grid.selection_text(4), "ALPHA");
        assert_eq!(grid.selection_text(10), "[#]");
        assert_eq!(grid.selection_text(0), ".");
        assert_eq!(grid.selection_text(99), "");
    }

    #[test]
    fn group_end_finds_last_cell() {
        let grid = sample_grid();
        assert_eq!(grid.group_end(2), 6);
        assert_eq!(grid.group_end(9), 11);
        assert_eq!(grid.group_end(1), 1);
    }

    #[test]
    fn removing_a_word_blanks_its_cells() {
        let mut grid = sample_grid();
        assert!(grid.remove_word(WordId(0)));
        assert!(!grid.contains_word(WordId(0)));
        assert_eq!(grid.text_rows()[0], ".!..");
        assert_eq!(grid.group_at(3), None);

        // Second removal is a no-op
        assert!(!grid.remove_word(WordId(0)));
    }

    #[test]
    fn consuming_a_power_up_is_one_shot() {
        let mut grid = sample_grid();
        assert_eq!(grid.consume_power_up(PowerUpId(0)).as_deref(), Some("[#]"));
        assert!(grid.power_up(PowerUpId(0)).unwrap().consumed);
        assert!(grid.active_power_ups().is_empty());

        // Cells stay visible but are inert
        assert_eq!(grid.cell(9).unwrap().glyph, '[');
        assert_eq!(grid.group_at(9), None);
        assert!(grid.group_cells(GroupRef::PowerUp(PowerUpId(0))).is_empty());

        assert_eq!(grid.consume_power_up(PowerUpId(0)), None);
    }

    #[test]
    fn bracket_styles_round_trip_open_glyph() {
        for style in [BracketStyle::Square, BracketStyle::Angle, BracketStyle::Round] {
            assert_eq!(BracketStyle::from_open(style.open()), Some(style));
        }
        assert_eq!(BracketStyle::from_open('#'), None);
    }
}
