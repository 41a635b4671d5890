//! Directional focus over the grid
//!
//! The grid is read as rows of fixed width; flat index `i` sits at row
//! `i / width`, column `i % width`. Moves with no target are no-ops.

use crate::core::{Grid, GroupRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What changed when focus moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange {
    pub index: usize,
    /// Group now highlighted, or `None` when a lone garble cell is focused
    pub group: Option<GroupRef>,
    /// New selection text, present only when the selection actually changed
    pub preview: Option<String>,
}

/// Focus position plus the group it last selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    focus: usize,
    focused_group: Option<GroupRef>,
}

impl NavigationModel {
    /// Focus the first cell of `grid`
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            focus: 0,
            focused_group: grid.group_at(0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    #[inline]
    #[must_use]
    pub const fn focused_group(&self) -> Option<GroupRef> {
        self.focused_group
    }

    /// Cell a move would land on, or `None` when the move has no target
    ///
    /// Moving right from inside a word or power-up skips to the cell after
    /// the group's last cell.
    #[must_use]
    pub fn target(&self, grid: &Grid, direction: Direction) -> Option<usize> {
        let index = self.focus;
        let width = grid.width();
        match direction {
            Direction::Up => index.checked_sub(width),
            Direction::Down => Some(index + width).filter(|&i| i < grid.len()),
            // Column 0 wraps to the last column of the previous row
            Direction::Left => index.checked_sub(1),
            Direction::Right => Some(grid.group_end(index) + 1).filter(|&i| i < grid.len()),
        }
    }

    /// Move focus one step
    pub fn step(&mut self, grid: &Grid, direction: Direction) -> Option<FocusChange> {
        let target = self.target(grid, direction)?;
        self.focus_on(grid, target)
    }

    /// Put focus on `index` directly (pointer hover)
    ///
    /// Returns `None` for an out-of-range index or the already focused cell.
    pub fn focus_on(&mut self, grid: &Grid, index: usize) -> Option<FocusChange> {
        if index >= grid.len() || index == self.focus {
            return None;
        }

        let group = grid.group_at(index);
        let preview = (group.is_none() || group != self.focused_group)
            .then(|| grid.selection_text(index));

        self.focus = index;
        self.focused_group = group;
        Some(FocusChange {
            index,
            group,
            preview,
        })
    }

    /// Re-read the focused cell after the grid changed underneath it
    ///
    /// Returns the new selection text when the focused group was removed or
    /// consumed.
    pub fn refresh(&mut self, grid: &Grid) -> Option<String> {
        let group = grid.group_at(self.focus);
        if group == self.focused_group {
            return None;
        }
        self.focused_group = group;
        Some(grid.selection_text(self.focus))
    }

    /// Indices to highlight: the focused group, or just the focused cell
    #[must_use]
    pub fn highlighted(&self, grid: &Grid) -> Vec<usize> {
        match self.focused_group {
            Some(group) => grid.group_cells(group).to_vec(),
            None => vec![self.focus],
        }
    }
}
