//! Formatting utilities for terminal output

use crate::core::{Grid, format_address};

/// Glyph used for each remaining attempt
pub const ATTEMPT_BLOCK: char = '■';

/// Attempts indicator, one block per remaining attempt
///
/// # Examples
/// ```
/// use termlink::output::formatters::attempts_line;
///
/// assert_eq!(attempts_line(3), "Attempts remaining: ■ ■ ■");
/// assert_eq!(attempts_line(0), "Attempts remaining:");
/// ```
#[must_use]
pub fn attempts_line(remaining: usize) -> String {
    let mut line = String::from("Attempts remaining:");
    for _ in 0..remaining {
        line.push(' ');
        line.push(ATTEMPT_BLOCK);
    }
    line
}

/// Rows shown in each of the two side-by-side panels
#[must_use]
pub const fn panel_rows(total_rows: usize) -> usize {
    total_rows.div_ceil(2)
}

/// A grid row prefixed with its address, e.g. `0x0C3A #ALPHA%$!?.;`
#[must_use]
pub fn format_row(address: u32, glyphs: &str) -> String {
    format!("{} {glyphs}", format_address(address))
}

/// Plain two-panel rendering of the grid with its address gutter
///
/// The first half of the rows fills the left panel, the rest the right.
#[must_use]
pub fn grid_lines(grid: &Grid, addresses: &[u32]) -> Vec<String> {
    let rows: Vec<String> = grid
        .text_rows()
        .into_iter()
        .enumerate()
        .map(|(row, glyphs)| format_row(addresses.get(row).copied().unwrap_or(0), &glyphs))
        .collect();
    let half = panel_rows(rows.len());
    let width = rows.first().map_or(0, |r| r.chars().count());

    (0..half)
        .map(|i| match rows.get(i + half) {
            Some(right) => format!("{:<width$}  {right}", rows[i]),
            None => rows[i].clone(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GridBuilder;

    #[test]
    fn attempts_line_has_one_block_each() {
        assert_eq!(attempts_line(4), "Attempts remaining: ■ ■ ■ ■");
        assert_eq!(attempts_line(1).matches(ATTEMPT_BLOCK).count(), 1);
    }

    #[test]
    fn panel_rows_rounds_up() {
        assert_eq!(panel_rows(34), 17);
        assert_eq!(panel_rows(5), 3);
        assert_eq!(panel_rows(0), 0);
    }

    #[test]
    fn row_has_address_prefix() {
        assert_eq!(format_row(0x0C3A, "#ALPHA#"), "0x0C3A #ALPHA#");
    }

    #[test]
    fn grid_lines_pair_rows_side_by_side() {
        let mut builder = GridBuilder::new();
        builder.push_garble("####".chars());
        builder.push_word("ALPHA");
        builder.push_garble("###".chars());
        // Width 4: `####` `ALPH` `A###`
        let (grid, _) = builder.finish(4);

        let lines = grid_lines(&grid, &[0x100, 0x101, 0x102]);
        assert_eq!(lines, ["0x0100 ####  0x0102 A###", "0x0101 ALPH"]);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
