//! Display functions for command results

use super::formatters::{attempts_line, create_progress_bar, grid_lines, panel_rows};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::{CellRole, Grid, format_address};
use crate::session::SessionStatus;
use colored::{ColoredString, Colorize};

/// Header shown above every terminal
pub const TERMINAL_HEADER: &str = "ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL";

/// Print the terminal header and prompt
pub fn print_header() {
    println!("\n{}", TERMINAL_HEADER.bright_green().bold());
    println!("{}", "ENTER PASSWORD NOW".green());
}

/// Print the grid in two panels, highlighting the given cells
pub fn print_grid(grid: &Grid, addresses: &[u32], highlighted: &[usize]) {
    let rows = grid.rows();
    let half = panel_rows(rows);
    let row_text = |row: usize| -> String {
        let start = row * grid.width();
        let glyphs: String = grid
            .row(row)
            .iter()
            .enumerate()
            .map(|(offset, cell)| {
                let glyph = cell.glyph.to_string();
                let styled: ColoredString = if highlighted.contains(&(start + offset)) {
                    glyph.black().on_bright_green()
                } else if matches!(cell.role, CellRole::Word(_)) {
                    glyph.bright_green()
                } else {
                    glyph.green()
                };
                styled.to_string()
            })
            .collect();
        let address = addresses.get(row).copied().unwrap_or(0);
        format!("{} {glyphs}", format_address(address).bright_black())
    };

    println!();
    for row in 0..half {
        let right = row + half;
        if right < rows {
            // Pad by glyph count, the escaped string is longer
            let padding = " ".repeat(grid.width().saturating_sub(grid.row(row).len()));
            println!("{}{padding}  {}", row_text(row), row_text(right));
        } else {
            println!("{}", row_text(row));
        }
    }
    println!();
}

/// Print the attempts indicator
pub fn print_attempts(remaining: usize) {
    let line = attempts_line(remaining);
    if remaining <= 1 {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.green());
    }
}

/// Print one line of terminal feedback
pub fn print_feedback(line: &str) {
    println!("{}", line.bright_green());
}

/// Print the end-of-session screen
pub fn print_outcome(status: SessionStatus, password: &str) {
    match status {
        SessionStatus::Won => {
            println!("\n{}", "═".repeat(40).bright_green());
            println!("{}", "  ACCESS GRANTED".bright_green().bold());
            println!("  Password: {}", password.bright_yellow().bold());
            println!("{}", "═".repeat(40).bright_green());
        }
        SessionStatus::Lost => {
            println!("\n{}", "═".repeat(40).red());
            println!("{}", "  TERMINAL LOCKED".red().bold());
            println!("  {}", "Please contact an administrator".red());
            println!("{}", "═".repeat(40).red());
        }
        SessionStatus::InProgress => {}
    }
}

/// Print a generated puzzle, optionally with its password
///
/// `plain` skips colors and highlighting, for piping into files.
pub fn print_puzzle(result: &GenerateResult, reveal: bool, plain: bool) {
    if plain {
        colored::control::set_override(false);
        for line in grid_lines(&result.puzzle.grid, &result.addresses) {
            println!("{line}");
        }
    } else {
        print_header();
        print_grid(&result.puzzle.grid, &result.addresses, &[]);
    }

    let words: Vec<&str> = result
        .puzzle
        .placed_words
        .iter()
        .map(|w| w.text.as_str())
        .collect();
    println!("{} {}", "Words:".bright_cyan().bold(), words.join(" "));
    println!(
        "{} {}",
        "Power-ups:".bright_cyan().bold(),
        result.puzzle.grid.power_up_count()
    );
    if reveal {
        println!(
            "{} {}",
            "Password:".bright_cyan().bold(),
            result.puzzle.password.text.bright_yellow().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy.name());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Unlocked:         {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Duds removed:     {}", result.duds_removed);
    println!("   Tries reset:      {}", result.resets);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.wins == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.wins as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
