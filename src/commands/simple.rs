//! Simple interactive CLI mode
//!
//! Line-based terminal without the TUI: `w`/`a`/`s`/`d` move the cursor,
//! `e` activates, and typing a visible word guesses it directly.

use crate::config::GameConfig;
use crate::core::{Grid, GroupRef};
use crate::output::{print_attempts, print_feedback, print_grid, print_header, print_outcome};
use crate::session::{Activation, Console, GuessOutcome, Intent, TerminalView};
use crate::solver::{Clue, Solver, StrategyType};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Prints console updates as plain lines
struct LineView {
    addresses: Vec<u32>,
    grid: Option<Grid>,
    highlighted: Vec<usize>,
}

impl LineView {
    const fn new(addresses: Vec<u32>) -> Self {
        Self {
            addresses,
            grid: None,
            highlighted: Vec::new(),
        }
    }

    fn print_grid(&self) {
        if let Some(grid) = &self.grid {
            print_grid(grid, &self.addresses, &self.highlighted);
        }
    }
}

impl TerminalView for LineView {
    fn render_grid(&mut self, grid: &Grid) {
        self.grid = Some(grid.clone());
        self.print_grid();
    }

    fn set_highlight(&mut self, focus: usize, group: Option<GroupRef>) {
        self.highlighted = match (group, &self.grid) {
            (Some(group), Some(grid)) => grid.group_cells(group).to_vec(),
            _ => vec![focus],
        };
    }

    fn show_selection_preview(&mut self, text: &str) {
        println!("  {} {}", "cursor".bright_black(), format!(">{text}").bright_white());
    }

    fn show_attempts_remaining(&mut self, attempts: usize) {
        print_attempts(attempts);
    }

    fn show_feedback_line(&mut self, line: &str) {
        print_feedback(line);
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if no puzzle can be generated or on an I/O error reading
/// user input.
pub fn run_simple<S: AsRef<str>, R: Rng>(
    dictionary: &[S],
    config: &GameConfig,
    rng: &mut R,
) -> Result<()> {
    println!("Commands: w/a/s/d move, e activate, a word to guess it directly,");
    println!("          g redraw grid, h hint, n new terminal, q quit\n");

    loop {
        let mut console = Console::generate(dictionary, config, &mut *rng)
            .context("failed to generate puzzle")?;
        let mut view = LineView::new(console.addresses().to_vec());
        let mut history: Vec<Clue> = Vec::new();

        print_header();
        console.attach(&mut view);

        loop {
            if console.status().is_over() {
                print_outcome(console.status(), &console.session().password().text);
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => break,
                    _ => {
                        println!("\n{}", ">Logging off.".green());
                        return Ok(());
                    }
                }
            }

            let input = get_user_input(">")?;
            match input.to_lowercase().as_str() {
                "q" | "quit" | "exit" => return Ok(()),
                "n" | "new" => break,
                "g" | "grid" => view.print_grid(),
                "h" | "hint" => print_hint(&console, &history),
                "" | "e" => {
                    let activation = console.handle(Intent::Activate, &mut view);
                    record_clue(&console, &activation, &mut history);
                }
                moves if is_movement(moves) => {
                    for key in moves.chars() {
                        console.handle(movement(key), &mut view);
                    }
                }
                _ => guess_word(&mut console, &mut view, &input, &mut history),
            }
        }
    }
}

fn is_movement(input: &str) -> bool {
    input.chars().all(|c| matches!(c, 'w' | 'a' | 's' | 'd'))
}

const fn movement(key: char) -> Intent {
    match key {
        'w' => Intent::Up,
        'a' => Intent::Left,
        's' => Intent::Down,
        _ => Intent::Right,
    }
}

/// Guess a word by typing it
fn guess_word<R: Rng>(
    console: &mut Console<R>,
    view: &mut LineView,
    input: &str,
    history: &mut Vec<Clue>,
) {
    let text = input.trim().to_uppercase();
    let start = console
        .session()
        .remaining_words()
        .into_iter()
        .find(|w| w.text == text)
        .and_then(|w| console.session().grid().word_cells(w.id))
        .and_then(|cells| cells.first().copied());

    let Some(index) = start else {
        println!("{}", format!(">{text} is not on the terminal").yellow());
        return;
    };
    let activation = console.activate_cell(index, view);
    record_clue(console, &activation, history);
}

fn record_clue<R: Rng>(
    console: &Console<R>,
    activation: &Activation,
    history: &mut Vec<Clue>,
) {
    if let Activation::Guess(GuessOutcome::Denied(report)) = activation {
        let session = console.session();
        if let Some(word) = session.placed_words().iter().find(|w| w.text == report.guess) {
            history.push(Clue::new(word.clone(), report.likeness));
        }
    }
}

/// Show which words still fit every likeness seen so far
fn print_hint<R: Rng>(console: &Console<R>, history: &[Clue]) {
    let words: Vec<_> = console
        .session()
        .remaining_words()
        .into_iter()
        .cloned()
        .collect();
    let solver = Solver::new(StrategyType::Minimax, &words);
    let candidates = solver.get_candidates(history);

    let list: Vec<&str> = candidates.iter().map(|w| w.text.as_str()).collect();
    println!(
        "  {} {} ({})",
        "candidates".bright_black(),
        list.join(" ").bright_white(),
        candidates.len()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    if read == 0 {
        anyhow::bail!("input closed");
    }

    Ok(input.trim().to_string())
}
