//! Full-screen terminal front end

mod app;
mod rendering;

pub use app::{App, LOG_CAPACITY, Screen, Statistics, TerminalState, run_tui};
pub use rendering::{ADDRESS_WIDTH, PANEL_GAP, cell_at, ui};
