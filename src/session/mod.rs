//! Play sessions: navigation, guess evaluation, and the console tying them together

mod console;
mod game;
mod navigation;

pub use console::{Console, Intent, TerminalView, feedback_lines};
pub use game::{
    Activation, DUD_REMOVAL_CHANCE, GameSession, GuessOutcome, GuessReport, PowerUpEffect,
    PowerUpOutcome, SessionStatus,
};
pub use navigation::{Direction, FocusChange, NavigationModel};
