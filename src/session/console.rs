//! Console controller
//!
//! Threads input intents through the navigation model and the game session,
//! then tells a rendering collaborator what changed. All state lives in the
//! console value; nothing is global.

use super::game::{
    Activation, GameSession, GuessOutcome, PowerUpEffect, PowerUpOutcome, SessionStatus,
};
use super::navigation::{Direction, FocusChange, NavigationModel};
use crate::config::GameConfig;
use crate::core::{Grid, GroupRef, HexCounter};
use crate::error::GenerationError;
use crate::generator::{Puzzle, generate_puzzle};
use rand::Rng;

/// Discrete input delivered by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Activate,
}

impl Intent {
    const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Activate => None,
        }
    }
}

/// Rendering collaborator driven by the console
pub trait TerminalView {
    fn render_grid(&mut self, grid: &Grid);
    /// Highlight `group`, or only the cell at `focus` when there is no group
    fn set_highlight(&mut self, focus: usize, group: Option<GroupRef>);
    fn show_selection_preview(&mut self, text: &str);
    fn show_attempts_remaining(&mut self, attempts: usize);
    fn show_feedback_line(&mut self, line: &str);
}

/// Terminal log lines describing an activation
///
/// # Examples
/// ```
/// use termlink::session::{Activation, GuessOutcome, GuessReport, feedback_lines};
///
/// let denied = Activation::Guess(GuessOutcome::Denied(GuessReport {
///     guess: "BRAVO".to_string(),
///     likeness: 2,
///     attempts_remaining: 3,
/// }));
/// assert_eq!(feedback_lines(&denied), [">BRAVO", ">Entry denied", ">Likeness=2"]);
/// ```
#[must_use]
pub fn feedback_lines(activation: &Activation) -> Vec<String> {
    match activation {
        Activation::Guess(GuessOutcome::Accepted { password }) => {
            vec![format!(">{password}"), ">Password accepted.".to_string()]
        }
        Activation::Guess(GuessOutcome::Denied(report)) => {
            let mut lines = vec![
                format!(">{}", report.guess),
                ">Entry denied".to_string(),
                format!(">Likeness={}", report.likeness),
            ];
            if report.attempts_remaining == 0 {
                lines.push(">Lockout in progress.".to_string());
            }
            lines
        }
        Activation::PowerUp(PowerUpOutcome::Applied { group, effect }) => {
            let result = match effect {
                PowerUpEffect::DudRemoved(_) => ">Dud removed.",
                PowerUpEffect::AttemptsReset => ">Tries reset.",
            };
            vec![format!(">{group}"), result.to_string()]
        }
        Activation::Guess(GuessOutcome::Ignored)
        | Activation::PowerUp(PowerUpOutcome::Ignored)
        | Activation::Nothing => Vec::new(),
    }
}

/// One hacking terminal: session, focus, address gutter and randomness
pub struct Console<R> {
    session: GameSession,
    navigation: NavigationModel,
    addresses: Vec<u32>,
    rng: R,
}

impl<R: Rng> Console<R> {
    /// Wrap an already generated puzzle
    pub fn new(puzzle: Puzzle, config: &GameConfig, mut rng: R) -> Self {
        let session = GameSession::new(puzzle, config.max_attempts);
        let navigation = NavigationModel::new(session.grid());
        let addresses = HexCounter::new(&mut rng).take_rows(session.grid().rows(), &mut rng);
        Self {
            session,
            navigation,
            addresses,
            rng,
        }
    }

    /// Generate a fresh puzzle from `dictionary` and start a session on it
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` when no playable puzzle can be built; no
    /// session is started in that case.
    pub fn generate<S: AsRef<str>>(
        dictionary: &[S],
        config: &GameConfig,
        mut rng: R,
    ) -> Result<Self, GenerationError> {
        let puzzle = generate_puzzle(dictionary, config, &mut rng)?;
        Ok(Self::new(puzzle, config, rng))
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    /// Address shown beside each row
    #[must_use]
    pub fn addresses(&self) -> &[u32] {
        &self.addresses
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Give the rng back, e.g. to seed the next session
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Paint the initial state onto a view
    pub fn attach<V: TerminalView + ?Sized>(&self, view: &mut V) {
        let grid = self.session.grid();
        view.render_grid(grid);
        view.show_attempts_remaining(self.session.attempts_remaining());
        view.set_highlight(self.navigation.focus(), self.navigation.focused_group());
        view.show_selection_preview(&grid.selection_text(self.navigation.focus()));
    }

    /// Apply one intent; ignored once the session is over
    pub fn handle<V: TerminalView + ?Sized>(
        &mut self,
        intent: Intent,
        view: &mut V,
    ) -> Activation {
        if self.session.status().is_over() {
            return Activation::Nothing;
        }
        match intent.direction() {
            Some(direction) => {
                if let Some(change) = self.navigation.step(self.session.grid(), direction) {
                    Self::show_focus(&change, view);
                }
                Activation::Nothing
            }
            None => self.activate_focused(view),
        }
    }

    /// Move focus straight to `index` (pointer hover)
    pub fn focus_cell<V: TerminalView + ?Sized>(&mut self, index: usize, view: &mut V) {
        if self.session.status().is_over() {
            return;
        }
        if let Some(change) = self.navigation.focus_on(self.session.grid(), index) {
            Self::show_focus(&change, view);
        }
    }

    /// Focus then activate the cell at `index` (pointer click)
    pub fn activate_cell<V: TerminalView + ?Sized>(
        &mut self,
        index: usize,
        view: &mut V,
    ) -> Activation {
        if index >= self.session.grid().len() {
            return Activation::Nothing;
        }
        self.focus_cell(index, view);
        self.handle(Intent::Activate, view)
    }

    fn activate_focused<V: TerminalView + ?Sized>(&mut self, view: &mut V) -> Activation {
        let activation = self
            .session
            .activate_cell(self.navigation.focus(), &mut self.rng);

        for line in feedback_lines(&activation) {
            view.show_feedback_line(&line);
        }

        match &activation {
            Activation::Guess(GuessOutcome::Denied(report)) => {
                view.show_attempts_remaining(report.attempts_remaining);
            }
            Activation::PowerUp(PowerUpOutcome::Applied { effect, .. }) => {
                let grid = self.session.grid();
                view.render_grid(grid);
                if *effect == PowerUpEffect::AttemptsReset {
                    view.show_attempts_remaining(self.session.attempts_remaining());
                }
                if let Some(preview) = self.navigation.refresh(grid) {
                    view.set_highlight(self.navigation.focus(), self.navigation.focused_group());
                    view.show_selection_preview(&preview);
                }
            }
            _ => {}
        }

        activation
    }

    fn show_focus<V: TerminalView + ?Sized>(change: &FocusChange, view: &mut V) {
        view.set_highlight(change.index, change.group);
        if let Some(preview) = &change.preview {
            view.show_selection_preview(preview);
        }
    }
}
