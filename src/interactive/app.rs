//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Grid, GroupRef};
use crate::error::GenerationError;
use crate::session::{Console, Intent, SessionStatus, TerminalView};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Feedback lines kept on screen
pub const LOG_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Hacking in progress
    Terminal,
    Unlocked,
    Locked,
}

/// Everything the console has told the view so far
#[derive(Debug, Clone)]
pub struct TerminalState {
    pub grid: Grid,
    pub highlighted: Vec<usize>,
    pub preview: String,
    pub attempts: usize,
    pub log: Vec<String>,
}

impl TerminalState {
    fn new(grid: Grid) -> Self {
        Self {
            grid,
            highlighted: Vec::new(),
            preview: String::new(),
            attempts: 0,
            log: Vec::new(),
        }
    }
}

impl TerminalView for TerminalState {
    fn render_grid(&mut self, grid: &Grid) {
        self.grid.clone_from(grid);
    }

    fn set_highlight(&mut self, focus: usize, group: Option<GroupRef>) {
        self.highlighted = match group {
            Some(group) => self.grid.group_cells(group).to_vec(),
            None => vec![focus],
        };
    }

    fn show_selection_preview(&mut self, text: &str) {
        self.preview = text.to_string();
    }

    fn show_attempts_remaining(&mut self, attempts: usize) {
        self.attempts = attempts;
    }

    fn show_feedback_line(&mut self, line: &str) {
        self.log.push(line.to_string());
        if self.log.len() > LOG_CAPACITY {
            let overflow = self.log.len() - LOG_CAPACITY;
            self.log.drain(..overflow);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Statistics {
    pub terminals: usize,
    pub unlocked: usize,
    pub locked: usize,
}

/// Application state
pub struct App {
    pub console: Console<StdRng>,
    pub view: TerminalState,
    pub screen: Screen,
    pub stats: Statistics,
    pub should_quit: bool,
    dictionary: Vec<String>,
    config: GameConfig,
    seeder: StdRng,
}

impl App {
    /// Start on a freshly generated terminal
    ///
    /// Every terminal gets its own rng seeded from `seeder`, so a seeded
    /// `seeder` replays the same sequence of terminals.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if the first puzzle cannot be generated.
    pub fn new(
        dictionary: Vec<String>,
        config: GameConfig,
        mut seeder: StdRng,
    ) -> Result<Self, GenerationError> {
        let console = Self::fresh_console(&dictionary, &config, &mut seeder)?;
        let mut view = TerminalState::new(console.session().grid().clone());
        console.attach(&mut view);

        Ok(Self {
            console,
            view,
            screen: Screen::Terminal,
            stats: Statistics {
                terminals: 1,
                ..Statistics::default()
            },
            should_quit: false,
            dictionary,
            config,
            seeder,
        })
    }

    fn fresh_console(
        dictionary: &[String],
        config: &GameConfig,
        seeder: &mut StdRng,
    ) -> Result<Console<StdRng>, GenerationError> {
        let rng = StdRng::seed_from_u64(seeder.random());
        Console::generate(dictionary, config, rng)
    }

    /// Replace the current terminal with a new one
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if the puzzle cannot be generated; the
    /// current terminal is kept in that case.
    pub fn new_terminal(&mut self) -> Result<(), GenerationError> {
        let console = Self::fresh_console(&self.dictionary, &self.config, &mut self.seeder)?;
        let mut view = TerminalState::new(console.session().grid().clone());
        console.attach(&mut view);

        self.console = console;
        self.view = view;
        self.screen = Screen::Terminal;
        self.stats.terminals += 1;
        tracing::debug!(terminals = self.stats.terminals, "new terminal");
        Ok(())
    }

    pub fn addresses(&self) -> &[u32] {
        self.console.addresses()
    }

    pub fn handle_intent(&mut self, intent: Intent) {
        self.console.handle(intent, &mut self.view);
        self.sync_screen();
    }

    /// Pointer moved over a cell
    pub fn hover(&mut self, index: usize) {
        self.console.focus_cell(index, &mut self.view);
    }

    /// Pointer clicked a cell
    pub fn click(&mut self, index: usize) {
        self.console.activate_cell(index, &mut self.view);
        self.sync_screen();
    }

    fn sync_screen(&mut self) {
        if self.screen != Screen::Terminal {
            return;
        }
        match self.console.status() {
            SessionStatus::Won => {
                self.screen = Screen::Unlocked;
                self.stats.unlocked += 1;
            }
            SessionStatus::Lost => {
                self.screen = Screen::Locked;
                self.stats.locked += 1;
            }
            SessionStatus::InProgress => {}
        }
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if a new terminal was requested and could
    /// not be generated.
    pub fn on_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<(), GenerationError> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.screen != Screen::Terminal => {
                if code == KeyCode::Char('n') {
                    self.new_terminal()?;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.handle_intent(Intent::Up),
            KeyCode::Down | KeyCode::Char('j') => self.handle_intent(Intent::Down),
            KeyCode::Left | KeyCode::Char('h') => self.handle_intent(Intent::Left),
            KeyCode::Right | KeyCode::Char('l') => self.handle_intent(Intent::Right),
            KeyCode::Enter | KeyCode::Char(' ') => self.handle_intent(Intent::Activate),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event over a frame of size `area`
    pub fn on_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if self.screen != Screen::Terminal {
            return;
        }
        let Some(index) = super::rendering::cell_at(area, &self.view.grid, mouse.column, mouse.row)
        else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved => self.hover(index),
            MouseEventKind::Down(MouseButton::Left) => self.click(index),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key(key.code, key.modifiers)?;
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.on_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        terminals = app.stats.terminals,
        unlocked = app.stats.unlocked,
        locked = app.stats.locked,
        "session ended"
    );
    Ok(())
}
