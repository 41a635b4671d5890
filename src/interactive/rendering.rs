//! TUI rendering with ratatui
//!
//! Green-phosphor terminal: header, attempts, the two grid panels with
//! their address gutters, and the feedback log ending in the selection
//! preview.

use super::app::{App, Screen};
use crate::core::{CellRole, Grid, format_address};
use crate::output::display::TERMINAL_HEADER;
use crate::output::formatters::{ATTEMPT_BLOCK, panel_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Columns taken by an address and the space after it
pub const ADDRESS_WIDTH: u16 = 7;

/// Columns between the two panels
pub const PANEL_GAP: u16 = 2;

const PHOSPHOR: Color = Color::Green;
const DIM: Color = Color::DarkGray;

/// Where each part of the frame goes
struct Areas {
    header: Rect,
    attempts: Rect,
    grid: Rect,
    log: Rect,
    footer: Rect,
}

fn grid_width(grid: &Grid) -> u16 {
    u16::try_from(grid.width()).unwrap_or(u16::MAX)
}

fn areas(area: Rect, grid: &Grid) -> Areas {
    let rows = [
        Constraint::Length(4), // Header
        Constraint::Length(1), // Attempts
        Constraint::Min(5),    // Grid and log
        Constraint::Length(1), // Help
    ];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let panel = ADDRESS_WIDTH.saturating_add(grid_width(grid));
    let grid_columns = panel.saturating_mul(2).saturating_add(PANEL_GAP + 2);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(grid_columns), Constraint::Min(16)])
        .split(chunks[2]);

    Areas {
        header: chunks[0],
        attempts: chunks[1],
        grid: body[0],
        log: body[1],
        footer: chunks[3],
    }
}

fn grid_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .style(Style::default().fg(PHOSPHOR))
}

/// Grid index under the screen position `(column, row)` for a frame of
/// size `area`, or `None` when the position is not over a cell
#[must_use]
pub fn cell_at(area: Rect, grid: &Grid, column: u16, row: u16) -> Option<usize> {
    let inner = grid_block().inner(areas(area, grid).grid);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let x = column - inner.x;
    let y = usize::from(row - inner.y);
    let half = panel_rows(grid.rows());
    if y >= half {
        return None;
    }

    let width = grid_width(grid);
    let right_start = ADDRESS_WIDTH + width + PANEL_GAP + ADDRESS_WIDTH;
    let (grid_row, grid_column) = if (ADDRESS_WIDTH..ADDRESS_WIDTH + width).contains(&x) {
        (y, x - ADDRESS_WIDTH)
    } else if (right_start..right_start + width).contains(&x) {
        (y + half, x - right_start)
    } else {
        return None;
    };

    let index = grid_row * grid.width() + usize::from(grid_column);
    (index < grid.len()).then_some(index)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = areas(f.area(), &app.view.grid);

    render_header(f, areas.header);
    render_attempts(f, app, areas.attempts);
    render_grid(f, app, areas.grid);
    render_log(f, app, areas.log);
    render_help(f, app, areas.footer);

    match app.screen {
        Screen::Terminal => {}
        Screen::Unlocked => render_unlocked(f, app),
        Screen::Locked => render_locked(f),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TERMINAL_HEADER,
            Style::default().fg(PHOSPHOR).add_modifier(Modifier::BOLD),
        )),
        Line::from("ENTER PASSWORD NOW"),
    ])
    .style(Style::default().fg(PHOSPHOR))
    .block(Block::default().borders(Borders::BOTTOM).style(Style::default().fg(DIM)));
    f.render_widget(header, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw("Attempts remaining:")];
    for _ in 0..app.view.attempts {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            ATTEMPT_BLOCK.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let color = if app.view.attempts <= 1 { Color::Red } else { PHOSPHOR };
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(color)),
        area,
    );
}

fn cell_spans(app: &App, row: usize) -> Vec<Span<'static>> {
    let grid = &app.view.grid;
    let address = app.addresses().get(row).copied().unwrap_or(0);
    let mut spans = vec![Span::styled(
        format!("{} ", format_address(address)),
        Style::default().fg(DIM),
    )];

    let start = row * grid.width();
    for (offset, cell) in grid.row(row).iter().enumerate() {
        let style = if app.view.highlighted.contains(&(start + offset)) {
            Style::default().fg(Color::Black).bg(PHOSPHOR)
        } else if matches!(cell.role, CellRole::Word(_)) {
            Style::default().fg(PHOSPHOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PHOSPHOR)
        };
        spans.push(Span::styled(cell.glyph.to_string(), style));
    }

    let missing = grid.width().saturating_sub(grid.row(row).len());
    if missing > 0 {
        spans.push(Span::raw(" ".repeat(missing)));
    }
    spans
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.view.grid.rows();
    let half = panel_rows(rows);
    let gap = " ".repeat(usize::from(PANEL_GAP));

    let lines: Vec<Line> = (0..half)
        .map(|row| {
            let mut spans = cell_spans(app, row);
            if row + half < rows {
                spans.push(Span::raw(gap.clone()));
                spans.extend(cell_spans(app, row + half));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(grid_block()), area);
}

fn render_log(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .style(Style::default().fg(DIM));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Newest lines at the bottom, just above the preview
    let room = usize::from(inner.height).saturating_sub(1);
    let skip = app.view.log.len().saturating_sub(room);
    let mut lines: Vec<Line> = app.view.log[skip..]
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(PHOSPHOR))))
        .collect();
    let padding = room.saturating_sub(lines.len());
    lines.splice(0..0, std::iter::repeat_n(Line::from(""), padding));

    lines.push(Line::from(vec![
        Span::styled(format!(">{}", app.view.preview), Style::default().fg(PHOSPHOR)),
        Span::styled(
            "█",
            Style::default().fg(PHOSPHOR).add_modifier(Modifier::SLOW_BLINK),
        ),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen {
        Screen::Terminal => "←↑↓→/mouse: Select | Enter/click: Activate | q: Quit".to_string(),
        Screen::Unlocked | Screen::Locked => format!(
            "n: New terminal | q: Exit | Unlocked {}/{}",
            app.stats.unlocked, app.stats.terminals
        ),
    };
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DIM)),
        area,
    );
}

/// Rectangle of `width` by `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_overlay(f: &mut Frame, lines: Vec<Line>, color: Color) {
    let area = centered(f.area(), 44, 8);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .style(Style::default().fg(color)),
            ),
        area,
    );
}

fn render_unlocked(f: &mut Frame, app: &App) {
    let password = &app.console.session().password().text;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("ACCESS GRANTED", bold)),
        Line::from(""),
        Line::from(format!("Password: {password}")),
        Line::from(""),
        Line::from("[n] New terminal    [q] Exit"),
    ];
    render_overlay(f, lines, PHOSPHOR);
}

fn render_locked(f: &mut Frame) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("TERMINAL LOCKED", bold)),
        Line::from(""),
        Line::from("PLEASE CONTACT AN ADMINISTRATOR"),
        Line::from(""),
        Line::from("[n] New terminal    [q] Exit"),
    ];
    render_overlay(f, lines, Color::Red);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::{DICTIONARY, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    fn app() -> App {
        App::new(
            words_from_slice(DICTIONARY),
            GameConfig::default(),
            StdRng::seed_from_u64(10),
        )
        .unwrap()
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(FRAME.width, FRAME.height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    /// Screen position of the first cell of the left panel
    fn origin(grid: &Grid) -> (u16, u16) {
        let inner = grid_block().inner(areas(FRAME, grid).grid);
        (inner.x + ADDRESS_WIDTH, inner.y)
    }

    #[test]
    fn left_panel_maps_to_first_rows() {
        let app = app();
        let grid = &app.view.grid;
        let (x, y) = origin(grid);

        assert_eq!(cell_at(FRAME, grid, x, y), Some(0));
        assert_eq!(cell_at(FRAME, grid, x + 3, y + 1), Some(grid.width() + 3));
    }

    #[test]
    fn right_panel_maps_to_second_half() {
        let app = app();
        let grid = &app.view.grid;
        let (x, y) = origin(grid);
        let right = x + grid_width(grid) + PANEL_GAP + ADDRESS_WIDTH;

        let half = panel_rows(grid.rows());
        assert_eq!(cell_at(FRAME, grid, right, y), Some(half * grid.width()));
    }

    #[test]
    fn gutter_and_gap_are_not_cells() {
        let app = app();
        let grid = &app.view.grid;
        let (x, y) = origin(grid);

        assert_eq!(cell_at(FRAME, grid, x - 1, y), None);
        assert_eq!(cell_at(FRAME, grid, x + grid_width(grid), y), None);
        assert_eq!(cell_at(FRAME, grid, 0, 0), None);
    }

    #[test]
    fn draws_header_attempts_and_addresses() {
        let app = app();
        let text = screen_text(&app);

        assert!(text.contains(TERMINAL_HEADER));
        assert!(text.contains("Attempts remaining: ■ ■ ■ ■"));
        assert!(text.contains(&format_address(app.addresses()[0])));
    }

    #[test]
    fn draws_lockout_screen() {
        let mut app = app();
        let password = app.console.session().password().id;
        let dud = app
            .view
            .grid
            .cells()
            .iter()
            .position(|c| matches!(c.role, CellRole::Word(id) if id != password))
            .unwrap();
        for _ in 0..4 {
            app.click(dud);
        }

        let text = screen_text(&app);
        assert!(text.contains("TERMINAL LOCKED"));
        assert!(text.contains("PLEASE CONTACT AN ADMINISTRATOR"));
    }

    #[test]
    fn centered_fits_inside() {
        let inner = centered(FRAME, 44, 8);
        assert_eq!(inner, Rect::new(28, 11, 44, 8));
        assert_eq!(centered(Rect::new(0, 0, 10, 4), 44, 8), Rect::new(0, 0, 10, 4));
    }
}
