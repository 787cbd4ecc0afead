//! # Terminal UI
//!
//! ```text
//! ┌ Cash Counter ─────────────────────────────────────────────────────────┐
//! │ 1st Shift │ 2nd Shift │ 3rd Shift                                     │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │ 1st Shift Total  ₱2,300.00                                            │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌ Denominations ────────────────────────────────────────────────────────┐
//! │   Bill   Quantity   Count     Amount                                  │
//! │ → ₱1k    2          Qty: 2    ₱2,000                                  │
//! │   ₱500              Qty: 0    ₱0                                      │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │ Grand Total  ₱2,800.00   Combined total across all shifts             │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │ ✓ Shift Cleared: 1st shift has been reset to zero.                    │
//! │ Tab Shift | ↑/↓ Move | 0-9 Edit | c Clear | e Export | p Print | q Quit│
//! └───────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use tracing::{debug, info};

use tally_core::{Denomination, Shift};

use crate::commands::tally::TallyResponse;
use crate::commands::{report, tally};
use crate::error::ApiError;
use crate::print::PrintSurface;
use crate::state::{CounterConfig, CounterState, NotificationKind};

/// How long the loop waits for input before expiring notifications.
const TICK: Duration = Duration::from_millis(250);

/// UI-side state around the counter state.
pub struct App {
    pub state: CounterState,
    pub config: CounterConfig,
    surface: Box<dyn PrintSurface>,
    table_state: TableState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: CounterConfig, surface: Box<dyn PrintSurface>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            state: CounterState::new(),
            config,
            surface,
            table_state,
            should_quit: false,
        }
    }

    /// Denomination row under the cursor.
    pub fn focused(&self) -> Denomination {
        let index = self.table_state.selected().unwrap_or(0);
        Denomination::ALL[index.min(Denomination::COUNT - 1)]
    }

    pub fn next_row(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < Denomination::COUNT => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let i = match self.table_state.selected() {
            Some(0) | None => Denomination::COUNT - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.select_shift(self.state.active_shift.previous());
                } else {
                    self.select_shift(self.state.active_shift.next());
                }
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.select_shift(self.state.active_shift.previous())
            }
            KeyCode::Right => self.select_shift(self.state.active_shift.next()),
            KeyCode::F(n @ 1..=3) => self.select_shift(Shift::ALL[n as usize - 1]),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut input = self.focused_text();
                input.push(c);
                self.set_focused(&input);
            }
            KeyCode::Backspace => {
                let mut input = self.focused_text();
                input.pop();
                self.set_focused(&input);
            }
            KeyCode::Delete => self.set_focused("0"),
            KeyCode::Char('c') => {
                tally::clear_shift(&mut self.state, &self.config);
            }
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('p') => self.print(),
            _ => {}
        }
    }

    /// Expires old notifications.
    pub fn tick(&mut self, now: Instant) {
        self.state.notifications.expire(now);
    }

    fn focused_text(&self) -> String {
        let quantity = self
            .state
            .tally
            .shift(self.state.active_shift)
            .quantity(self.focused());
        if quantity == 0 {
            String::new()
        } else {
            quantity.to_string()
        }
    }

    fn set_focused(&mut self, input: &str) {
        let denomination = self.focused().value();
        let result = tally::set_quantity(&mut self.state, &self.config, denomination, input);
        self.report_error(result);
    }

    fn select_shift(&mut self, shift: Shift) {
        let result = tally::set_active_shift(&mut self.state, &self.config, shift.label());
        self.report_error(result);
    }

    fn export(&mut self) {
        let today = Local::now().date_naive();
        let result = report::export_report(&mut self.state, &self.config, today);
        self.report_error(result);
    }

    fn print(&mut self) {
        let now = Local::now().naive_local();
        let result = report::print_shift(
            &mut self.state,
            &self.config,
            self.surface.as_mut(),
            now,
        );
        self.report_error(result);
    }

    /// Turns a failed command into an error notification.
    fn report_error<T>(&mut self, result: Result<T, ApiError>) {
        if let Err(err) = result {
            debug!(code = ?err.code, message = %err.message, "Command failed");
            self.state.notifications.error(err.title(), err.message);
        }
    }
}

// =============================================================================
// Event Loop
// =============================================================================

/// Takes over the terminal until the user quits.
pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    info!("Counter closed");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Shift tabs
            Constraint::Length(3),  // Active shift total
            Constraint::Min(12),    // Denomination inputs
            Constraint::Length(3),  // Grand total
            Constraint::Length(4),  // Status bar
        ])
        .split(f.size());

    let snapshot = tally::get_tally(&app.state, &app.config);

    render_tabs(f, chunks[0], app);
    render_shift_total(f, chunks[1], &snapshot);
    render_inputs(f, chunks[2], app, &snapshot);
    render_grand_total(f, chunks[3], &snapshot);
    render_status_bar(f, chunks[4], app);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, shift) in Shift::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *shift == app.state.active_shift {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(format!("{} Shift", shift.label()), style));
    }

    let header = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Cash Counter "),
    );

    f.render_widget(header, area);
}

fn render_shift_total(f: &mut Frame, area: Rect, snapshot: &TallyResponse) {
    let shift = snapshot.active_shift;
    let total = snapshot.shift(shift).total_text.clone();

    let line = Line::from(vec![
        Span::raw(format!("{} Shift Total  ", shift.label())),
        Span::styled(
            total,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);

    let card = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &mut App, snapshot: &TallyResponse) {
    let symbol = app.config.currency.symbol.as_str();
    let lines = &snapshot.shift(snapshot.active_shift).lines;

    let header_cells = ["Bill", "Quantity", "Count", "Amount"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells).height(1);

    let rows = lines.iter().map(|line| {
        let quantity = if line.quantity == 0 {
            String::new()
        } else {
            line.quantity.to_string()
        };
        let amount_style = if line.quantity == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        Row::new(vec![
            Cell::from(line.denomination.label(symbol)),
            Cell::from(quantity),
            Cell::from(format!("Qty: {}", line.quantity)),
            Cell::from(line.amount.format_whole(symbol)).style(amount_style),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Denominations "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_grand_total(f: &mut Frame, area: Rect, snapshot: &TallyResponse) {
    let total = snapshot.grand_total_text.clone();

    let line = Line::from(vec![
        Span::raw("Grand Total  "),
        Span::styled(
            total,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   Combined total across all shifts",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let card = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let notice = match app.state.notifications.latest() {
        Some(note) => {
            let (mark, color) = match note.kind {
                NotificationKind::Info => ("✓", Color::Green),
                NotificationKind::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(format!("{} {}: ", mark, note.title), Style::default().fg(color)),
                Span::raw(note.message.clone()),
            ])
        }
        None => Line::from(""),
    };

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let help = Line::from(vec![
        key("Tab/F1-F3"),
        Span::raw(" Shift | "),
        key("↑/↓"),
        Span::raw(" Move | "),
        key("0-9"),
        Span::raw(" Edit | "),
        key("Del"),
        Span::raw(" Zero | "),
        key("c"),
        Span::raw(" Clear | "),
        key("e"),
        Span::raw(" Export | "),
        key("p"),
        Span::raw(" Print | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);

    let status_bar = Paragraph::new(vec![notice, help]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// =============================================================================
// Unit Tests
// =============================================================================
