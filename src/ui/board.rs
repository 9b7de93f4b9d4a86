use crate::calc::{get_holidays, year_progress};
use crate::data::{Country, Holiday};
use crate::ui::theme::Theme;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;
use tracing::debug;

/// Tiles per board row.
pub const COLUMNS: usize = 5;
const TILE_HEIGHT: u16 = 4;

pub struct App {
    year: i32,
    today: NaiveDate,
    pub country: Option<Country>,
    pub theme: Theme,
    holidays: Vec<Holiday>,
    cursor: usize,
    show_detail: bool,
    /// Last failure to rebuild the board, shown in place of the detail panel.
    error: Option<String>,
    country_changed: bool,
    theme_changed: bool,
}

impl App {
    pub fn new(year: i32, today: NaiveDate, country: Option<Country>, theme: Theme) -> Result<Self> {
        let holidays = get_holidays(country, year, today)?;
        Ok(App {
            year,
            today,
            country,
            theme,
            holidays,
            cursor: 0,
            show_detail: false,
            error: None,
            country_changed: false,
            theme_changed: false,
        })
    }

    pub fn selected(&self) -> Option<&Holiday> {
        self.holidays.get(self.cursor)
    }

    /// True once the user picked a country with `c`.
    pub fn country_changed(&self) -> bool {
        self.country_changed
    }

    /// True once the user picked a theme with `t` or `r`.
    pub fn theme_changed(&self) -> bool {
        self.theme_changed
    }

    fn reload(&mut self) {
        match get_holidays(self.country, self.year, self.today) {
            Ok(holidays) => {
                self.holidays = holidays;
                self.error = None;
            }
            Err(e) => {
                debug!("failed to rebuild holiday board: {e:#}");
                self.error = Some(format!("{e:#}"));
            }
        }
        if self.cursor >= self.holidays.len() {
            self.cursor = self.holidays.len().saturating_sub(1);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.holidays.len() as isize;
        let next = self.cursor as isize + delta;
        if (0..len).contains(&next) {
            self.cursor = next as usize;
        }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if !self.show_detail {
                    return true;
                }
                self.show_detail = false;
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-(COLUMNS as isize)),
            KeyCode::Down => self.move_cursor(COLUMNS as isize),
            KeyCode::Enter | KeyCode::Char(' ') => self.show_detail = !self.show_detail,
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.theme_changed = true;
            }
            KeyCode::Char('r') => {
                self.theme = Theme::random();
                self.theme_changed = true;
            }
            KeyCode::Char('c') => {
                self.country = Country::cycle(self.country);
                self.country_changed = true;
                self.cursor = 0;
                self.show_detail = false;
                self.reload();
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        let rows = self.holidays.len().div_ceil(COLUMNS) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                  // title
                Constraint::Length(rows * TILE_HEIGHT), // tiles
                Constraint::Length(4),                  // detail panel
                Constraint::Length(1),                  // progress footer
                Constraint::Min(1),                     // key hints
            ])
            .split(area);

        self.render_title(f, chunks[0]);
        self.render_tiles(f, chunks[1]);
        self.render_detail(f, chunks[2]);
        self.render_footer(f, chunks[3]);

        let hints = Paragraph::new(Line::from(Span::styled(
            "←↑↓→=move  Enter=details  t=theme  r=random theme  c=country  q=quit",
            Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::DIM),
        )));
        f.render_widget(hints, chunks[4]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let scope = self.country.map(|c| c.name()).unwrap_or("All holidays");
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} Holiday Tracker", self.year),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ·  {}  ·  {}", scope, self.theme.name)),
        ]))
        .alignment(Alignment::Center)
        .style(Style::default().fg(self.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(self.theme.border)),
        );
        f.render_widget(title, area);
    }

    fn render_tiles(&self, f: &mut Frame, area: Rect) {
        let rows = self.holidays.len().div_ceil(COLUMNS);
        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(TILE_HEIGHT); rows])
            .split(area);

        for (r, row_rect) in row_rects.iter().enumerate() {
            let col_rects = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_rect);
            for (c, rect) in col_rects.iter().enumerate() {
                let idx = r * COLUMNS + c;
                let Some(h) = self.holidays.get(idx) else {
                    continue;
                };
                let selected = idx == self.cursor;
                let style = tile_style(h, &self.theme, selected);
                let lines = vec![
                    Line::from(tile_label(h)),
                    Line::from(if h.passed() { h.date.clone() } else { String::new() }),
                ];
                let border = if selected {
                    Style::default()
                        .fg(self.theme.foreground)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.border)
                };
                let tile = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(border));
                f.render_widget(tile, *rect);
            }
        }
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if let Some(err) = &self.error {
            vec![Line::from(Span::styled(
                err.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))]
        } else {
            match self.selected() {
                Some(h) if self.show_detail => vec![
                    Line::from(Span::styled(
                        h.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("{}  ·  {}", h.date, h.status_label())),
                ],
                Some(h) => vec![Line::from(h.name.clone())],
                None => vec![Line::from("No holidays")],
            }
        };
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        f.render_widget(p, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let progress = year_progress(&self.holidays, self.year, self.today);
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let style = Style::default().fg(self.theme.foreground);
        f.render_widget(
            Paragraph::new(format!("{}/{} completed", progress.completed, progress.total))
                .style(style),
            halves[0],
        );
        f.render_widget(
            Paragraph::new(format!("{}% of year", progress.percent_of_year))
                .alignment(Alignment::Right)
                .style(style),
            halves[1],
        );
    }
}

/// Main tile text: a check mark once passed, `+Nd` while upcoming, the date on the day itself.
pub(crate) fn tile_label(h: &Holiday) -> String {
    match h.days_until() {
        None => "✓".to_string(),
        Some(0) => h.date.clone(),
        Some(n) => format!("+{n}d"),
    }
}

pub(crate) fn tile_style(h: &Holiday, theme: &Theme, selected: bool) -> Style {
    let colors = if h.passed() { theme.completed } else { theme.upcoming };
    let mut style = Style::default().fg(colors.text).bg(colors.fill);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    if h.is_today() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
