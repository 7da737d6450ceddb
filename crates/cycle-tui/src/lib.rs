// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use cycle_app::{AppCommand, AppState, BottomTab, CycleOverview, InsightsContent, PhaseSummary};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use std::io;
use std::ops::Range;
use std::time::Duration;

const TEXT_PRIMARY: Color = Color::White;
const TEXT_SECONDARY: Color = Color::DarkGray;
const BORDER_DIVIDER: Color = Color::DarkGray;
const TAB_SELECTED_BG: Color = Color::DarkGray;
const ACCENT_TEAL: Color = Color::Cyan;
const ACCENT_BLUE: Color = Color::Blue;
const ACCENT_PURPLE: Color = Color::Magenta;
const ACCENT_RED: Color = Color::LightRed;

const STAT_COLUMN_WIDTH: usize = 24;
const PREDICTION_CARD_WIDTH: usize = 22;
const SCROLL_LEFT_MARK: &str = "‹ ";
const SCROLL_RIGHT_MARK: &str = " ›";
const KEY_HINTS: &str = " f/b switch tab · 1-4 jump · ←/→ predictions · ↑/↓ scroll · q quit";

/// Per-render state the shell does not own: the vertical scroll of the
/// page body and the horizontal offset into the prediction strip. Both
/// reset whenever the selected tab changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ViewData {
    body_scroll: u16,
    predictions_offset: usize,
}

impl ViewData {
    fn reset_scroll(&mut self) {
        *self = Self::default();
    }
}

pub fn run_app(state: &mut AppState) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns true when the app should quit.
fn handle_key_event(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('q') {
        return true;
    }

    let command = match (key.code, key.modifiers) {
        (KeyCode::Tab, _) | (KeyCode::Char('f'), KeyModifiers::NONE) => Some(AppCommand::NextTab),
        (KeyCode::BackTab, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
            Some(AppCommand::PrevTab)
        }
        (KeyCode::Char(digit @ '1'..='4'), KeyModifiers::NONE) => {
            let index = digit as usize - '1' as usize;
            Some(AppCommand::SelectTab(BottomTab::ALL[index]))
        }
        _ => None,
    };

    if let Some(command) = command {
        if !state.dispatch(command).is_empty() {
            view_data.reset_scroll();
        }
        return false;
    }

    match key.code {
        KeyCode::Up => {
            view_data.body_scroll = view_data.body_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            let max = page_line_count(state.selected_tab).saturating_sub(1) as u16;
            view_data.body_scroll = view_data.body_scroll.saturating_add(1).min(max);
        }
        KeyCode::Left => {
            view_data.predictions_offset = view_data.predictions_offset.saturating_sub(1);
        }
        KeyCode::Right => {
            if state.selected_tab == BottomTab::Insights {
                let last = InsightsContent::placeholder()
                    .prediction_slots
                    .saturating_sub(1);
                view_data.predictions_offset = (view_data.predictions_offset + 1).min(last);
            }
        }
        _ => {}
    }
    false
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_page(frame, layout[0], state, view_data);
    render_tab_bar(frame, layout[1], state.selected_tab);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(TEXT_SECONDARY));
    frame.render_widget(hints, layout[2]);
}

fn render_page(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState, view_data: &ViewData) {
    let lines = page_lines(state.selected_tab, view_data, area.width);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((view_data.body_scroll, 0));
    frame.render_widget(body, area);
}

fn render_tab_bar(frame: &mut ratatui::Frame<'_>, area: Rect, selected: BottomTab) {
    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(BORDER_DIVIDER));
    let inner = divider.inner(area);
    frame.render_widget(divider, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (tab, cell) in BottomTab::ALL.into_iter().zip(cells.iter()) {
        let style = if tab == selected {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(TAB_SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        let entry = Paragraph::new(vec![Line::from(tab.icon()), Line::from(tab.label())])
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(entry, *cell);
    }
}

fn page_lines(tab: BottomTab, view_data: &ViewData, width: u16) -> Vec<Line<'static>> {
    match tab {
        BottomTab::Insights => insights_page_lines(
            &InsightsContent::placeholder(),
            view_data.predictions_offset,
            prediction_cards_that_fit(width),
        ),
        other => placeholder_page_lines(other),
    }
}

fn page_line_count(tab: BottomTab) -> usize {
    match tab {
        BottomTab::Insights => {
            insights_page_lines(&InsightsContent::placeholder(), 0, 1).len()
        }
        other => placeholder_page_lines(other).len(),
    }
}

fn placeholder_page_lines(tab: BottomTab) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            tab.label(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            format!(
                "This is a placeholder for the {} tab.",
                tab.label().to_ascii_lowercase()
            ),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]
}

fn insights_page_lines(
    content: &InsightsContent,
    predictions_offset: usize,
    visible_cards: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "Insights",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        section_header("Your Cycle"),
        Line::styled("Overview of your cycle.", Style::default().fg(TEXT_SECONDARY)),
        Line::raw(""),
    ];
    lines.extend(stat_pair_lines(&content.overview));
    lines.push(Line::raw(""));

    lines.push(section_header("Phase"));
    lines.extend(phase_card_lines(&content.phase));
    lines.push(Line::raw(""));

    lines.push(section_header("Predictions"));
    lines.push(Line::styled(
        format!(
            "What to expect within the next {} days.",
            content.prediction_window_days
        ),
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines.push(Line::raw(""));
    lines.extend(prediction_strip_lines(
        content.prediction_slots,
        predictions_offset,
        visible_cards,
    ));
    lines.push(Line::raw(""));
    // The button has no action yet.
    lines.push(Line::from(Span::styled(
        "  Get Predictions  ",
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

fn section_header(title: &'static str) -> Line<'static> {
    Line::styled(
        title,
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )
}

fn stat_pair_lines(overview: &CycleOverview) -> Vec<Line<'static>> {
    let first_value = format!("{} Days", overview.last_period_days);
    let second_value = format!("{} Days", overview.estimated_cycle_days);
    let value_pad = STAT_COLUMN_WIDTH.saturating_sub(2 + first_value.chars().count());

    let value_line = Line::from(vec![
        Span::raw("  "),
        Span::styled("●", Style::default().fg(ACCENT_RED)),
        Span::raw(" "),
        Span::styled(
            first_value,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(value_pad)),
        Span::styled("↻", Style::default().fg(ACCENT_PURPLE)),
        Span::raw(" "),
        Span::styled(
            second_value,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let label_line = Line::from(vec![
        Span::raw("    "),
        Span::styled(
            padded("Last Period", STAT_COLUMN_WIDTH),
            Style::default().fg(TEXT_SECONDARY),
        ),
        Span::styled("Estimated Cycle", Style::default().fg(TEXT_SECONDARY)),
    ]);
    vec![value_line, label_line]
}

fn phase_card_lines(phase: &PhaseSummary) -> Vec<Line<'static>> {
    let name_pad = STAT_COLUMN_WIDTH.saturating_sub(2 + phase.name.chars().count());
    let headline = Line::from(vec![
        Span::raw("  "),
        Span::styled("◎", Style::default().fg(ACCENT_BLUE)),
        Span::raw(" "),
        Span::styled(
            phase.name,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(name_pad)),
        Span::styled(
            format!("{} Days Left", phase.days_left),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);
    let description = Line::from(vec![
        Span::raw("    "),
        Span::styled(phase.description, Style::default().fg(TEXT_SECONDARY)),
    ]);
    vec![headline, description]
}

fn prediction_strip_lines(total: usize, offset: usize, visible: usize) -> Vec<Line<'static>> {
    let range = visible_prediction_slots(total, visible, offset);
    let left_mark = if range.start > 0 {
        SCROLL_LEFT_MARK
    } else {
        "  "
    };

    let mut day_spans = vec![Span::styled(left_mark, Style::default().fg(TEXT_SECONDARY))];
    let mut tap_spans = vec![Span::raw("  ")];
    for index in range.clone() {
        day_spans.push(Span::styled(
            padded(&format!("Day {}", index + 1), PREDICTION_CARD_WIDTH),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        tap_spans.push(Span::styled(
            padded("Tap Get Predictions", PREDICTION_CARD_WIDTH),
            Style::default().fg(TEXT_SECONDARY),
        ));
    }
    if range.end < total {
        day_spans.push(Span::styled(
            SCROLL_RIGHT_MARK,
            Style::default().fg(TEXT_SECONDARY),
        ));
    }
    vec![Line::from(day_spans), Line::from(tap_spans)]
}

/// Window of prediction cards shown for a given offset, clamped so the
/// strip never scrolls past its last card.
fn visible_prediction_slots(total: usize, visible: usize, offset: usize) -> Range<usize> {
    if total == 0 {
        return 0..0;
    }
    let visible = visible.clamp(1, total);
    let start = offset.min(total - visible);
    start..start + visible
}

fn prediction_cards_that_fit(width: u16) -> usize {
    ((width as usize).saturating_sub(2) / PREDICTION_CARD_WIDTH).max(1)
}

fn padded(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
