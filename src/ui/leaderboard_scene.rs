//! Leaderboard table.

use crate::constants::LEADERBOARD_DISPLAY_LIMIT;
use crate::leaderboard::LeaderboardStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_leaderboard(frame: &mut Frame, area: Rect, store: &LeaderboardStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Leaderboard",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let entries = store.list(LEADERBOARD_DISPLAY_LIMIT);
    let mut lines: Vec<Line> = Vec::new();

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet. Be the first to play!",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "{:>3}  {:<16} {:>7}  {:>6}  {:>10}",
                "#", "Name", "Score", "Time", "Date"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (i, entry) in entries.iter().enumerate() {
            let style = if i < 3 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{:>3}  {:<16} {:>7}  {:>6}  {:>10}",
                    i + 1,
                    entry.name,
                    entry.score,
                    entry.time,
                    entry.date
                ),
                style,
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    let controls = Paragraph::new(Span::styled(
        "c: clear  Esc: back",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
