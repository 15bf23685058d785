//! End-of-run results screen.

use crate::game_logic::RunSummary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_result(frame: &mut Frame, area: Rect, name: &str, summary: &RunSummary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Goal reached!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(name.to_string(), Style::default().fg(Color::Yellow))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![
        Line::from(format!("Points:      {}", summary.raw_score)),
        Line::from(format!("Time:        {}", summary.time)),
        Line::from(format!("Final score: {}", summary.final_score)),
        Line::from(vec![
            Span::raw("Tier:        "),
            Span::styled(
                summary.tier.name(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    if summary.is_top_ten {
        lines.push(Line::from(Span::styled(
            "NEW RECORD - top 10!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    let controls = Paragraph::new(Span::styled(
        "Enter: menu  l: leaderboard",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
