//! Title menu and instructions screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const MENU_ITEMS: [&str; 4] = ["Start Game", "Instructions", "Leaderboard", "Quit"];

pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(1),
            Constraint::Length(MENU_ITEMS.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Q U I Z   M A Z E",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Roll the dice, cross the maze, answer wisely."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let items: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if i == selected { "> " } else { "  " };
            Line::from(Span::styled(format!("{}{}", marker, item), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(items).alignment(Alignment::Center), chunks[2]);

    let controls = Paragraph::new(Span::styled(
        "Up/Down: select  Enter: confirm  q: quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[4]);
}

pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "How to play",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Paragraph::new(vec![
        Line::from("- Press Space to roll the dice (1-6 steps)."),
        Line::from("- Your token walks the maze on its own, preferring new tiles."),
        Line::from("- ? tiles ask a quiz question: +10 for a correct answer, -5 for a wrong one."),
        Line::from("- * tiles spin the reward wheel: anywhere from +25 to -15 points."),
        Line::from("- Reach G to finish. Final score = points x 10 minus elapsed seconds."),
        Line::from("- Top 10 finishes earn a spot on the local leaderboard."),
    ]);
    frame.render_widget(body, chunks[1]);

    let controls = Paragraph::new(Span::styled(
        "Esc: back to menu",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
