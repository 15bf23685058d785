//! Wheel modal: the eight slots, spin prompt, and the landed outcome.

use crate::ui::centered_rect;
use crate::wheel::{WheelCategory, WheelOutcome, WHEEL_OUTCOMES};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn category_color(category: WheelCategory) -> Color {
    match category {
        WheelCategory::Positive => Color::Green,
        WheelCategory::Neutral => Color::Gray,
        WheelCategory::Negative => Color::Red,
    }
}

pub fn render_wheel(frame: &mut Frame, area: Rect, result: Option<&'static WheelOutcome>) {
    let modal = centered_rect(44, 16, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Event Tile - Spin the Wheel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = Vec::new();

    for outcome in &WHEEL_OUTCOMES {
        let landed = result.is_some_and(|r| r == outcome);
        let mut style = Style::default().fg(category_color(outcome.category));
        if landed {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        let marker = if landed { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {:<16} {:+}", marker, outcome.label, outcome.delta),
            style,
        )));
    }
    lines.push(Line::from(""));

    match result {
        None => lines.push(Line::from(Span::styled(
            "Press Space to spin",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(outcome) => {
            lines.push(Line::from(Span::styled(
                format!("{} ({:+} points)", outcome.label, outcome.delta),
                Style::default()
                    .fg(category_color(outcome.category))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
