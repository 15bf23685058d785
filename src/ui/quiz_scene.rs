//! Quiz modal: question, four answers, feedback after answering.

use crate::questions::Question;
use crate::quiz_logic::QuizOutcome;
use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_quiz(frame: &mut Frame, area: Rect, question: &Question, outcome: Option<&QuizOutcome>) {
    let modal = centered_rect(64, 18, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Quiz Tile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, answer) in question.answers.iter().enumerate() {
        let style = match outcome {
            // Reveal the correct answer once the player has committed
            Some(_) if i == question.correct => Style::default().fg(Color::Green),
            Some(o) if !o.correct => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::White),
        };
        lines.push(Line::from(Span::styled(
            format!("  {}. {}", i + 1, answer),
            style,
        )));
    }
    lines.push(Line::from(""));

    match outcome {
        None => {
            lines.push(Line::from(Span::styled(
                "Press 1-4 to answer",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(outcome) => {
            let (verdict, color) = if outcome.correct {
                (format!("Correct! {:+} points", outcome.score_delta), Color::Green)
            } else {
                (format!("Wrong! {:+} points", outcome.score_delta), Color::Red)
            };
            lines.push(Line::from(Span::styled(
                verdict,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(outcome.explanation.clone()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
