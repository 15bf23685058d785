//! Player name input and token choice before a run starts.

use crate::game_state::Character;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const NAME_MAX_LENGTH: usize = 16;

pub struct NameInputScreen {
    pub name_input: String,
    pub character_index: usize,
    pub validation_error: Option<String>,
}

impl NameInputScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            character_index: 0,
            validation_error: None,
        }
    }

    pub fn character(&self) -> Character {
        Character::all()[self.character_index % Character::all().len()]
    }

    pub fn next_character(&mut self) {
        self.character_index = (self.character_index + 1) % Character::all().len();
    }

    pub fn push_char(&mut self, c: char) {
        if self.name_input.chars().count() < NAME_MAX_LENGTH && (c.is_alphanumeric() || c == ' ') {
            self.name_input.push(c);
            self.validation_error = None;
        }
    }

    pub fn pop_char(&mut self) {
        self.name_input.pop();
    }

    /// The trimmed name, or `None` (with an error set) when empty.
    pub fn submit(&mut self) -> Option<String> {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.validation_error = Some("Please enter your name!".to_string());
            return None;
        }
        Some(name)
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Name field
                Constraint::Length(2), // Token choice
                Constraint::Length(2), // Validation
                Constraint::Min(0),
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new(Span::styled(
            "Who is playing?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.name_input))
            .block(Block::default().borders(Borders::ALL).title(" Name "))
            .style(Style::default().fg(Color::White));
        frame.render_widget(input, chunks[1]);

        let character = self.character();
        let token_line = Line::from(vec![
            Span::raw("Token: "),
            Span::styled(
                format!("{} {}", character.token(), character.name()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Tab to change)", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(token_line), chunks[2]);

        if let Some(error) = &self.validation_error {
            let warning = Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(warning, chunks[3]);
        }

        let controls = Paragraph::new(Span::styled(
            "Enter: start  Esc: back",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[5]);
    }
}

impl Default for NameInputScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let mut screen = NameInputScreen::new();
        assert!(screen.submit().is_none());
        assert!(screen.validation_error.is_some());

        screen.name_input = "   ".to_string();
        assert!(screen.submit().is_none());
    }

    #[test]
    fn test_name_is_trimmed_on_submit() {
        let mut screen = NameInputScreen::new();
        screen.name_input = "  Ada  ".to_string();
        assert_eq!(screen.submit(), Some("Ada".to_string()));
    }

    #[test]
    fn test_name_length_cap() {
        let mut screen = NameInputScreen::new();
        for _ in 0..40 {
            screen.push_char('x');
        }
        assert_eq!(screen.name_input.chars().count(), NAME_MAX_LENGTH);
    }

    #[test]
    fn test_character_cycle_wraps() {
        let mut screen = NameInputScreen::new();
        let first = screen.character();
        for _ in 0..Character::all().len() {
            screen.next_character();
        }
        assert_eq!(screen.character(), first);
    }
}
