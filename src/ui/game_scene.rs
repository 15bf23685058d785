//! The main board scene: maze grid on the left, run info on the right.

use crate::game_logic::format_elapsed;
use crate::game_state::RunState;
use crate::maze::{Maze, TileKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    run: &RunState,
    maze: &Maze,
    now: i64,
    last_roll: Option<u32>,
    status: &str,
) {
    frame.render_widget(Clear, area);

    // Split: grid on left, info panel on right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(30)])
        .split(area);

    render_grid(frame, chunks[0], run, maze);
    render_info_panel(frame, chunks[1], run, now, last_roll, status);
}

fn render_grid(frame: &mut Frame, area: Rect, run: &RunState, maze: &Maze) {
    let block = Block::default()
        .title(" Quiz Maze ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each tile is 2 chars wide, 1 char tall; center the grid
    let grid_width = (maze.cols() * 2) as u16;
    let grid_height = maze.rows() as u16;
    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    for row in 0..maze.rows() {
        let mut spans = Vec::new();

        for col in 0..maze.cols() {
            let (text, color) = if run.player.position == (row, col) {
                (format!("{} ", run.player.character.token()), Color::White)
            } else {
                let (cell, color) = tile_cell(run, maze, row, col);
                (cell.to_string(), color)
            };

            let mut style = Style::default().fg(color);
            if run.player.position == (row, col) {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(text, style));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + row as u16, grid_width.min(inner.width), 1),
        );
    }
}

fn tile_cell(run: &RunState, maze: &Maze, row: usize, col: usize) -> (&'static str, Color) {
    match maze.tile_at(row, col) {
        Some(TileKind::Wall) => ("##", Color::DarkGray),
        Some(TileKind::Path) => {
            if run.visited.contains(&(row, col)) {
                (". ", Color::Gray)
            } else {
                ("  ", Color::Reset)
            }
        }
        Some(TileKind::Quiz) => ("? ", Color::Cyan),
        Some(TileKind::Event) => ("* ", Color::Magenta),
        Some(TileKind::Goal) => ("G ", Color::Green),
        None => ("  ", Color::Reset),
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    run: &RunState,
    now: i64,
    last_roll: Option<u32>,
    status: &str,
) {
    let block = Block::default()
        .title(" Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let roll_text = match last_roll {
        Some(face) => format!("Dice: {}", face),
        None => "Dice: -".to_string(),
    };

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            run.player.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Token: {}", run.player.character.name())),
        Line::from(""),
        Line::from(format!("Score: {}", run.player.display_score())),
        Line::from(format!("Time:  {}", format_elapsed(run.elapsed_seconds(now)))),
        Line::from(roll_text),
        Line::from(format!("Steps left: {}", run.steps_remaining)),
        Line::from(""),
        Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Space/r: roll  Esc: menu",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "?: quiz  *: wheel  G: goal",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
