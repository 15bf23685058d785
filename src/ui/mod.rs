//! Terminal scenes. Rendering only - all game rules live in the logic
//! modules; the binary binds key events to controller commands.

pub mod game_scene;
pub mod leaderboard_scene;
pub mod menu_scene;
pub mod name_input_scene;
pub mod quiz_scene;
pub mod result_scene;
pub mod wheel_scene;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A centered rect of the given size, clamped to the available area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);

    h_chunks[1]
}
