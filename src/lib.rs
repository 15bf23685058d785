//! Quiz Maze - Terminal Board Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod achievements;
pub mod build_info;
pub mod constants;
pub mod dice;
pub mod game_logic;
pub mod game_state;
pub mod leaderboard;
pub mod maze;
pub mod movement_logic;
pub mod question_generation;
pub mod questions;
pub mod quiz_logic;
pub mod wheel;

// UI module is exposed for the binary only; it is tightly coupled to the terminal
pub mod ui;
