//! Per-run mutable state: the player and everything the session tracks.

use crate::constants::START_POSITION;
use crate::movement_logic::MovementPhase;
use std::collections::HashSet;

/// Player token choice. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Explorer,
    Scholar,
    Robot,
    Cat,
}

impl Character {
    pub fn all() -> [Character; 4] {
        [
            Character::Explorer,
            Character::Scholar,
            Character::Robot,
            Character::Cat,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Character::Explorer => "Explorer",
            Character::Scholar => "Scholar",
            Character::Robot => "Robot",
            Character::Cat => "Cat",
        }
    }

    /// Board glyph for the player token.
    pub fn token(self) -> &'static str {
        match self {
            Character::Explorer => "@",
            Character::Scholar => "&",
            Character::Robot => "#",
            Character::Cat => "%",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: (usize, usize),
    /// Raw score accumulator; may go negative. Clamping happens on read
    /// via `display_score` - the one place score leaves the accumulator.
    pub score: i32,
    pub name: String,
    pub character: Character,
}

impl PlayerState {
    /// The score as shown to the player, clamped at zero.
    pub fn display_score(&self) -> u32 {
        self.score.max(0) as u32
    }
}

/// State for one playthrough. Created at game start, mutated by the
/// movement/quiz/wheel logic, replaced wholesale on a new game.
#[derive(Debug, Clone)]
pub struct RunState {
    pub player: PlayerState,
    pub steps_remaining: u32,
    pub phase: MovementPhase,
    pub visited: HashSet<(usize, usize)>,
    pub used_questions: HashSet<usize>,
    /// Index of the question currently shown on a quiz tile.
    pub pending_question: Option<usize>,
    /// Unix seconds when the run started.
    pub started_at: i64,
    pub active: bool,
}

impl RunState {
    pub fn new(name: String, character: Character, now: i64) -> Self {
        let mut visited = HashSet::new();
        visited.insert(START_POSITION);

        Self {
            player: PlayerState {
                position: START_POSITION,
                score: 0,
                name,
                character,
            },
            steps_remaining: 0,
            phase: MovementPhase::Idle,
            visited,
            used_questions: HashSet::new(),
            pending_question: None,
            started_at: now,
            active: true,
        }
    }

    pub fn elapsed_seconds(&self, now: i64) -> i64 {
        (now - self.started_at).max(0)
    }
}
