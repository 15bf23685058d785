//! Movement engine: walks the player across the board one tile at a time.
//!
//! A dice roll grants a step budget. Each step picks the next tile from
//! the walkable in-bounds neighbors in a fixed priority order (right,
//! down, left, up), preferring tiles not yet visited this run. Landing on
//! a quiz or event tile suspends movement until the modal is resolved;
//! landing on the goal finishes the run; a dead end ends the roll early.

use crate::game_state::RunState;
use crate::maze::{Maze, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    Quiz,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPhase {
    Idle,
    Stepping,
    Suspended(SuspendReason),
    Finished,
}

/// Observable movement events, consumed by the UI for rendering/sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    Moved { to: (usize, usize), kind: TileKind },
    QuizTile,
    EventTile,
    ReachedGoal,
    DeadEnd,
}

/// Candidate directions in fixed priority order: right, down, left, up.
const STEP_PRIORITY: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walkable in-bounds neighbors of `from`, in priority order.
fn candidates(maze: &Maze, from: (usize, usize)) -> Vec<(usize, usize)> {
    let mut tiles = Vec::with_capacity(STEP_PRIORITY.len());
    for (dr, dc) in STEP_PRIORITY {
        let row = from.0 as i64 + dr;
        let col = from.1 as i64 + dc;
        if row < 0 || col < 0 {
            continue;
        }
        let (row, col) = (row as usize, col as usize);
        if let Some(kind) = maze.tile_at(row, col) {
            if kind.is_walkable() {
                tiles.push((row, col));
            }
        }
    }
    tiles
}

/// Next tile for one step: first unvisited candidate, else the first
/// candidate in priority order, else `None` (dead end).
fn pick_step(run: &RunState, maze: &Maze) -> Option<(usize, usize)> {
    let tiles = candidates(maze, run.player.position);
    tiles
        .iter()
        .find(|pos| !run.visited.contains(pos))
        .or_else(|| tiles.first())
        .copied()
}

/// Consume the step budget. Returns the events of this roll in order.
/// A zero budget or inactive run is a no-op.
pub fn advance(run: &mut RunState, maze: &Maze) -> Vec<MoveEvent> {
    let mut events = Vec::new();
    if !run.active || run.steps_remaining == 0 || run.phase != MovementPhase::Idle {
        return events;
    }

    run.phase = MovementPhase::Stepping;
    while run.steps_remaining > 0 {
        let Some(next) = pick_step(run, maze) else {
            // Dead end: the roll ends silently.
            run.steps_remaining = 0;
            run.phase = MovementPhase::Idle;
            events.push(MoveEvent::DeadEnd);
            return events;
        };

        run.player.position = next;
        run.visited.insert(next);
        run.steps_remaining -= 1;

        let kind = match maze.tile_at(next.0, next.1) {
            Some(kind) => kind,
            None => break,
        };
        events.push(MoveEvent::Moved { to: next, kind });

        match kind {
            TileKind::Quiz => {
                run.steps_remaining = 0;
                run.phase = MovementPhase::Suspended(SuspendReason::Quiz);
                events.push(MoveEvent::QuizTile);
                return events;
            }
            TileKind::Event => {
                run.steps_remaining = 0;
                run.phase = MovementPhase::Suspended(SuspendReason::Event);
                events.push(MoveEvent::EventTile);
                return events;
            }
            TileKind::Goal => {
                run.steps_remaining = 0;
                run.phase = MovementPhase::Finished;
                events.push(MoveEvent::ReachedGoal);
                return events;
            }
            TileKind::Path | TileKind::Wall => {}
        }
    }

    run.phase = MovementPhase::Idle;
    events
}

/// Return from a suspension. The player stays on the tile where movement
/// suspended; the tile is re-checked for the goal before the next roll is
/// allowed (a quiz/event tile can coincide with completion in degenerate
/// layouts).
pub fn resume(run: &mut RunState, maze: &Maze) -> Vec<MoveEvent> {
    let mut events = Vec::new();
    if !matches!(run.phase, MovementPhase::Suspended(_)) {
        return events;
    }

    run.phase = MovementPhase::Idle;
    let (row, col) = run.player.position;
    if maze.tile_at(row, col) == Some(TileKind::Goal) {
        run.phase = MovementPhase::Finished;
        events.push(MoveEvent::ReachedGoal);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Character;

    fn run_at_start() -> RunState {
        RunState::new("Mover".to_string(), Character::Explorer, 0)
    }

    /// Single open row: start, path, quiz, path, goal.
    fn corridor() -> Maze {
        Maze::from_codes(&[&[1, 1, 2, 1, 3]])
    }

    #[test]
    fn test_advance_consumes_at_most_budget() {
        let maze = Maze::from_codes(&[&[1, 1, 1, 1, 1, 1, 1, 1]]);
        let mut run = run_at_start();
        run.steps_remaining = 3;

        let events = advance(&mut run, &maze);

        assert_eq!(run.player.position, (0, 3));
        assert_eq!(run.steps_remaining, 0);
        assert_eq!(run.phase, MovementPhase::Idle);
        let moved = events
            .iter()
            .filter(|e| matches!(e, MoveEvent::Moved { .. }))
            .count();
        assert_eq!(moved, 3);
    }

    #[test]
    fn test_quiz_tile_suspends_and_zeroes_steps() {
        let mut run = run_at_start();
        run.steps_remaining = 4;

        let events = advance(&mut run, &corridor());

        assert_eq!(run.player.position, (0, 2));
        assert_eq!(run.steps_remaining, 0);
        assert_eq!(run.phase, MovementPhase::Suspended(SuspendReason::Quiz));
        assert_eq!(events.last(), Some(&MoveEvent::QuizTile));
    }

    #[test]
    fn test_event_tile_suspends() {
        let maze = Maze::from_codes(&[&[1, 4, 1]]);
        let mut run = run_at_start();
        run.steps_remaining = 2;

        advance(&mut run, &maze);

        assert_eq!(run.player.position, (0, 1));
        assert_eq!(run.phase, MovementPhase::Suspended(SuspendReason::Event));
    }

    #[test]
    fn test_goal_finishes_run() {
        let maze = Maze::from_codes(&[&[1, 1, 3]]);
        let mut run = run_at_start();
        run.steps_remaining = 6;

        let events = advance(&mut run, &maze);

        assert_eq!(run.player.position, (0, 2));
        assert_eq!(run.phase, MovementPhase::Finished);
        assert_eq!(events.last(), Some(&MoveEvent::ReachedGoal));
    }

    #[test]
    fn test_dead_end_halts_roll() {
        // Start tile boxed in by walls.
        let maze = Maze::from_codes(&[&[1, 0], &[0, 0]]);
        let mut run = run_at_start();
        run.steps_remaining = 5;

        let events = advance(&mut run, &maze);

        assert_eq!(run.player.position, (0, 0));
        assert_eq!(run.steps_remaining, 0);
        assert_eq!(run.phase, MovementPhase::Idle);
        assert_eq!(events, vec![MoveEvent::DeadEnd]);
    }

    #[test]
    fn test_never_steps_onto_wall() {
        let maze = Maze::from_codes(&[
            &[1, 0, 1, 1],
            &[1, 1, 1, 0],
            &[0, 1, 0, 1],
        ]);
        let mut run = run_at_start();
        run.steps_remaining = 6;

        let events = advance(&mut run, &maze);

        for event in &events {
            if let MoveEvent::Moved { to, kind } = event {
                assert_ne!(*kind, TileKind::Wall);
                assert!(maze.in_bounds(to.0, to.1));
            }
        }
    }

    #[test]
    fn test_prefers_unvisited_tiles() {
        // Start between two paths: right is priority, but once right is
        // visited the walk must branch down instead of bouncing back.
        let maze = Maze::from_codes(&[&[1, 1], &[1, 1]]);
        let mut run = run_at_start();
        run.steps_remaining = 3;

        advance(&mut run, &maze);

        // right (0,1) -> down (1,1) -> left (1,0): all four tiles visited
        assert_eq!(run.visited.len(), 4);
        assert_eq!(run.player.position, (1, 0));
    }

    #[test]
    fn test_all_visited_takes_first_priority_candidate() {
        let maze = Maze::from_codes(&[&[1, 1]]);
        let mut run = run_at_start();
        run.steps_remaining = 3;

        advance(&mut run, &maze);

        // Bounces right/left once everything is visited; 3 steps end on (0,1).
        assert_eq!(run.player.position, (0, 1));
        assert_eq!(run.visited.len(), 2);
    }

    #[test]
    fn test_visited_only_grows() {
        let maze = Maze::standard();
        let mut run = run_at_start();
        let mut previous = run.visited.len();

        for steps in [3u32, 5, 2, 6, 4] {
            if run.phase == MovementPhase::Suspended(SuspendReason::Quiz)
                || run.phase == MovementPhase::Suspended(SuspendReason::Event)
            {
                resume(&mut run, &maze);
            }
            if run.phase != MovementPhase::Idle {
                break;
            }
            run.steps_remaining = steps;
            advance(&mut run, &maze);
            assert!(run.visited.len() >= previous);
            previous = run.visited.len();
        }
    }

    #[test]
    fn test_resume_stays_on_tile_and_returns_to_idle() {
        let mut run = run_at_start();
        run.steps_remaining = 4;
        advance(&mut run, &corridor());
        assert_eq!(run.phase, MovementPhase::Suspended(SuspendReason::Quiz));

        let events = resume(&mut run, &corridor());

        assert!(events.is_empty());
        assert_eq!(run.player.position, (0, 2));
        assert_eq!(run.phase, MovementPhase::Idle);
    }

    #[test]
    fn test_resume_outside_suspension_is_noop() {
        let mut run = run_at_start();
        let events = resume(&mut run, &corridor());
        assert!(events.is_empty());
        assert_eq!(run.phase, MovementPhase::Idle);
    }

    #[test]
    fn test_zero_budget_is_noop() {
        let mut run = run_at_start();
        let events = advance(&mut run, &corridor());
        assert!(events.is_empty());
        assert_eq!(run.player.position, (0, 0));
    }
}
