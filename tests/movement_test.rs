//! Integration test: movement engine properties
//!
//! Exercises the step-budget walk over the standard board and custom
//! layouts: budget consumption, wall avoidance, dead ends, and the
//! terminal states a roll can end in.

use quizmaze::game_state::{Character, RunState};
use quizmaze::maze::{Maze, TileKind};
use quizmaze::movement_logic::{advance, resume, MoveEvent, MovementPhase};

fn fresh_run() -> RunState {
    RunState::new("Walker".to_string(), Character::Explorer, 0)
}

// =============================================================================
// Roll termination
// =============================================================================

#[test]
fn test_every_budget_terminates_in_valid_phase() {
    for steps in 1..=6u32 {
        let maze = Maze::standard();
        let mut run = fresh_run();
        run.steps_remaining = steps;

        let events = advance(&mut run, &maze);

        assert_eq!(run.steps_remaining, 0, "budget {} not fully consumed", steps);
        assert!(
            matches!(
                run.phase,
                MovementPhase::Idle | MovementPhase::Suspended(_) | MovementPhase::Finished
            ),
            "budget {} ended in {:?}",
            steps,
            run.phase
        );

        let moved = events
            .iter()
            .filter(|e| matches!(e, MoveEvent::Moved { .. }))
            .count();
        assert!(moved <= steps as usize, "budget {} produced {} moves", steps, moved);
    }
}

#[test]
fn test_movement_stays_on_walkable_tiles() {
    let maze = Maze::standard();
    let mut run = fresh_run();

    for _ in 0..50 {
        if run.phase != MovementPhase::Idle {
            resume(&mut run, &maze);
        }
        if run.phase != MovementPhase::Idle {
            break;
        }
        run.steps_remaining = 6;
        advance(&mut run, &maze);

        let (row, col) = run.player.position;
        let kind = maze.tile_at(row, col).expect("player is in bounds");
        assert!(kind.is_walkable());
    }
}

#[test]
fn test_visited_set_is_monotonic_across_rolls() {
    let maze = Maze::standard();
    let mut run = fresh_run();
    let mut previous = run.visited.len();

    for _ in 0..30 {
        if run.phase != MovementPhase::Idle {
            resume(&mut run, &maze);
        }
        if run.phase != MovementPhase::Idle {
            break;
        }
        run.steps_remaining = 4;
        advance(&mut run, &maze);

        assert!(run.visited.len() >= previous, "visited set shrank");
        previous = run.visited.len();
    }
}

// =============================================================================
// Special tiles
// =============================================================================

#[test]
fn test_quiz_tile_stops_mid_budget() {
    // start, quiz, goal in a row: a roll of 2 must stop on the quiz tile
    let maze = Maze::from_codes(&[&[1, 2, 3]]);
    let mut run = fresh_run();
    run.steps_remaining = 2;

    let events = advance(&mut run, &maze);

    assert_eq!(run.player.position, (0, 1));
    assert_eq!(run.steps_remaining, 0);
    assert!(matches!(run.phase, MovementPhase::Suspended(_)));
    assert!(events.contains(&MoveEvent::QuizTile));
    // The goal was not reached this roll
    assert!(!events.contains(&MoveEvent::ReachedGoal));
}

#[test]
fn test_goal_after_resume_on_next_roll() {
    let maze = Maze::from_codes(&[&[1, 2, 3]]);
    let mut run = fresh_run();
    run.steps_remaining = 2;
    advance(&mut run, &maze);

    // Resolution leaves the player on the quiz tile
    resume(&mut run, &maze);
    assert_eq!(run.player.position, (0, 1));
    assert_eq!(run.phase, MovementPhase::Idle);

    // Next roll walks onto the goal
    run.steps_remaining = 1;
    let events = advance(&mut run, &maze);
    assert_eq!(run.player.position, (0, 2));
    assert_eq!(run.phase, MovementPhase::Finished);
    assert_eq!(events.last(), Some(&MoveEvent::ReachedGoal));
}

#[test]
fn test_dead_end_ends_roll_without_error() {
    let maze = Maze::from_codes(&[&[1, 1, 0, 3]]);
    let mut run = fresh_run();

    // First roll runs into the dead end at (0,1): after stepping right the
    // only candidate is back left, and once both tiles are visited the walk
    // bounces; the wall at (0,2) is never crossed.
    run.steps_remaining = 6;
    advance(&mut run, &maze);

    assert_ne!(run.player.position, (0, 3), "goal is unreachable across the wall");
    assert_eq!(run.steps_remaining, 0);
    assert_eq!(run.phase, MovementPhase::Idle);
}

#[test]
fn test_boxed_in_start_reports_dead_end() {
    let maze = Maze::from_codes(&[&[1, 0], &[0, 3]]);
    let mut run = fresh_run();
    run.steps_remaining = 3;

    let events = advance(&mut run, &maze);

    assert_eq!(events, vec![MoveEvent::DeadEnd]);
    assert_eq!(run.player.position, (0, 0));
    assert_eq!(run.phase, MovementPhase::Idle);
}

#[test]
fn test_moved_events_report_tile_kinds() {
    let maze = Maze::from_codes(&[&[1, 1, 4]]);
    let mut run = fresh_run();
    run.steps_remaining = 2;

    let events = advance(&mut run, &maze);

    assert_eq!(
        events,
        vec![
            MoveEvent::Moved {
                to: (0, 1),
                kind: TileKind::Path
            },
            MoveEvent::Moved {
                to: (0, 2),
                kind: TileKind::Event
            },
            MoveEvent::EventTile,
        ]
    );
}
