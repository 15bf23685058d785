//! Session controller: the commands a run is driven by.
//!
//! The presentation layer binds UI events to these functions; no game
//! rules live in the UI. Every command takes the explicitly owned
//! `RunState` and is guarded - a command that does not apply right now is
//! a silent no-op (`None`), never an error.

use crate::achievements::{tier_for_score, AchievementTier};
use crate::constants::{ANSWERS_PER_QUESTION, FINAL_SCORE_MULTIPLIER};
use crate::dice;
use crate::game_state::{Character, RunState};
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore};
use crate::maze::Maze;
use crate::movement_logic::{self, MoveEvent, MovementPhase, SuspendReason};
use crate::questions::{Question, QuestionBank};
use crate::quiz_logic::{self, QuizOutcome};
use crate::wheel::{self, WheelOutcome};
use rand::Rng;

/// Outcome of a dice roll: the face and the movement it caused.
#[derive(Debug, Clone)]
pub struct RollResult {
    pub steps: u32,
    pub events: Vec<MoveEvent>,
}

/// Everything the result screen and leaderboard need from a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub final_score: i64,
    pub raw_score: u32,
    pub elapsed_seconds: i64,
    pub time: String,
    pub tier: AchievementTier,
    pub is_top_ten: bool,
}

/// Begin a fresh run.
pub fn start_run(name: String, character: Character, now: i64) -> RunState {
    RunState::new(name, character, now)
}

/// Roll the dice and walk. No-op while the run is inactive, steps are
/// still pending, or movement is suspended/finished.
pub fn roll_requested(run: &mut RunState, maze: &Maze, rng: &mut impl Rng) -> Option<RollResult> {
    if !run.active || run.steps_remaining > 0 || run.phase != MovementPhase::Idle {
        return None;
    }

    let steps = dice::roll(rng);
    run.steps_remaining = steps;
    let events = movement_logic::advance(run, maze);
    Some(RollResult { steps, events })
}

/// Select the question for the quiz tile the run is suspended on.
/// With an empty bank the condition is reported and movement resumes
/// without penalty; the run never crashes over missing questions.
pub fn quiz_presented<'a>(
    run: &mut RunState,
    maze: &Maze,
    bank: &'a QuestionBank,
    rng: &mut impl Rng,
) -> Option<&'a Question> {
    if run.phase != MovementPhase::Suspended(SuspendReason::Quiz) {
        return None;
    }
    if run.pending_question.is_some() {
        // Exactly one question per quiz tile visit
        return run.pending_question.and_then(|index| bank.get(index));
    }

    match quiz_logic::select_question(bank, &mut run.used_questions, rng) {
        Some(index) => {
            run.pending_question = Some(index);
            bank.get(index)
        }
        None => {
            eprintln!("question bank is empty, skipping quiz tile");
            movement_logic::resume(run, maze);
            None
        }
    }
}

/// Evaluate the answer for the pending question, apply the score delta
/// and resume movement. Out-of-range answer indices and calls outside a
/// quiz suspension are silent no-ops. Exactly one submission per visit.
pub fn answer_selected(
    run: &mut RunState,
    maze: &Maze,
    bank: &QuestionBank,
    answer: usize,
) -> Option<QuizOutcome> {
    if run.phase != MovementPhase::Suspended(SuspendReason::Quiz) {
        return None;
    }
    if answer >= ANSWERS_PER_QUESTION {
        return None;
    }
    let question = bank.get(run.pending_question?)?;

    let outcome = quiz_logic::evaluate(question, answer);
    run.player.score += outcome.score_delta;
    run.pending_question = None;
    movement_logic::resume(run, maze);
    Some(outcome)
}

/// Spin the wheel for the event tile the run is suspended on, apply the
/// delta and resume movement.
pub fn wheel_spun(
    run: &mut RunState,
    maze: &Maze,
    rng: &mut impl Rng,
) -> Option<&'static WheelOutcome> {
    if run.phase != MovementPhase::Suspended(SuspendReason::Event) {
        return None;
    }

    let outcome = wheel::spin(rng);
    run.player.score += outcome.delta;
    movement_logic::resume(run, maze);
    Some(outcome)
}

/// Finalize the run into a leaderboard entry.
pub fn finish_run(run: &mut RunState, store: &mut LeaderboardStore, now: i64) -> RunSummary {
    run.active = false;

    let elapsed = run.elapsed_seconds(now);
    let raw_score = run.player.display_score();
    let final_score = raw_score as i64 * FINAL_SCORE_MULTIPLIER - elapsed;
    let time = format_elapsed(elapsed);
    let tier = tier_for_score(raw_score);

    let is_top_ten = store.insert(LeaderboardEntry {
        name: run.player.name.clone(),
        score: final_score,
        raw_score,
        time: time.clone(),
        time_in_seconds: elapsed,
        date: date_string(now),
    });

    RunSummary {
        final_score,
        raw_score,
        elapsed_seconds: elapsed,
        time,
        tier,
        is_top_ten,
    }
}

/// Elapsed seconds as "M:SS".
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn date_string(now: i64) -> String {
    chrono::DateTime::from_timestamp(now, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
