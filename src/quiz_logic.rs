//! Question selection and answer evaluation.

use crate::constants::{CORRECT_ANSWER_POINTS, WRONG_ANSWER_POINTS};
use crate::questions::{Question, QuestionBank};
use rand::Rng;
use std::collections::HashSet;

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: bool,
    pub score_delta: i32,
    pub explanation: String,
}

/// Pick a random question index that has not been used this run.
/// Once every index has been used the pool recycles: `used` is cleared
/// and selection starts over. Returns `None` only for an empty bank.
/// The chosen index is recorded in `used`.
pub fn select_question(
    bank: &QuestionBank,
    used: &mut HashSet<usize>,
    rng: &mut impl Rng,
) -> Option<usize> {
    if bank.is_empty() {
        return None;
    }

    if used.len() >= bank.len() {
        used.clear();
    }

    let available: Vec<usize> = (0..bank.len()).filter(|i| !used.contains(i)).collect();
    let index = available[rng.gen_range(0..available.len())];
    used.insert(index);
    Some(index)
}

/// Evaluate one answer submission. The explanation is returned on both
/// paths so the player always sees why the correct answer is right.
pub fn evaluate(question: &Question, selected: usize) -> QuizOutcome {
    let correct = selected == question.correct;
    QuizOutcome {
        correct,
        score_delta: if correct {
            CORRECT_ANSWER_POINTS
        } else {
            WRONG_ANSWER_POINTS
        },
        explanation: question.explanation.clone(),
    }
}
