//! Quiz scoring and XP awards.

use crate::error::{InvalidArgument, Result};
use crate::types::QuizAttempt;
use serde_json::Value;
use tracing::debug;

/// A question that knows which option is correct.
pub trait AnswerKey {
    fn correct_answer_index(&self) -> u32;
}

impl AnswerKey for u32 {
    fn correct_answer_index(&self) -> u32 {
        *self
    }
}

/// Score submitted answers against the answer key.
///
/// `submitted[i]` answers `questions[i]`. Missing or `None` entries count as
/// wrong, extra entries are ignored, and an out-of-range index never matches.
pub fn score<Q: AnswerKey>(
    questions: &[Q],
    submitted: &[Option<u32>],
    max_xp: u32,
) -> Result<QuizAttempt> {
    if questions.is_empty() {
        return Err(InvalidArgument::EmptyQuiz.into());
    }

    let correct_count = questions
        .iter()
        .enumerate()
        .filter(|(i, question)| {
            submitted.get(*i).copied().flatten() == Some(question.correct_answer_index())
        })
        .count();

    let total = questions.len() as u64;
    let correct = correct_count as u64;
    let score_percent = round_half_up(correct * 100, total);
    let xp_earned = round_half_up(score_percent * u64::from(max_xp), 100);

    debug!(correct, total, score_percent, xp_earned, "scored quiz");

    Ok(QuizAttempt {
        total_questions: saturate(total),
        correct_count: saturate(correct),
        score_percent: saturate(score_percent),
        max_xp,
        xp_earned: saturate(xp_earned),
    })
}

/// `numerator / denominator` rounded to the nearest integer, halves up.
/// Exact, so 12.5 always becomes 13.
pub fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Read a raw JSON answers array without coercion.
///
/// Only non-negative JSON integers count as answers; `"1"`, `1.0`, `null`
/// and anything else become `None`. A non-array value yields no answers.
pub fn answers_from_json(value: &Value) -> Vec<Option<u32>> {
    match value.as_array() {
        Some(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u32::try_from(n).ok()))
            .collect(),
        None => Vec::new(),
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
