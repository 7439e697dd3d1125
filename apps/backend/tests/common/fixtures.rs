//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Correct option index of each fixture quest question, in order.
pub const ANSWER_KEY: [u32; 4] = [1, 0, 3, 2];

/// A four-question quest as the AI service would return it.
pub fn quest_json(xp_reward: u32) -> String {
    let questions: Vec<Value> = ANSWER_KEY
        .iter()
        .enumerate()
        .map(|(i, correct)| {
            json!({
                "question": format!("Question {}?", i + 1),
                "options": ["Option A", "Option B", "Option C", "Option D"],
                "correctAnswer": correct,
                "explanation": format!("Explanation {}.", i + 1)
            })
        })
        .collect();

    json!({
        "title": "Photosynthesis",
        "description": "Light and dark reactions",
        "subject": "Biology",
        "difficulty": "easy",
        "xpReward": xp_reward,
        "questions": questions
    })
    .to_string()
}

/// Same quest wrapped in a markdown fence.
pub fn fenced_quest_json(xp_reward: u32) -> String {
    format!("```json\n{}\n```", quest_json(xp_reward))
}

/// All answers correct.
pub fn perfect_answers() -> Value {
    json!(ANSWER_KEY)
}

/// First two correct, last two wrong.
pub fn half_answers() -> Value {
    json!([ANSWER_KEY[0], ANSWER_KEY[1], 9, 9])
}

/// A flashcard batch as the AI service would return it.
pub fn flashcards_json(count: usize) -> String {
    let cards: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "question": format!("Term {}?", i + 1),
                "answer": format!("Definition {}.", i + 1),
                "difficulty": (i % 5) + 1
            })
        })
        .collect();
    json!({ "flashcards": cards }).to_string()
}
