//! Validation of AI-generated quests and flashcards.
//!
//! The text-completion service is asked for JSON but may wrap it in a
//! markdown code fence, omit fields, or return out-of-range values. Nothing
//! from it reaches the scorer until it has passed through here.
//!
//! # Quest format
//! ```json
//! {
//!   "title": "Cell Biology",
//!   "description": "Organelles and their jobs",
//!   "subject": "Biology",
//!   "difficulty": "medium",
//!   "xpReward": 50,
//!   "questions": [
//!     {
//!       "question": "Which organelle produces ATP?",
//!       "options": ["Nucleus", "Mitochondria", "Ribosome", "Golgi"],
//!       "correctAnswer": 1,
//!       "explanation": "Mitochondria run cellular respiration."
//!     }
//!   ]
//! }
//! ```

use crate::error::PayloadError;
use crate::scoring::AnswerKey;
use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;
/// Difficulty hint stored when the AI leaves it out.
pub const DEFAULT_FLASHCARD_DIFFICULTY: u8 = 3;

/// Result type alias using PayloadError.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Coarse quest difficulty chosen by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestDifficulty {
    Easy,
    Medium,
    Hard,
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
    pub explanation: String,
}

impl AnswerKey for GeneratedQuestion {
    fn correct_answer_index(&self) -> u32 {
        self.correct_answer
    }
}

/// A validated quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuest {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty: QuestDifficulty,
    pub xp_reward: u32,
    pub questions: Vec<GeneratedQuestion>,
}

/// A validated flashcard. `difficulty` is the generator's 1 (easiest) to
/// 5 (hardest) hint, not a review rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFlashcard {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    subject: String,
    difficulty: QuestDifficulty,
    xp_reward: i64,
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: i64,
    #[serde(default)]
    explanation: String,
}

#[derive(Deserialize)]
struct RawFlashcards {
    flashcards: Vec<RawFlashcard>,
}

#[derive(Deserialize)]
struct RawFlashcard {
    question: String,
    answer: String,
    difficulty: Option<i64>,
}

/// Parse and validate a generated quest.
pub fn parse_generated_quest(text: &str) -> Result<GeneratedQuest> {
    let raw: RawQuest = serde_json::from_str(strip_code_fences(text))?;

    let title = non_empty(raw.title, "title")?;
    let xp_reward = u32::try_from(raw.xp_reward)
        .map_err(|_| PayloadError::InvalidReward(raw.xp_reward))?;

    let count = raw.questions.len();
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
        return Err(PayloadError::QuestionCount {
            min: MIN_QUESTIONS,
            max: MAX_QUESTIONS,
            count,
        });
    }

    let questions = raw
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| validate_question(index, q))
        .collect::<Result<Vec<_>>>()?;

    Ok(GeneratedQuest {
        title,
        description: raw.description.trim().to_string(),
        subject: raw.subject.trim().to_string(),
        difficulty: raw.difficulty,
        xp_reward,
        questions,
    })
}

fn validate_question(index: usize, raw: RawQuestion) -> Result<GeneratedQuestion> {
    let question = non_empty(raw.question, &format!("questions[{index}].question"))?;

    if raw.options.len() != OPTIONS_PER_QUESTION {
        return Err(PayloadError::OptionCount {
            index,
            count: raw.options.len(),
            expected: OPTIONS_PER_QUESTION,
        });
    }
    let options = raw
        .options
        .into_iter()
        .enumerate()
        .map(|(i, option)| non_empty(option, &format!("questions[{index}].options[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    if !(0..OPTIONS_PER_QUESTION as i64).contains(&raw.correct_answer) {
        return Err(PayloadError::AnswerOutOfRange {
            index,
            value: raw.correct_answer,
        });
    }

    Ok(GeneratedQuestion {
        question,
        options,
        correct_answer: raw.correct_answer as u32,
        explanation: raw.explanation.trim().to_string(),
    })
}

/// Parse and validate a batch of generated flashcards.
pub fn parse_generated_flashcards(text: &str) -> Result<Vec<GeneratedFlashcard>> {
    let raw: RawFlashcards = serde_json::from_str(strip_code_fences(text))?;
    if raw.flashcards.is_empty() {
        return Err(PayloadError::NoFlashcards);
    }

    raw.flashcards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let difficulty = match card.difficulty {
                None => DEFAULT_FLASHCARD_DIFFICULTY,
                Some(value @ 1..=5) => value as u8,
                Some(value) => return Err(PayloadError::FlashcardDifficulty { index, value }),
            };
            Ok(GeneratedFlashcard {
                question: non_empty(card.question, &format!("flashcards[{index}].question"))?,
                answer: non_empty(card.answer, &format!("flashcards[{index}].answer"))?,
                difficulty,
            })
        })
        .collect()
}

/// Remove a surrounding ```` ```json ```` or ```` ``` ```` fence.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn non_empty(value: String, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PayloadError::EmptyField(field.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}
