//! Core progression library shared by the StudyQuest services.
//!
//! Provides:
//! - Flashcard review scheduling (interval doubling with a cap)
//! - Quiz scoring and proportional XP awards
//! - XP levels, ranks and leaderboard ordering
//! - Study streaks and unlock rules
//! - Validation of AI-generated quests and flashcards
//!
//! Everything here is pure: callers pass in the current date and the
//! records they loaded, and persist whatever comes back. Two concurrent
//! updates to the same stored card or learner must be serialised by the
//! caller's store, otherwise one of them is lost.

pub mod algorithm;
pub mod error;
pub mod payload;
pub mod progression;
pub mod rewards;
pub mod scoring;
pub mod streak;
pub mod types;

pub use algorithm::{due_cards, is_due, IntervalDoubling, ReviewScheduler};
pub use error::{CoreError, InvalidArgument, PayloadError, Result, RewardError};
pub use payload::{
    parse_generated_flashcards, parse_generated_quest, GeneratedFlashcard, GeneratedQuest,
    GeneratedQuestion, QuestDifficulty,
};
pub use progression::{compute_rank, Ledger};
pub use rewards::{
    newly_unlocked, Achievement, AchievementRequirement, AvatarRequirement, ProgressSnapshot,
};
pub use scoring::{answers_from_json, score, AnswerKey};
pub use streak::StudyStreak;
pub use types::{
    Difficulty, LeaderboardEntry, LearnerProgress, LevelProgress, ProgressionSettings,
    QuizAttempt, RankedEntry, ReviewCard, ScheduleSettings,
};
