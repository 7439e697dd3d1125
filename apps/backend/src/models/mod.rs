//! Stored records and service result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from studyquest-core
pub use studyquest_core::{
    GeneratedQuest, LeaderboardEntry, LearnerProgress, LevelProgress, ProgressSnapshot,
    QuizAttempt, RankedEntry, ReviewCard, StudyStreak,
};

// === Stored Entity Types ===

/// Flashcard stored in a deck, with its review state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCard {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Generator's 1-5 hint, kept apart from review ratings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_difficulty: Option<u8>,
    pub review: ReviewCard,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AsRef<ReviewCard> for StoredCard {
    fn as_ref(&self) -> &ReviewCard {
        &self.review
    }
}

/// Learner profile with progression state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerRecord {
    pub id: Uuid,
    pub display_name: String,
    pub progress: LearnerProgress,
    pub streak: StudyStreak,
    pub quests_completed: u32,
    /// Quests submitted at least once; guarded by `version` like the rest.
    #[serde(default)]
    pub completed_quests: Vec<Uuid>,
    pub unlocked_achievements: Vec<String>,
    pub version: u64,
    pub joined_at: DateTime<Utc>,
}

impl LearnerRecord {
    /// Numbers that achievement rules are evaluated against
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            xp_total: self.progress.xp_total,
            level: self.progress.level,
            streak_days: self.streak.days,
            quests_completed: self.quests_completed,
        }
    }

    /// Whether `quest_id` has been submitted before.
    pub fn has_completed(&self, quest_id: Uuid) -> bool {
        self.completed_quests.contains(&quest_id)
    }

    /// Row used for leaderboard listings
    pub fn to_leaderboard_entry(&self) -> LeaderboardEntry {
        LeaderboardEntry {
            learner_id: self.id,
            display_name: self.display_name.clone(),
            xp_total: self.progress.xp_total,
            joined_at: self.joined_at,
        }
    }
}

/// Validated quest available to learners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuest {
    pub id: Uuid,
    pub quest: GeneratedQuest,
    pub created_at: DateTime<Utc>,
}

/// Completed quest submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub learner_id: Uuid,
    pub quest_id: Uuid,
    pub attempt: QuizAttempt,
    pub answers: Vec<Option<u32>>,
    pub completed_at: DateTime<Utc>,
}

// === Service Result Types ===

/// Result of submitting a quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestOutcome {
    pub score: u32,
    pub correct_count: u32,
    pub total_questions: u32,
    pub xp_earned: u32,
    pub xp_total: u64,
    pub level: u32,
    pub leveled_up: bool,
    pub streak_days: u32,
    pub unlocked_achievements: Vec<String>,
}

/// Leaderboard listing with the requesting learner's standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardView {
    pub entries: Vec<RankedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learner_rank: Option<u32>,
}

/// Profile summary for a single learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub learner_id: Uuid,
    pub display_name: String,
    pub xp_total: u64,
    pub level: LevelProgress,
    pub streak_days: u32,
    pub rank: u32,
}
