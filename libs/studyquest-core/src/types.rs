//! Core types for the progression engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, InvalidArgument, Result};

/// Self-reported recall difficulty for a flashcard.
/// 1 is the hardest, 5 the easiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const HARDEST: Difficulty = Difficulty(1);
    pub const NEUTRAL: Difficulty = Difficulty(3);
    pub const EASIEST: Difficulty = Difficulty(5);

    /// Validate a raw rating.
    pub fn new(value: i64) -> Result<Self> {
        if (1..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidArgument::Difficulty(value).into())
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Ratings 1 and 2.
    pub fn is_hard(self) -> bool {
        self.0 <= 2
    }

    /// Ratings 4 and 5.
    pub fn is_easy(self) -> bool {
        self.0 >= 4
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// Spaced repetition state of a single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCard {
    pub interval_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
    pub times_reviewed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_difficulty: Option<Difficulty>,
}

impl Default for ReviewCard {
    fn default() -> Self {
        Self {
            interval_days: 1,
            next_review_date: None,
            times_reviewed: 0,
            last_difficulty: None,
        }
    }
}

impl AsRef<ReviewCard> for ReviewCard {
    fn as_ref(&self) -> &ReviewCard {
        self
    }
}

/// A scored quiz submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub total_questions: u32,
    pub correct_count: u32,
    pub score_percent: u32,
    pub max_xp: u32,
    pub xp_earned: u32,
}

/// Accumulated experience of one learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProgress {
    pub xp_total: u64,
    pub level: u32,
}

impl Default for LearnerProgress {
    fn default() -> Self {
        Self {
            xp_total: 0,
            level: 1,
        }
    }
}

/// Where a learner sits inside their current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp_into_level: u64,
    pub xp_for_next_level: u64,
}

/// One learner's row as fetched for the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub learner_id: Uuid,
    pub display_name: String,
    pub xp_total: u64,
    pub joined_at: DateTime<Utc>,
}

/// A leaderboard row with its computed rank and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub level: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// Review scheduler parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub initial_interval_days: u32,
    pub neutral_floor_days: u32,
    pub max_interval_days: u32,
    pub growth_factor: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            initial_interval_days: 1,
            neutral_floor_days: 3,
            max_interval_days: 30,
            growth_factor: 2,
        }
    }
}

impl ScheduleSettings {
    /// Check that the intervals are ordered and the cap is reachable.
    pub fn validate(&self) -> Result<()> {
        if self.initial_interval_days == 0 {
            return Err(settings_error("initial interval must be at least 1 day"));
        }
        if self.neutral_floor_days < self.initial_interval_days {
            return Err(settings_error(
                "neutral floor must not be below the initial interval",
            ));
        }
        if self.max_interval_days < self.neutral_floor_days {
            return Err(settings_error(
                "maximum interval must not be below the neutral floor",
            ));
        }
        if self.growth_factor == 0 {
            return Err(settings_error("growth factor must be at least 1"));
        }
        Ok(())
    }
}

/// Engine-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSettings {
    pub schedule: ScheduleSettings,
    pub xp_per_level: u64,
    pub leaderboard_limit: usize,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            schedule: ScheduleSettings::default(),
            xp_per_level: 100,
            leaderboard_limit: 100,
        }
    }
}

impl ProgressionSettings {
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        if self.xp_per_level == 0 {
            return Err(settings_error("xp per level must be positive"));
        }
        Ok(())
    }
}

fn settings_error(message: &str) -> CoreError {
    InvalidArgument::Settings(message.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(Difficulty::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn difficulty_rejects_out_of_range() {
        for value in [-1, 0, 6, 100] {
            assert_eq!(
                Difficulty::new(value),
                Err(CoreError::InvalidArgument(InvalidArgument::Difficulty(value)))
            );
        }
    }

    #[test]
    fn difficulty_deserializes_with_validation() {
        let ok: Difficulty = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Difficulty>("7").is_err());
    }

    #[test]
    fn new_review_card_defaults() {
        let card = ReviewCard::default();
        assert_eq!(card.interval_days, 1);
        assert_eq!(card.times_reviewed, 0);
        assert!(card.next_review_date.is_none());
        assert!(card.last_difficulty.is_none());
    }

    #[test]
    fn default_settings_are_valid() {
        assert!(ProgressionSettings::default().validate().is_ok());
    }

    #[test]
    fn settings_reject_floor_above_cap() {
        let settings = ScheduleSettings {
            neutral_floor_days: 40,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidArgument(InvalidArgument::Settings(_)))
        ));
    }

    #[test]
    fn settings_reject_zero_xp_per_level() {
        let settings = ProgressionSettings {
            xp_per_level: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
