//! Avatar and achievement unlock rules.

use crate::error::RewardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Requirement attached to a selectable avatar: `"default"` or `"level_<n>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarRequirement {
    Default,
    Level(u32),
}

impl AvatarRequirement {
    pub fn is_unlocked(&self, level: u32) -> bool {
        match self {
            Self::Default => true,
            Self::Level(required) => level >= *required,
        }
    }
}

impl FromStr for AvatarRequirement {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Self::Default);
        }
        s.strip_prefix("level_")
            .and_then(|n| n.parse::<u32>().ok())
            .map(Self::Level)
            .ok_or_else(|| RewardError::UnknownRequirement(s.to_string()))
    }
}

/// What a learner has to reach to unlock an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "requirement_type", content = "requirement_value", rename_all = "snake_case")]
pub enum AchievementRequirement {
    Xp(u64),
    Level(u32),
    StreakDays(u32),
    QuestsCompleted(u32),
}

impl AchievementRequirement {
    pub fn is_met(&self, snapshot: &ProgressSnapshot) -> bool {
        match *self {
            Self::Xp(xp) => snapshot.xp_total >= xp,
            Self::Level(level) => snapshot.level >= level,
            Self::StreakDays(days) => snapshot.streak_days >= days,
            Self::QuestsCompleted(count) => snapshot.quests_completed >= count,
        }
    }

    fn threshold(&self) -> u64 {
        match *self {
            Self::Xp(xp) => xp,
            Self::Level(v) | Self::StreakDays(v) | Self::QuestsCompleted(v) => u64::from(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub requirement: AchievementRequirement,
}

/// The learner numbers that achievements are checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub xp_total: u64,
    pub level: u32,
    pub streak_days: u32,
    pub quests_completed: u32,
}

/// Achievements met by `after` that were not met by `before`, lowest
/// threshold first.
pub fn newly_unlocked<'a>(
    achievements: &'a [Achievement],
    before: &ProgressSnapshot,
    after: &ProgressSnapshot,
) -> Vec<&'a Achievement> {
    let mut unlocked: Vec<&Achievement> = achievements
        .iter()
        .filter(|a| a.requirement.is_met(after) && !a.requirement.is_met(before))
        .collect();
    unlocked.sort_by_key(|a| a.requirement.threshold());
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: &str, requirement: AchievementRequirement) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: id.replace('_', " "),
            requirement,
        }
    }

    #[test]
    fn parse_avatar_requirements() {
        assert_eq!("default".parse::<AvatarRequirement>(), Ok(AvatarRequirement::Default));
        assert_eq!("level_5".parse::<AvatarRequirement>(), Ok(AvatarRequirement::Level(5)));
        assert_eq!(
            "level_x".parse::<AvatarRequirement>(),
            Err(RewardError::UnknownRequirement("level_x".to_string()))
        );
        assert!("streak_3".parse::<AvatarRequirement>().is_err());
    }

    #[test]
    fn avatar_unlocks_at_level() {
        let requirement = AvatarRequirement::Level(3);
        assert!(!requirement.is_unlocked(2));
        assert!(requirement.is_unlocked(3));
        assert!(AvatarRequirement::Default.is_unlocked(1));
    }

    #[test]
    fn unlocks_only_newly_met() {
        let achievements = vec![
            achievement("first_quest", AchievementRequirement::QuestsCompleted(1)),
            achievement("level_two", AchievementRequirement::Level(2)),
            achievement("xp_500", AchievementRequirement::Xp(500)),
        ];
        let before = ProgressSnapshot {
            xp_total: 90,
            level: 1,
            streak_days: 1,
            quests_completed: 1,
        };
        let after = ProgressSnapshot {
            xp_total: 130,
            level: 2,
            streak_days: 1,
            quests_completed: 2,
        };
        let ids: Vec<&str> = newly_unlocked(&achievements, &before, &after)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["level_two"]);
    }

    #[test]
    fn unlocked_sorted_by_threshold() {
        let achievements = vec![
            achievement("streak_7", AchievementRequirement::StreakDays(7)),
            achievement("streak_3", AchievementRequirement::StreakDays(3)),
        ];
        let after = ProgressSnapshot {
            streak_days: 7,
            ..Default::default()
        };
        let ids: Vec<&str> = newly_unlocked(&achievements, &ProgressSnapshot::default(), &after)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["streak_3", "streak_7"]);
    }

    #[test]
    fn requirement_serializes_as_type_and_value() {
        let json = serde_json::to_value(AchievementRequirement::StreakDays(7)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"requirement_type": "streak_days", "requirement_value": 7})
        );
    }
}
