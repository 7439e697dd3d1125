//! Environment configuration.

use std::str::FromStr;

use studyquest_core::{CoreError, ProgressionSettings, ScheduleSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Settings(#[from] CoreError),
}

/// Backend configuration.
///
/// Variables (all optional):
/// - STUDYQUEST_INITIAL_INTERVAL_DAYS: interval after a hard rating (1)
/// - STUDYQUEST_NEUTRAL_FLOOR_DAYS: minimum interval after a neutral rating (3)
/// - STUDYQUEST_MAX_INTERVAL_DAYS: interval cap (30)
/// - STUDYQUEST_XP_PER_LEVEL: XP per level (100)
/// - STUDYQUEST_LEADERBOARD_LIMIT: default leaderboard length (100)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub progression: ProgressionSettings,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProgressionSettings::default();
        let progression = ProgressionSettings {
            schedule: ScheduleSettings {
                initial_interval_days: parse_var(
                    &lookup,
                    "STUDYQUEST_INITIAL_INTERVAL_DAYS",
                    defaults.schedule.initial_interval_days,
                )?,
                neutral_floor_days: parse_var(
                    &lookup,
                    "STUDYQUEST_NEUTRAL_FLOOR_DAYS",
                    defaults.schedule.neutral_floor_days,
                )?,
                max_interval_days: parse_var(
                    &lookup,
                    "STUDYQUEST_MAX_INTERVAL_DAYS",
                    defaults.schedule.max_interval_days,
                )?,
                growth_factor: defaults.schedule.growth_factor,
            },
            xp_per_level: parse_var(&lookup, "STUDYQUEST_XP_PER_LEVEL", defaults.xp_per_level)?,
            leaderboard_limit: parse_var(
                &lookup,
                "STUDYQUEST_LEADERBOARD_LIMIT",
                defaults.leaderboard_limit,
            )?,
        };
        progression.validate()?;
        Ok(Self { progression })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
