//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wrapping application state over an in-memory store
//! - Helpers for creating learners, quests and decks

pub mod fixtures;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use studyquest_backend::config::Config;
use studyquest_backend::db::MemoryStore;
use studyquest_backend::models::{LearnerRecord, StoredQuest};
use studyquest_backend::services::{learner, quest};
use studyquest_backend::AppState;

/// Test context holding application state over a fresh in-memory store.
pub struct TestContext {
    pub state: AppState<MemoryStore>,
}

impl TestContext {
    /// Create a context with default configuration and the starter
    /// achievements.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(MemoryStore::new(), &config)
            .expect("default configuration is valid")
            .with_achievements(quest::starter_achievements());
        Self { state }
    }

    /// Register a learner joined at `joined_at`.
    pub async fn create_learner(&self, name: &str, joined_at: DateTime<Utc>) -> LearnerRecord {
        learner::register_learner(&self.state, name, joined_at)
            .await
            .expect("Failed to register learner")
    }

    /// Store the four-question fixture quest with the given reward.
    pub async fn create_quest(&self, xp_reward: u32) -> StoredQuest {
        quest::create_quest_from_ai(
            &self.state,
            &fixtures::quest_json(xp_reward),
            fixed_now(),
        )
        .await
        .expect("Failed to create quest")
    }

    /// Unique deck id for isolation between tests.
    pub fn new_deck() -> Uuid {
        Uuid::new_v4()
    }
}

/// A fixed instant used instead of the wall clock.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 10, 30, 0).unwrap()
}

/// `fixed_now` shifted by whole days.
pub fn days_later(days: i64) -> DateTime<Utc> {
    fixed_now() + Duration::days(days)
}
