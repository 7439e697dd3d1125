pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use studyquest_core::{Achievement, CoreError, IntervalDoubling, Ledger, ReviewScheduler};

use crate::config::Config;
use crate::db::{MemoryStore, RecordStore};

/// Shared application state
pub struct AppState<S> {
    pub store: Arc<S>,
    pub scheduler: IntervalDoubling,
    pub ledger: Ledger,
    pub leaderboard_limit: usize,
    pub achievements: Arc<Vec<Achievement>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scheduler: self.scheduler.clone(),
            ledger: self.ledger,
            leaderboard_limit: self.leaderboard_limit,
            achievements: Arc::clone(&self.achievements),
        }
    }
}

impl<S: RecordStore> AppState<S> {
    /// Build state over `store` with validated settings.
    pub fn new(store: S, config: &Config) -> Result<Self, CoreError> {
        Ok(Self {
            store: Arc::new(store),
            scheduler: IntervalDoubling::new(config.progression.schedule.clone())?,
            ledger: Ledger::new(config.progression.xp_per_level)?,
            leaderboard_limit: config.progression.leaderboard_limit,
            achievements: Arc::new(Vec::new()),
        })
    }

    /// Replace the achievement catalogue.
    pub fn with_achievements(mut self, achievements: Vec<Achievement>) -> Self {
        self.achievements = Arc::new(achievements);
        self
    }
}

/// Load `.env`, install tracing and build state over an in-memory store.
pub fn bootstrap() -> anyhow::Result<AppState<MemoryStore>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing()?;

    let config = Config::from_env().context("failed to load configuration")?;
    let state = AppState::new(MemoryStore::new(), &config)
        .context("invalid progression settings")?
        .with_achievements(services::quest::starter_achievements());

    tracing::info!(
        scheduler = state.scheduler.name(),
        max_interval_days = state.scheduler.settings().max_interval_days,
        xp_per_level = state.ledger.xp_per_level(),
        leaderboard_limit = state.leaderboard_limit,
        "Loaded configuration"
    );
    Ok(state)
}
