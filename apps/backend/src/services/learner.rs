//! Learner registration and profile

use chrono::{DateTime, Utc};
use studyquest_core::{compute_rank, StudyStreak};
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::{Result, ServiceError};
use crate::models::*;
use crate::AppState;

/// Create a learner with no XP.
pub async fn register_learner<S: RecordStore>(
    state: &AppState<S>,
    display_name: &str,
    now: DateTime<Utc>,
) -> Result<LearnerRecord> {
    let learner = LearnerRecord {
        id: Uuid::new_v4(),
        display_name: display_name.trim().to_string(),
        progress: state.ledger.new_progress(),
        streak: StudyStreak::default(),
        quests_completed: 0,
        completed_quests: Vec::new(),
        unlocked_achievements: Vec::new(),
        version: 0,
        joined_at: now,
    };
    state.store.insert_learner(learner.clone()).await?;

    tracing::info!(learner_id = %learner.id, "Registered learner");
    Ok(learner)
}

/// Level, streak and rank of a learner as seen at `now`.
pub async fn profile<S: RecordStore>(
    state: &AppState<S>,
    learner_id: Uuid,
    now: DateTime<Utc>,
) -> Result<ProfileSummary> {
    let learner = state
        .store
        .get_learner(learner_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("learner {learner_id}")))?;
    let population = state.store.xp_population().await?;

    Ok(ProfileSummary {
        learner_id,
        display_name: learner.display_name,
        xp_total: learner.progress.xp_total,
        level: state.ledger.level_progress(learner.progress.xp_total),
        streak_days: learner.streak.current_days(now.date_naive()),
        rank: compute_rank(&population, learner.progress.xp_total),
    })
}
