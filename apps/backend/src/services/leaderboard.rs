//! Leaderboard listing

use studyquest_core::compute_rank;
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::{Result, ServiceError};
use crate::models::*;
use crate::AppState;

/// Top learners by XP, plus the rank of `learner_id` when given.
///
/// `limit` falls back to the configured leaderboard length.
pub async fn leaderboard<S: RecordStore>(
    state: &AppState<S>,
    learner_id: Option<Uuid>,
    limit: Option<usize>,
) -> Result<LeaderboardView> {
    let rows = state.store.leaderboard_rows().await?;
    let learner_rank = match learner_id {
        Some(id) => Some(learner_rank(state, id).await?),
        None => None,
    };

    let entries = state
        .ledger
        .build_leaderboard(rows, limit.unwrap_or(state.leaderboard_limit));

    Ok(LeaderboardView {
        entries,
        learner_rank,
    })
}

/// `1 + number of learners with strictly more XP`.
pub async fn learner_rank<S: RecordStore>(state: &AppState<S>, learner_id: Uuid) -> Result<u32> {
    let learner = state
        .store
        .get_learner(learner_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("learner {learner_id}")))?;
    let population = state.store.xp_population().await?;
    Ok(compute_rank(&population, learner.progress.xp_total))
}
