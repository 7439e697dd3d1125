//! In-memory record store.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{RecordStore, StoreError, StoreResult};
use crate::models::*;

/// Record store backed by in-process maps.
///
/// Each map sits behind its own lock; a versioned update holds the write
/// lock across the compare and the replace.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cards: RwLock<HashMap<Uuid, StoredCard>>,
    learners: RwLock<HashMap<Uuid, LearnerRecord>>,
    quests: RwLock<HashMap<Uuid, StoredQuest>>,
    attempts: RwLock<Vec<AttemptRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_version(id: Uuid, expected: u64, found: u64) -> StoreResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(StoreError::Conflict {
            id,
            expected,
            found,
        })
    }
}

impl RecordStore for MemoryStore {
    async fn get_card(&self, id: Uuid) -> StoreResult<Option<StoredCard>> {
        Ok(self.cards.read().await.get(&id).cloned())
    }

    async fn insert_card(&self, card: StoredCard) -> StoreResult<()> {
        let mut cards = self.cards.write().await;
        if cards.contains_key(&card.id) {
            return Err(StoreError::Duplicate(card.id));
        }
        cards.insert(card.id, card);
        Ok(())
    }

    async fn insert_cards(&self, batch: Vec<StoredCard>) -> StoreResult<()> {
        let mut cards = self.cards.write().await;
        let mut seen = HashSet::with_capacity(batch.len());
        if let Some(card) = batch
            .iter()
            .find(|card| cards.contains_key(&card.id) || !seen.insert(card.id))
        {
            return Err(StoreError::Duplicate(card.id));
        }
        cards.extend(batch.into_iter().map(|card| (card.id, card)));
        Ok(())
    }

    async fn update_card(
        &self,
        id: Uuid,
        expected_version: u64,
        review: ReviewCard,
        now: DateTime<Utc>,
    ) -> StoreResult<StoredCard> {
        let mut cards = self.cards.write().await;
        let card = cards
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("card {id}")))?;
        check_version(id, expected_version, card.version)?;

        card.review = review;
        card.version += 1;
        card.updated_at = now;
        Ok(card.clone())
    }

    async fn cards_in_deck(&self, deck_id: Uuid) -> StoreResult<Vec<StoredCard>> {
        let mut cards: Vec<StoredCard> = self
            .cards
            .read()
            .await
            .values()
            .filter(|card| card.deck_id == deck_id)
            .cloned()
            .collect();
        cards.sort_by_key(|card| (card.created_at, card.id));
        Ok(cards)
    }

    async fn get_learner(&self, id: Uuid) -> StoreResult<Option<LearnerRecord>> {
        Ok(self.learners.read().await.get(&id).cloned())
    }

    async fn insert_learner(&self, learner: LearnerRecord) -> StoreResult<()> {
        let mut learners = self.learners.write().await;
        if learners.contains_key(&learner.id) {
            return Err(StoreError::Duplicate(learner.id));
        }
        learners.insert(learner.id, learner);
        Ok(())
    }

    async fn record_submission(
        &self,
        mut learner: LearnerRecord,
        expected_version: u64,
        attempt: AttemptRecord,
    ) -> StoreResult<LearnerRecord> {
        // Lock order: learners, then attempts.
        let mut learners = self.learners.write().await;
        let mut attempts = self.attempts.write().await;
        let stored = learners
            .get_mut(&learner.id)
            .ok_or_else(|| StoreError::NotFound(format!("learner {}", learner.id)))?;
        check_version(learner.id, expected_version, stored.version)?;

        learner.version = stored.version + 1;
        *stored = learner.clone();
        attempts.push(attempt);
        Ok(learner)
    }

    async fn leaderboard_rows(&self) -> StoreResult<Vec<LeaderboardEntry>> {
        Ok(self
            .learners
            .read()
            .await
            .values()
            .map(LearnerRecord::to_leaderboard_entry)
            .collect())
    }

    async fn xp_population(&self) -> StoreResult<Vec<u64>> {
        Ok(self
            .learners
            .read()
            .await
            .values()
            .map(|learner| learner.progress.xp_total)
            .collect())
    }

    async fn get_quest(&self, id: Uuid) -> StoreResult<Option<StoredQuest>> {
        Ok(self.quests.read().await.get(&id).cloned())
    }

    async fn insert_quest(&self, quest: StoredQuest) -> StoreResult<()> {
        let mut quests = self.quests.write().await;
        if quests.contains_key(&quest.id) {
            return Err(StoreError::Duplicate(quest.id));
        }
        quests.insert(quest.id, quest);
        Ok(())
    }

    async fn attempts_for(&self, learner_id: Uuid) -> StoreResult<Vec<AttemptRecord>> {
        Ok(self
            .attempts
            .read()
            .await
            .iter()
            .filter(|attempt| attempt.learner_id == learner_id)
            .cloned()
            .collect())
    }
}
