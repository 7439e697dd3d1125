//! Record store abstraction
//!
//! The progression core never touches storage. Services load records
//! through [`RecordStore`], run the pure computation, and write the result
//! back with the version they read. A write against a stale version fails
//! with [`StoreError::Conflict`], which is how concurrent ratings or quest
//! submissions for the same record are kept from overwriting each other.

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::*;

/// Storage collaborator used by the services
pub trait RecordStore: Send + Sync {
    // === Cards ===

    fn get_card(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<StoredCard>>> + Send;

    fn insert_card(&self, card: StoredCard) -> impl Future<Output = StoreResult<()>> + Send;

    /// Insert a batch of cards. Nothing is stored if any insert would fail.
    fn insert_cards(&self, cards: Vec<StoredCard>) -> impl Future<Output = StoreResult<()>> + Send;

    /// Replace a card's review state if its version is still `expected_version`.
    fn update_card(
        &self,
        id: Uuid,
        expected_version: u64,
        review: ReviewCard,
        now: DateTime<Utc>,
    ) -> impl Future<Output = StoreResult<StoredCard>> + Send;

    fn cards_in_deck(&self, deck_id: Uuid) -> impl Future<Output = StoreResult<Vec<StoredCard>>> + Send;

    // === Learners ===

    fn get_learner(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<LearnerRecord>>> + Send;

    fn insert_learner(&self, learner: LearnerRecord) -> impl Future<Output = StoreResult<()>> + Send;

    /// Replace a learner and log the attempt that produced it, as one write.
    ///
    /// Fails with [`StoreError::Conflict`] if the stored learner is no longer
    /// at `expected_version`; the attempt is then not recorded either.
    fn record_submission(
        &self,
        learner: LearnerRecord,
        expected_version: u64,
        attempt: AttemptRecord,
    ) -> impl Future<Output = StoreResult<LearnerRecord>> + Send;

    /// Every learner as a leaderboard row.
    fn leaderboard_rows(&self) -> impl Future<Output = StoreResult<Vec<LeaderboardEntry>>> + Send;

    /// XP totals of every ranked learner.
    fn xp_population(&self) -> impl Future<Output = StoreResult<Vec<u64>>> + Send;

    // === Quests ===

    fn get_quest(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<StoredQuest>>> + Send;

    fn insert_quest(&self, quest: StoredQuest) -> impl Future<Output = StoreResult<()>> + Send;

    fn attempts_for(&self, learner_id: Uuid) -> impl Future<Output = StoreResult<Vec<AttemptRecord>>> + Send;
}
