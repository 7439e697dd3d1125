//! Spaced repetition scheduling.

pub mod doubling;

pub use doubling::IntervalDoubling;

use crate::error::Result;
use crate::types::ReviewCard;
use chrono::NaiveDate;

/// Trait for review schedulers.
///
/// Implementations are pure: `today` is always supplied by the caller and
/// the card passed in is never modified.
pub trait ReviewScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// State for a card that has never been reviewed.
    fn initial_card(&self) -> ReviewCard;

    /// Apply a 1-5 difficulty rating made on `today`.
    fn rate(&self, card: &ReviewCard, difficulty: i64, today: NaiveDate) -> Result<ReviewCard>;
}

/// Whether a card should be shown on `today`. Never-rated cards are due.
pub fn is_due(card: &ReviewCard, today: NaiveDate) -> bool {
    match card.next_review_date {
        Some(date) => date <= today,
        None => true,
    }
}

/// Due cards, never-rated first, then oldest due date first.
pub fn due_cards<T: AsRef<ReviewCard>>(cards: &[T], today: NaiveDate) -> Vec<&T> {
    let mut due: Vec<&T> = cards
        .iter()
        .filter(|card| is_due(review_state(*card), today))
        .collect();
    due.sort_by_key(|card| review_state(*card).next_review_date);
    due
}

fn review_state<T: AsRef<ReviewCard>>(item: &T) -> &ReviewCard {
    item.as_ref()
}
