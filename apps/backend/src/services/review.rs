//! Flashcard review operations

use chrono::{DateTime, Utc};
use studyquest_core::{algorithm, parse_generated_flashcards, ReviewScheduler};
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::{Result, ServiceError};
use crate::models::*;
use crate::AppState;

/// Add a hand-written card to a deck.
pub async fn add_card<S: RecordStore>(
    state: &AppState<S>,
    deck_id: Uuid,
    question: &str,
    answer: &str,
    now: DateTime<Utc>,
) -> Result<StoredCard> {
    let card = new_card(state, deck_id, question, answer, None, now);
    state.store.insert_card(card.clone()).await?;
    Ok(card)
}

/// Validate AI-generated flashcards and add them to a deck.
///
/// The whole batch is rejected if any card is invalid or cannot be stored.
pub async fn import_generated_cards<S: RecordStore>(
    state: &AppState<S>,
    deck_id: Uuid,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Vec<StoredCard>> {
    let generated = parse_generated_flashcards(text)?;

    let cards: Vec<StoredCard> = generated
        .into_iter()
        .map(|flashcard| {
            new_card(
                state,
                deck_id,
                &flashcard.question,
                &flashcard.answer,
                Some(flashcard.difficulty),
                now,
            )
        })
        .collect();
    state.store.insert_cards(cards.clone()).await?;

    tracing::info!(%deck_id, count = cards.len(), "Imported generated flashcards");
    Ok(cards)
}

/// Apply a 1-5 difficulty rating made at `now`.
pub async fn rate_card<S: RecordStore>(
    state: &AppState<S>,
    card_id: Uuid,
    difficulty: i64,
    now: DateTime<Utc>,
) -> Result<StoredCard> {
    let card = state
        .store
        .get_card(card_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("card {card_id}")))?;

    let review = state
        .scheduler
        .rate(&card.review, difficulty, now.date_naive())?;

    let updated = state
        .store
        .update_card(card.id, card.version, review, now)
        .await
        .inspect_err(|err| tracing::warn!(%card_id, "Rating not saved: {}", err))?;

    tracing::info!(
        %card_id,
        difficulty,
        interval_days = updated.review.interval_days,
        "Rated card"
    );
    Ok(updated)
}

/// Cards in a deck that are due at `now`.
pub async fn due_cards<S: RecordStore>(
    state: &AppState<S>,
    deck_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<StoredCard>> {
    let cards = state.store.cards_in_deck(deck_id).await?;
    Ok(algorithm::due_cards(&cards, now.date_naive())
        .into_iter()
        .cloned()
        .collect())
}

fn new_card<S>(
    state: &AppState<S>,
    deck_id: Uuid,
    question: &str,
    answer: &str,
    generated_difficulty: Option<u8>,
    now: DateTime<Utc>,
) -> StoredCard {
    StoredCard {
        id: Uuid::new_v4(),
        deck_id,
        question: question.trim().to_string(),
        answer: answer.trim().to_string(),
        generated_difficulty,
        review: state.scheduler.initial_card(),
        version: 0,
        created_at: now,
        updated_at: now,
    }
}
