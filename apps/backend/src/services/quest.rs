//! Quest creation and submission

use chrono::{DateTime, Utc};
use serde_json::Value;
use studyquest_core::{
    answers_from_json, newly_unlocked, parse_generated_quest, score, Achievement,
    AchievementRequirement,
};
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::{Result, ServiceError};
use crate::models::*;
use crate::AppState;

/// Achievements available out of the box.
pub fn starter_achievements() -> Vec<Achievement> {
    let entry = |id: &str, name: &str, requirement| Achievement {
        id: id.to_string(),
        name: name.to_string(),
        requirement,
    };
    vec![
        entry("first_quest", "First Quest", AchievementRequirement::QuestsCompleted(1)),
        entry("quest_explorer", "Quest Explorer", AchievementRequirement::QuestsCompleted(10)),
        entry("three_day_streak", "On a Roll", AchievementRequirement::StreakDays(3)),
        entry("week_streak", "Week Warrior", AchievementRequirement::StreakDays(7)),
        entry("level_five", "Rising Scholar", AchievementRequirement::Level(5)),
        entry("xp_1000", "Thousand Club", AchievementRequirement::Xp(1000)),
    ]
}

/// Validate an AI-generated quest and store it.
pub async fn create_quest_from_ai<S: RecordStore>(
    state: &AppState<S>,
    text: &str,
    now: DateTime<Utc>,
) -> Result<StoredQuest> {
    let quest = parse_generated_quest(text)
        .inspect_err(|err| tracing::warn!("Rejected generated quest: {}", err))?;

    let stored = StoredQuest {
        id: Uuid::new_v4(),
        quest,
        created_at: now,
    };
    state.store.insert_quest(stored.clone()).await?;

    tracing::info!(
        quest_id = %stored.id,
        questions = stored.quest.questions.len(),
        xp_reward = stored.quest.xp_reward,
        "Created quest"
    );
    Ok(stored)
}

/// Score a learner's answers and apply the XP.
///
/// `answers` is the raw JSON answers array; entries that are not
/// non-negative integers count as unanswered. XP is awarded on every
/// submission; `quests_completed` only counts a quest the first time.
/// The learner update and the attempt log are written together under the
/// learner's version, so a concurrent submission fails with a conflict
/// instead of being counted twice.
pub async fn submit_quest<S: RecordStore>(
    state: &AppState<S>,
    learner_id: Uuid,
    quest_id: Uuid,
    answers: &Value,
    now: DateTime<Utc>,
) -> Result<QuestOutcome> {
    let learner = state
        .store
        .get_learner(learner_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("learner {learner_id}")))?;
    let stored = state
        .store
        .get_quest(quest_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("quest {quest_id}")))?;

    let answers = answers_from_json(answers);
    let attempt = score(&stored.quest.questions, &answers, stored.quest.xp_reward)?;
    let progress = state
        .ledger
        .apply_xp(&learner.progress, i64::from(attempt.xp_earned))?;

    let first_completion = !learner.has_completed(quest_id);

    let mut updated = LearnerRecord {
        progress,
        streak: learner.streak.record_activity(now.date_naive()),
        quests_completed: learner.quests_completed + u32::from(first_completion),
        ..learner.clone()
    };
    if first_completion {
        updated.completed_quests.push(quest_id);
    }

    let unlocked: Vec<String> =
        newly_unlocked(&state.achievements, &learner.snapshot(), &updated.snapshot())
            .into_iter()
            .map(|achievement| achievement.id.clone())
            .filter(|id| !learner.unlocked_achievements.contains(id))
            .collect();
    updated.unlocked_achievements.extend(unlocked.iter().cloned());

    let record = AttemptRecord {
        id: Uuid::new_v4(),
        learner_id,
        quest_id,
        attempt,
        answers,
        completed_at: now,
    };
    let updated = state
        .store
        .record_submission(updated, learner.version, record)
        .await
        .inspect_err(|err| tracing::warn!(%learner_id, "Quest result not saved: {}", err))?;

    let leveled_up = updated.progress.level > learner.progress.level;
    tracing::info!(
        %learner_id,
        %quest_id,
        score = attempt.score_percent,
        xp_earned = attempt.xp_earned,
        level = updated.progress.level,
        leveled_up,
        "Quest submitted"
    );

    Ok(QuestOutcome {
        score: attempt.score_percent,
        correct_count: attempt.correct_count,
        total_questions: attempt.total_questions,
        xp_earned: attempt.xp_earned,
        xp_total: updated.progress.xp_total,
        level: updated.progress.level,
        leveled_up,
        streak_days: updated.streak.days,
        unlocked_achievements: unlocked,
    })
}
