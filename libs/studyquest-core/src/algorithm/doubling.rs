//! Interval-doubling review scheduler.
//!
//! Hard ratings reset a card to the shortest interval, neutral ratings hold
//! it at a floor, and easy ratings double it up to a fixed cap.

use super::ReviewScheduler;
use crate::error::Result;
use crate::types::{Difficulty, ReviewCard, ScheduleSettings};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Interval-doubling scheduler with configurable bounds.
#[derive(Debug, Clone, Default)]
pub struct IntervalDoubling {
    settings: ScheduleSettings,
}

impl IntervalDoubling {
    /// Create a scheduler after validating its settings.
    pub fn new(settings: ScheduleSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    /// Next interval in days, always within `[1, max_interval_days]`.
    pub fn next_interval(&self, current: u32, difficulty: Difficulty) -> u32 {
        let s = &self.settings;
        // Stored intervals may predate a lower cap.
        let current = current.clamp(1, s.max_interval_days);

        if difficulty.is_hard() {
            s.initial_interval_days
        } else if difficulty.is_easy() {
            current
                .saturating_mul(s.growth_factor)
                .min(s.max_interval_days)
        } else {
            current.max(s.neutral_floor_days)
        }
    }
}

impl ReviewScheduler for IntervalDoubling {
    fn name(&self) -> &'static str {
        "interval_doubling"
    }

    fn initial_card(&self) -> ReviewCard {
        ReviewCard {
            interval_days: self.settings.initial_interval_days,
            ..Default::default()
        }
    }

    fn rate(&self, card: &ReviewCard, difficulty: i64, today: NaiveDate) -> Result<ReviewCard> {
        let difficulty = Difficulty::new(difficulty)?;
        let interval_days = self.next_interval(card.interval_days, difficulty);
        let next_review_date = today + Duration::days(i64::from(interval_days));

        debug!(
            difficulty = difficulty.value(),
            from = card.interval_days,
            to = interval_days,
            %next_review_date,
            "rated card"
        );

        Ok(ReviewCard {
            interval_days,
            next_review_date: Some(next_review_date),
            times_reviewed: card.times_reviewed.saturating_add(1),
            last_difficulty: Some(difficulty),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, InvalidArgument};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn card(interval_days: u32) -> ReviewCard {
        ReviewCard {
            interval_days,
            times_reviewed: 4,
            ..Default::default()
        }
    }

    fn interval_after(current: u32, difficulty: i64) -> u32 {
        IntervalDoubling::default()
            .rate(&card(current), difficulty, today())
            .unwrap()
            .interval_days
    }

    #[test]
    fn hard_ratings_reset_to_one_day() {
        for current in [1, 3, 12, 30] {
            assert_eq!(interval_after(current, 1), 1);
            assert_eq!(interval_after(current, 2), 1);
        }
    }

    #[test]
    fn neutral_rating_holds_at_floor() {
        assert_eq!(interval_after(1, 3), 3);
        assert_eq!(interval_after(3, 3), 3);
        assert_eq!(interval_after(10, 3), 10);
    }

    #[test]
    fn easy_rating_doubles_up_to_cap() {
        assert_eq!(interval_after(10, 5), 20);
        assert_eq!(interval_after(10, 4), 20);
        assert_eq!(interval_after(16, 5), 30);
        assert_eq!(interval_after(20, 5), 30);
        assert_eq!(interval_after(30, 4), 30);
    }

    #[test]
    fn rating_sets_due_date_and_counters() {
        let scheduler = IntervalDoubling::default();
        let rated = scheduler.rate(&card(4), 5, today()).unwrap();
        assert_eq!(
            rated,
            ReviewCard {
                interval_days: 8,
                next_review_date: NaiveDate::from_ymd_opt(2024, 1, 23),
                times_reviewed: 5,
                last_difficulty: Some(Difficulty::EASIEST),
            }
        );
    }

    #[test]
    fn rate_is_deterministic() {
        let scheduler = IntervalDoubling::default();
        let first = scheduler.rate(&card(6), 3, today()).unwrap();
        let second = scheduler.rate(&card(6), 3, today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_difficulty_leaves_card_untouched() {
        let scheduler = IntervalDoubling::default();
        let original = card(7);
        for bad in [0, 6] {
            let result = scheduler.rate(&original, bad, today());
            assert_eq!(
                result,
                Err(CoreError::InvalidArgument(InvalidArgument::Difficulty(bad)))
            );
        }
        assert_eq!(original, card(7));
    }

    #[test]
    fn interval_above_lowered_cap_is_clamped() {
        let scheduler = IntervalDoubling::new(ScheduleSettings {
            max_interval_days: 14,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(scheduler.next_interval(30, Difficulty::NEUTRAL), 14);
        assert_eq!(scheduler.next_interval(30, Difficulty::EASIEST), 14);
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let scheduler = IntervalDoubling::default();
        assert_eq!(scheduler.next_interval(0, Difficulty::EASIEST), 2);
    }

    #[test]
    fn initial_card_uses_configured_interval() {
        let scheduler = IntervalDoubling::new(ScheduleSettings {
            initial_interval_days: 2,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(scheduler.initial_card().interval_days, 2);
        assert_eq!(scheduler.initial_card().times_reviewed, 0);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let result = IntervalDoubling::new(ScheduleSettings {
            initial_interval_days: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn interval_stays_within_bounds(current in 1u32..=30, difficulty in 1i64..=5) {
            let next = interval_after(current, difficulty);
            prop_assert!((1..=30).contains(&next));
        }

        #[test]
        fn review_count_increments_once(current in 1u32..=30, difficulty in 1i64..=5) {
            let rated = IntervalDoubling::default()
                .rate(&card(current), difficulty, today())
                .unwrap();
            prop_assert_eq!(rated.times_reviewed, 5);
            prop_assert_eq!(
                rated.next_review_date,
                Some(today() + Duration::days(i64::from(rated.interval_days)))
            );
        }
    }
}
