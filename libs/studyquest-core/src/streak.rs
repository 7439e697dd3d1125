//! Daily study streaks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive days with at least one study activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStreak {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<NaiveDate>,
    pub days: u32,
}

impl StudyStreak {
    /// Record activity on `today`.
    ///
    /// Repeated activity on the same day changes nothing. Activity on the
    /// day after the last one extends the streak; anything else starts a
    /// new streak of one day.
    pub fn record_activity(&self, today: NaiveDate) -> StudyStreak {
        let days = match self.last_activity {
            Some(last) if last == today => return *self,
            Some(last) if last.succ_opt() == Some(today) => self.days.saturating_add(1),
            _ => 1,
        };
        StudyStreak {
            last_activity: Some(today),
            days,
        }
    }

    /// Whether the streak can still be extended on `today`.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.last_activity {
            Some(last) => last == today || last.succ_opt() == Some(today),
            None => false,
        }
    }

    /// Streak length as seen on `today`; a lapsed streak reads as zero.
    pub fn current_days(&self, today: NaiveDate) -> u32 {
        if self.is_active(today) {
            self.days
        } else {
            0
        }
    }
}
