//! XP levels and leaderboard ranking.

use crate::error::{InvalidArgument, Result};
use crate::types::{LeaderboardEntry, LearnerProgress, LevelProgress, RankedEntry};
use tracing::debug;

/// Converts XP into levels of a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    xp_per_level: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self { xp_per_level: 100 }
    }
}

impl Ledger {
    pub fn new(xp_per_level: u64) -> Result<Self> {
        if xp_per_level == 0 {
            return Err(InvalidArgument::Settings("xp per level must be positive".into()).into());
        }
        Ok(Self { xp_per_level })
    }

    pub fn xp_per_level(&self) -> u64 {
        self.xp_per_level
    }

    /// `floor(xp / xp_per_level) + 1`; level 1 at zero XP.
    pub fn level_for_xp(&self, xp: u64) -> u32 {
        u32::try_from(xp / self.xp_per_level)
            .unwrap_or(u32::MAX - 1)
            .saturating_add(1)
    }

    /// Progress record for a learner with no XP.
    pub fn new_progress(&self) -> LearnerProgress {
        LearnerProgress {
            xp_total: 0,
            level: self.level_for_xp(0),
        }
    }

    /// Add earned XP. Negative deltas are rejected; XP never decreases.
    pub fn apply_xp(&self, progress: &LearnerProgress, xp_earned: i64) -> Result<LearnerProgress> {
        if xp_earned < 0 {
            return Err(InvalidArgument::NegativeXp(xp_earned).into());
        }

        let xp_total = progress.xp_total.saturating_add(xp_earned as u64);
        let level = self.level_for_xp(xp_total);
        debug!(xp_earned, xp_total, level, "applied xp");

        Ok(LearnerProgress { xp_total, level })
    }

    /// Position inside the current level, for progress bars.
    pub fn level_progress(&self, xp: u64) -> LevelProgress {
        LevelProgress {
            level: self.level_for_xp(xp),
            xp_into_level: xp % self.xp_per_level,
            xp_for_next_level: self.xp_per_level - xp % self.xp_per_level,
        }
    }

    /// Sort learners by XP and attach ranks and levels.
    ///
    /// Ties on XP are ordered by earlier `joined_at`, then by learner id.
    /// Tied learners share a rank, so ranks run 1, 2, 2, 4. The listing is
    /// ranked before it is truncated to `limit`.
    pub fn build_leaderboard(
        &self,
        mut entries: Vec<LeaderboardEntry>,
        limit: usize,
    ) -> Vec<RankedEntry> {
        entries.sort_by(|a, b| {
            b.xp_total
                .cmp(&a.xp_total)
                .then_with(|| a.joined_at.cmp(&b.joined_at))
                .then_with(|| a.learner_id.cmp(&b.learner_id))
        });

        let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len().min(limit));
        let mut rank = 1;
        for (position, entry) in entries.into_iter().enumerate() {
            if ranked.len() == limit {
                break;
            }
            if let Some(previous) = ranked.last() {
                if previous.entry.xp_total != entry.xp_total {
                    rank = position as u32 + 1;
                }
            }
            ranked.push(RankedEntry {
                rank,
                level: self.level_for_xp(entry.xp_total),
                entry,
            });
        }
        ranked
    }
}

/// `1 + count(population > learner_xp)`.
///
/// The learner may or may not be part of `population`; their own value is
/// never strictly greater than itself, so the result is the same.
pub fn compute_rank(population: &[u64], learner_xp: u64) -> u32 {
    let above = population.iter().filter(|&&xp| xp > learner_xp).count();
    u32::try_from(above).unwrap_or(u32::MAX - 1).saturating_add(1)
}
