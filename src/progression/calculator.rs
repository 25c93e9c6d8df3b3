//! Level progress and rank derivation

use super::ranks::{RankEntry, RankTable};
use super::thresholds::ThresholdTable;
use crate::domain::UserSnapshot;

/// XP span assumed when the table does not define the next level
pub const FALLBACK_LEVEL_SPAN: u64 = 10_000;

/// Progress within the current level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// XP at which the current level starts (0 if untabulated)
    pub floor_xp: u64,
    /// XP at which the next level starts
    pub ceiling_xp: u64,
    /// Percentage towards the next level, clamped to 0.0 - 100.0
    pub percent: f64,
}

/// Everything the dashboard shows about a user's standing
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub rank: RankEntry,
    pub level: u32,
    pub xp: u64,
    pub progress: Progress,
    pub next_level: u32,
    /// XP still missing to reach the ceiling (0 once it is reached)
    pub xp_to_next: u64,
}

impl ProgressView {
    /// Rounded progress label, e.g. "42% to Level 6"
    pub fn percent_label(&self) -> String {
        format!(
            "{}% to Level {}",
            self.progress.percent.round() as u32,
            self.next_level
        )
    }
}

/// Stateless calculator over the level and rank tables
#[derive(Debug, Clone, Copy)]
pub struct ProgressionCalculator<'a> {
    thresholds: &'a ThresholdTable,
    ranks: &'a RankTable,
}

impl<'a> ProgressionCalculator<'a> {
    pub fn new(thresholds: &'a ThresholdTable, ranks: &'a RankTable) -> Self {
        Self { thresholds, ranks }
    }

    pub fn derive_rank(&self, level: u32) -> &'a RankEntry {
        self.ranks.rank_for(level)
    }

    pub fn compute_progress(&self, level: u32, xp: u64) -> Progress {
        let floor_xp = self.thresholds.xp_for_level(level).unwrap_or(0);
        let ceiling_xp = self
            .thresholds
            .xp_for_level(level.saturating_add(1))
            .unwrap_or(floor_xp.saturating_add(FALLBACK_LEVEL_SPAN));

        let span = ceiling_xp.saturating_sub(floor_xp);
        let percent = if span == 0 {
            if xp >= ceiling_xp { 100.0 } else { 0.0 }
        } else {
            let gained = xp as f64 - floor_xp as f64;
            (gained / span as f64 * 100.0).clamp(0.0, 100.0)
        };

        Progress {
            floor_xp,
            ceiling_xp,
            percent,
        }
    }

    pub fn view(&self, user: &UserSnapshot) -> ProgressView {
        let progress = self.compute_progress(user.level, user.xp);
        ProgressView {
            rank: self.derive_rank(user.level).clone(),
            level: user.level,
            xp: user.xp,
            progress,
            next_level: user.level.saturating_add(1),
            xp_to_next: progress.ceiling_xp.saturating_sub(user.xp),
        }
    }
}
