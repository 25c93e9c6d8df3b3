//! Rank ladder shown on the levels page

use super::ranks::{RankEntry, RankTable};
use super::thresholds::ThresholdTable;
use crate::milestones::{Milestone, MilestoneRegistry};

/// One rung of the ladder
#[derive(Debug, Clone)]
pub struct LadderStep<'a> {
    pub rank: &'a RankEntry,
    /// Last level covered by this rank
    pub max_level: u32,
    pub unlocked: bool,
    pub current: bool,
    /// XP needed for `rank.min_level`; `None` when the level is untabulated
    pub xp_required: Option<u64>,
    /// Level landmark tied to this rank, if the registry has one
    pub landmark: Option<&'a Milestone>,
}

pub struct RankLadder;

impl RankLadder {
    pub fn build<'a>(
        ranks: &'a RankTable,
        thresholds: &ThresholdTable,
        milestones: &'a MilestoneRegistry,
        level: u32,
    ) -> Vec<LadderStep<'a>> {
        let held = ranks.rank_for(level);
        ranks
            .entries()
            .iter()
            .enumerate()
            .map(|(index, rank)| {
                let next = ranks.next_after(index);
                let max_level = match next {
                    Some(n) => n.min_level.saturating_sub(1).max(rank.min_level),
                    None => thresholds.max_level().max(rank.min_level),
                };
                let unlocked = level >= rank.min_level;

                LadderStep {
                    rank,
                    max_level,
                    unlocked,
                    current: unlocked && std::ptr::eq(rank, held),
                    xp_required: thresholds.xp_for_level(rank.min_level),
                    landmark: milestones.level_landmark(rank.min_level),
                }
            })
            .collect()
    }
}
