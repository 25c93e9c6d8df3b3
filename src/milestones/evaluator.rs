//! Milestone unlock evaluation
//!
//! Pure and stateless: results are recomputed from the snapshot on every
//! call. Each check is a `>=` against one snapshot field, so raising any
//! field can only add unlocks, never remove them.

use std::collections::BTreeSet;

use super::definitions::{Milestone, MilestoneRegistry, Requirement};
use crate::domain::UserSnapshot;

/// A milestone together with its current unlock state
#[derive(Debug, Clone, Copy)]
pub struct MilestoneStatus<'a> {
    pub milestone: &'a Milestone,
    pub unlocked: bool,
}

pub struct MilestoneEvaluator;

impl MilestoneEvaluator {
    pub fn is_unlocked(milestone: &Milestone, user: &UserSnapshot) -> bool {
        match milestone.requirement {
            Requirement::ByLevel(n) => user.level >= n,
            Requirement::ByBestWpm(n) => user.best_wpm >= n,
            Requirement::ByTestCount(n) => user.total_tests >= n,
        }
    }

    /// Ids of every unlocked milestone
    pub fn unlocked_set(registry: &MilestoneRegistry, user: &UserSnapshot) -> BTreeSet<String> {
        registry
            .iter()
            .filter(|m| Self::is_unlocked(m, user))
            .map(|m| m.id.clone())
            .collect()
    }

    /// Every milestone with its unlock state, in registry order
    pub fn statuses<'a>(
        registry: &'a MilestoneRegistry,
        user: &UserSnapshot,
    ) -> Vec<MilestoneStatus<'a>> {
        registry
            .iter()
            .map(|milestone| MilestoneStatus {
                milestone,
                unlocked: Self::is_unlocked(milestone, user),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(req: Requirement) -> Milestone {
        Milestone::new("m", "M", "", "fa-medal", req)
    }

    #[test]
    fn test_test_count_unlock() {
        let user = UserSnapshot::new("u", "ada").with_tests(30);
        assert!(MilestoneEvaluator::is_unlocked(
            &milestone(Requirement::ByTestCount(25)),
            &user
        ));
    }

    #[test]
    fn test_speed_below_threshold_is_locked() {
        let user = UserSnapshot::new("u", "ada").with_best_wpm(95);
        assert!(!MilestoneEvaluator::is_unlocked(
            &milestone(Requirement::ByBestWpm(100)),
            &user
        ));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let user = UserSnapshot::new("u", "ada").with_level(10, 7500);
        assert!(MilestoneEvaluator::is_unlocked(&milestone(Requirement::ByLevel(10)), &user));
        assert!(!MilestoneEvaluator::is_unlocked(&milestone(Requirement::ByLevel(11)), &user));
    }

    #[test]
    fn test_requirement_checks_only_its_own_field() {
        // A huge level does nothing for a speed milestone
        let user = UserSnapshot::new("u", "ada").with_level(50, 250_000).with_tests(500);
        assert!(!MilestoneEvaluator::is_unlocked(&milestone(Requirement::ByBestWpm(40)), &user));
    }
}
