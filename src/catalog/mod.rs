//! Level, rank and milestone tables
//!
//! Tables are validated once when the catalog is built and never change
//! afterwards. The built-in catalog lives in a process-wide static.

mod builtin;
mod error;

pub use builtin::LEVELS;
pub use error::TableError;

use once_cell::sync::Lazy;

use crate::milestones::{Milestone, MilestoneRegistry};
use crate::progression::{
    ProgressionCalculator, RankEntry, RankTable, ThresholdEntry, ThresholdTable,
};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_parts(
        LEVELS.to_vec(),
        builtin::ranks(),
        builtin::milestones(),
    )
    .expect("built-in tables are valid")
});

/// The immutable tables the engine evaluates against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub thresholds: ThresholdTable,
    pub ranks: RankTable,
    pub milestones: MilestoneRegistry,
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Validate raw table data into a catalog
    pub fn from_parts(
        levels: Vec<ThresholdEntry>,
        ranks: Vec<RankEntry>,
        milestones: Vec<Milestone>,
    ) -> Result<Self, TableError> {
        Ok(Self {
            thresholds: ThresholdTable::new(levels)?,
            ranks: RankTable::new(ranks)?,
            milestones: MilestoneRegistry::new(milestones)?,
        })
    }

    pub fn progression(&self) -> ProgressionCalculator<'_> {
        ProgressionCalculator::new(&self.thresholds, &self.ranks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestones::RequirementKind;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.thresholds.entries().len(), 16);
        assert_eq!(catalog.ranks.entries().len(), 7);
        assert_eq!(catalog.milestones.len(), 15);
        assert_eq!(catalog.milestones.by_kind(RequirementKind::Level).len(), 7);
        assert_eq!(catalog.milestones.by_kind(RequirementKind::Speed).len(), 4);
    }

    #[test]
    fn test_every_rank_has_a_landmark() {
        let catalog = Catalog::builtin();
        for rank in catalog.ranks.entries() {
            assert!(
                catalog.milestones.level_landmark(rank.min_level).is_some(),
                "{}",
                rank.title
            );
        }
    }
}
