//! Error types for table construction.

/// Malformed threshold, rank or milestone data.
///
/// Raised only while a table is being built; evaluation over a built table
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{table} table is empty")]
    Empty { table: &'static str },

    #[error("level table not strictly increasing at entry {index}: level {level} (xp {xp}) after level {prev_level} (xp {prev_xp})")]
    LevelsNotIncreasing {
        index: usize,
        level: u32,
        xp: u64,
        prev_level: u32,
        prev_xp: u64,
    },

    #[error("rank table out of order at entry {index}: min level {min_level} after {prev_min_level}")]
    RanksOutOfOrder {
        index: usize,
        min_level: u32,
        prev_min_level: u32,
    },

    #[error("invalid milestone id {id:?}: use lowercase letters, digits and '-'")]
    InvalidMilestoneId { id: String },

    #[error("duplicate milestone id {id:?}")]
    DuplicateMilestone { id: String },

    #[error("milestone {id:?} must set exactly one requirement, found {found}")]
    AmbiguousRequirement { id: String, found: usize },
}
