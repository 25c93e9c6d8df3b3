//! Rank table
//!
//! Cosmetic titles keyed by minimum level. Coarser than levels.

use serde::{Deserialize, Serialize};

use crate::catalog::TableError;

/// A rank and the display metadata that goes with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub min_level: u32,
    pub title: String,
    /// Icon reference (icon font class name)
    pub icon: String,
    /// Display color token
    pub color: String,
}

impl RankEntry {
    pub fn new(min_level: u32, title: &str, icon: &str, color: &str) -> Self {
        Self {
            min_level,
            title: title.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Validated rank table, ascending by `min_level`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    /// Build a rank table.
    ///
    /// Entries must be ordered by non-decreasing `min_level`. Repeated
    /// `min_level` values are accepted with a warning; lookup then resolves
    /// them to the last-defined entry (see [`RankTable::rank_for`]).
    pub fn new(entries: Vec<RankEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty { table: "rank" });
        }

        for (index, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.min_level < prev.min_level {
                return Err(TableError::RanksOutOfOrder {
                    index: index + 1,
                    min_level: next.min_level,
                    prev_min_level: prev.min_level,
                });
            }
            if next.min_level == prev.min_level {
                tracing::warn!(
                    min_level = next.min_level,
                    shadowed = %prev.title,
                    winner = %next.title,
                    "Rank table repeats a minimum level; the later entry wins"
                );
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Lowest-ranked entry, used when a level is below every `min_level`
    pub fn lowest(&self) -> &RankEntry {
        &self.entries[0]
    }

    /// Rank held at `level`.
    ///
    /// Scans from the highest `min_level` down and returns the first entry
    /// with `min_level <= level`. Among entries sharing a `min_level` the
    /// last-defined one is reached first, so it wins. Falls back to the
    /// lowest entry when nothing qualifies.
    pub fn rank_for(&self, level: u32) -> &RankEntry {
        self.entries
            .iter()
            .rev()
            .find(|r| r.min_level <= level)
            .unwrap_or_else(|| self.lowest())
    }

    /// The rank directly above `entry`'s position, if any
    pub(crate) fn next_after(&self, index: usize) -> Option<&RankEntry> {
        self.entries[index + 1..]
            .iter()
            .find(|r| r.min_level > self.entries[index].min_level)
    }
}
