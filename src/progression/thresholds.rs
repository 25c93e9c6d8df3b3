//! Level thresholds
//!
//! Ordered level -> cumulative XP mapping. The table may skip levels.

use serde::{Deserialize, Serialize};

use crate::catalog::TableError;

/// Cumulative XP needed to reach `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    pub level: u32,
    pub xp: u64,
}

impl ThresholdEntry {
    pub const fn new(level: u32, xp: u64) -> Self {
        Self { level, xp }
    }
}

/// Validated threshold table (strictly increasing in both level and XP)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    entries: Vec<ThresholdEntry>,
}

impl ThresholdTable {
    pub fn new(entries: Vec<ThresholdEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty { table: "level" });
        }

        for (index, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if next.level <= prev.level || next.xp <= prev.xp {
                return Err(TableError::LevelsNotIncreasing {
                    index: index + 1,
                    level: next.level,
                    xp: next.xp,
                    prev_level: prev.level,
                    prev_xp: prev.xp,
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ThresholdEntry] {
        &self.entries
    }

    /// XP required for exactly `level`, if the table defines it
    pub fn xp_for_level(&self, level: u32) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.level == level)
            .map(|e| e.xp)
    }

    /// Highest tabulated level whose threshold `xp` has reached
    pub fn level_for_xp(&self, xp: u64) -> u32 {
        self.entries
            .iter()
            .rev()
            .find(|e| xp >= e.xp)
            .unwrap_or(&self.entries[0])
            .level
    }

    pub fn max_level(&self) -> u32 {
        self.entries.last().map(|e| e.level).unwrap_or(1)
    }
}
