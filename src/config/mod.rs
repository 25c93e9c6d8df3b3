//! Configuration loading and management

mod io;
mod settings;
mod tables;

pub use io::LOCAL_CONFIG_DIR;
pub use settings::ExportSettings;
pub use tables::MilestoneConfig;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, TableError};
use crate::milestones::Milestone;
use crate::progression::{RankEntry, ThresholdEntry};

/// Main configuration structure
///
/// The table sections are optional; an empty section keeps the built-in
/// table for that concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Certificate export settings
    #[serde(default)]
    pub export: ExportSettings,

    /// Level thresholds (`[[levels]]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<ThresholdEntry>,

    /// Rank ladder (`[[ranks]]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranks: Vec<RankEntry>,

    /// Milestone definitions (`[[milestones]]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<MilestoneConfig>,
}

impl Config {
    pub fn has_table_overrides(&self) -> bool {
        !(self.levels.is_empty() && self.ranks.is_empty() && self.milestones.is_empty())
    }

    /// Build the catalog, validating any overridden tables
    pub fn catalog(&self) -> Result<Catalog, TableError> {
        let builtin = Catalog::builtin();
        if !self.has_table_overrides() {
            return Ok(builtin.clone());
        }

        let levels = if self.levels.is_empty() {
            builtin.thresholds.entries().to_vec()
        } else {
            self.levels.clone()
        };
        let ranks = if self.ranks.is_empty() {
            builtin.ranks.entries().to_vec()
        } else {
            self.ranks.clone()
        };
        let milestones = if self.milestones.is_empty() {
            builtin.milestones.iter().cloned().collect()
        } else {
            self.milestones
                .iter()
                .cloned()
                .map(Milestone::try_from)
                .collect::<Result<Vec<_>, _>>()?
        };

        tracing::debug!(
            levels = levels.len(),
            ranks = ranks.len(),
            milestones = milestones.len(),
            "Building catalog from config overrides"
        );
        Catalog::from_parts(levels, ranks, milestones)
    }
}
