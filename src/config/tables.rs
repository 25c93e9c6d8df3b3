//! Table overrides read from the config file

use serde::{Deserialize, Serialize};

use crate::catalog::TableError;
use crate::milestones::{Milestone, Requirement};

/// Milestone as written in TOML.
///
/// Exactly one of the `required_*` fields must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_wpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tests: Option<u32>,
}

impl TryFrom<MilestoneConfig> for Milestone {
    type Error = TableError;

    fn try_from(cfg: MilestoneConfig) -> Result<Self, Self::Error> {
        let set: Vec<Requirement> = [
            cfg.required_level.map(Requirement::ByLevel),
            cfg.required_wpm.map(Requirement::ByBestWpm),
            cfg.required_tests.map(Requirement::ByTestCount),
        ]
        .into_iter()
        .flatten()
        .collect();

        let [requirement] = set[..] else {
            return Err(TableError::AmbiguousRequirement {
                id: cfg.id,
                found: set.len(),
            });
        };

        Ok(Milestone {
            id: cfg.id,
            name: cfg.name,
            description: cfg.description,
            icon: cfg.icon,
            requirement,
        })
    }
}
