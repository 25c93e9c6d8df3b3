//! Milestone definitions
//!
//! Each milestone is gated by exactly one requirement.

use std::collections::HashSet;

use crate::catalog::TableError;

/// What a milestone requires; one threshold, never several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    ByLevel(u32),
    ByBestWpm(u32),
    ByTestCount(u32),
}

impl Requirement {
    pub fn threshold(&self) -> u32 {
        match *self {
            Self::ByLevel(n) | Self::ByBestWpm(n) | Self::ByTestCount(n) => n,
        }
    }

    pub fn kind(&self) -> RequirementKind {
        match self {
            Self::ByLevel(_) => RequirementKind::Level,
            Self::ByBestWpm(_) => RequirementKind::Speed,
            Self::ByTestCount(_) => RequirementKind::Consistency,
        }
    }
}

/// Requirement grouping for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementKind {
    Level,
    Speed,
    Consistency,
}

impl RequirementKind {
    pub fn all() -> &'static [RequirementKind] {
        &[Self::Level, Self::Speed, Self::Consistency]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Level => "Ranking Up",
            Self::Speed => "Speed",
            Self::Consistency => "Consistency",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Level => "Reach new Levels",
            Self::Speed => "Hit WPM milestones",
            Self::Consistency => "Complete more tests",
        }
    }
}

/// A named achievement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Registry id (lowercase, hyphenated); appears verbatim in file names
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement: Requirement,
}

impl Milestone {
    pub fn new(id: &str, name: &str, description: &str, icon: &str, requirement: Requirement) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            requirement,
        }
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validated set of milestones, in definition order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneRegistry {
    milestones: Vec<Milestone>,
}

impl MilestoneRegistry {
    pub fn new(milestones: Vec<Milestone>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for m in &milestones {
            if !is_valid_id(&m.id) {
                return Err(TableError::InvalidMilestoneId { id: m.id.clone() });
            }
            if !seen.insert(m.id.as_str()) {
                return Err(TableError::DuplicateMilestone { id: m.id.clone() });
            }
        }
        Ok(Self { milestones })
    }

    pub fn get(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones.iter()
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn by_kind(&self, kind: RequirementKind) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| m.requirement.kind() == kind)
            .collect()
    }

    /// The level landmark whose threshold is exactly `level`
    pub fn level_landmark(&self, level: u32) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| m.requirement == Requirement::ByLevel(level))
    }
}
