//! Achievement milestones: definitions, registry and unlock evaluation

mod definitions;
mod evaluator;

pub use definitions::{Milestone, MilestoneRegistry, Requirement, RequirementKind};
pub use evaluator::{MilestoneEvaluator, MilestoneStatus};
