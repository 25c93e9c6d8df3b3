//! Milestones command implementation

use anyhow::Result;

use typemaster::certificate::value_label;
use typemaster::milestones::{MilestoneEvaluator, RequirementKind};
use typemaster::session::SessionSource;

use super::Context;

/// List every milestone grouped by requirement kind
pub fn milestones_command(ctx: &Context) -> Result<()> {
    let user = ctx.profile.snapshot()?;
    let statuses = MilestoneEvaluator::statuses(&ctx.catalog.milestones, &user);
    let unlocked = statuses.iter().filter(|s| s.unlocked).count();

    println!("Milestones ({unlocked} of {} unlocked)", statuses.len());

    for &kind in RequirementKind::all() {
        let group: Vec<_> = statuses
            .iter()
            .filter(|s| s.milestone.requirement.kind() == kind)
            .collect();
        if group.is_empty() {
            continue;
        }

        println!("\n{}:", kind.label());
        for status in group {
            let m = status.milestone;
            let state = if status.unlocked { "unlocked" } else { "locked" };
            println!(
                "  [{:<8}] {:<22} {:<10} {}",
                state,
                m.name,
                value_label(m.requirement),
                m.id
            );
        }
    }

    println!("\nExport an unlocked certificate with `typemaster certificate <ID>`.");
    Ok(())
}
