//! Levels command implementation

use anyhow::Result;

use typemaster::progression::RankLadder;
use typemaster::session::SessionSource;

use super::Context;

/// Show the rank ladder with the user's position on it
pub fn levels_command(ctx: &Context) -> Result<()> {
    let user = ctx.profile.snapshot()?;
    let catalog = &ctx.catalog;
    let steps = RankLadder::build(
        &catalog.ranks,
        &catalog.thresholds,
        &catalog.milestones,
        user.level,
    );

    println!("Rank ladder (you are level {}):\n", user.level);
    for step in steps {
        let marker = if step.current {
            ">"
        } else if step.unlocked {
            "*"
        } else {
            " "
        };
        let xp = step
            .xp_required
            .map(|xp| format!("{xp} XP"))
            .unwrap_or_else(|| "Varied".to_string());

        println!(
            "{} {} {:<18} Levels {}-{}  ({})",
            marker, super::glyph(&step.rank.icon), step.rank.title, step.rank.min_level, step.max_level, xp
        );
        if let Some(landmark) = step.landmark {
            println!("      Landmark: {}", landmark.name);
        }
    }

    Ok(())
}
