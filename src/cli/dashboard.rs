//! Dashboard command implementation

use anyhow::Result;

use typemaster::milestones::MilestoneEvaluator;
use typemaster::session::{HistorySource, SessionSource};

use super::Context;
use super::history::print_results;

const RECENT_ACTIVITY: usize = 5;

/// Show the user's rank, level progress and recent activity
pub fn dashboard_command(ctx: &Context) -> Result<()> {
    let user = ctx.profile.snapshot()?;
    let view = ctx.catalog.progression().view(&user);

    println!("Welcome back, {}!\n", user.username);
    println!("  {} {}", super::glyph(&view.rank.icon), view.rank.title);
    println!("  Level {}", view.level);
    println!(
        "  {} / {} XP  ({})",
        view.xp,
        view.progress.ceiling_xp,
        view.percent_label()
    );
    println!("  {}", progress_bar(view.progress.percent, 30));
    println!();
    println!("  Best WPM:         {}", user.best_wpm);
    println!("  Tests completed:  {}", user.total_tests);

    let unlocked = MilestoneEvaluator::unlocked_set(&ctx.catalog.milestones, &user);
    println!(
        "  Milestones:       {} / {}",
        unlocked.len(),
        ctx.catalog.milestones.len()
    );

    let results = ctx.profile.recent_results()?;
    println!("\nRecent activity:\n");
    if results.is_empty() {
        println!("  No tests taken yet.");
    } else {
        print_results(&results[..results.len().min(RECENT_ACTIVITY)]);
    }

    Ok(())
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
