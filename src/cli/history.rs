//! History command implementation

use anyhow::Result;

use typemaster::TestResult;
use typemaster::session::HistorySource;

use super::Context;

/// Show recent test results, most recent first
pub fn history_command(ctx: &Context, limit: usize) -> Result<()> {
    let results = ctx.profile.recent_results()?;
    if results.is_empty() {
        println!("No tests taken yet.");
        return Ok(());
    }

    let shown = &results[..results.len().min(limit)];
    println!("Test history ({} of {}):\n", shown.len(), results.len());
    print_results(shown);
    Ok(())
}

pub(super) fn print_results(results: &[TestResult]) {
    println!("  {:<12} {:>5} {:>9} {:>6}", "DATE", "WPM", "ACCURACY", "XP");
    for result in results {
        println!(
            "  {:<12} {:>5} {:>8.1}% {:>6}",
            result.date.format("%Y-%m-%d"),
            result.wpm,
            result.accuracy,
            format!("+{}", result.xp_earned)
        );
    }
}
