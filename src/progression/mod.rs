//! XP, levels and ranks
//!
//! Pure lookups over immutable tables; safe to call from any number of
//! readers at once.

mod calculator;
mod ladder;
mod ranks;
mod thresholds;

pub use calculator::{FALLBACK_LEVEL_SPAN, Progress, ProgressView, ProgressionCalculator};
pub use ladder::{LadderStep, RankLadder};
pub use ranks::{RankEntry, RankTable};
pub use thresholds::{ThresholdEntry, ThresholdTable};
