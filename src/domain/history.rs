use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed typing test, as reported by the history collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub date: DateTime<Utc>,
    pub wpm: u32,
    /// Accuracy in percent (0-100)
    pub accuracy: f32,
    pub xp_earned: u64,
}

/// Order results most-recent-first; ties keep their incoming order
pub fn most_recent_first(results: &mut [TestResult]) {
    results.sort_by(|a, b| b.date.cmp(&a.date));
}
