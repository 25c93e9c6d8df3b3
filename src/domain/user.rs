use serde::{Deserialize, Serialize};

/// Point-in-time view of a user's statistics.
///
/// Supplied by the session collaborator on every call; nothing in this crate
/// mutates or caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub id: String,
    pub username: String,
    /// Current level (>= 1)
    pub level: u32,
    /// Cumulative experience points
    pub xp: u64,
    pub total_tests: u32,
    pub best_wpm: u32,
}

impl UserSnapshot {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            level: 1,
            xp: 0,
            total_tests: 0,
            best_wpm: 0,
        }
    }

    pub fn with_level(mut self, level: u32, xp: u64) -> Self {
        self.level = level;
        self.xp = xp;
        self
    }

    pub fn with_tests(mut self, total_tests: u32) -> Self {
        self.total_tests = total_tests;
        self
    }

    pub fn with_best_wpm(mut self, best_wpm: u32) -> Self {
        self.best_wpm = best_wpm;
        self
    }

    /// True when every numeric field of `self` is at least the matching field of `other`
    pub fn dominates(&self, other: &UserSnapshot) -> bool {
        self.level >= other.level
            && self.xp >= other.xp
            && self.total_tests >= other.total_tests
            && self.best_wpm >= other.best_wpm
    }
}
