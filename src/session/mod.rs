//! Session and history collaborators
//!
//! The engine only reads from these: a snapshot of the signed-in user and
//! their past test results. [`ProfileFile`] serves both from a JSON file:
//!
//! ```json
//! {
//!   "user": { "id": "...", "username": "...", "level": 5, "xp": 1300,
//!             "totalTests": 12, "bestWpm": 61 },
//!   "history": [ { "id": "...", "date": "2026-03-01T10:00:00Z",
//!                  "wpm": 58, "accuracy": 96.5, "xpEarned": 140 } ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{TestResult, UserSnapshot, most_recent_first};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read profile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no user is signed in")]
    SignedOut,

    #[error("malformed user snapshot: {0}")]
    Malformed(String),
}

/// Supplies the current user's snapshot on demand
pub trait SessionSource {
    fn snapshot(&self) -> Result<UserSnapshot, SessionError>;
}

/// Supplies past test results, most recent first
pub trait HistorySource {
    fn recent_results(&self) -> Result<Vec<TestResult>, SessionError>;
}

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    user: Option<UserSnapshot>,
    #[serde(default)]
    history: Vec<TestResult>,
}

/// JSON profile on disk; re-read on every call
#[derive(Debug, Clone)]
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.typemaster/profile.json`
    pub fn default_path() -> PathBuf {
        crate::config::Config::global_config_dir().join("profile.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Profile, SessionError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SessionError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionSource for ProfileFile {
    fn snapshot(&self) -> Result<UserSnapshot, SessionError> {
        let user = self.load()?.user.ok_or(SessionError::SignedOut)?;
        if user.level < 1 {
            return Err(SessionError::Malformed(format!(
                "level must be at least 1, got {}",
                user.level
            )));
        }
        Ok(user)
    }
}

impl HistorySource for ProfileFile {
    fn recent_results(&self) -> Result<Vec<TestResult>, SessionError> {
        let mut history = self.load()?.history;
        most_recent_first(&mut history);
        Ok(history)
    }
}
