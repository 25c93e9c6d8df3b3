//! CLI command implementations

pub mod certificate;
pub mod dashboard;
pub mod history;
pub mod levels;
pub mod milestones;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use typemaster::catalog::Catalog;
use typemaster::config::Config;
use typemaster::session::ProfileFile;

/// Everything a command needs: profile, config and the validated tables
pub struct Context {
    pub profile: ProfileFile,
    pub config: Config,
    pub catalog: Catalog,
}

impl Context {
    pub fn load(profile: Option<PathBuf>, config: Option<&Path>) -> Result<Self> {
        let config = Config::load(config, Path::new("."))?;
        let catalog = config
            .catalog()
            .context("Invalid level, rank or milestone table in config")?;
        let profile = ProfileFile::new(profile.unwrap_or_else(ProfileFile::default_path));
        tracing::debug!("Using profile {}", profile.path().display());

        Ok(Self {
            profile,
            config,
            catalog,
        })
    }
}

/// Terminal glyph for an icon class such as `fa-crown text-red-500`
pub fn glyph(icon: &str) -> &'static str {
    let name = icon
        .split_whitespace()
        .find_map(|class| class.strip_prefix("fa-"))
        .unwrap_or_default();
    match name {
        "seedling" => "🌱",
        "scroll" => "📜",
        "shield-halved" => "🛡",
        "bolt" => "⚡",
        "user-ninja" => "🥷",
        "crown" => "👑",
        "dragon" => "🐉",
        "medal" => "🏅",
        "fire" => "🔥",
        "gauge-simple" | "gauge-high" => "⏱",
        _ => "•",
    }
}
