//! Settings configuration types

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Certificate export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory certificates are written to.
    /// Defaults to the user's download directory, or the working directory.
    /// A leading `~/` is expanded to the home directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// How long to wait for a certificate to finish painting before giving up
    #[serde(default = "default_render_timeout_ms")]
    pub render_timeout_ms: u64,

    /// Also write the rendered raster as a PNG next to the PDF
    #[serde(default)]
    pub write_preview_png: bool,
}

fn default_render_timeout_ms() -> u64 {
    3000
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            render_timeout_ms: default_render_timeout_ms(),
            write_preview_png: false,
        }
    }
}

impl ExportSettings {
    pub fn render_timeout(&self) -> Duration {
        Duration::from_millis(self.render_timeout_ms)
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => expand_home(dir),
            None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
