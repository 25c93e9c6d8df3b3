//! Artifact consumers
//!
//! Where finished certificates go once the pipeline hands them off.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{ImageFormat, RgbImage};

/// A finished export. Ownership passes to the sink on delivery.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub certificate_id: String,
    /// The assembled PDF document
    pub document: Vec<u8>,
    /// The raster embedded in `document`
    pub raster: RgbImage,
}

#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Take ownership of `artifact` and return where it ended up
    async fn deliver(&self, artifact: ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory (the "downloads" folder)
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    write_preview_png: bool,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_preview_png: false,
        }
    }

    /// Also write the raster as `<name>.png` next to the PDF
    pub fn with_preview_png(mut self, enabled: bool) -> Self {
        self.write_preview_png = enabled;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to a hidden `.part` file next to `filename`.
    /// A failed write removes whatever was written.
    async fn stage(&self, filename: &str, bytes: &[u8]) -> Result<Staged> {
        let staged = Staged {
            temp: self.dir.join(format!(".{filename}.part")),
            path: self.dir.join(filename),
        };

        if let Err(e) = tokio::fs::write(&staged.temp, bytes).await {
            discard(&staged.temp).await;
            return Err(e)
                .with_context(|| format!("Failed to write temp file: {}", staged.temp.display()));
        }
        Ok(staged)
    }
}

/// A fully written file that is not yet visible under its final name
struct Staged {
    temp: PathBuf,
    path: PathBuf,
}

async fn discard(path: &Path) {
    let _ = tokio::fs::remove_file(path).await;
}

/// Move every staged file into place, in order.
///
/// If one rename fails, files already moved are removed and the remaining
/// temp files are discarded, so either all files appear or none do.
async fn commit(staged: &[Staged]) -> Result<()> {
    for (i, file) in staged.iter().enumerate() {
        if let Err(e) = tokio::fs::rename(&file.temp, &file.path).await {
            for done in &staged[..i] {
                discard(&done.path).await;
            }
            for pending in &staged[i..] {
                discard(&pending.temp).await;
            }
            return Err(e)
                .with_context(|| format!("Failed to move certificate to {}", file.path.display()));
        }
    }
    Ok(())
}

#[async_trait]
impl ArtifactSink for FileSink {
    async fn deliver(&self, artifact: ExportArtifact) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create output directory: {}", self.dir.display()))?;

        // The PDF goes last so it only becomes visible once everything else is in place
        let mut outputs = Vec::with_capacity(2);
        if self.write_preview_png {
            let mut png = Vec::new();
            artifact
                .raster
                .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
                .context("Failed to encode certificate preview")?;
            let preview = Path::new(&artifact.filename).with_extension("png");
            outputs.push((preview.to_string_lossy().into_owned(), png));
        }
        let path = self.dir.join(&artifact.filename);
        let bytes = artifact.document.len();
        outputs.push((artifact.filename, artifact.document));

        let mut staged = Vec::with_capacity(outputs.len());
        for (name, data) in &outputs {
            match self.stage(name, data).await {
                Ok(file) => staged.push(file),
                Err(e) => {
                    for file in &staged {
                        discard(&file.temp).await;
                    }
                    return Err(e);
                }
            }
        }
        commit(&staged).await?;

        tracing::debug!(path = %path.display(), bytes, "Certificate written");
        Ok(path)
    }
}

/// Keeps delivered artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<ExportArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn take(&self) -> Vec<ExportArtifact> {
        std::mem::take(&mut *self.delivered.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl ArtifactSink for MemorySink {
    async fn deliver(&self, artifact: ExportArtifact) -> Result<PathBuf> {
        let path = PathBuf::from(&artifact.filename);
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(artifact);
        Ok(path)
    }
}
