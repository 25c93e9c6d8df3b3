//! Certificate export pipeline
//!
//! ```text
//! Idle -> Rendering -> Capturing -> Packaging -> Done
//!            |            |             |
//!            +------------+-------------+--> Failed
//! ```
//!
//! At most one export runs at a time. The in-progress flag is owned by an
//! RAII guard, so every exit path (success, failure, panic, a dropped
//! future) clears it and releases the render target.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::sync::watch;

use super::document::{CertificateDocument, CertificateDocumentBuilder};
use super::host::RenderHost;
use super::pdf;
use super::raster::{self, EXPORT_SCALE};
use super::scene::CERTIFICATE_VIEWPORT;
use super::sink::{ArtifactSink, ExportArtifact};
use crate::domain::UserSnapshot;
use crate::milestones::{Milestone, MilestoneEvaluator};

pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_millis(3000);

/// `TypeMaster_Certificate_<milestone id>.pdf`
pub fn certificate_filename(milestone_id: &str) -> String {
    format!("TypeMaster_Certificate_{milestone_id}.pdf")
}

/// Name of the render target a milestone's certificate is painted into
pub fn render_target(milestone_id: &str) -> String {
    format!("cert-{milestone_id}")
}

/// Pipeline stage that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RenderTargetMissing,
    Rasterization,
    Packaging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Rendering,
    Capturing,
    Packaging,
    Done,
    Failed(FailureKind),
}

impl ExportState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Rendering | Self::Capturing | Self::Packaging)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("milestone {milestone_id:?} is locked")]
    LockedMilestone { milestone_id: String },

    #[error("a certificate export is already in progress")]
    ExportInProgress,

    #[error("render target {target:?} unavailable: {reason}")]
    RenderTargetMissing { target: String, reason: String },

    #[error("rasterization failed: {0}")]
    Rasterization(String),

    #[error("packaging failed: {0}")]
    Packaging(String),
}

impl ExportError {
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::LockedMilestone { .. } | Self::ExportInProgress => None,
            Self::RenderTargetMissing { .. } => Some(FailureKind::RenderTargetMissing),
            Self::Rasterization(_) => Some(FailureKind::Rasterization),
            Self::Packaging(_) => Some(FailureKind::Packaging),
        }
    }

    /// Message to show the user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::LockedMilestone { .. } => "This certificate is locked.",
            Self::ExportInProgress => "A certificate is already being generated.",
            _ => "Failed to generate PDF.",
        }
    }
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub milestone_id: String,
    pub certificate_id: String,
    pub filename: String,
    pub location: PathBuf,
    pub bytes: usize,
}

pub struct CertificateExporter {
    host: Arc<dyn RenderHost>,
    sink: Arc<dyn ArtifactSink>,
    render_timeout: Duration,
    in_progress: AtomicBool,
    state: watch::Sender<ExportState>,
    active: Mutex<Option<CertificateDocument>>,
}

/// Holds the in-progress flag for one export
struct InFlight<'a> {
    exporter: &'a CertificateExporter,
    target: String,
}

impl<'a> InFlight<'a> {
    fn acquire(exporter: &'a CertificateExporter, target: String) -> Option<Self> {
        exporter
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { exporter, target })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let exporter = self.exporter;
        exporter.host.unmount(&self.target);
        exporter.set_active(None);
        // A future dropped mid-pipeline never reached Done/Failed
        if exporter.state().is_busy() {
            exporter.state.send_replace(ExportState::Idle);
        }
        exporter.in_progress.store(false, Ordering::Release);
    }
}

impl CertificateExporter {
    pub fn new(host: Arc<dyn RenderHost>, sink: Arc<dyn ArtifactSink>) -> Self {
        Self {
            host,
            sink,
            render_timeout: DEFAULT_RENDER_TIMEOUT,
            in_progress: AtomicBool::new(false),
            state: watch::Sender::new(ExportState::Idle),
            active: Mutex::new(None),
        }
    }

    /// Upper bound on the wait for a render target to finish painting
    pub fn with_render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }

    pub fn state(&self) -> ExportState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ExportState> {
        self.state.subscribe()
    }

    pub fn is_exporting(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Document currently being exported, if any
    pub fn active_document(&self) -> Option<CertificateDocument> {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_active(&self, document: Option<CertificateDocument>) {
        *self.active.lock().unwrap_or_else(|e| e.into_inner()) = document;
    }

    fn transition(&self, next: ExportState) {
        let prev = self.state.send_replace(next);
        tracing::debug!(?prev, ?next, "Export state changed");
    }

    /// Export a certificate dated today (local time)
    pub async fn export(
        &self,
        user: &UserSnapshot,
        milestone: &Milestone,
    ) -> Result<ExportReport, ExportError> {
        self.export_on(user, milestone, Local::now().date_naive())
            .await
    }

    /// Export a certificate issued on `today`.
    ///
    /// Locked milestones and concurrent requests are refused without any
    /// state change. Pipeline faults end in `Failed` and are returned, never
    /// propagated as panics.
    pub async fn export_on(
        &self,
        user: &UserSnapshot,
        milestone: &Milestone,
        today: NaiveDate,
    ) -> Result<ExportReport, ExportError> {
        if !MilestoneEvaluator::is_unlocked(milestone, user) {
            tracing::warn!(milestone = %milestone.id, "Refusing export of locked certificate");
            return Err(ExportError::LockedMilestone {
                milestone_id: milestone.id.clone(),
            });
        }

        let target = render_target(&milestone.id);
        let Some(_guard) = InFlight::acquire(self, target.clone()) else {
            tracing::warn!(milestone = %milestone.id, "Export already in progress, ignoring request");
            return Err(ExportError::ExportInProgress);
        };

        let result = self.run(user, milestone, today, &target).await;
        match &result {
            Ok(report) => {
                self.transition(ExportState::Done);
                tracing::info!(
                    milestone = %report.milestone_id,
                    certificate_id = %report.certificate_id,
                    location = %report.location.display(),
                    bytes = report.bytes,
                    "Certificate exported"
                );
            }
            Err(e) => {
                if let Some(kind) = e.failure_kind() {
                    self.transition(ExportState::Failed(kind));
                }
                tracing::error!(milestone = %milestone.id, error = %e, "Certificate export failed");
            }
        }
        result
    }

    async fn run(
        &self,
        user: &UserSnapshot,
        milestone: &Milestone,
        today: NaiveDate,
        target: &str,
    ) -> Result<ExportReport, ExportError> {
        let document = CertificateDocumentBuilder::build(user, milestone, today);
        let certificate_id = document.certificate_id.clone();
        self.set_active(Some(document.clone()));

        self.transition(ExportState::Rendering);
        let painted = self.host.mount(target, &document, CERTIFICATE_VIEWPORT);
        let scene = match tokio::time::timeout(self.render_timeout, painted).await {
            Ok(Ok(scene)) => scene,
            Ok(Err(_)) => {
                return Err(ExportError::RenderTargetMissing {
                    target: target.to_string(),
                    reason: "target not found".to_string(),
                });
            }
            Err(_) => {
                return Err(ExportError::RenderTargetMissing {
                    target: target.to_string(),
                    reason: format!(
                        "not painted within {} ms",
                        self.render_timeout.as_millis()
                    ),
                });
            }
        };

        self.transition(ExportState::Capturing);
        let raster = tokio::task::spawn_blocking(move || raster::rasterize(&scene, EXPORT_SCALE))
            .await
            .map_err(|e| ExportError::Rasterization(e.to_string()))?
            .map_err(|e| ExportError::Rasterization(e.to_string()))?;
        tracing::debug!(width = raster.width(), height = raster.height(), "Certificate captured");

        self.transition(ExportState::Packaging);
        let (raster, packaged) = tokio::task::spawn_blocking(move || {
            let packaged = pdf::package(&raster);
            (raster, packaged)
        })
        .await
        .map_err(|e| ExportError::Packaging(e.to_string()))?;
        let document = packaged.map_err(|e| ExportError::Packaging(e.to_string()))?;

        let filename = certificate_filename(&milestone.id);
        let bytes = document.len();
        let artifact = ExportArtifact {
            filename: filename.clone(),
            certificate_id: certificate_id.clone(),
            document,
            raster,
        };
        let location = self
            .sink
            .deliver(artifact)
            .await
            .map_err(|e| ExportError::Packaging(format!("{e:#}")))?;

        Ok(ExportReport {
            milestone_id: milestone.id.clone(),
            certificate_id,
            filename,
            location,
            bytes,
        })
    }
}
