//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::{oneshot, watch};

use typemaster::UserSnapshot;
use typemaster::certificate::{
    ArtifactSink, CertificateDocument, ExportArtifact, ExportState, RenderHost, Scene, Viewport,
    compose, palette,
};

/// Snapshot with every progression field set
pub fn user(level: u32, xp: u64, total_tests: u32, best_wpm: u32) -> UserSnapshot {
    UserSnapshot::new("abcdef-123", "ada")
        .with_level(level, xp)
        .with_tests(total_tests)
        .with_best_wpm(best_wpm)
}

/// Host whose targets never exist: the completion signal is dropped
#[derive(Debug, Default)]
pub struct MissingTargetHost;

impl RenderHost for MissingTargetHost {
    fn mount(
        &self,
        _target: &str,
        _document: &CertificateDocument,
        _viewport: Viewport,
    ) -> oneshot::Receiver<Scene> {
        let (_tx, rx) = oneshot::channel();
        rx
    }
}

/// Host that mounts but never finishes painting
#[derive(Debug, Default)]
pub struct StalledHost {
    pending: Mutex<Vec<oneshot::Sender<Scene>>>,
}

impl RenderHost for StalledHost {
    fn mount(
        &self,
        _target: &str,
        _document: &CertificateDocument,
        _viewport: Viewport,
    ) -> oneshot::Receiver<Scene> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(tx);
        rx
    }
}

/// Host that paints an empty 0x0 scene
#[derive(Debug, Default)]
pub struct BlankHost;

impl RenderHost for BlankHost {
    fn mount(
        &self,
        _target: &str,
        _document: &CertificateDocument,
        _viewport: Viewport,
    ) -> oneshot::Receiver<Scene> {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Scene::new(
            Viewport {
                width: 0,
                height: 0,
            },
            palette::PAPER,
        ));
        rx
    }
}

/// Host that finishes painting only once the gate is opened
#[derive(Debug)]
pub struct GatedHost {
    gate: watch::Sender<bool>,
    blank: bool,
    pub mounted: Mutex<Vec<String>>,
    pub unmounted: Mutex<Vec<String>>,
}

impl Default for GatedHost {
    fn default() -> Self {
        Self {
            gate: watch::channel(false).0,
            blank: false,
            mounted: Mutex::default(),
            unmounted: Mutex::default(),
        }
    }
}

impl GatedHost {
    /// Gated host that paints an empty 0x0 scene
    pub fn blank() -> Self {
        Self {
            blank: true,
            ..Self::default()
        }
    }

    /// Let every pending and future mount finish painting
    pub fn open(&self) {
        self.gate.send_replace(true);
    }
}

impl RenderHost for GatedHost {
    fn mount(
        &self,
        target: &str,
        document: &CertificateDocument,
        viewport: Viewport,
    ) -> oneshot::Receiver<Scene> {
        self.mounted.lock().unwrap().push(target.to_string());
        let (tx, rx) = oneshot::channel();
        let scene = if self.blank {
            Scene::new(
                Viewport {
                    width: 0,
                    height: 0,
                },
                palette::PAPER,
            )
        } else {
            compose(document, viewport)
        };
        let mut gate = self.gate.subscribe();
        tokio::spawn(async move {
            if gate.wait_for(|open| *open).await.is_ok() {
                let _ = tx.send(scene);
            }
        });
        rx
    }

    fn unmount(&self, target: &str) {
        self.unmounted.lock().unwrap().push(target.to_string());
    }
}

/// Sink that always fails, like a full disk
#[derive(Debug, Default)]
pub struct FailingSink;

#[async_trait]
impl ArtifactSink for FailingSink {
    async fn deliver(&self, _artifact: ExportArtifact) -> Result<PathBuf> {
        Err(anyhow!("disk full"))
    }
}

/// Sink that records the exporter state seen at delivery time
#[derive(Debug, Default)]
pub struct ProbeSink {
    pub probe: OnceLock<watch::Receiver<ExportState>>,
    pub seen: Mutex<Vec<ExportState>>,
}

#[async_trait]
impl ArtifactSink for ProbeSink {
    async fn deliver(&self, artifact: ExportArtifact) -> Result<PathBuf> {
        if let Some(rx) = self.probe.get() {
            let state = *rx.borrow();
            self.seen.lock().unwrap().push(state);
        }
        Ok(PathBuf::from(artifact.filename))
    }
}
