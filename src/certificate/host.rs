//! Rendering collaborator
//!
//! A host paints a certificate document onto a named render target and
//! signals when painting has finished.

use std::collections::HashSet;
use std::sync::Mutex;

use tokio::sync::oneshot;

use super::document::CertificateDocument;
use super::scene::{self, Scene, Viewport};

pub trait RenderHost: Send + Sync {
    /// Start painting `document` into `target` at `viewport` size.
    ///
    /// The receiver resolves with the painted scene once painting is
    /// complete. If the target cannot be located the sender is dropped
    /// without sending.
    fn mount(
        &self,
        target: &str,
        document: &CertificateDocument,
        viewport: Viewport,
    ) -> oneshot::Receiver<Scene>;

    /// Release whatever `mount` set up for `target`
    fn unmount(&self, _target: &str) {}
}

/// Paints certificates off-screen, immediately
#[derive(Debug, Default)]
pub struct OffscreenHost {
    mounted: Mutex<HashSet<String>>,
}

impl OffscreenHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self, target: &str) -> bool {
        self.mounted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(target)
    }
}

impl RenderHost for OffscreenHost {
    fn mount(
        &self,
        target: &str,
        document: &CertificateDocument,
        viewport: Viewport,
    ) -> oneshot::Receiver<Scene> {
        let (tx, rx) = oneshot::channel();
        if target.is_empty() {
            tracing::warn!("Refusing to mount certificate on an unnamed target");
            return rx;
        }

        self.mounted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(target.to_string());
        let _ = tx.send(scene::compose(document, viewport));
        rx
    }

    fn unmount(&self, target: &str) {
        self.mounted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(target);
    }
}
