//! Order of exporter state transitions

use std::sync::Arc;

use tokio::task::JoinHandle;

use typemaster::catalog::Catalog;
use typemaster::certificate::{CertificateExporter, ExportState, FailureKind, MemorySink};

use crate::common::{GatedHost, user};

/// Record every state the exporter publishes until it comes to rest.
/// Painting is released once `Rendering` has been observed.
fn record_transitions(
    exporter: &CertificateExporter,
    host: Arc<GatedHost>,
) -> JoinHandle<Vec<ExportState>> {
    let mut states = exporter.subscribe();
    tokio::spawn(async move {
        let mut seen = Vec::new();
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            seen.push(state);
            match state {
                ExportState::Rendering => host.open(),
                ExportState::Done | ExportState::Failed(_) => break,
                _ => {}
            }
        }
        seen
    })
}

#[tokio::test]
async fn test_successful_export_passes_every_stage_in_order() {
    let host = Arc::new(GatedHost::default());
    let exporter = CertificateExporter::new(host.clone(), Arc::new(MemorySink::new()));
    let recorder = record_transitions(&exporter, host);
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap();

    assert_eq!(
        recorder.await.unwrap(),
        vec![
            ExportState::Rendering,
            ExportState::Capturing,
            ExportState::Packaging,
            ExportState::Done,
        ]
    );
}

#[tokio::test]
async fn test_rasterization_failure_stops_after_capturing() {
    let host = Arc::new(GatedHost::blank());
    let exporter = CertificateExporter::new(host.clone(), Arc::new(MemorySink::new()));
    let recorder = record_transitions(&exporter, host);
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    assert_eq!(
        recorder.await.unwrap(),
        vec![
            ExportState::Rendering,
            ExportState::Capturing,
            ExportState::Failed(FailureKind::Rasterization),
        ]
    );
}
