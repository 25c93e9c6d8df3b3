//! Single-flight exports and cleanup of abandoned runs

use std::sync::Arc;
use std::time::Duration;

use typemaster::catalog::Catalog;
use typemaster::certificate::{CertificateExporter, ExportError, ExportState, MemorySink};

use crate::common::{GatedHost, user};

#[tokio::test]
async fn test_second_request_rejected_while_in_flight() {
    let host = Arc::new(GatedHost::default());
    let sink = Arc::new(MemorySink::new());
    let exporter = Arc::new(CertificateExporter::new(host.clone(), sink.clone()));
    let snapshot = user(10, 7_500, 50, 90);
    let registry = &Catalog::builtin().milestones;
    let first = registry.get("gold").unwrap().clone();

    let mut states = exporter.subscribe();
    let running = {
        let exporter = exporter.clone();
        let snapshot = snapshot.clone();
        tokio::spawn(async move { exporter.export(&snapshot, &first).await })
    };

    states
        .wait_for(|s| *s == ExportState::Rendering)
        .await
        .unwrap();
    assert!(exporter.is_exporting());
    let active = exporter.active_document().unwrap();
    assert_eq!(active.milestone_name, "Master Typist");

    let second = registry.get("speed-80").unwrap();
    let err = exporter.export(&snapshot, second).await.unwrap_err();
    assert_eq!(err, ExportError::ExportInProgress);
    assert_eq!(err.failure_kind(), None);
    assert_eq!(exporter.state(), ExportState::Rendering);

    host.open();
    let report = running.await.unwrap().unwrap();
    assert_eq!(report.milestone_id, "gold");

    assert_eq!(exporter.state(), ExportState::Done);
    assert!(!exporter.is_exporting());
    assert_eq!(sink.len(), 1);
    assert_eq!(*host.mounted.lock().unwrap(), vec!["cert-gold".to_string()]);
    assert_eq!(*host.unmounted.lock().unwrap(), vec!["cert-gold".to_string()]);
}

#[tokio::test]
async fn test_abandoned_export_releases_flag() {
    let host = Arc::new(GatedHost::default());
    let exporter = CertificateExporter::new(host.clone(), Arc::new(MemorySink::new()));
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();
    let snapshot = user(1, 0, 1, 20);

    let abandoned = tokio::time::timeout(
        Duration::from_millis(20),
        exporter.export(&snapshot, milestone),
    )
    .await;
    assert!(abandoned.is_err());

    assert!(!exporter.is_exporting());
    assert_eq!(exporter.state(), ExportState::Idle);
    assert!(exporter.active_document().is_none());
    assert_eq!(*host.unmounted.lock().unwrap(), vec!["cert-bronze".to_string()]);

    // Painting finishes for the new request once the gate opens
    host.open();
    let report = exporter.export(&snapshot, milestone).await.unwrap();
    assert_eq!(report.milestone_id, "bronze");
}
