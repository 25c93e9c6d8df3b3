//! Refusals and stage failures

use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;

use typemaster::catalog::Catalog;
use typemaster::certificate::{
    CertificateExporter, ExportError, ExportState, FailureKind, FileSink, MemorySink,
};

use crate::common::{BlankHost, FailingSink, GatedHost, MissingTargetHost, StalledHost, user};

#[tokio::test]
async fn test_locked_milestone_is_refused() {
    let host = Arc::new(GatedHost::default());
    let sink = Arc::new(MemorySink::new());
    let exporter = CertificateExporter::new(host.clone(), sink.clone());
    let milestone = Catalog::builtin().milestones.get("speed-100").unwrap();

    let err = exporter
        .export(&user(12, 11_000, 40, 95), milestone)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ExportError::LockedMilestone {
            milestone_id: "speed-100".into()
        }
    );
    assert_eq!(err.user_message(), "This certificate is locked.");
    assert!(sink.is_empty());
    assert!(host.mounted.lock().unwrap().is_empty());
    assert_eq!(exporter.state(), ExportState::Idle);
    assert!(!exporter.is_exporting());
}

#[tokio::test]
async fn test_missing_render_target() {
    let sink = Arc::new(MemorySink::new());
    let exporter = CertificateExporter::new(Arc::new(MissingTargetHost), sink.clone());
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    assert!(matches!(
        &err,
        ExportError::RenderTargetMissing { target, .. } if target == "cert-bronze"
    ));
    assert_eq!(
        exporter.state(),
        ExportState::Failed(FailureKind::RenderTargetMissing)
    );
    assert!(!exporter.is_exporting());
    assert!(exporter.active_document().is_none());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_render_timeout_is_bounded() {
    let exporter = CertificateExporter::new(
        Arc::new(StalledHost::default()),
        Arc::new(MemorySink::new()),
    )
    .with_render_timeout(Duration::from_millis(50));
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    match err {
        ExportError::RenderTargetMissing { reason, .. } => assert!(reason.contains("50 ms")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!exporter.is_exporting());
}

#[tokio::test]
async fn test_rasterization_failure() {
    let sink = Arc::new(MemorySink::new());
    let exporter = CertificateExporter::new(Arc::new(BlankHost), sink.clone());
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    assert!(matches!(err, ExportError::Rasterization(_)));
    assert_eq!(err.user_message(), "Failed to generate PDF.");
    assert_eq!(exporter.state(), ExportState::Failed(FailureKind::Rasterization));
    assert!(!exporter.is_exporting());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_sink_failure_is_packaging_error() {
    let exporter = CertificateExporter::new(
        Arc::new(typemaster::certificate::OffscreenHost::new()),
        Arc::new(FailingSink),
    );
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    match &err {
        ExportError::Packaging(msg) => assert!(msg.contains("disk full")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(exporter.state(), ExportState::Failed(FailureKind::Packaging));
    assert!(!exporter.is_exporting());
}

#[tokio::test]
async fn test_unwritable_output_leaves_no_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"occupied").unwrap();

    let exporter = CertificateExporter::new(
        Arc::new(typemaster::certificate::OffscreenHost::new()),
        Arc::new(FileSink::new(&blocker)),
    );
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    assert_eq!(err.failure_kind(), Some(FailureKind::Packaging));
    assert_eq!(std::fs::read(&blocker).unwrap(), b"occupied");
}

#[tokio::test]
async fn test_failure_does_not_lock_out_next_request() {
    let exporter = CertificateExporter::new(
        Arc::new(MissingTargetHost),
        Arc::new(MemorySink::new()),
    );
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();
    let snapshot = user(1, 0, 1, 20);

    for _ in 0..3 {
        let err = exporter.export(&snapshot, milestone).await.unwrap_err();
        assert_ne!(err, ExportError::ExportInProgress);
    }
}

#[tokio::test]
async fn test_failed_preview_withholds_certificate() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("certs");
    std::fs::create_dir_all(out.join("TypeMaster_Certificate_bronze.png").join("keep")).unwrap();

    let exporter = CertificateExporter::new(
        Arc::new(typemaster::certificate::OffscreenHost::new()),
        Arc::new(FileSink::new(&out).with_preview_png(true)),
    );
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    let err = exporter.export(&user(1, 0, 1, 20), milestone).await.unwrap_err();

    assert_eq!(err.failure_kind(), Some(FailureKind::Packaging));
    assert_eq!(exporter.state(), ExportState::Failed(FailureKind::Packaging));
    assert!(!out.join("TypeMaster_Certificate_bronze.pdf").exists());

    let temp_files: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
        .collect();
    assert!(temp_files.is_empty());
}
