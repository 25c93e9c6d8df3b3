//! Successful exports through the full pipeline

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::tempdir;

use typemaster::catalog::Catalog;
use typemaster::certificate::{
    A4_LANDSCAPE, CertificateExporter, ExportState, FileSink, MemorySink, OffscreenHost,
};

use crate::common::{ProbeSink, user};

fn issued() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[tokio::test]
async fn test_export_to_memory_sink() {
    let catalog = Catalog::builtin();
    let milestone = catalog.milestones.get("rank-grandmaster").unwrap();
    let sink = Arc::new(MemorySink::new());
    let exporter = CertificateExporter::new(Arc::new(OffscreenHost::new()), sink.clone());

    let report = exporter
        .export_on(&user(40, 160_000, 60, 100), milestone, issued())
        .await
        .unwrap();

    assert_eq!(report.milestone_id, "rank-grandmaster");
    assert_eq!(report.filename, "TypeMaster_Certificate_rank-grandmaster.pdf");
    assert_eq!(report.certificate_id, "CERT-ABCDE-RANK-GRANDMASTER-2026");

    let artifacts = sink.take();
    assert_eq!(artifacts.len(), 1);
    let artifact = &artifacts[0];
    assert_eq!(artifact.filename, report.filename);
    assert_eq!(artifact.document.len(), report.bytes);
    assert!(artifact.document.starts_with(b"%PDF-1.4\n"));
    assert!(artifact.document.ends_with(b"%%EOF\n"));
    assert_eq!(artifact.raster.dimensions(), (1600, 1200));

    let (width, height) = A4_LANDSCAPE;
    let media_box = format!("/MediaBox [0 0 {width:.2} {height:.2}]");
    assert!(
        artifact
            .document
            .windows(media_box.len())
            .any(|w| w == media_box.as_bytes())
    );

    assert_eq!(exporter.state(), ExportState::Done);
    assert!(!exporter.is_exporting());
    assert!(exporter.active_document().is_none());
}

#[tokio::test]
async fn test_export_to_file_sink() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("downloads");
    let milestone = Catalog::builtin().milestones.get("silver").unwrap();
    let sink = FileSink::new(&out).with_preview_png(true);
    let exporter = CertificateExporter::new(Arc::new(OffscreenHost::new()), Arc::new(sink));

    let report = exporter
        .export_on(&user(3, 500, 30, 45), milestone, issued())
        .await
        .unwrap();

    assert_eq!(report.location, out.join("TypeMaster_Certificate_silver.pdf"));
    let written = std::fs::read(&report.location).unwrap();
    assert_eq!(written.len(), report.bytes);
    assert!(written.starts_with(b"%PDF"));
    assert!(out.join("TypeMaster_Certificate_silver.png").exists());

    let leftovers: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_render_target_released_after_export() {
    let host = Arc::new(OffscreenHost::new());
    let exporter = CertificateExporter::new(host.clone(), Arc::new(MemorySink::new()));
    let milestone = Catalog::builtin().milestones.get("bronze").unwrap();

    exporter
        .export_on(&user(1, 0, 1, 10), milestone, issued())
        .await
        .unwrap();

    assert!(!host.is_mounted("cert-bronze"));
}

#[tokio::test]
async fn test_delivery_happens_while_packaging() {
    let sink = Arc::new(ProbeSink::default());
    let exporter = CertificateExporter::new(Arc::new(OffscreenHost::new()), sink.clone());
    sink.probe.set(exporter.subscribe()).unwrap();
    let milestone = Catalog::builtin().milestones.get("speed-40").unwrap();

    exporter
        .export_on(&user(2, 200, 4, 41), milestone, issued())
        .await
        .unwrap();

    assert_eq!(*sink.seen.lock().unwrap(), vec![ExportState::Packaging]);
    assert_eq!(exporter.state(), ExportState::Done);
}

#[tokio::test]
async fn test_done_accepts_next_export() {
    let sink = Arc::new(MemorySink::new());
    let exporter = CertificateExporter::new(Arc::new(OffscreenHost::new()), sink.clone());
    let snapshot = user(10, 7_600, 30, 85);
    let registry = &Catalog::builtin().milestones;

    for id in ["rank-warrior", "speed-80", "silver"] {
        let milestone = registry.get(id).unwrap();
        let report = exporter.export_on(&snapshot, milestone, issued()).await.unwrap();
        assert_eq!(report.milestone_id, id);
    }

    let filenames: Vec<_> = sink.take().into_iter().map(|a| a.filename).collect();
    assert_eq!(
        filenames,
        vec![
            "TypeMaster_Certificate_rank-warrior.pdf",
            "TypeMaster_Certificate_speed-80.pdf",
            "TypeMaster_Certificate_silver.pdf",
        ]
    );
}
