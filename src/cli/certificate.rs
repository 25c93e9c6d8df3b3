//! Certificate command implementation

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};

use typemaster::certificate::{CertificateExporter, ExportError, FileSink, OffscreenHost};
use typemaster::session::SessionSource;

use super::Context;

/// Export the certificate for one milestone as PDF
pub async fn certificate_command(
    ctx: &Context,
    milestone_id: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let user = ctx.profile.snapshot()?;
    let Some(milestone) = ctx.catalog.milestones.get(milestone_id) else {
        bail!("Unknown milestone: {milestone_id}");
    };

    let settings = &ctx.config.export;
    let dir = out.unwrap_or_else(|| settings.resolved_output_dir());
    let sink = FileSink::new(dir).with_preview_png(settings.write_preview_png);
    let exporter = CertificateExporter::new(Arc::new(OffscreenHost::new()), Arc::new(sink))
        .with_render_timeout(settings.render_timeout());

    println!("Generating certificate for {}...", milestone.name);
    match exporter.export(&user, milestone).await {
        Ok(report) => {
            println!("Certificate {} saved to {}", report.certificate_id, report.location.display());
            Ok(())
        }
        Err(e) => Err(failure(&e)),
    }
}

/// Error returned to `main`; the underlying cause is already logged by the exporter
fn failure(e: &ExportError) -> anyhow::Error {
    anyhow!("{}", e.user_message())
}
