//! Certificate issuance
//!
//! A certificate goes through four steps:
//!
//! 1. [`CertificateDocumentBuilder`] resolves the text fields (pure data).
//! 2. A [`RenderHost`] paints the document into a [`Scene`] on a named target.
//! 3. The scene is rasterized at 2x into an RGB image.
//! 4. The image is packaged as a one-page landscape A4 PDF and handed to an
//!    [`ArtifactSink`].
//!
//! [`CertificateExporter`] drives steps 2-4 as a state machine.

mod document;
mod exporter;
mod font;
mod host;
mod pdf;
mod raster;
mod scene;
mod sink;

pub use document::{
    CERTIFICATE_ID_DELIMITER, CERTIFICATE_ID_PREFIX, CertificateDocument,
    CertificateDocumentBuilder, certificate_id, reason_text, value_label,
};
pub use exporter::{
    CertificateExporter, DEFAULT_RENDER_TIMEOUT, ExportError, ExportReport, ExportState,
    FailureKind, certificate_filename, render_target,
};
pub use host::{OffscreenHost, RenderHost};
pub use pdf::{A4_LANDSCAPE, PackagingError, package};
pub use raster::{EXPORT_SCALE, MAX_RASTER_PIXELS, RasterError, rasterize};
pub use scene::{
    Anchor, CERTIFICATE_VIEWPORT, Color, DrawCommand, Rect, Scene, Viewport, compose, palette,
};
pub use sink::{ArtifactSink, ExportArtifact, FileSink, MemorySink};
