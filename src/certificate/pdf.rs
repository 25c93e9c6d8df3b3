//! Single-page PDF packaging
//!
//! Produces a PDF 1.4 file holding one landscape A4 page with the raster
//! drawn full-bleed (no margins).

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;

/// Landscape ISO A4 in PDF points
pub const A4_LANDSCAPE: (f32, f32) = (841.89, 595.28);

#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    #[error("raster image has no pixels")]
    EmptyImage,

    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Embed `image` as the only page of a new PDF document
pub fn package(image: &RgbImage) -> Result<Vec<u8>, PackagingError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PackagingError::EmptyImage);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image.as_raw())?;
    let pixels = encoder.finish()?;

    let (page_w, page_h) = A4_LANDSCAPE;
    let content = format!("q\n{page_w:.2} 0 0 {page_h:.2} 0 0 cm\n/Im0 Do\nQ\n");

    let mut pdf = PdfWriter::new()?;

    let catalog = pdf.object(b"<< /Type /Catalog /Pages 2 0 R >>")?;
    pdf.object(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>")?;
    pdf.object(
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
             /Resources << /XObject << /Im0 5 0 R >> >> /Contents 4 0 R >>"
        )
        .as_bytes(),
    )?;
    pdf.stream("", content.as_bytes())?;
    pdf.stream(
        &format!(
            "/Type /XObject /Subtype /Image /Width {width} /Height {height} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode"
        ),
        &pixels,
    )?;

    pdf.finish(catalog)
}

/// Minimal object writer that records offsets for the xref table
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> std::io::Result<Self> {
        let mut buf = Vec::new();
        // Binary marker comment so transfer tools treat the file as binary
        buf.write_all(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;
        Ok(Self {
            buf,
            offsets: Vec::new(),
        })
    }

    fn begin(&mut self) -> std::io::Result<usize> {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        writeln!(self.buf, "{id} 0 obj")?;
        Ok(id)
    }

    fn object(&mut self, body: &[u8]) -> std::io::Result<usize> {
        let id = self.begin()?;
        self.buf.write_all(body)?;
        self.buf.write_all(b"\nendobj\n")?;
        Ok(id)
    }

    fn stream(&mut self, dict: &str, data: &[u8]) -> std::io::Result<usize> {
        let id = self.begin()?;
        let sep = if dict.is_empty() { "" } else { " " };
        write!(self.buf, "<< {dict}{sep}/Length {} >>\nstream\n", data.len())?;
        self.buf.write_all(data)?;
        self.buf.write_all(b"\nendstream\nendobj\n")?;
        Ok(id)
    }

    fn finish(mut self, root: usize) -> Result<Vec<u8>, PackagingError> {
        let xref_at = self.buf.len();
        let size = self.offsets.len() + 1;
        write!(self.buf, "xref\n0 {size}\n0000000000 65535 f \n")?;
        for offset in &self.offsets {
            writeln!(self.buf, "{offset:010} 00000 n ")?;
        }
        write!(
            self.buf,
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        )?;
        Ok(self.buf)
    }
}
