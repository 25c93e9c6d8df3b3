//! Scene rasterization

use image::{Rgb, RgbImage};

use super::font::{self, GLYPH_ADVANCE, GLYPH_COLS, GLYPH_ROWS};
use super::scene::{Anchor, Color, DrawCommand, Rect, Scene};

/// Device-pixel scale used for exported certificates
pub const EXPORT_SCALE: u32 = 2;

/// Upper bound on raster size (pixels)
pub const MAX_RASTER_PIXELS: u64 = 48_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("scale factor must be at least 1")]
    InvalidScale,

    #[error("scene has no area ({width}x{height})")]
    EmptyScene { width: u32, height: u32 },

    #[error("raster of {width}x{height} exceeds the {limit} pixel limit")]
    TooLarge { width: u64, height: u64, limit: u64 },
}

/// Paint `scene` into an RGB image at `scale` device pixels per logical unit
pub fn rasterize(scene: &Scene, scale: u32) -> Result<RgbImage, RasterError> {
    if scale == 0 {
        return Err(RasterError::InvalidScale);
    }
    let (vw, vh) = (scene.viewport.width, scene.viewport.height);
    if vw == 0 || vh == 0 {
        return Err(RasterError::EmptyScene {
            width: vw,
            height: vh,
        });
    }

    let width = vw as u64 * scale as u64;
    let height = vh as u64 * scale as u64;
    if width * height > MAX_RASTER_PIXELS {
        return Err(RasterError::TooLarge {
            width,
            height,
            limit: MAX_RASTER_PIXELS,
        });
    }

    let mut canvas = Canvas {
        image: RgbImage::from_pixel(width as u32, height as u32, rgb(scene.background)),
        scale: scale as f32,
    };
    for command in &scene.commands {
        canvas.draw(command);
    }

    tracing::debug!(width, height, commands = scene.commands.len(), "Rasterized scene");
    Ok(canvas.image)
}

fn rgb(c: Color) -> Rgb<u8> {
    Rgb([c.0, c.1, c.2])
}

struct Canvas {
    image: RgbImage,
    scale: f32,
}

impl Canvas {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
            DrawCommand::StrokeRect { rect, width, color } => {
                let (r, t) = (*rect, *width);
                self.fill_rect(Rect::new(r.x, r.y, r.w, t), *color);
                self.fill_rect(Rect::new(r.x, r.y + r.h - t, r.w, t), *color);
                self.fill_rect(Rect::new(r.x, r.y, t, r.h), *color);
                self.fill_rect(Rect::new(r.x + r.w - t, r.y, t, r.h), *color);
            }
            DrawCommand::FillCircle { cx, cy, r, color } => {
                self.fill_circle(*cx, *cy, *r, *color)
            }
            DrawCommand::Text {
                x,
                y,
                size,
                text,
                color,
                anchor,
            } => self.text(*x, *y, *size, text, *color, *anchor),
        }
    }

    /// Logical span -> clamped device pixel range
    fn span(&self, start: f32, len: f32, limit: u32) -> (u32, u32) {
        let a = (start * self.scale).round().max(0.0) as u32;
        let b = ((start + len) * self.scale).round().max(0.0) as u32;
        (a.min(limit), b.min(limit))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, x1) = self.span(rect.x, rect.w, self.image.width());
        let (y0, y1) = self.span(rect.y, rect.h, self.image.height());
        let px = rgb(color);
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        let (x0, x1) = self.span(cx - r, 2.0 * r, self.image.width());
        let (y0, y1) = self.span(cy - r, 2.0 * r, self.image.height());
        let (dcx, dcy, dr) = (cx * self.scale, cy * self.scale, r * self.scale);
        let px = rgb(color);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - dcx;
                let dy = y as f32 + 0.5 - dcy;
                if dx * dx + dy * dy <= dr * dr {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }

    fn text(&mut self, x: f32, y: f32, size: f32, text: &str, color: Color, anchor: Anchor) {
        let unit = size / GLYPH_ROWS as f32;
        let start = match anchor {
            Anchor::Start => x,
            Anchor::Center => x - font::text_cells(text) as f32 * unit / 2.0,
        };

        for (i, c) in text.chars().enumerate() {
            let origin = start + (i as u32 * GLYPH_ADVANCE) as f32 * unit;
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                        let cell = Rect::new(
                            origin + col as f32 * unit,
                            y + row as f32 * unit,
                            unit,
                            unit,
                        );
                        self.fill_rect(cell, color);
                    }
                }
            }
        }
    }
}
