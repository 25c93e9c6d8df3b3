//! Certificate layout as a display list
//!
//! The layout is expressed in logical units on a fixed 800x600 page and can
//! be rasterized at any integer scale.

use super::document::CertificateDocument;

/// Logical size every certificate is laid out at
pub const CERTIFICATE_VIEWPORT: Viewport = Viewport {
    width: 800,
    height: 600,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

pub mod palette {
    use super::Color;

    pub const PAPER: Color = Color::hex(0xfffbf0);
    pub const INK: Color = Color::hex(0x0f172a);
    pub const SLATE: Color = Color::hex(0x475569);
    pub const SLATE_LIGHT: Color = Color::hex(0x94a3b8);
    pub const INDIGO: Color = Color::hex(0x312e81);
    pub const INDIGO_SOFT: Color = Color::hex(0xeef2ff);
    pub const INDIGO_TEXT: Color = Color::hex(0x3730a3);
    pub const GOLD: Color = Color::hex(0xeab308);
    pub const GOLD_DARK: Color = Color::hex(0xca8a04);
    pub const GOLD_DEEP: Color = Color::hex(0x854d0e);
    pub const WHITE: Color = Color::hex(0xffffff);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, width: f32, color: Color },
    FillCircle { cx: f32, cy: f32, r: f32, color: Color },
    /// `y` is the top of the text cell, `size` its height
    Text {
        x: f32,
        y: f32,
        size: f32,
        text: String,
        color: Color,
        anchor: Anchor,
    },
}

/// A realized certificate: painted draw commands at a logical size
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke(&mut self, rect: Rect, width: f32, color: Color) {
        self.push(DrawCommand::StrokeRect { rect, width, color });
    }

    fn text(&mut self, x: f32, y: f32, size: f32, text: &str, color: Color, anchor: Anchor) {
        self.push(DrawCommand::Text {
            x,
            y,
            size,
            text: text.to_string(),
            color,
            anchor,
        });
    }

    /// Text runs in paint order, useful for asserting on content
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Lay out `document` on a page of `viewport` size
pub fn compose(document: &CertificateDocument, viewport: Viewport) -> Scene {
    use palette::*;

    let mut scene = Scene::new(viewport, PAPER);
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    let mid = w / 2.0;

    // Borders: double outer, fine inner
    scene.stroke(Rect::new(12.0, 12.0, w - 24.0, h - 24.0), 2.0, INK);
    scene.stroke(Rect::new(16.0, 16.0, w - 32.0, h - 32.0), 2.0, INK);
    scene.stroke(Rect::new(20.0, 20.0, w - 40.0, h - 40.0), 1.0, SLATE_LIGHT);

    // Corner ornaments
    let (arm, thick) = (80.0, 6.0);
    for (cx, cy) in [(12.0, 12.0), (w - 12.0, 12.0), (12.0, h - 12.0), (w - 12.0, h - 12.0)] {
        let x = if cx < mid { cx } else { cx - arm };
        let y = if cy < h / 2.0 { cy } else { cy - arm };
        let bar_y = if cy < h / 2.0 { cy } else { cy - thick };
        let bar_x = if cx < mid { cx } else { cx - thick };
        scene.fill(Rect::new(x, bar_y, arm, thick), INDIGO);
        scene.fill(Rect::new(bar_x, y, thick, arm), INDIGO);
    }

    // Header
    scene.text(mid, 60.0, 9.0, "TYPEMASTER PROFESSIONAL CERTIFICATION", INDIGO, Anchor::Center);
    scene.text(mid, 84.0, 42.0, "CERTIFICATE", INK, Anchor::Center);
    scene.text(mid, 138.0, 18.0, "OF ACHIEVEMENT", SLATE, Anchor::Center);

    // Recipient
    scene.text(mid, 196.0, 9.0, "THIS CERTIFIES THAT", SLATE, Anchor::Center);
    scene.text(mid, 220.0, 30.0, &document.recipient_name, INDIGO, Anchor::Center);
    scene.fill(Rect::new(mid - 170.0, 260.0, 340.0, 2.0), SLATE_LIGHT);

    scene.text(mid, 282.0, 10.0, &document.reason_text, SLATE, Anchor::Center);
    scene.text(mid, 308.0, 24.0, &document.milestone_name, INDIGO_TEXT, Anchor::Center);

    // Value pill
    scene.fill(Rect::new(mid - 80.0, 344.0, 160.0, 24.0), INDIGO_SOFT);
    scene.text(mid, 351.0, 10.0, &document.milestone_value_label, INDIGO_TEXT, Anchor::Center);

    // Footer: date, seal, signature
    let footer = h - 130.0;
    let left = 170.0;
    let right = w - 170.0;
    scene.text(left, footer + 20.0, 14.0, &document.issue_date, INK, Anchor::Center);
    scene.fill(Rect::new(left - 80.0, footer + 42.0, 160.0, 1.0), SLATE_LIGHT);
    scene.text(left, footer + 50.0, 7.0, "DATE ISSUED", SLATE, Anchor::Center);

    scene.text(right, footer + 14.0, 20.0, "TYPEMASTER AI", INDIGO, Anchor::Center);
    scene.fill(Rect::new(right - 80.0, footer + 42.0, 160.0, 1.0), SLATE_LIGHT);
    scene.text(right, footer + 50.0, 7.0, "AUTHORIZED SIGNATURE", SLATE, Anchor::Center);

    let (seal_x, seal_y) = (mid, footer + 34.0);
    scene.fill(Rect::new(seal_x - 30.0, seal_y + 40.0, 20.0, 44.0), GOLD_DARK);
    scene.fill(Rect::new(seal_x + 10.0, seal_y + 40.0, 20.0, 44.0), GOLD_DARK);
    scene.push(DrawCommand::FillCircle { cx: seal_x, cy: seal_y, r: 62.0, color: GOLD_DARK });
    scene.push(DrawCommand::FillCircle { cx: seal_x, cy: seal_y, r: 54.0, color: GOLD });
    scene.push(DrawCommand::FillCircle { cx: seal_x, cy: seal_y, r: 22.0, color: GOLD_DEEP });
    scene.push(DrawCommand::FillCircle { cx: seal_x, cy: seal_y, r: 16.0, color: GOLD });

    // Certificate id
    let id = format!("ID: {}", document.certificate_id);
    scene.fill(Rect::new(mid - 150.0, h - 34.0, 300.0, 18.0), WHITE);
    scene.text(mid, h - 29.0, 7.0, &id, SLATE, Anchor::Center);

    scene
}
