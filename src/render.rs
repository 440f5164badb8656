//! Backend-agnostic drawing commands.
//!
//! Widgets never touch a GPU surface. They append [`DrawCommand`]s to a
//! [`DisplayList`] in their own local coordinates and the driver replays the
//! list on whatever painter it owns.

use crate::geometry::{Offset, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Fill of the selected button in a menu or the material grid
    pub const HIGHLIGHT: Color = Color::rgb(200, 200, 255);
    pub const VIOLET: Color = Color::rgb(127, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Bold readouts in the photocell scene
    Label,
    Button,
    Slider,
}

impl FontStyle {
    pub fn size(self) -> f32 {
        match self {
            FontStyle::Label => 23.0,
            FontStyle::Button => 20.0,
            FontStyle::Slider => 15.0,
        }
    }
}

/// Images the driver may have loaded; each has a primitive fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Electron,
    SliderCursor,
}

impl SpriteId {
    pub const ALL: [SpriteId; 2] = [SpriteId::Electron, SpriteId::SliderCursor];

    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::Electron => "electron.png",
            SpriteId::SliderCursor => "slider_cursor.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    /// Text centred on `center`
    Text { center: Point, text: String, font: FontStyle, color: Color },
    Sprite { sprite: SpriteId, rect: Rect },
    /// Filled convex quad, corners in drawing order
    Quad { corners: [[f32; 2]; 4], color: Color },
}

/// Flat list of draw commands in absolute coordinates.
#[derive(Debug)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    origin: Offset,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            origin: Offset::zeros(),
        }
    }

    /// Runs `draw` with the origin moved to `rect`'s top-left corner.
    pub fn with_origin(&mut self, rect: &Rect, draw: impl FnOnce(&mut DisplayList)) {
        let saved = self.origin;
        self.origin += rect.top_left().coords;
        draw(self);
        self.origin = saved;
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.translate(self.origin);
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Black-bordered white box, the look shared by buttons and readouts.
    pub fn framed_box(&mut self, rect: Rect, fill: Color, border: i32) {
        self.fill_rect(rect, Color::BLACK);
        let inner = Rect::new(rect.x + border, rect.y + border, rect.w - 2 * border, rect.h - 2 * border);
        self.fill_rect(inner, fill);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let rect = rect.translate(self.origin);
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    pub fn text(&mut self, center: Point, text: impl Into<String>, font: FontStyle) {
        self.commands.push(DrawCommand::Text {
            center: center + self.origin,
            text: text.into(),
            font,
            color: Color::BLACK,
        });
    }

    pub fn sprite(&mut self, sprite: SpriteId, rect: Rect) {
        let rect = rect.translate(self.origin);
        self.commands.push(DrawCommand::Sprite { sprite, rect });
    }

    pub fn quad(&mut self, corners: [[f32; 2]; 4], color: Color) {
        let (dx, dy) = (self.origin.x as f32, self.origin.y as f32);
        let corners = corners.map(|[x, y]| [x + dx, y + dy]);
        self.commands.push(DrawCommand::Quad { corners, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.origin = Offset::zeros();
    }

    /// All text currently in the list, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Approximate RGB of monochromatic light.
///
/// Ultraviolet below 380 nm is shown as flat violet; the visible band uses a
/// piecewise-linear ramp through the rainbow with dimming at both ends.
pub fn spectrum_color(wave_length_nm: f64) -> Color {
    let w = wave_length_nm;
    if w < 380.0 {
        return Color::VIOLET;
    }
    let (r, g, b) = if w < 440.0 {
        (-(w - 440.0) / 60.0, 0.0, 1.0)
    } else if w < 490.0 {
        (0.0, (w - 440.0) / 50.0, 1.0)
    } else if w < 510.0 {
        (0.0, 1.0, -(w - 510.0) / 20.0)
    } else if w < 580.0 {
        ((w - 510.0) / 70.0, 1.0, 0.0)
    } else if w < 645.0 {
        (1.0, -(w - 645.0) / 65.0, 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };
    let factor = if w < 420.0 {
        0.3 + 0.7 * (w - 380.0) / 40.0
    } else if w > 700.0 {
        (0.3 + 0.7 * (780.0 - w) / 80.0).max(0.3)
    } else {
        1.0
    };
    let channel = |c: f64| (c * factor * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::rgb(channel(r), channel(g), channel(b))
}
