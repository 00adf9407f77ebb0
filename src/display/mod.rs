//! Rendering layer.
//!
//! Games describe a frame as an ordered draw list in play-field
//! coordinates. A `Renderer` turns that list into pixels (or, here,
//! terminal cells). Nothing in this module touches simulation state.

pub mod grid;
pub mod terminal;

use glam::Vec2;

use crate::engine::geom::Rect;
use crate::error::Result;

pub use grid::{Cell, CellGrid};

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);

    /// Scale brightness by `factor` (clamped to `0.0..=1.0`).
    pub fn dim(self, factor: f32) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * f).round() as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }
}

// ── Draw list ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text starts at the position.
    Left,
    /// Text is centred on the position.
    Center,
    /// Text ends at the position.
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled box drawn with `glyph`.
    Rect { rect: Rect, glyph: char },
    Circle { center: Vec2, radius: f32 },
    Text { pos: Vec2, text: String, anchor: Anchor },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCmd {
    pub shape: Shape,
    pub color: Rgb,
}

/// One frame's ordered draw list. Later commands paint over earlier ones.
#[derive(Clone, Debug)]
pub struct Frame {
    field: Vec2,
    cmds: Vec<DrawCmd>,
}

impl Frame {
    pub fn new(field: Vec2) -> Self {
        Self {
            field,
            cmds: Vec::new(),
        }
    }

    pub fn field(&self) -> Vec2 {
        self.field
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn rect(&mut self, rect: Rect, color: Rgb) {
        self.rect_with(rect, '█', color);
    }

    pub fn rect_with(&mut self, rect: Rect, glyph: char, color: Rgb) {
        self.cmds.push(DrawCmd {
            shape: Shape::Rect { rect, glyph },
            color,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.cmds.push(DrawCmd {
            shape: Shape::Circle { center, radius },
            color,
        });
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, anchor: Anchor, color: Rgb) {
        self.cmds.push(DrawCmd {
            shape: Shape::Text {
                pos,
                text: text.into(),
                anchor,
            },
            color,
        });
    }

    /// Full-width horizontal band, e.g. a floor or a HUD separator.
    pub fn hline(&mut self, y: f32, thickness: f32, glyph: char, color: Rgb) {
        let w = self.field.x;
        self.rect_with(Rect::new(0.0, y, w, thickness), glyph, color);
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|c| match &c.shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Blinking HUD text: on for the first half of every `period` ticks.
pub fn blink(tick: u64, period: u64) -> bool {
    period == 0 || tick % period < period / 2
}

/// Presents frames. Holds no simulation state across frames.
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Keeps the last frame; used for headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: usize,
    pub last: Option<Frame>,
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames += 1;
        self.last = Some(frame.clone());
        Ok(())
    }
}
