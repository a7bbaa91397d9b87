//! Drawing surface abstraction
//!
//! The scene is described in window pixels (origin top-left, y down) against
//! this trait, so it can be drawn by the GPU batch or recorded in tests.

use glam::IVec2;

use super::vertex::Color;
use crate::sim::Rect;

/// Font family used for a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typeface {
    Proportional,
    Monospace,
}

/// Text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Height in pixels
    pub size: u32,
    pub face: Typeface,
}

impl Font {
    /// Score line
    pub const HUD: Font = Font {
        size: 14,
        face: Typeface::Monospace,
    };
    /// Game-over and pause overlays
    pub const BANNER: Font = Font {
        size: 36,
        face: Typeface::Proportional,
    };
}

/// A 2D canvas with filled shapes and text
pub trait Surface {
    /// Drawable area in pixels
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);

    /// Draw a line of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: IVec2, font: Font, color: Color);
}
