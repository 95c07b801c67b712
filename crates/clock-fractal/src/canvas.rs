use crate::color::Rgba;
use crate::geometry::{Point, Rect, Size};

/// Text styling passed with every text call.
///
/// Font identity is owned by the canvas implementation; the core only decides
/// size and spacing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub size: f64,
    /// Extra advance between consecutive glyphs (negative tightens).
    pub letter_spacing: f64,
}

impl TextStyle {
    #[inline]
    pub const fn new(size: f64, letter_spacing: f64) -> Self {
        Self { size, letter_spacing }
    }
}

/// Drawing capability consumed by the renderer.
///
/// Coordinates are canvas space: logical pixels, origin top-left, +Y down.
/// Calls arrive in paint order; later calls cover earlier ones.
pub trait Canvas {
    /// Fills the whole canvas.
    fn fill_background(&mut self, color: Rgba);

    /// Strokes a straight segment with butt caps.
    fn stroke_line(&mut self, thickness: f64, from: Point, to: Point, color: Rgba);

    /// Returns the laid-out extent of `text`.
    fn measure_text(&self, text: &str, style: TextStyle) -> Size;

    /// Draws `text` inside `rect` (top-left anchored, no wrapping).
    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle, color: Rgba);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn fill_background(&mut self, color: Rgba) {
        (**self).fill_background(color);
    }

    #[inline]
    fn stroke_line(&mut self, thickness: f64, from: Point, to: Point, color: Rgba) {
        (**self).stroke_line(thickness, from, to, color);
    }

    #[inline]
    fn measure_text(&self, text: &str, style: TextStyle) -> Size {
        (**self).measure_text(text, style)
    }

    #[inline]
    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle, color: Rgba) {
        (**self).draw_text(text, rect, style, color);
    }
}
