use crate::canvas::{Canvas, TextStyle};
use crate::color::Rgba;
use crate::geometry::{Point, Rect, Size};

/// Advance of one glyph as a fraction of the font size.
const DEFAULT_GLYPH_ADVANCE: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background(Rgba),
    Line { thickness: f64, from: Point, to: Point, color: Rgba },
    Text { text: String, rect: Rect, style: TextStyle, color: Rgba },
}

/// Canvas that records every call in order instead of drawing.
///
/// Text is measured with a fixed per-glyph advance, which keeps layout
/// deterministic without loading a font.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    glyph_advance: f64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::with_glyph_advance(DEFAULT_GLYPH_ADVANCE)
    }

    /// Uses `advance * size` as the width of every glyph.
    pub fn with_glyph_advance(advance: f64) -> Self {
        Self { ops: Vec::new(), glyph_advance: advance }
    }

    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of `stroke_line` calls recorded.
    pub fn line_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }

    /// Number of `draw_text` calls recorded.
    pub fn text_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. })).count()
    }

    /// Drops recorded calls and keeps the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_background(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Background(color));
    }

    fn stroke_line(&mut self, thickness: f64, from: Point, to: Point, color: Rgba) {
        self.ops.push(DrawOp::Line { thickness, from, to, color });
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> Size {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return Size::new(0.0, style.size * LINE_HEIGHT);
        }
        let gaps = (glyphs - 1) as f64;
        let width = glyphs as f64 * style.size * self.glyph_advance + gaps * style.letter_spacing;
        Size::new(width.max(0.0), style.size * LINE_HEIGHT)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle, color: Rgba) {
        self.ops.push(DrawOp::Text { text: text.to_string(), rect, style, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut c = RecordingCanvas::new();
        c.fill_background(Rgba::BLACK);
        c.stroke_line(1.0, Point::new(0.0, 0.0), Point::new(1.0, 1.0), Rgba::WHITE);
        c.draw_text("7", Rect::new(0.0, 0.0, 5.0, 5.0), TextStyle::new(10.0, 0.0), Rgba::WHITE);

        assert!(matches!(c.ops()[0], DrawOp::Background(_)));
        assert!(matches!(c.ops()[1], DrawOp::Line { .. }));
        assert!(matches!(c.ops()[2], DrawOp::Text { .. }));
        assert_eq!(c.line_count(), 1);
        assert_eq!(c.text_count(), 1);

        c.clear();
        assert!(c.ops().is_empty());
    }

    #[test]
    fn measure_applies_letter_spacing_between_glyphs() {
        let c = RecordingCanvas::with_glyph_advance(0.5);
        let one = c.measure_text("1", TextStyle::new(20.0, -2.0));
        let two = c.measure_text("12", TextStyle::new(20.0, -2.0));
        assert_eq!(one.width, 10.0);
        assert_eq!(two.width, 18.0);
        assert!((two.height - 24.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_no_width() {
        let c = RecordingCanvas::new();
        assert_eq!(c.measure_text("", TextStyle::new(10.0, -2.0)).width, 0.0);
    }
}
