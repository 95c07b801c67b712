use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Line height used for empty strings and missing fonts, as a multiple of size.
const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub usize);

/// Rasterization scale for a window scale factor, quantised to 0.25 steps so
/// small DPI jitter does not invalidate the glyph cache.
#[inline]
pub fn raster_scale(scale_factor: f32) -> f32 {
    ((scale_factor * 4.0).round() / 4.0).max(0.25)
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The application owns the system and
/// hands it to the text renderer every frame so glyphs can be rasterized on
/// demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font #{} ({} glyphs)", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Bounding box of `text` as `(width, height)` in logical pixels.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, letter_spacing: f32) -> Vec2 {
        self.measure_text_scaled(text, id, size, letter_spacing, 1.0)
    }

    /// Like [`measure_text`](Self::measure_text) but lays out at `size * scale`
    /// and divides back to logical pixels.
    ///
    /// Pass the renderer's [`raster_scale`] so measured widths match the
    /// physical glyph positions exactly.
    #[must_use]
    pub fn measure_text_scaled(
        &self,
        text: &str,
        id: FontId,
        size: f32,
        letter_spacing: f32,
        scale: f32,
    ) -> Vec2 {
        let fallback = Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        let Some(font) = self.get(id) else {
            return fallback;
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return fallback;
        }

        // Pen position after each glyph, not the bitmap's right edge, so
        // trailing side bearings count toward the width.
        let w = glyphs
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                let x = spaced_x(g, i, letter_spacing * scale);
                (x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
            / scale;
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(phys_size, f32::max)
            / scale;
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph x after applying `spacing` once per preceding glyph.
#[inline]
pub(crate) fn spaced_x(glyph: &GlyphPosition, index: usize, spacing: f32) -> f32 {
    glyph.x + index as f32 * spacing
}
