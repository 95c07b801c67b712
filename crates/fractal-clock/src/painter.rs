use clock_engine::coords::Vec2;
use clock_engine::paint::Color;
use clock_engine::scene::{DrawList, ZIndex};
use clock_engine::text::{raster_scale, FontId, FontSystem};
use clock_fractal::{Canvas, Point, Rect, Rgba, Size, TextStyle};

/// Everything the clock draws shares one layer; insertion order is paint order.
const CLOCK_LAYER: ZIndex = ZIndex(0);

/// [`Canvas`] over an engine [`DrawList`].
///
/// The background is not a draw command: it becomes the surface clear color,
/// read back with [`finish`](Self::finish).
pub struct Painter<'a> {
    list: &'a mut DrawList,
    fonts: &'a FontSystem,
    font: FontId,
    scale_factor: f32,
    clear: Option<Color>,
}

impl<'a> Painter<'a> {
    pub fn new(list: &'a mut DrawList, fonts: &'a FontSystem, font: FontId, scale_factor: f32) -> Self {
        Self {
            list,
            fonts,
            font,
            scale_factor,
            clear: None,
        }
    }

    /// Clear color for the frame; black if nothing filled the background.
    pub fn finish(self) -> Color {
        self.clear.unwrap_or(Color::BLACK)
    }
}

#[inline]
fn color(c: Rgba) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, c.a)
}

#[inline]
fn vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

impl Canvas for Painter<'_> {
    fn fill_background(&mut self, c: Rgba) {
        self.clear = Some(color(c));
    }

    fn stroke_line(&mut self, thickness: f64, from: Point, to: Point, c: Rgba) {
        self.list
            .push_line(CLOCK_LAYER, vec2(from), vec2(to), thickness as f32, color(c));
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> Size {
        let extent = self.fonts.measure_text_scaled(
            text,
            self.font,
            style.size as f32,
            style.letter_spacing as f32,
            raster_scale(self.scale_factor),
        );
        Size::new(extent.x as f64, extent.y as f64)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle, c: Rgba) {
        self.list.push_text(
            CLOCK_LAYER,
            text,
            self.font,
            style.size as f32,
            color(c),
            vec2(rect.origin),
            style.letter_spacing as f32,
        );
    }
}
