use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight segment with butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub thickness: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, thickness: f32, color: Color) -> Self {
        Self { from, to, thickness, color }
    }

    /// A line that would rasterize to nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.from.is_finite() && self.to.is_finite() && self.thickness.is_finite())
            || self.thickness <= 0.0
            || self.color.a <= 0.0
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, thickness, color)));
    }
}
