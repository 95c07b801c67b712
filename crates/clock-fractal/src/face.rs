//! Static clock face: hour hand, numeral ring, division ticks.
//!
//! Positions are computed with mathematical angles (+Y up, counter-clockwise)
//! around the canvas center and flipped into canvas space on output.

use core::f64::consts::{FRAC_PI_2, TAU};

use crate::canvas::{Canvas, TextStyle};
use crate::color::Rgba;
use crate::config::ClockConfig;
use crate::fractal::LENGTH_DECAY;
use crate::geometry::{Point, Rect, Size};
use crate::hand::{hour_angle, HandVector};
use crate::time::ClockTime;

pub const NUMERAL_COUNT: u32 = 12;
pub const TICK_COUNT: u32 = 60;
/// Every fifth tick marks an hour.
pub const MAJOR_TICK_EVERY: u32 = 5;

pub const HOUR_HAND_THICKNESS: f64 = 5.0;
pub const MAJOR_TICK_THICKNESS: f64 = 5.0;
pub const MINOR_TICK_THICKNESS: f64 = 2.5;

/// Ticks start this far outside the indicator radius.
pub const TICK_OUTER_OFFSET: f64 = 10.0;
/// How far past the case radius a major tick reaches inward.
pub const MAJOR_TICK_INNER_OFFSET: f64 = 10.0;
pub const MINOR_TICK_INNER_OFFSET: f64 = 5.0;

/// Face geometry for one canvas size.
#[derive(Debug, Copy, Clone)]
pub struct FaceLayout {
    size: Size,
    center: Point,
    case_radius: f64,
    indicator_radius: f64,
    hour_hand_length: f64,
    numeral_style: TextStyle,
}

impl FaceLayout {
    pub fn new(size: Size, config: &ClockConfig) -> Self {
        let half = size.half_height();
        Self {
            size,
            center: size.center(),
            case_radius: config.clock_case_radius_ratio * half,
            indicator_radius: config.indicator_distance_ratio * half,
            hour_hand_length: config.second_hand_length_ratio * half * LENGTH_DECAY,
            numeral_style: TextStyle::new(config.font_size_ratio * half, config.letter_spacing),
        }
    }

    /// Canvas center; the fractal grows from here.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn case_radius(&self) -> f64 {
        self.case_radius
    }

    #[inline]
    pub fn numeral_style(&self) -> TextStyle {
        self.numeral_style
    }

    /// Point at `radius` along `angle` (+Y up), in canvas space.
    #[inline]
    pub fn on_dial(&self, angle: f64, radius: f64) -> Point {
        self.size.flip_y(self.center + HandVector::polar(angle, radius))
    }

    pub fn draw_hour_hand<C: Canvas + ?Sized>(&self, canvas: &mut C, time: ClockTime) {
        let tip = self.on_dial(hour_angle(time), self.hour_hand_length);
        canvas.stroke_line(HOUR_HAND_THICKNESS, self.center, tip, Rgba::WHITE);
    }

    /// Draws "12" at the top, then counter-clockwise down to "1".
    pub fn draw_numerals<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for i in 0..NUMERAL_COUNT {
            let label = numeral_label(i);
            let extent = canvas.measure_text(&label, self.numeral_style);
            let anchor = self.numeral_anchor(i, extent);
            let rect = Rect::centered_on(anchor, extent);
            canvas.draw_text(&label, rect, self.numeral_style, Rgba::WHITE);
        }
    }

    /// Center of numeral `i`, pulled inward by half its extent so wide labels
    /// stay inside the ring.
    pub fn numeral_anchor(&self, i: u32, extent: Size) -> Point {
        let angle = numeral_angle(i);
        let (sin, cos) = angle.sin_cos();
        let math = Point::new(
            self.center.x + cos * (self.case_radius - extent.width / 2.0),
            self.center.y + sin * (self.case_radius - extent.height / 2.0),
        );
        self.size.flip_y(math)
    }

    pub fn draw_divisions<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for i in 0..TICK_COUNT {
            let major = is_major_tick(i);
            let angle = tick_angle(i);
            let inner_offset = if major { MAJOR_TICK_INNER_OFFSET } else { MINOR_TICK_INNER_OFFSET };
            let thickness = if major { MAJOR_TICK_THICKNESS } else { MINOR_TICK_THICKNESS };

            let from = self.on_dial(angle, self.indicator_radius + TICK_OUTER_OFFSET);
            let to = self.on_dial(angle, self.case_radius + inner_offset);
            canvas.stroke_line(thickness, from, to, Rgba::WHITE);
        }
    }
}

/// Label of numeral slot `i`: `12 - i`.
#[inline]
pub fn numeral_label(i: u32) -> String {
    (NUMERAL_COUNT - i).to_string()
}

#[inline]
pub fn numeral_angle(i: u32) -> f64 {
    f64::from(i) / f64::from(NUMERAL_COUNT) * TAU + FRAC_PI_2
}

#[inline]
pub fn tick_angle(i: u32) -> f64 {
    -(f64::from(i) / f64::from(TICK_COUNT)) * TAU + FRAC_PI_2
}

#[inline]
pub fn is_major_tick(i: u32) -> bool {
    i % MAJOR_TICK_EVERY == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, RecordingCanvas};

    const EPS: f64 = 1e-9;

    fn layout() -> FaceLayout {
        FaceLayout::new(Size::new(800.0, 600.0), &ClockConfig::default())
    }

    // ── numerals ──────────────────────────────────────────────────────────

    #[test]
    fn labels_count_down_from_twelve() {
        let labels: Vec<String> = (0..NUMERAL_COUNT).map(numeral_label).collect();
        assert_eq!(labels[0], "12");
        assert_eq!(labels[1], "11");
        assert_eq!(labels[11], "1");
    }

    #[test]
    fn draws_twelve_centered_numerals() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_numerals(&mut canvas);
        assert_eq!(canvas.text_count(), 12);

        for (i, op) in canvas.ops().iter().enumerate() {
            let DrawOp::Text { text, rect, style, color } = op else {
                panic!("unexpected op {op:?}");
            };
            assert_eq!(*text, numeral_label(i as u32));
            assert_eq!(*style, face.numeral_style());
            assert_eq!(*color, Rgba::WHITE);

            let extent = canvas.measure_text(text, *style);
            assert!((rect.size.width - extent.width).abs() < EPS);
            let anchor = face.numeral_anchor(i as u32, extent);
            assert!(rect.center().distance(anchor) < EPS, "numeral {text}");
        }
    }

    #[test]
    fn twelve_sits_above_center_and_six_below() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_numerals(&mut canvas);

        let center_of = |label: &str| {
            canvas
                .ops()
                .iter()
                .find_map(|op| match op {
                    DrawOp::Text { text, rect, .. } if text == label => Some(rect.center()),
                    _ => None,
                })
                .unwrap()
        };

        let twelve = center_of("12");
        let six = center_of("6");
        let three = center_of("3");
        let nine = center_of("9");
        assert!((twelve.x - 400.0).abs() < 1e-6 && twelve.y < 300.0);
        assert!((six.x - 400.0).abs() < 1e-6 && six.y > 300.0);
        assert!(three.x > 400.0 && (three.y - 300.0).abs() < 1e-6);
        assert!(nine.x < 400.0 && (nine.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn numeral_font_scales_with_height() {
        let face = layout();
        assert!((face.numeral_style().size - 18.0).abs() < EPS);
        assert_eq!(face.numeral_style().letter_spacing, -2.0);
    }

    // ── divisions ─────────────────────────────────────────────────────────

    #[test]
    fn sixty_ticks_twelve_of_them_major() {
        let mut canvas = RecordingCanvas::new();
        layout().draw_divisions(&mut canvas);
        assert_eq!(canvas.line_count(), 60);

        for (i, op) in canvas.ops().iter().enumerate() {
            let DrawOp::Line { thickness, .. } = op else { panic!("unexpected op {op:?}") };
            let expected = if i % 5 == 0 { MAJOR_TICK_THICKNESS } else { MINOR_TICK_THICKNESS };
            assert_eq!(*thickness, expected, "tick {i}");
        }

        let majors = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { thickness, .. } if *thickness == 5.0))
            .count();
        assert_eq!(majors, 12);
    }

    #[test]
    fn major_ticks_reach_further_in() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_divisions(&mut canvas);

        let radius_of_inner_end = |i: usize| match canvas.ops()[i] {
            DrawOp::Line { to, .. } => to.distance(face.center()),
            _ => unreachable!(),
        };
        // case 210, indicator 225
        assert!((radius_of_inner_end(0) - 220.0).abs() < 1e-6);
        assert!((radius_of_inner_end(1) - 215.0).abs() < 1e-6);
    }

    #[test]
    fn first_tick_is_at_twelve() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_divisions(&mut canvas);
        let DrawOp::Line { from, .. } = canvas.ops()[0] else { unreachable!() };
        assert!((from.x - 400.0).abs() < 1e-6);
        assert!((from.y - (300.0 - 235.0)).abs() < 1e-6);
    }

    #[test]
    fn fifteenth_tick_is_at_three() {
        let face = layout();
        let p = face.on_dial(tick_angle(15), 100.0);
        assert!((p.x - 500.0).abs() < 1e-6);
        assert!((p.y - 300.0).abs() < 1e-6);
    }

    // ── hour hand ─────────────────────────────────────────────────────────

    #[test]
    fn hour_hand_length_and_thickness() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_hour_hand(&mut canvas, ClockTime::new(3, 0, 0, 0));

        let DrawOp::Line { thickness, from, to, color } = canvas.ops()[0] else { unreachable!() };
        assert_eq!(thickness, HOUR_HAND_THICKNESS);
        assert_eq!(color, Rgba::WHITE);
        assert_eq!(from, face.center());
        // 0.65 * 300 * 0.7
        assert!((from.distance(to) - 136.5).abs() < 1e-6);
        // three o'clock: straight right
        assert!((to.y - 300.0).abs() < 1e-6);
        assert!(to.x > 400.0);
    }

    #[test]
    fn hour_hand_at_nine_thirty_leans_up_left() {
        let face = layout();
        let mut canvas = RecordingCanvas::new();
        face.draw_hour_hand(&mut canvas, ClockTime::new(9, 30, 0, 0));
        let DrawOp::Line { to, .. } = canvas.ops()[0] else { unreachable!() };
        assert!(to.x < 400.0);
        assert!(to.y < 300.0);
    }
}
