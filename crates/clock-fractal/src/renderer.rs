use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::ClockConfig;
use crate::error::ConfigError;
use crate::face::FaceLayout;
use crate::fractal::{segment_count, FractalTree};
use crate::geometry::Size;
use crate::time::{ClockTime, SystemClock, TimeSource};

/// Per-frame entry point.
///
/// Holds a validated [`ClockConfig`] and a [`TimeSource`]; every call to
/// [`render_frame`](Self::render_frame) samples the clock once and emits one
/// complete frame onto the canvas.
///
/// Paint order: background, hour hand, fractal tree, numerals, division ticks.
#[derive(Debug, Clone)]
pub struct ClockFractalRenderer<T: TimeSource = SystemClock> {
    config: ClockConfig,
    clock: T,
}

impl ClockFractalRenderer<SystemClock> {
    /// Renderer driven by local wall-clock time.
    pub fn new(config: ClockConfig) -> Result<Self, ConfigError> {
        Self::with_time_source(config, SystemClock::new())
    }
}

impl<T: TimeSource> ClockFractalRenderer<T> {
    pub fn with_time_source(config: ClockConfig, clock: T) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "clock renderer: depth={} ({} segments/frame), ticks/rev={}",
            config.max_fractal_depth,
            segment_count(config.max_fractal_depth),
            config.seconds_per_minute,
        );
        Ok(Self { config, clock })
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn time_source(&self) -> &T {
        &self.clock
    }

    /// Samples the clock and draws one frame.
    pub fn render_frame<C: Canvas + ?Sized>(&self, size: Size, canvas: &mut C) {
        self.render_at(self.clock.now(), size, canvas);
    }

    /// Draws the frame for `time`. Does nothing when `size` has no area.
    pub fn render_at<C: Canvas + ?Sized>(&self, time: ClockTime, size: Size, canvas: &mut C) {
        if !size.is_drawable() {
            log::trace!("skipping frame for {}x{}", size.width, size.height);
            return;
        }

        let face = FaceLayout::new(size, &self.config);

        canvas.fill_background(Rgba::BLACK);
        face.draw_hour_hand(canvas, time);

        let tree = FractalTree::new(
            time.drivers(),
            self.config.max_fractal_depth,
            self.config.seconds_per_minute,
        );
        let seed_length = self.config.second_hand_length_ratio * size.half_height();
        tree.draw(canvas, face.center(), seed_length);

        face.draw_numerals(canvas);
        face.draw_divisions(canvas);

        log::trace!(
            "frame {:02}:{:02}:{:02}.{:03} drawn at {}x{}",
            time.hours,
            time.minutes,
            time.seconds,
            time.milliseconds,
            size.width,
            size.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::{LENGTH_DECAY, PHASE_SHIFT};
    use crate::geometry::Point;
    use crate::hand::create_hand;
    use crate::recording::{DrawOp, RecordingCanvas};
    use crate::time::FixedClock;

    fn renderer(depth: u32, time: ClockTime) -> ClockFractalRenderer<FixedClock> {
        ClockFractalRenderer::with_time_source(
            ClockConfig::default().with_max_depth(depth),
            FixedClock(time),
        )
        .unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn invalid_config_is_rejected() {
        let err = ClockFractalRenderer::new(ClockConfig::default().with_max_depth(40)).unwrap_err();
        assert!(matches!(err, ConfigError::DepthTooLarge { depth: 40, .. }));
    }

    #[test]
    fn keeps_the_config() {
        let r = renderer(3, ClockTime::default());
        assert_eq!(r.config().max_fractal_depth, 3);
    }

    // ── frame contents ────────────────────────────────────────────────────

    #[test]
    fn default_depth_frame_counts() {
        let r = renderer(10, ClockTime::new(10, 9, 8, 500));
        let mut canvas = RecordingCanvas::new();
        r.render_frame(Size::new(800.0, 600.0), &mut canvas);

        assert_eq!(canvas.line_count(), 1 + 4094 + 60);
        assert_eq!(canvas.text_count(), 12);
        assert_eq!(canvas.ops().len(), 1 + 1 + 4094 + 60 + 12);
    }

    #[test]
    fn depth_zero_frame_counts() {
        let r = renderer(0, ClockTime::new(1, 2, 3, 4));
        let mut canvas = RecordingCanvas::new();
        r.render_frame(Size::new(320.0, 240.0), &mut canvas);
        assert_eq!(canvas.line_count(), 1 + 2 + 60);
    }

    #[test]
    fn paints_in_layer_order() {
        let r = renderer(2, ClockTime::new(6, 30, 0, 0));
        let mut canvas = RecordingCanvas::new();
        r.render_frame(Size::new(640.0, 480.0), &mut canvas);
        let ops = canvas.ops();

        assert_eq!(ops[0], DrawOp::Background(Rgba::BLACK));
        // hour hand
        assert!(matches!(ops[1], DrawOp::Line { thickness, .. } if thickness == 5.0));
        // tree: 2 * (2^3 - 1) = 14 segments
        for op in &ops[2..16] {
            assert!(matches!(op, DrawOp::Line { thickness, .. } if *thickness < 5.0));
        }
        for op in &ops[16..28] {
            assert!(matches!(op, DrawOp::Text { .. }));
        }
        for op in &ops[28..] {
            assert!(matches!(op, DrawOp::Line { .. }));
        }
        assert_eq!(ops.len(), 88);
    }

    #[test]
    fn tree_roots_at_center_with_time_drivers() {
        let r = renderer(0, ClockTime::new(10, 9, 8, 500));
        let mut canvas = RecordingCanvas::new();
        r.render_frame(Size::new(800.0, 600.0), &mut canvas);

        let DrawOp::Line { from, to, .. } = canvas.ops()[2] else { unreachable!() };
        let center = Point::new(400.0, 300.0);
        assert_eq!(from, center);

        let length = 0.65 * 300.0 * LENGTH_DECAY;
        let expected = center + create_hand(54850 + PHASE_SHIFT, length, 6000.0);
        assert!(to.distance(expected) < 1e-6);

        let DrawOp::Line { from, to, .. } = canvas.ops()[3] else { unreachable!() };
        assert_eq!(from, center);
        let expected = center + create_hand(914 + PHASE_SHIFT, length, 6000.0);
        assert!(to.distance(expected) < 1e-6);
    }

    #[test]
    fn same_time_same_frame() {
        let r = renderer(4, ClockTime::new(11, 11, 11, 111));
        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        r.render_frame(Size::new(500.0, 500.0), &mut a);
        r.render_frame(Size::new(500.0, 500.0), &mut b);
        assert_eq!(a.ops(), b.ops());
    }

    #[test]
    fn render_at_overrides_the_clock() {
        let r = renderer(1, ClockTime::new(0, 0, 0, 0));
        let mut sampled = RecordingCanvas::new();
        let mut explicit = RecordingCanvas::new();
        r.render_at(ClockTime::new(0, 0, 0, 0), Size::new(100.0, 100.0), &mut explicit);
        r.render_frame(Size::new(100.0, 100.0), &mut sampled);
        assert_eq!(sampled.ops(), explicit.ops());

        let mut later = RecordingCanvas::new();
        r.render_at(ClockTime::new(0, 0, 30, 0), Size::new(100.0, 100.0), &mut later);
        assert_ne!(sampled.ops(), later.ops());
    }

    // ── degenerate sizes ──────────────────────────────────────────────────

    #[test]
    fn zero_sized_canvas_draws_nothing() {
        let r = renderer(10, ClockTime::default());
        for size in [Size::new(0.0, 600.0), Size::new(800.0, 0.0), Size::new(-1.0, -1.0)] {
            let mut canvas = RecordingCanvas::new();
            r.render_frame(size, &mut canvas);
            assert!(canvas.ops().is_empty(), "{size:?}");
        }
    }

    #[test]
    fn renders_through_a_trait_object() {
        let r = renderer(1, ClockTime::default());
        let mut recording = RecordingCanvas::new();
        {
            let canvas: &mut dyn Canvas = &mut recording;
            r.render_frame(Size::new(200.0, 200.0), canvas);
        }
        assert_eq!(recording.line_count(), 1 + 6 + 60);
    }
}
