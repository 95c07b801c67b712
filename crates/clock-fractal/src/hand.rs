//! Time → angle → hand vector.

use core::f64::consts::{FRAC_PI_2, TAU};
use core::ops::Add;

use crate::geometry::Point;
use crate::time::ClockTime;

/// Period of the hour hand in seconds. The dial shows 12 hours.
pub const HALF_DAY_SECONDS: f64 = 12.0 * 60.0 * 60.0;

/// Offset from a hand's origin to its tip.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandVector {
    pub dx: f64,
    pub dy: f64,
}

impl HandVector {
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vector of length `radius` pointing at `angle` (radians, from +X).
    #[inline]
    pub fn polar(angle: f64, radius: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * radius, sin * radius)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl Add<HandVector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: HandVector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// Angle of `tick` on a dial divided into `ticks_per_revolution` ticks.
#[inline]
pub fn angle_of(tick: f64, ticks_per_revolution: f64) -> f64 {
    TAU * tick / ticks_per_revolution
}

/// Hand of length `radius` at `tick`.
#[inline]
pub fn create_hand(tick: i64, radius: f64, ticks_per_revolution: f64) -> HandVector {
    HandVector::polar(angle_of(tick as f64, ticks_per_revolution), radius)
}

/// Hour-hand angle in +Y-up coordinates: 12 o'clock is `π/2`, time runs clockwise.
#[inline]
pub fn hour_angle(time: ClockTime) -> f64 {
    let progress = time.seconds_since_midnight() / HALF_DAY_SECONDS;
    -(progress * TAU) + FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn hand_magnitude_equals_radius() {
        for tick in [-7500, -1500, 0, 1, 777, 1500, 3000, 54850, 359_999] {
            for r in [0.5, 1.0, 42.0, 351.0] {
                let h = create_hand(tick, r, 6000.0);
                assert!((h.dx * h.dx + h.dy * h.dy - r * r).abs() < 1e-6, "tick {tick} r {r}");
            }
        }
    }

    #[test]
    fn quarter_revolution_is_a_right_angle() {
        assert!(approx(angle_of(1500.0, 6000.0), FRAC_PI_2));
        assert!(approx(angle_of(6000.0, 6000.0), TAU));
    }

    #[test]
    fn phase_shifted_zero_tick_points_to_twelve_on_a_y_down_surface() {
        let h = create_hand(-1500, 10.0, 6000.0);
        assert!(approx(h.dx, 0.0));
        assert!(approx(h.dy, -10.0));
    }

    #[test]
    fn hour_hand_at_midnight_points_up() {
        assert!(approx(hour_angle(ClockTime::new(0, 0, 0, 0)), FRAC_PI_2));
    }

    #[test]
    fn hour_hand_at_three_points_right() {
        let a = hour_angle(ClockTime::new(3, 0, 0, 0));
        let v = HandVector::polar(a, 1.0);
        assert!(approx(v.dx, 1.0));
        assert!(approx(v.dy, 0.0));
    }

    #[test]
    fn hour_hand_wraps_every_twelve_hours() {
        let morning = HandVector::polar(hour_angle(ClockTime::new(2, 30, 0, 0)), 1.0);
        let evening = HandVector::polar(hour_angle(ClockTime::new(14, 30, 0, 0)), 1.0);
        assert!(approx(morning.dx, evening.dx));
        assert!(approx(morning.dy, evening.dy));
    }

    #[test]
    fn point_plus_vector() {
        let p = Point::new(1.0, 2.0) + HandVector::new(3.0, -4.0);
        assert_eq!(p, Point::new(4.0, -2.0));
    }
}
