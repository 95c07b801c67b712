//! Canvas-space geometry.
//!
//! Canvas space matches the host surface: logical pixels, origin top-left,
//! +X right, +Y down. Face decorations are computed with mathematical angles
//! (+Y up) and converted with [`Size::flip_y`] before they reach the canvas.

/// Point in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Width/height pair in logical pixels. Used for the canvas and for text extents.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the size can host a frame (positive and finite on both axes).
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half the height; every face radius is a ratio of this.
    #[inline]
    pub fn half_height(self) -> f64 {
        self.height / 2.0
    }

    /// Converts a +Y-up point into canvas space.
    #[inline]
    pub fn flip_y(self, p: Point) -> Point {
        Point::new(p.x, self.height - p.y)
    }
}

/// Axis-aligned rectangle in canvas space (origin is the top-left corner).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle of `size` whose center sits exactly on `center`.
    #[inline]
    pub fn centered_on(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_y_mirrors_around_mid_height() {
        let size = Size::new(200.0, 100.0);
        assert_eq!(size.flip_y(Point::new(10.0, 0.0)), Point::new(10.0, 100.0));
        assert_eq!(size.flip_y(Point::new(10.0, 50.0)), Point::new(10.0, 50.0));
        assert_eq!(size.flip_y(Point::new(10.0, 80.0)), Point::new(10.0, 20.0));
    }

    #[test]
    fn centered_rect_round_trips_center() {
        let c = Point::new(33.0, -4.5);
        let r = Rect::centered_on(c, Size::new(12.0, 7.0));
        assert_eq!(r.origin, Point::new(27.0, -8.0));
        assert_eq!(r.center(), c);
    }

    #[test]
    fn drawable_rejects_degenerate_sizes() {
        assert!(Size::new(1.0, 1.0).is_drawable());
        assert!(!Size::new(0.0, 10.0).is_drawable());
        assert!(!Size::new(10.0, -1.0).is_drawable());
        assert!(!Size::new(f64::INFINITY, 10.0).is_drawable());
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
