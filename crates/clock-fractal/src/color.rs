/// Straight-alpha sRGB color with 8-bit channels.
///
/// Hosts convert to their own representation (the wgpu host premultiplies).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Alpha shared by every branch below the root.
pub const BRANCH_ALPHA: u8 = 100;

/// Stroke color of a fractal node.
///
/// The root is white. Deeper nodes fade from green towards red while blue
/// ramps up, so the tips of a full tree end at magenta:
///
/// - `red   = 510 / max_depth * depth`
/// - `green = 255 - 510 / max_depth * depth`
/// - `blue  = 255 / max_depth * depth`
///
/// Each channel is clamped to `0..=255`; alpha is [`BRANCH_ALPHA`].
pub fn branch_color(depth: u32, max_depth: u32) -> Rgba {
    if depth == 0 || max_depth == 0 {
        return Rgba::WHITE;
    }

    let depth = f64::from(depth);
    let max_depth = f64::from(max_depth);
    let gradient = 510.0 / max_depth * depth;
    let blue = 255.0 / max_depth * depth;

    Rgba::new(
        channel(gradient),
        channel(255.0 - gradient),
        channel(blue),
        BRANCH_ALPHA,
    )
}

#[inline]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_opaque_white() {
        assert_eq!(branch_color(0, 10), Rgba::WHITE);
    }

    #[test]
    fn deepest_level_saturates_red_and_blue() {
        let c = branch_color(10, 10);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 255);
        assert_eq!(c.a, BRANCH_ALPHA);
    }

    #[test]
    fn first_level_is_mostly_green() {
        let c = branch_color(1, 10);
        assert_eq!((c.r, c.g, c.b), (51, 204, 26));
    }

    #[test]
    fn red_saturates_half_way_down() {
        let c = branch_color(5, 10);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 128);
    }

    #[test]
    fn blue_grows_monotonically() {
        let blues: Vec<u8> = (1..=10).map(|d| branch_color(d, 10).b).collect();
        assert!(blues.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_level_tree_still_reaches_the_end_colors() {
        let c = branch_color(1, 1);
        assert_eq!((c.r, c.g, c.b), (255, 0, 255));
    }
}
