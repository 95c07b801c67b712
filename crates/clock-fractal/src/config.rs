use crate::error::ConfigError;

/// Deepest recursion accepted by [`ClockConfig::validate`].
///
/// A full tree at depth `d` strokes `2 * (2^(d+1) - 1)` segments, so 16 is
/// already ~262k segments per frame.
pub const MAX_SUPPORTED_DEPTH: u32 = 16;

/// Geometry and recursion parameters of the clock.
///
/// Radii are ratios of half the canvas height so the face scales with the
/// window and keeps its proportions on wide surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Deepest node level; the root is depth 0.
    pub max_fractal_depth: u32,
    /// Ticks in one revolution of the fractal hands (centiseconds per minute).
    pub seconds_per_minute: f64,
    /// Radius of the numeral ring.
    pub clock_case_radius_ratio: f64,
    /// Seed length of the fractal hands; the hour hand is one decay step shorter.
    pub second_hand_length_ratio: f64,
    /// Outer radius of the division ticks.
    pub indicator_distance_ratio: f64,
    /// Numeral font size.
    pub font_size_ratio: f64,
    /// Extra advance between numeral glyphs, in logical pixels.
    pub letter_spacing: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_fractal_depth: 10,
            seconds_per_minute: 6000.0,
            clock_case_radius_ratio: 0.7,
            second_hand_length_ratio: 0.65,
            indicator_distance_ratio: 0.75,
            font_size_ratio: 0.06,
            letter_spacing: -2.0,
        }
    }
}

impl ClockConfig {
    /// Returns a copy with a different recursion depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_fractal_depth = depth;
        self
    }

    /// Checks that every value keeps the per-frame math total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fractal_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: self.max_fractal_depth,
                max: MAX_SUPPORTED_DEPTH,
            });
        }

        let positive = [
            ("seconds_per_minute", self.seconds_per_minute),
            ("clock_case_radius_ratio", self.clock_case_radius_ratio),
            ("second_hand_length_ratio", self.second_hand_length_ratio),
            ("indicator_distance_ratio", self.indicator_distance_ratio),
            ("font_size_ratio", self.font_size_ratio),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !self.letter_spacing.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "letter_spacing",
                value: self.letter_spacing,
            });
        }

        Ok(())
    }
}
