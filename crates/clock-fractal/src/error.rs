use std::fmt;

/// Rejected [`ClockConfig`](crate::ClockConfig) value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The recursion depth exceeds what the renderer accepts.
    DepthTooLarge { depth: u32, max: u32 },
    /// A ratio or scale that must be a positive finite number is not.
    NotPositive { field: &'static str, value: f64 },
    /// A value that may be any sign is NaN or infinite.
    NotFinite { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DepthTooLarge { depth, max } => {
                write!(f, "clock config error: max_fractal_depth {depth} exceeds the supported maximum {max}")
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "clock config error: {field} must be a positive finite number, got {value}")
            }
            ConfigError::NotFinite { field, value } => {
                write!(f, "clock config error: {field} must be a finite number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
