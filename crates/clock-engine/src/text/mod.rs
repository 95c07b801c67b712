//! Font loading and text measurement.
//!
//! Fonts are parsed with `fontdue`. Layout and measurement share the same
//! letter-spacing rule as the text renderer so measured extents match what is
//! drawn.

mod font_system;

pub use font_system::{raster_scale, FontId, FontLoadError, FontSystem};
pub(crate) use font_system::spaced_x;
