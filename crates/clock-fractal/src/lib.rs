//! Fractal clock core.
//!
//! Turns the current time into a clock face whose minute and second hands
//! recursively sprout smaller copies of themselves at every tip. Everything is
//! drawn through the [`Canvas`] capability, so the crate carries no windowing
//! or GPU code and every frame is a pure function of time and canvas size.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`canvas`] | `Canvas` trait, `TextStyle` |
//! | [`color`] | `Rgba`, depth gradient |
//! | [`config`] | `ClockConfig` and its validation |
//! | [`error`] | `ConfigError` |
//! | [`face`] | hour hand, numeral ring, division ticks |
//! | [`fractal`] | the recursive hand tree |
//! | [`geometry`] | `Point`, `Size`, `Rect` |
//! | [`hand`] | time → angle → hand vector math |
//! | [`recording`] | `RecordingCanvas`, a canvas that records calls |
//! | [`renderer`] | `ClockFractalRenderer`, the per-frame entry point |
//! | [`time`] | `ClockTime`, `TimeSource`, `SystemClock` |
//!
//! # Quick start
//!
//! ```rust
//! use clock_fractal::{ClockConfig, ClockFractalRenderer, ClockTime, FixedClock, RecordingCanvas, Size};
//!
//! let clock = FixedClock(ClockTime::new(10, 9, 8, 500));
//! let renderer = ClockFractalRenderer::with_time_source(ClockConfig::default(), clock).unwrap();
//!
//! let mut canvas = RecordingCanvas::new();
//! renderer.render_frame(Size::new(800.0, 600.0), &mut canvas);
//!
//! // hour hand + 4094 fractal segments + 60 ticks
//! assert_eq!(canvas.line_count(), 1 + 4094 + 60);
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod face;
pub mod fractal;
pub mod geometry;
pub mod hand;
pub mod recording;
pub mod renderer;
pub mod time;

pub use canvas::{Canvas, TextStyle};
pub use color::Rgba;
pub use config::ClockConfig;
pub use error::ConfigError;
pub use geometry::{Point, Rect, Size};
pub use recording::{DrawOp, RecordingCanvas};
pub use renderer::ClockFractalRenderer;
pub use time::{ClockTime, FixedClock, SystemClock, TimeSource};
