//! Clock engine crate.
//!
//! Owns the window, the GPU device and the 2D renderers the fractal clock
//! host draws through: anti-aliased lines and text, replayed in paint order.

pub mod core;
pub mod coords;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;
