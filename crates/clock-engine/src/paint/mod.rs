//! Paint model shared between the scene and the renderers.
//!
//! Colors are linear, premultiplied alpha. Geometry types live in `coords`.

pub mod color;

pub use color::Color;
