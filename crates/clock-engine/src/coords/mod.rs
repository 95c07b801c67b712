//! Coordinate types shared by the scene and the renderers.
//!
//! CPU space is logical pixels with the origin at the top-left, +X right and
//! +Y down. Shaders convert to NDC through a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
