//! Shape renderers.
//!
//! Each renderer splits its work in two steps so several of them can share a
//! render pass: `prepare` uploads the frame's instances, `draw` records one
//! instance range into an open pass.

mod common;

pub mod line;
pub mod text;
