//! GPU device + window surface.
//!
//! [`Gpu`] opens the adapter, device and queue for a window; the swapchain
//! lives in `surface`, which also decides how the loop reacts to surface
//! errors.

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use surface::{classify_surface_error, SurfaceErrorAction};
