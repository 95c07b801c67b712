//! Contracts between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and frame pacing; the application sees one
//! [`FrameCtx`] per redraw and each window event, and answers with an
//! [`AppControl`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
