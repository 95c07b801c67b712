//! Frame timing.
//!
//! One [`FrameClock`] per window: `tick()` once per presented frame yields a
//! [`FrameTime`]. [`FrameRateMeter`] turns those ticks into a periodic
//! frames-per-second figure for logging.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameRateMeter, FrameTime};
