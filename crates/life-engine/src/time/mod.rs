//! Time subsystem.
//!
//! Frame timing and pacing without coupling to the runtime:
//! - one `FrameClock` per window
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - wait until `next_deadline()` before the next frame

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
