//! Time subsystem.
//!
//! Provides frame timing utilities without coupling to the runtime:
//! - `FrameClock` measures wall-clock deltas between presented frames
//! - `FramePacer` produces fixed-rate deadlines for the event loop

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
