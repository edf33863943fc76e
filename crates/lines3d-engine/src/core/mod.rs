//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the app it drives, without leaking runtime internals into app code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_viewport;
