//! lines3d engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo: one
//! window, a fixed-rate frame loop, and instanced renderers for circles and
//! line segments.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
