//! 3D Lines: a perspective starfield with line segments converging on a
//! vanishing point.
//!
//! The crate is split along the frame pipeline:
//! - `config`: immutable scene and window parameters
//! - `geometry`: points, velocities, colors, stars and lines
//! - `scene`: generation, per-frame update and the startup description
//! - `projection` / `draw`: star perspective and draw-list recording
//! - `app`: the engine-facing frame callback

pub mod app;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod projection;
pub mod scene;

pub use app::LinesApp;
pub use config::{SceneConfig, WindowConfig};
pub use scene::Scene;
