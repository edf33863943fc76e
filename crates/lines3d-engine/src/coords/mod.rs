//! Coordinate types shared across the renderers and the demo.
//!
//! Canonical CPU space:
//! - Canvas pixels (the logical size the app reports from `App::layout`)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform, so a canvas
//! smaller or larger than the window is stretched to fill it.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
