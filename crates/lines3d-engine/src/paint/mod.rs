//! Paint model shared between the demo and the renderers.
//!
//! Every shape is filled with a single solid color in linear premultiplied
//! alpha. Geometry types remain in `coords`.

mod color;

pub use color::Color;
