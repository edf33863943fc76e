use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Default stroke width for hairline segments, in canvas pixels.
pub const HAIRLINE_WIDTH: f32 = 1.0;

/// Straight segment draw payload.
///
/// Endpoints are canvas coordinates; no projection is applied by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }
}

impl DrawList {
    /// Records a line segment with an explicit stroke width.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }

    /// Records a 1px line segment.
    #[inline]
    pub fn push_hairline(&mut self, z: ZIndex, from: Vec2, to: Vec2, color: Color) {
        self.push_line(z, from, to, HAIRLINE_WIDTH, color);
    }
}
