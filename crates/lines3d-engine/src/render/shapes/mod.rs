//! Shape renderers.

mod common;

pub mod circle;
pub mod line;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use circle::CircleRenderer;
use line::LineRenderer;

/// All shape renderers, driven together once per frame.
///
/// Each shape kind draws in its own pass, so layering across kinds is fixed:
/// line segments first, circles on top. Within a kind, paint order follows the
/// draw list.
#[derive(Default)]
pub struct SceneRenderer {
    lines: LineRenderer,
    circles: CircleRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.lines.render(ctx, target, draw_list);
        self.circles.render(ctx, target, draw_list);
    }
}
