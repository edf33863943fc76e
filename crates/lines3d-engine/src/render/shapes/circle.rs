use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::CircleCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::QuadPipeline;

/// Renderer for `DrawCmd::Circle`.
///
/// Circles are filled with a solid premultiplied color and anti-aliased over
/// one pixel at the rim.
#[derive(Default)]
pub struct CircleRenderer {
    pipeline: Option<QuadPipeline>,
    instances: Vec<CircleInstance>,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Circle(cmd) => CircleInstance::from_cmd(cmd),
            _ => None,
        }));

        if self.instances.is_empty() {
            return;
        }

        if !self.pipeline.as_ref().is_some_and(|p| p.matches(ctx.surface_format)) {
            self.pipeline = Some(QuadPipeline::new(
                ctx,
                "lines3d circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout(),
            ));
        }
        let Some(pipeline) = self.pipeline.as_mut() else { return };

        pipeline.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (28 bytes):
///
///  offset  0  center  [f32; 2]   loc 1
///  offset  8  radius   f32       loc 2
///  offset 12  color   [f32; 4]   loc 3  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius: f32,
    color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32,   // radius
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Returns `None` for circles that would cover no pixels.
    fn from_cmd(cmd: &CircleCmd) -> Option<Self> {
        if !(cmd.radius > 0.0) || !cmd.radius.is_finite() || !cmd.center.is_finite() {
            return None;
        }
        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            radius: cmd.radius,
            color: cmd.color.to_array(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn instance_layout_is_packed() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 28);
    }

    #[test]
    fn degenerate_circles_are_dropped() {
        let c = |r| CircleCmd::new(Vec2::new(1.0, 1.0), r, Color::black());
        assert!(CircleInstance::from_cmd(&c(0.0)).is_none());
        assert!(CircleInstance::from_cmd(&c(-2.0)).is_none());
        assert!(CircleInstance::from_cmd(&c(f32::NAN)).is_none());
        assert!(CircleInstance::from_cmd(&c(f32::INFINITY)).is_none());
    }

    #[test]
    fn instance_carries_premultiplied_color() {
        let color = Color::from_rgba8(255, 255, 255, 128);
        let inst = CircleInstance::from_cmd(&CircleCmd::new(Vec2::new(3.0, 4.0), 2.0, color))
            .expect("positive radius");
        assert_eq!(inst.center, [3.0, 4.0]);
        assert_eq!(inst.radius, 2.0);
        assert_eq!(inst.color, color.to_array());
    }
}
