use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::LineCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::QuadPipeline;

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is a quad stretched along its direction; the fragment shader
/// fades the long edges for anti-aliasing. Zero-length segments draw a small
/// square, matching a 1px dot.
#[derive(Default)]
pub struct LineRenderer {
    pipeline: Option<QuadPipeline>,
    instances: Vec<LineInstance>,
}

impl LineRenderer {
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
            DrawCmd::Line(cmd) => LineInstance::from_cmd(cmd),
            _ => None,
        }));

        if self.instances.is_empty() {
            return;
        }

        if !self.pipeline.as_ref().is_some_and(|p| p.matches(ctx.surface_format)) {
            self.pipeline = Some(QuadPipeline::new(
                ctx,
                "lines3d line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout(),
            ));
        }
        let Some(pipeline) = self.pipeline.as_mut() else { return };

        pipeline.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (36 bytes):
///
///  offset  0  p0     [f32; 2]   loc 1
///  offset  8  p1     [f32; 2]   loc 2
///  offset 16  width   f32       loc 3
///  offset 20  color  [f32; 4]   loc 4  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    p0: [f32; 2],
    p1: [f32; 2],
    width: f32,
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // p0
        2 => Float32x2, // p1
        3 => Float32,   // width
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Returns `None` for invisible or non-finite segments.
    fn from_cmd(cmd: &LineCmd) -> Option<Self> {
        if !(cmd.width > 0.0) || !cmd.from.is_finite() || !cmd.to.is_finite() {
            return None;
        }
        Some(Self {
            p0: [cmd.from.x, cmd.from.y],
            p1: [cmd.to.x, cmd.to.y],
            width: cmd.width,
            color: cmd.color.to_array(),
        })
    }
}
