use anyhow::Result;

use lines3d_engine::coords::Viewport;
use lines3d_engine::core::{App, AppControl, FrameCtx};
use lines3d_engine::paint::Color;
use lines3d_engine::render::SceneRenderer;
use lines3d_engine::scene::DrawList;

use crate::config::SceneConfig;
use crate::scene::Scene;

/// Frames between debug statistics lines.
const STATS_INTERVAL: u64 = 600;

/// Drives the scene from the engine's frame loop: update, draw, render.
pub struct LinesApp {
    config: SceneConfig,
    scene: Scene,
    draw_list: DrawList,
    renderer: SceneRenderer,
}

impl LinesApp {
    pub fn new(config: SceneConfig, scene: Scene) -> Self {
        Self {
            config,
            scene,
            draw_list: DrawList::new(),
            renderer: SceneRenderer::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Advances the scene one frame and re-records the draw list.
    pub fn step(&mut self) {
        self.scene.update(&self.config);
        self.draw_list.clear();
        self.scene.draw(&self.config, &mut self.draw_list);
    }
}

impl App for LinesApp {
    /// The canvas is the configured screen size whatever the window size.
    fn layout(&self, _outside: Viewport) -> Viewport {
        self.config.canvas()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        self.step();

        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(Color::black(), |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })?;

        if ctx.time.frame_index % STATS_INTERVAL == 0 {
            log::debug!(
                "frame {}: {} draw commands, last dt {:.2}ms",
                ctx.time.frame_index,
                self.draw_list.len(),
                ctx.time.dt * 1000.0
            );
        }

        Ok(AppControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(config: SceneConfig) -> LinesApp {
        let scene = Scene::generate(&config, &mut StdRng::seed_from_u64(99));
        LinesApp::new(config, scene)
    }

    #[test]
    fn layout_reports_fixed_canvas() {
        let a = app(SceneConfig::default());
        assert_eq!(a.layout(Viewport::new(1920.0, 1080.0)), Viewport::new(800.0, 600.0));
        assert_eq!(a.layout(Viewport::new(10.0, 10.0)), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn step_updates_then_redraws() {
        let mut a = app(SceneConfig { star_count: 3, line_count: 2, ..SceneConfig::default() });
        let z0: Vec<f64> = a.scene().stars().iter().map(|s| s.pos.z).collect();

        a.step();
        a.step();

        let z2: Vec<f64> = a.scene().stars().iter().map(|s| s.pos.z).collect();
        for (before, after) in z0.iter().zip(&z2) {
            assert!((after - (before - 2.0)).abs() < 1e-9);
        }
        // The list holds only the latest frame.
        assert_eq!(a.draw_list().len(), 5);
    }

    #[test]
    fn empty_scene_steps_without_draws() {
        let mut a = app(SceneConfig { star_count: 0, line_count: 0, ..SceneConfig::default() });
        a.step();
        assert!(a.draw_list().is_empty());
    }
}
