//! Records the scene into the engine's draw list.

use lines3d_engine::coords::Vec2;
use lines3d_engine::paint::Color;
use lines3d_engine::scene::{DrawList, ZIndex};

use crate::config::SceneConfig;
use crate::projection::project_star;
use crate::scene::Scene;

/// Lines sit under the stars.
pub const LINE_LAYER: ZIndex = ZIndex::BASE;
pub const STAR_LAYER: ZIndex = LINE_LAYER.above();

impl Scene {
    /// Appends one hairline per line and one circle per visible star.
    ///
    /// Line endpoints are used as canvas coordinates directly; only stars are
    /// projected. The caller owns clearing `list` between frames.
    pub fn draw(&self, config: &SceneConfig, list: &mut DrawList) {
        for line in self.lines() {
            let end = line.end();
            list.push_hairline(
                LINE_LAYER,
                Vec2::from_f64(line.start.x, line.start.y),
                Vec2::from_f64(end.x, end.y),
                line.color().into(),
            );
        }

        let star_color: Color = config.star_color.into();
        for star in self.stars() {
            let Some(p) = project_star(&star.pos, config) else { continue };
            list.push_circle(STAR_LAYER, Vec2::from_f64(p.x, p.y), p.radius as f32, star_color);
        }
    }
}
