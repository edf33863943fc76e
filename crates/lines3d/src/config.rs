use anyhow::{ensure, Result};
use winit::dpi::LogicalSize;

use lines3d_engine::coords::Viewport;
use lines3d_engine::window::RuntimeConfig;

use crate::geometry::{Point3, Rgba8};

/// Immutable scene parameters shared by generation, update and draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Frames per second; line motion is integrated with `1 / frame_rate`.
    pub frame_rate: f64,
    /// Stars live in `[-universe_depth, universe_depth]`.
    pub universe_depth: f64,
    /// Star radius at depth 0.
    pub star_radius: f64,
    /// Line velocities are drawn from `[-max_speed / 2, max_speed / 2)` per axis.
    pub max_speed: f64,
    pub star_count: usize,
    pub line_count: usize,
    pub star_color: Rgba8,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            frame_rate: 60.0,
            universe_depth: 2000.0,
            star_radius: 4.0,
            max_speed: 50.0,
            star_count: 1000,
            line_count: 20,
            star_color: Rgba8::new(255, 255, 255, 128),
        }
    }
}

impl SceneConfig {
    /// Checks the parameters the projection and update divide by.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width.is_finite() && self.screen_width > 0.0,
            "screen width must be positive, got {}",
            self.screen_width
        );
        ensure!(
            self.screen_height.is_finite() && self.screen_height > 0.0,
            "screen height must be positive, got {}",
            self.screen_height
        );
        ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "frame rate must be positive, got {}",
            self.frame_rate
        );
        ensure!(
            self.universe_depth.is_finite() && self.universe_depth > 0.0,
            "universe depth must be positive, got {}",
            self.universe_depth
        );
        ensure!(
            self.star_radius.is_finite() && self.star_radius >= 0.0,
            "star radius must be non-negative, got {}",
            self.star_radius
        );
        ensure!(
            self.max_speed.is_finite() && self.max_speed >= 0.0,
            "max speed must be non-negative, got {}",
            self.max_speed
        );
        Ok(())
    }

    /// Seconds per frame.
    #[inline]
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// The point every line converges on: screen center at full depth.
    #[inline]
    pub fn vanishing_point(&self) -> Point3 {
        Point3::new(self.screen_width / 2.0, self.screen_height / 2.0, self.universe_depth)
    }

    /// Fixed logical canvas the scene is drawn into.
    #[inline]
    pub fn canvas(&self) -> Viewport {
        Viewport::new(self.screen_width as f32, self.screen_height as f32)
    }
}

/// Window parameters for the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Lines".to_string(),
            width: 800.0,
            height: 600.0,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Builds the engine runtime config, pacing frames at the scene's rate.
    pub fn runtime_config(&self, scene: &SceneConfig) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: self.resizable,
            frame_rate: scene.frame_rate,
        }
    }
}
