//! Scene ownership, generation, per-frame update and the startup description.

use std::io::{self, Write};
use std::rc::Rc;

use rand::Rng;

use crate::config::SceneConfig;
use crate::geometry::{Line, Point3, Rgba8, Star, Velocity3};

/// All stars and lines of the demo.
///
/// Every line's end point is the scene's single vanishing point, shared by
/// reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    vanishing_point: Rc<Point3>,
    lines: Vec<Line>,
    stars: Vec<Star>,
}

impl Scene {
    /// Builds a randomized scene.
    pub fn generate<R: Rng>(config: &SceneConfig, rng: &mut R) -> Self {
        let mut scene = Self::default();
        scene.regenerate(config, rng);
        scene
    }

    /// Discards all stars and lines and builds a fresh set.
    pub fn regenerate<R: Rng>(&mut self, config: &SceneConfig, rng: &mut R) {
        self.vanishing_point = Rc::new(config.vanishing_point());

        self.lines.clear();
        self.lines.reserve(config.line_count);
        for _ in 0..config.line_count {
            let color = Rgba8::new(
                rng.random_range(0..255),
                rng.random_range(0..255),
                rng.random_range(0..255),
                255,
            );
            let start = Point3::new(
                uniform(rng, 0.0, config.screen_width),
                uniform(rng, 0.0, config.screen_height),
                0.0,
            );
            let velocity = Velocity3::new(
                random_speed(rng, config.max_speed),
                random_speed(rng, config.max_speed),
                random_speed(rng, config.max_speed),
            );
            self.lines
                .push(Line::new(start, Rc::clone(&self.vanishing_point), color, velocity));
        }

        self.stars.clear();
        self.stars.reserve(config.star_count);
        for _ in 0..config.star_count {
            let depth = uniform(rng, 0.0, config.universe_depth);
            self.stars.push(Star::new(Point3::new(
                uniform(rng, 0.0, config.screen_width),
                uniform(rng, 0.0, config.screen_height),
                depth,
            )));
        }

        log::info!(
            "generated {} lines and {} stars converging on {}",
            self.lines.len(),
            self.stars.len(),
            self.vanishing_point
        );
    }

    /// Advances every line by one frame of its velocity and every star by one
    /// depth step.
    pub fn update(&mut self, config: &SceneConfig) {
        let dt = config.frame_dt();
        for line in &mut self.lines {
            line.advance(dt);
        }

        for star in &mut self.stars {
            star.advance(config.universe_depth);
        }
    }

    #[inline]
    pub fn vanishing_point(&self) -> &Rc<Point3> {
        &self.vanishing_point
    }

    /// Named points of the scene. Only the vanishing point today.
    pub fn nodes(&self) -> impl Iterator<Item = &Point3> {
        std::iter::once(self.vanishing_point.as_ref())
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    /// Writes a human-readable listing of the nodes and lines.
    pub fn describe<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Points")?;
        for point in self.nodes() {
            writeln!(out, "{point}")?;
        }

        writeln!(out, "Lines")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

/// Uniform sample in `[lo, hi)`; an empty range yields `lo`.
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Speed in `[-max / 2, max / 2)`.
fn random_speed<R: Rng>(rng: &mut R, max: f64) -> f64 {
    uniform(rng, -max / 2.0, max / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn scene(config: &SceneConfig, seed: u64) -> Scene {
        Scene::generate(config, &mut seeded(seed))
    }

    // ── generation ────────────────────────────────────────────────────────

    #[test]
    fn generates_configured_counts() {
        let config = SceneConfig::default();
        let s = scene(&config, 1);
        assert_eq!(s.lines().len(), 20);
        assert_eq!(s.stars().len(), 1000);
        assert_eq!(s.nodes().count(), 1);
    }

    #[test]
    fn stars_start_in_front_half_of_universe() {
        let config = SceneConfig::default();
        let s = scene(&config, 2);
        for star in s.stars() {
            assert!(star.pos.z >= 0.0 && star.pos.z < config.universe_depth, "{star:?}");
            assert!(star.pos.x >= 0.0 && star.pos.x < config.screen_width);
            assert!(star.pos.y >= 0.0 && star.pos.y < config.screen_height);
        }
    }

    #[test]
    fn lines_start_on_screen_at_zero_depth_and_are_opaque() {
        let config = SceneConfig::default();
        let s = scene(&config, 3);
        for line in s.lines() {
            assert_eq!(line.start.z, 0.0);
            assert!(line.start.x >= 0.0 && line.start.x < config.screen_width);
            assert!(line.start.y >= 0.0 && line.start.y < config.screen_height);
            assert_eq!(line.color().a, 255);
            assert!(line.color().r < 255 && line.color().g < 255 && line.color().b < 255);
        }
    }

    #[test]
    fn all_lines_share_one_vanishing_point() {
        let config = SceneConfig::default();
        let s = scene(&config, 4);
        assert_eq!(**s.vanishing_point(), Point3::new(400.0, 300.0, 2000.0));
        for line in s.lines() {
            assert!(Rc::ptr_eq(line.end_handle(), s.vanishing_point()));
        }
        // Scene + 20 lines.
        assert_eq!(Rc::strong_count(s.vanishing_point()), 21);
    }

    #[test]
    fn velocities_stay_within_half_max_speed() {
        let config = SceneConfig::default();
        let mut rng = seeded(5);
        for _ in 0..200 {
            let s = Scene::generate(&config, &mut rng);
            for line in s.lines() {
                let v = line.velocity();
                for c in [v.dx, v.dy, v.dz] {
                    assert!((-25.0..=25.0).contains(&c), "velocity component {c}");
                }
            }
        }
    }

    #[test]
    fn velocities_cover_both_signs() {
        let config = SceneConfig::default();
        let s = scene(&config, 6);
        let dx: Vec<f64> = s.lines().iter().map(|l| l.velocity().dx).collect();
        assert!(dx.iter().any(|&v| v < 0.0));
        assert!(dx.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn same_seed_same_scene() {
        let config = SceneConfig::default();
        let a = scene(&config, 42);
        let b = scene(&config, 42);
        assert_eq!(a.lines(), b.lines());
        assert_eq!(a.stars(), b.stars());

        let c = scene(&config, 43);
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn empty_configuration_generates_empty_scene() {
        let config = SceneConfig { star_count: 0, line_count: 0, ..SceneConfig::default() };
        let s = scene(&config, 7);
        assert!(s.lines().is_empty());
        assert!(s.stars().is_empty());
        assert_eq!(s.nodes().count(), 1);
    }

    #[test]
    fn regenerate_replaces_collections() {
        let config = SceneConfig::default();
        let mut rng = seeded(8);
        let mut s = Scene::generate(&config, &mut rng);
        let before = s.stars().to_vec();

        let smaller = SceneConfig { star_count: 10, line_count: 2, ..config };
        s.regenerate(&smaller, &mut rng);
        assert_eq!(s.stars().len(), 10);
        assert_eq!(s.lines().len(), 2);
        assert_ne!(s.stars(), &before[..10]);
    }

    #[test]
    fn zero_max_speed_gives_still_lines() {
        let config = SceneConfig { max_speed: 0.0, ..SceneConfig::default() };
        let s = scene(&config, 9);
        assert!(s.lines().iter().all(|l| l.velocity() == Velocity3::default()));
    }

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut rng = seeded(12);
        for _ in 0..5_000 {
            let v = uniform(&mut rng, -25.0, 25.0);
            assert!((-25.0..25.0).contains(&v), "{v}");
        }
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn star_depth_stays_bounded_over_many_frames() {
        let config = SceneConfig::default();
        let mut s = scene(&config, 10);
        let depth = config.universe_depth;
        for _ in 0..10_000 {
            s.update(&config);
            for star in s.stars() {
                assert!(star.pos.z >= -depth && star.pos.z <= depth, "{star:?}");
            }
        }
    }

    #[test]
    fn star_near_far_end_steps_by_one() {
        let config = SceneConfig::default();
        let mut s = scene(&SceneConfig { star_count: 1, ..config.clone() }, 11);
        s.stars_mut()[0].pos.z = config.universe_depth - 0.5;
        s.update(&config);
        assert_eq!(s.stars()[0].pos.z, config.universe_depth - 1.5);
    }

    #[test]
    fn star_just_past_camera_wraps_to_far_end() {
        let config = SceneConfig::default();
        let mut s = scene(&SceneConfig { star_count: 1, ..config.clone() }, 12);
        s.stars_mut()[0].pos.z = -config.universe_depth + 0.5;
        s.update(&config);
        assert_eq!(s.stars()[0].pos.z, config.universe_depth);
    }

    #[test]
    fn star_step_ignores_frame_rate() {
        let slow = SceneConfig { frame_rate: 10.0, star_count: 1, ..SceneConfig::default() };
        let mut s = scene(&slow, 13);
        let z0 = s.stars()[0].pos.z;
        s.update(&slow);
        assert_eq!(s.stars()[0].pos.z, z0 - 1.0);
    }

    #[test]
    fn line_start_follows_velocity_over_frames() {
        for rate in [30.0, 60.0, 144.0] {
            let config = SceneConfig { frame_rate: rate, ..SceneConfig::default() };
            let mut s = scene(&config, 14);
            let initial: Vec<Line> = s.lines().to_vec();

            let k = 600;
            for _ in 0..k {
                s.update(&config);
            }

            for (now, was) in s.lines().iter().zip(&initial) {
                let v = was.velocity();
                let t = k as f64 / rate;
                assert!((now.start.x - (was.start.x + v.dx * t)).abs() < 1e-9);
                assert!((now.start.y - (was.start.y + v.dy * t)).abs() < 1e-9);
                assert!((now.start.z - (was.start.z + v.dz * t)).abs() < 1e-9);
                assert_eq!(now.end(), was.end());
            }
        }
    }

    // ── describe ──────────────────────────────────────────────────────────

    #[test]
    fn describe_lists_point_then_lines() {
        let config = SceneConfig { line_count: 3, star_count: 5, ..SceneConfig::default() };
        let s = scene(&config, 15);

        let mut out = Vec::new();
        s.describe(&mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("utf-8");
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows[0], "Points");
        assert_eq!(rows[1], "(400.00, 300.00, 2000.00)");
        assert_eq!(rows[2], "Lines");
        assert_eq!(rows.len(), 3 + 3);
        for (row, line) in rows[3..].iter().zip(s.lines()) {
            assert_eq!(*row, line.to_string());
        }
    }
}
