//! Plain value types for the scene.

use std::fmt;
use std::rc::Rc;

use lines3d_engine::paint::Color;

/// Per-frame depth step for stars, independent of the frame rate.
pub const STAR_STEP: f64 = 1.0;

/// Position in world space. `z` is depth, increasing away from the camera.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Speed per axis in world units per second.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Velocity3 {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Velocity3 {
    #[inline]
    pub const fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }
}

impl fmt::Display for Velocity3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+.2}, {:+.2}, {:+.2})/s", self.dx, self.dy, self.dz)
    }
}

/// Straight-alpha 8-bit color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A point of the starfield, moving toward the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Star {
    pub pos: Point3,
}

impl Star {
    #[inline]
    pub const fn new(pos: Point3) -> Self {
        Self { pos }
    }

    /// Moves one step toward the camera; once past `-depth` the star is
    /// recycled at the far end.
    #[inline]
    pub fn advance(&mut self, depth: f64) {
        self.pos.z -= STAR_STEP;
        if self.pos.z < -depth {
            self.pos.z = depth;
        }
    }
}

/// A segment from a moving start point to the shared vanishing point.
///
/// Color and velocity are fixed at creation; only `start` changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point3,
    end: Rc<Point3>,
    color: Rgba8,
    velocity: Velocity3,
}

impl Line {
    pub fn new(start: Point3, end: Rc<Point3>, color: Rgba8, velocity: Velocity3) -> Self {
        Self { start, end, color, velocity }
    }

    #[inline]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Shared handle to the end point, for identity checks.
    #[inline]
    pub fn end_handle(&self) -> &Rc<Point3> {
        &self.end
    }

    #[inline]
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    #[inline]
    pub fn velocity(&self) -> Velocity3 {
        self.velocity
    }

    /// Integrates the start point over `dt` seconds. No bounds are applied.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.start.x += self.velocity.dx * dt;
        self.start.y += self.velocity.dy * dt;
        self.start.z += self.velocity.dz * dt;
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start {} end {} color {} velocity {}",
            self.start, self.end, self.color, self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTH: f64 = 2000.0;

    fn line(velocity: Velocity3) -> Line {
        Line::new(
            Point3::new(10.0, 20.0, 0.0),
            Rc::new(Point3::new(400.0, 300.0, DEPTH)),
            Rgba8::new(1, 2, 3, 255),
            velocity,
        )
    }

    // ── star ──────────────────────────────────────────────────────────────

    #[test]
    fn star_steps_one_unit() {
        let mut s = Star::new(Point3::new(0.0, 0.0, DEPTH - 0.5));
        s.advance(DEPTH);
        assert_eq!(s.pos.z, DEPTH - 1.5);
    }

    #[test]
    fn star_at_minus_depth_waits_one_frame_before_wrapping() {
        let mut s = Star::new(Point3::new(0.0, 0.0, -DEPTH + 1.0));
        s.advance(DEPTH);
        assert_eq!(s.pos.z, -DEPTH);
        s.advance(DEPTH);
        assert_eq!(s.pos.z, DEPTH);
    }

    #[test]
    fn star_keeps_x_and_y() {
        let mut s = Star::new(Point3::new(12.0, 34.0, 0.0));
        s.advance(DEPTH);
        assert_eq!((s.pos.x, s.pos.y), (12.0, 34.0));
    }

    // ── line ──────────────────────────────────────────────────────────────

    #[test]
    fn line_moves_by_velocity_times_dt() {
        let mut l = line(Velocity3::new(6.0, -12.0, 3.0));
        l.advance(0.5);
        assert_eq!(l.start, Point3::new(13.0, 14.0, 1.5));
    }

    #[test]
    fn line_end_color_and_velocity_are_fixed() {
        let v = Velocity3::new(6.0, -12.0, 3.0);
        let mut l = line(v);
        for _ in 0..10 {
            l.advance(1.0 / 60.0);
        }
        assert_eq!(*l.end(), Point3::new(400.0, 300.0, DEPTH));
        assert_eq!(l.color(), Rgba8::new(1, 2, 3, 255));
        assert_eq!(l.velocity(), v);
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_formats() {
        assert_eq!(Point3::new(1.0, 2.5, -3.0).to_string(), "(1.00, 2.50, -3.00)");
        assert_eq!(Rgba8::new(255, 0, 16, 255).to_string(), "#ff0010ff");
        let l = line(Velocity3::new(1.0, -2.0, 0.0));
        assert_eq!(
            l.to_string(),
            "start (10.00, 20.00, 0.00) end (400.00, 300.00, 2000.00) color #010203ff \
             velocity (+1.00, -2.00, +0.00)/s"
        );
    }

    #[test]
    fn rgba8_converts_to_premultiplied_color() {
        let c: Color = Rgba8::new(255, 255, 255, 0).into();
        assert_eq!(c, Color::transparent());
    }
}
