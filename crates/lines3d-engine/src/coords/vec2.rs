/// 2D vector in canvas pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Narrows double-precision scene coordinates to GPU precision.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x as f32, y as f32)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_narrows() {
        assert_eq!(Vec2::from_f64(400.0, 300.5), Vec2::new(400.0, 300.5));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Vec2::new(f32::INFINITY, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f32::NAN).is_finite());
        assert!(Vec2::zero().is_finite());
    }
}
