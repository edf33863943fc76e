/// Canvas size in logical pixels.
///
/// Renderers upload this to their viewport uniform and treat it as the basis for
/// converting canvas positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns a viewport safe to divide by in shaders (each side at least 1px).
    #[inline]
    pub fn sanitized(self) -> Self {
        if self.is_valid() {
            Self::new(self.width.max(1.0), self.height.max(1.0))
        } else {
            Self::new(1.0, 1.0)
        }
    }
}
