/// Premultiplied RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
///
/// Channels are stored unencoded: the surface is a plain `Unorm` format (see
/// `GpuInit::prefer_srgb`), so a byte written here is the byte shown, and the
/// `One, OneMinusSrcAlpha` blend runs in byte space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight-alpha bytes (`0`–`255`).
    ///
    /// No transfer function is applied.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Channel array in the layout the instance buffers expect.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    /// Byte a `Unorm8` target stores for `src` blended over `dst` with
    /// `One, OneMinusSrcAlpha`.
    fn blend_byte(src: f32, src_a: f32, dst: f32) -> u8 {
        ((src + dst * (1.0 - src_a)) * 255.0).round() as u8
    }

    #[test]
    fn opaque_bytes_are_unchanged_by_premultiplication() {
        let c = Color::from_rgba8(255, 0, 51, 255);
        assert!(approx(c.r, 1.0));
        assert!(approx(c.g, 0.0));
        assert!(approx(c.b, 0.2));
        assert!(approx(c.a, 1.0));
    }

    #[test]
    fn half_alpha_white_is_premultiplied() {
        let c = Color::from_rgba8(255, 255, 255, 128);
        let a = 128.0 / 255.0;
        assert!(approx(c.a, a));
        assert!(approx(c.r, a));
        assert!(approx(c.g, a));
        assert!(approx(c.b, a));
    }

    // ── byte-space output ──

    #[test]
    fn half_alpha_white_over_black_shows_byte_128() {
        let star = Color::from_rgba8(255, 255, 255, 128);
        let black = Color::black();
        assert_eq!(blend_byte(star.r, star.a, black.r), 128);
    }

    #[test]
    fn opaque_channel_bytes_pass_through() {
        for byte in [0u8, 1, 64, 128, 200, 254] {
            let c = Color::from_rgba8(byte, 0, 0, 255);
            assert_eq!(blend_byte(c.r, c.a, 0.0), byte);
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 3.0);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }
}
