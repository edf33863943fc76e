use super::surface;

/// Surface and device settings for the canvas window.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an `*Srgb` surface format when one is offered.
    ///
    /// Off by default: [`Color`](crate::paint::Color) channels are raw byte
    /// values and blend in byte space only on a `Unorm` target.
    pub prefer_srgb: bool,

    /// FIFO is supported everywhere; the runtime paces frames itself, so vsync
    /// only caps the rate from above.
    pub present_mode: wgpu::PresentMode,

    /// Requested compositor alpha mode; unsupported requests fall back to the
    /// surface's first mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Two instanced quad pipelines fit in the downlevel limits.
    pub limits: wgpu::Limits,

    /// Frame latency hint passed to the surface configuration.
    pub frame_latency: u32,
}

impl GpuInit {
    /// Surface format chosen from what the adapter offers.
    pub(crate) fn pick_format(&self, offered: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
        surface::choose_surface_format(offered, self.prefer_srgb)
    }

    pub(crate) fn pick_alpha_mode(&self, offered: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
        surface::choose_alpha_mode(offered, self.alpha_mode)
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            limits: wgpu::Limits::downlevel_defaults(),
            frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use wgpu::TextureFormat;

    #[test]
    fn default_picks_unencoded_surface() {
        let offered = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        let format = GpuInit::default().pick_format(&offered);
        assert_eq!(format, Some(TextureFormat::Bgra8Unorm));
        assert!(!TextureFormat::Bgra8Unorm.is_srgb());
    }

    #[test]
    fn star_alpha_lands_as_its_byte_on_default_surface() {
        // Unorm8 stores the blended channel directly; no sRGB encode on write.
        let star = Color::from_rgba8(255, 255, 255, 128);
        let shown = ((star.r + Color::black().r * (1.0 - star.a)) * 255.0).round() as u8;
        assert!(!GpuInit::default().prefer_srgb);
        assert_eq!(shown, 128);

        let line = Color::from_rgba8(64, 0, 0, 255);
        assert_eq!((line.r * 255.0).round() as u8, 64);
    }

    #[test]
    fn srgb_opt_in_still_available() {
        let init = GpuInit { prefer_srgb: true, ..GpuInit::default() };
        let offered = [TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(init.pick_format(&offered), Some(TextureFormat::Rgba8UnormSrgb));
    }
}
