use winit::dpi::PhysicalSize;

/// Picks the first offered format whose sRGB encoding matches `prefer_srgb`,
/// falling back to the first offered format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Size for the first surface configuration.
///
/// Some platforms report 0x0 before the first resize event; the surface starts
/// at 1x1 and `apply_resize` installs the real size later.
pub(crate) fn initial_size(reported: PhysicalSize<u32>) -> PhysicalSize<u32> {
    PhysicalSize::new(reported.width.max(1), reported.height.max(1))
}

/// Applies a new drawable size to the surface configuration.
///
/// wgpu rejects 0x0 surfaces (minimized windows); in that case only `size` is
/// updated and configuration waits for the next non-zero resize.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}
