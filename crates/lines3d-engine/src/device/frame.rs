/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// frame, so it must be submitted promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
