/// A single acquired surface frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// frame. Dropping it after submission presents it.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
