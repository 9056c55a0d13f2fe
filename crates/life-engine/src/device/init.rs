/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// Defaults to `AutoNoVsync` so the runtime's target frame rate, not the
    /// display refresh, paces generations. Falls back to FIFO when the surface
    /// does not support the requested mode.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: None,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
