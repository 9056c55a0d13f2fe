/// What the runtime should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM); the renderer cannot continue.
    Fatal,
}

impl SurfaceErrorAction {
    /// Maps a wgpu surface error to an action, without touching the surface.
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                SurfaceErrorAction::Reconfigured
            }
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
                SurfaceErrorAction::SkipFrame
            }
        }
    }

    /// `Err` for [`Fatal`](Self::Fatal), carrying `err`; `Ok` otherwise.
    pub fn into_result(self, err: &wgpu::SurfaceError) -> anyhow::Result<()> {
        match self {
            SurfaceErrorAction::Fatal => {
                anyhow::bail!("surface cannot produce frames anymore: {err}")
            }
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
        }
    }
}
