/// One acquired surface frame with a fresh encoder.
///
/// Holding the surface texture blocks acquisition of the next frame; submit
/// promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the frame loop does after failing to acquire a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface went stale and was configured again; the next frame
    /// should succeed.
    Reconfigured,
    /// Skip this frame and try again on the next redraw.
    SkipFrame,
    /// Stop presenting.
    Fatal,
}

impl SurfaceErrorAction {
    pub(crate) fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigured,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
        }
    }
}
