use crate::coords::Viewport;

use super::SurfaceErrorAction;

const SRGB_FORMATS: [wgpu::TextureFormat; 2] =
    [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb];

/// First supported sRGB format when `prefer_srgb`, else the surface's own
/// first choice.
pub(crate) fn pick_format(
    available: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = if prefer_srgb {
        SRGB_FORMATS.into_iter().find(|f| available.contains(f))
    } else {
        None
    };
    srgb.or_else(|| available.first().copied())
}

/// Every surface supports FIFO.
pub(crate) fn pick_present_mode(
    available: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if available.contains(&requested) {
        return requested;
    }
    log::warn!("present mode {requested:?} unsupported; using Fifo");
    wgpu::PresentMode::Fifo
}

pub(crate) fn pick_alpha_mode(
    available: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| available.contains(m))
        .or_else(|| available.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// The window surface together with its active configuration.
///
/// `size` tracks the window even while it is zero-sized; the configuration
/// keeps the last size the surface accepted.
pub(crate) struct SurfaceState<'w> {
    pub(crate) surface: wgpu::Surface<'w>,
    pub(crate) config: wgpu::SurfaceConfiguration,
    pub(crate) size: Viewport,
}

impl<'w> SurfaceState<'w> {
    pub(crate) fn new(
        surface: wgpu::Surface<'w>,
        device: &wgpu::Device,
        config: wgpu::SurfaceConfiguration,
    ) -> Self {
        surface.configure(device, &config);
        log::debug!("surface configured: {:?} {}x{}", config.format, config.width, config.height);
        let size = Viewport::new(config.width, config.height);
        Self { surface, config, size }
    }

    pub(crate) fn resize(&mut self, device: &wgpu::Device, size: Viewport) {
        self.size = size;
        if !size.is_valid() {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(device, &self.config);
    }

    pub(crate) fn recover(&self, device: &wgpu::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = SurfaceErrorAction::classify(&err);
        match action {
            SurfaceErrorAction::Reconfigured if self.size.is_valid() => {
                self.surface.configure(device, &self.config);
            }
            SurfaceErrorAction::Reconfigured => {}
            SurfaceErrorAction::SkipFrame => log::warn!("surface error {err:?}; skipping frame"),
            SurfaceErrorAction::Fatal => log::error!("surface error {err:?}; giving up"),
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use wgpu::{CompositeAlphaMode, PresentMode, TextureFormat};

    use super::*;

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(TextureFormat::Rgba8UnormSrgb));
        assert_eq!(pick_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn no_formats_means_no_surface() {
        assert_eq!(pick_format(&[], true), None);
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let modes = [PresentMode::Fifo, PresentMode::Mailbox];
        assert_eq!(pick_present_mode(&modes, PresentMode::Mailbox), PresentMode::Mailbox);
        assert_eq!(pick_present_mode(&modes, PresentMode::Immediate), PresentMode::Fifo);
    }

    #[test]
    fn alpha_mode_request_must_be_supported() {
        let modes = [CompositeAlphaMode::Opaque];
        assert_eq!(pick_alpha_mode(&modes, Some(CompositeAlphaMode::PreMultiplied)), CompositeAlphaMode::Opaque);
        assert_eq!(pick_alpha_mode(&modes, None), CompositeAlphaMode::Opaque);
        assert_eq!(pick_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }
}
