use anyhow::{Context, Result};
use winit::window::Window;

use crate::coords::Viewport;

use super::surface::{self, SurfaceState};
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// wgpu device, queue and the surface of one window.
///
/// `'w` is the borrow of the window the surface draws into.
pub struct Gpu<'w> {
    _instance: wgpu::Instance,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: SurfaceState<'w>,
}

impl<'w> Gpu<'w> {
    /// Acquires an adapter compatible with `window` and configures its
    /// surface at the window's current size.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let inner = window.inner_size();
        let size = Viewport::new(inner.width, inner.height);
        anyhow::ensure!(size.is_valid(), "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let raw_surface = instance
            .create_surface(window)
            .context("creating window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&raw_surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.device_type, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("iconbench device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("requesting device")?;

        let caps = raw_surface.get_capabilities(&adapter);
        let format = surface::pick_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: surface::pick_present_mode(&caps.present_modes, init.present_mode),
            alpha_mode: surface::pick_alpha_mode(&caps.alpha_modes, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        let surface = SurfaceState::new(raw_surface, &device, config);

        Ok(Self { _instance: instance, device, queue, surface })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface.config.format
    }

    /// Drawable size in physical pixels. Zero while minimized.
    pub fn size(&self) -> Viewport {
        self.surface.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Largest 2D texture edge the device accepts.
    pub fn max_texture_size(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    pub fn resize(&mut self, size: Viewport) {
        self.surface.resize(&self.device, size);
    }

    pub fn begin_frame(&self) -> Result<GpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.surface.get_current_texture()?;
        let view = surface_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("iconbench frame encoder"),
        });
        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands and presents it.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        self.surface.recover(&self.device, err)
    }
}
