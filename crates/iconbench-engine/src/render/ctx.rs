use crate::coords::{Rgba8, Viewport};
use crate::device::Gpu;

/// Device handles and surface facts a presenter needs for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Surface size in physical pixels.
    pub surface: Viewport,
    pub max_texture_size: u32,
}

impl<'a> RenderCtx<'a> {
    pub fn from_gpu(gpu: &'a Gpu<'_>) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            surface: gpu.size(),
            max_texture_size: gpu.max_texture_size(),
        }
    }
}

/// The frame's encoder and the surface view it renders into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
}

impl RenderTarget<'_> {
    /// Records a pass that clears the whole view to `color`.
    pub fn clear(&mut self, color: Rgba8) {
        let [r, g, b, a] = color.to_unit_f64();
        let _pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("iconbench clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}
