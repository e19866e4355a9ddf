use image::RgbaImage;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};

/// Placement of the logical composition inside the surface, in physical
/// pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Letterbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scales `logical` uniformly to fit `surface`, centered, keeping its aspect
/// ratio. Returns `None` when either size is zero.
pub fn letterbox(logical: Viewport, surface: Viewport) -> Option<Letterbox> {
    if !logical.is_valid() || !surface.is_valid() {
        return None;
    }

    let (lw, lh) = (logical.width as f32, logical.height as f32);
    let (sw, sh) = (surface.width as f32, surface.height as f32);
    let scale = (sw / lw).min(sh / lh);

    let width = (lw * scale).round().min(sw);
    let height = (lh * scale).round().min(sh);
    Some(Letterbox {
        x: ((sw - width) / 2.0).floor(),
        y: ((sh - height) / 2.0).floor(),
        width,
        height,
    })
}

/// Uploads the composition buffer each frame and draws it onto the surface.
///
/// GPU objects are created lazily on first use; the texture is recreated
/// only when the composition size changes.
#[derive(Default)]
pub struct Presenter {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    texture: Option<wgpu::Texture>,
    texture_size: Viewport,
    bind_group: Option<wgpu::BindGroup>,

    warned_oversized: bool,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `composition` letterboxed into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        composition: &RgbaImage,
    ) {
        let size = Viewport::new(composition.width(), composition.height());
        let Some(placement) = letterbox(size, ctx.surface) else { return };

        let max = ctx.max_texture_size;
        if size.width > max || size.height > max {
            if !self.warned_oversized {
                log::error!(
                    "Presenter: composition {}x{} exceeds the {max}px texture limit; not presenting",
                    size.width,
                    size.height
                );
                self.warned_oversized = true;
            }
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_sampler(ctx);
        self.ensure_texture(ctx, size);
        self.ensure_bind_group(ctx);
        self.upload(ctx, composition);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("iconbench present pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(placement.x, placement.y, placement.width, placement.height, 0.0, 1.0);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn upload(&self, ctx: &RenderCtx<'_>, composition: &RgbaImage) {
        let Some(texture) = self.texture.as_ref() else { return };
        let (w, h) = composition.dimensions();

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            composition.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("iconbench present shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/present.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("iconbench present bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("iconbench present pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("iconbench present pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("iconbench present sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, size: Viewport) {
        if self.texture.is_some() && self.texture_size == size {
            return;
        }

        log::debug!("Presenter: composition texture {}x{}", size.width, size.height);
        self.texture = Some(ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("iconbench composition"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }));
        self.texture_size = size;
        self.bind_group = None;
    }

    fn ensure_bind_group(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(texture) = self.texture.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("iconbench present bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }));
    }
}
