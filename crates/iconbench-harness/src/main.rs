mod config;
mod demo;

use std::process::ExitCode;

use anyhow::{Context, anyhow};

use iconbench_engine::assets::load_image;
use iconbench_engine::compose::{DrawCtx, IconCompositor};
use iconbench_engine::coords::{Rgba8, Viewport};
use iconbench_engine::core::{App, AppControl, FrameCtx, StartCtx};
use iconbench_engine::device::GpuInit;
use iconbench_engine::logging::{LoggingConfig, init_logging};
use iconbench_engine::raster::{Canvas, SoftwareCanvas, TextureId};
use iconbench_engine::render::Presenter;
use iconbench_engine::text::Font;
use iconbench_engine::window::Runtime;
use iconbench_engine::{StartupError, StartupStage};

use config::{HarnessConfig, READY_TITLE};

/// Assets and the composition buffer, alive from a successful start until
/// shutdown.
struct Scene {
    canvas: SoftwareCanvas,
    font: Font,
    icon: TextureId,
    logical: Viewport,
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.canvas.destroy_texture(self.icon);
        log::debug!("released icon texture");
    }
}

struct Harness {
    config: HarnessConfig,
    compositor: IconCompositor,
    presenter: Presenter,
    scene: Option<Scene>,
}

impl Harness {
    fn new(config: HarnessConfig) -> Self {
        let compositor = IconCompositor::new(config.style.clone());
        Self { config, compositor, presenter: Presenter::new(), scene: None }
    }
}

impl App for Harness {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<(), StartupError> {
        let logical = self.config.composition_size(ctx.window.output_size());
        let max = ctx.gpu.max_texture_size();
        if !logical.is_valid() || logical.width > max || logical.height > max {
            return Err(StartupError::new(
                StartupStage::Canvas,
                anyhow!("composition size {}x{} outside 1..={max}", logical.width, logical.height),
            ));
        }
        let mut canvas = SoftwareCanvas::new(logical.width, logical.height).with_max_texture_size(max);
        log::info!("composition buffer {}x{}", logical.width, logical.height);

        let assets = &self.config.assets;
        let font = Font::open(assets.font_path(), assets.font_size)
            .map_err(|e| StartupError::new(StartupStage::Font, e))?;

        let icon_path = assets.icon_path();
        let pixels = load_image(&icon_path).map_err(|e| StartupError::new(StartupStage::Icon, e))?;
        let icon = canvas
            .create_texture(&pixels)
            .with_context(|| format!("uploading {}", icon_path.display()))
            .map_err(|e| StartupError::new(StartupStage::Icon, e))?;

        ctx.window.set_title(READY_TITLE);
        self.scene = Some(Scene { canvas, font, icon, logical });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        scene.canvas.clear(Rgba8::BLACK);
        {
            let mut draw = DrawCtx::new(&mut scene.canvas)
                .with_glyphs(&scene.font)
                .with_icon(scene.icon);
            demo::draw_scene(&self.compositor, &mut draw, scene.logical);
        }

        let presenter = &mut self.presenter;
        let composition = scene.canvas.target();
        ctx.render(Rgba8::BLACK, |rctx, target| {
            presenter.render(rctx, target, composition);
        })
    }
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = HarnessConfig::default();
    log::info!(
        "starting: {:?}, font {}, icon {}",
        config.window_mode,
        config.assets.font_path().display(),
        config.assets.icon_path().display()
    );

    let runtime = config.runtime_config();
    match Runtime::run(runtime, GpuInit::default(), Harness::new(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            ExitCode::from(2)
        }
    }
}
