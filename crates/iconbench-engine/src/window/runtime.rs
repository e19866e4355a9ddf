use std::time::{Duration, Instant};

use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, StartCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::error::{StartupError, StartupStage};

/// How the window occupies the display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowMode {
    /// A fixed-size window, in logical pixels.
    Windowed { width: u32, height: u32 },
    /// Borderless fullscreen on the current monitor.
    Fullscreen,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub mode: WindowMode,
    /// Time between redraws. The loop sleeps in between unless an event
    /// arrives.
    pub redraw_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "GW".to_string(),
            mode: WindowMode::Windowed { width: 480, height: 800 },
            redraw_interval: Duration::from_secs(10),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, builds the GPU context, starts `app` and runs until
    /// the window is closed.
    ///
    /// Returns the first startup failure, if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<(), StartupError>
    where
        A: 'static + CoreApp,
    {
        let event_loop =
            EventLoop::new().map_err(|e| StartupError::new(StartupStage::EventLoop, e))?;
        let mut state = AppState::new(config, gpu_init, app);

        let result = event_loop.run_app(&mut state);

        if let Some(err) = state.startup_error.take() {
            return Err(err);
        }
        result.map_err(|e| StartupError::new(StartupStage::EventLoop, e))?;

        log::info!("event loop finished after {} frame(s)", state.frames_drawn());
        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    frame_index: u64,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    next_redraw: Option<Instant>,
    startup_error: Option<StartupError>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            next_redraw: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn frames_drawn(&self) -> u64 {
        self.entry.as_ref().map_or(0, |e| *e.borrow_frame_index())
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, err: StartupError) {
        log::debug!("startup aborted at stage: {}", err.stage());
        self.startup_error = Some(err);
        self.entry = None;
        self.request_exit(event_loop);
    }

    fn create_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry, StartupError> {
        let mut attrs = Window::default_attributes().with_title(self.config.title.clone());
        attrs = match self.config.mode {
            WindowMode::Windowed { width, height } => attrs
                .with_inner_size(LogicalSize::new(width as f64, height as f64))
                .with_resizable(false),
            WindowMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        };

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| StartupError::new(StartupStage::Window, e))?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            frame_index: 0,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map_err(|e| StartupError::new(StartupStage::Renderer, e))
    }

    fn schedule_redraw(&mut self) {
        let Some(entry) = self.entry.as_ref() else { return };
        entry.with_window(|w| w.request_redraw());
        self.next_redraw = Some(Instant::now() + self.config.redraw_interval);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        let entry = match self.create_entry(event_loop) {
            Ok(entry) => entry,
            Err(err) => return self.fail_startup(event_loop, err),
        };

        let app = &mut self.app;
        let started = entry.with(|fields| {
            let mut ctx = StartCtx {
                window: WindowCtx { id: fields.window.id(), window: fields.window },
                gpu: fields.gpu,
            };
            app.on_start(&mut ctx)
        });
        if let Err(err) = started {
            return self.fail_startup(event_loop, err);
        }

        self.entry = Some(entry);
        self.schedule_redraw();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let due = self.next_redraw.is_none_or(|at| Instant::now() >= at);
        if due {
            self.schedule_redraw();
        }
        if let Some(at) = self.next_redraw {
            event_loop.set_control_flow(ControlFlow::WaitUntil(at));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            return self.request_exit(event_loop);
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("quit requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    let size = Viewport::new(new_size.width, new_size.height);
                    entry.with_gpu_mut(|gpu| gpu.resize(size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let inner = entry.with_window(|w| w.inner_size());
                    let size = Viewport::new(inner.width, inner.height);
                    entry.with_gpu_mut(|gpu| gpu.resize(size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let (app, entry) = (&mut self.app, &mut self.entry);
                let Some(entry) = entry.as_mut() else { return };

                let control = entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx { id: window_id, window: fields.window },
                        gpu: fields.gpu,
                        frame_index: *fields.frame_index,
                    };
                    let control = app.on_frame(&mut ctx);
                    *fields.frame_index += 1;
                    control
                });

                if control == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
