use winit::window::{Window, WindowId};

use crate::coords::{Rgba8, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// The window handle and its metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Drawable size in physical pixels.
    pub fn output_size(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height)
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Context passed to `App::on_start`.
pub struct StartCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

/// Per-frame context passed to `App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Monotonic count of frames handed to the app.
    pub frame_index: u64,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a frame, clears it to `clear`, lets `draw` record into it and
    /// presents it.
    ///
    /// A failed acquisition skips the frame, or exits when the surface is
    /// unusable.
    pub fn render<F>(&mut self, clear: Rgba8, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        {
            let rctx = RenderCtx::from_gpu(self.gpu);
            let mut target = RenderTarget { encoder: &mut frame.encoder, view: &frame.view };
            target.clear(clear);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}
