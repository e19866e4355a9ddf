use winit::event::WindowEvent;

use crate::error::StartupError;

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called once after the window and GPU exist, before the first frame.
    /// An error aborts the run.
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<(), StartupError>;

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
