//! Contracts between the runtime (platform loop) and the harness.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, StartCtx, WindowCtx};
