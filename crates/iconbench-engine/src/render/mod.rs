//! GPU presentation.
//!
//! Compositions are drawn on the CPU into the composition buffer; the GPU
//! side only uploads that buffer and scales it onto the window surface.

mod ctx;
mod present;

pub use ctx::{RenderCtx, RenderTarget};
pub use present::{letterbox, Letterbox, Presenter};
