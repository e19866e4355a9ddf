//! wgpu device and window surface.
//!
//! Owns the adapter, device and queue, keeps the surface configured across
//! resizes and losses, and hands out one [`GpuFrame`] per presented frame.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
