//! CPU render targets.
//!
//! `Canvas` is the seam the compositor draws through. `SoftwareCanvas`
//! implements it on an RGBA8 composition buffer which the presentation
//! renderer uploads to the GPU once per frame.
//!
//! Convention:
//! - integer logical pixels, top-left origin
//! - straight-alpha "over" blending for every draw
//! - out-of-bounds geometry is clipped, never rejected

mod blend;
mod canvas;
mod soft;

pub use blend::{blend_over, modulate, mul_un8};
pub use canvas::{Canvas, TextureError, TextureId, TransientTexture};
pub use soft::{SoftwareCanvas, DEFAULT_MAX_TEXTURE_SIZE};
