//! Icon compositions.
//!
//! An [`IconCompositor`] layers an icon, a text label and outline frames
//! into a rectangle. Each decoration level calls the previous one first, so
//! draw order is fixed: icon, label, frame, selection rings, accent marker.
//!
//! Rectangle arithmetic is plain integer math with no clamping; whatever
//! falls outside the target is clipped by the canvas.

mod compositor;
mod ctx;
mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use compositor::IconCompositor;
pub use ctx::DrawCtx;
pub use style::CompositorStyle;
