//! Coordinate and color types shared by the canvas, the compositor and the
//! presentation renderer.
//!
//! Canonical CPU space:
//! - Integer logical pixels of the composition buffer
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod viewport;

pub use color::Rgba8;
pub use rect::IRect;
pub use viewport::Viewport;
