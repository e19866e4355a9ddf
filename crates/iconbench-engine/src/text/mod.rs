//! Text rasterization.
//!
//! Text is rasterized on demand into standalone RGBA bitmaps; there is no
//! glyph cache. Callers upload the bitmap as a transient texture.

mod font;

pub use font::{Font, GlyphSource, TextError};
