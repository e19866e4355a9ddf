use crate::raster::{Canvas, TextureId};
use crate::text::GlyphSource;

/// Everything a composition draws with, passed by reference into each
/// [`IconCompositor`] operation.
///
/// `glyphs` and `icon` are optional so a composition degrades instead of
/// failing when an asset is missing.
///
/// [`IconCompositor`]: super::IconCompositor
pub struct DrawCtx<'a, C: Canvas + ?Sized> {
    pub canvas: &'a mut C,
    pub glyphs: Option<&'a dyn GlyphSource>,
    pub icon: Option<TextureId>,
}

impl<'a, C: Canvas + ?Sized> DrawCtx<'a, C> {
    #[inline]
    pub fn new(canvas: &'a mut C) -> Self {
        Self { canvas, glyphs: None, icon: None }
    }

    #[inline]
    pub fn with_glyphs(mut self, glyphs: &'a dyn GlyphSource) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    #[inline]
    pub fn with_icon(mut self, icon: TextureId) -> Self {
        self.icon = Some(icon);
        self
    }
}
