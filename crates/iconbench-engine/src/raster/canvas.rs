use image::RgbaImage;
use thiserror::Error;

use crate::coords::{IRect, Rgba8};

/// Opaque handle to a texture owned by a [`Canvas`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) u32);

/// Texture creation and copy failures. Recoverable: callers log and skip.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TextureError {
    #[error("texture has zero size ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("texture size {width}x{height} exceeds the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("unknown texture {0:?}")]
    Unknown(TextureId),
}

/// A render target the compositor draws into.
///
/// Colors are passed per call; a canvas holds no current draw color or
/// per-texture modulation state.
pub trait Canvas {
    /// Target size in pixels.
    fn size(&self) -> (u32, u32);

    /// Overwrites every pixel with `color` (no blending).
    fn clear(&mut self, color: Rgba8);

    /// Strokes a one-pixel outline along the rectangle's declared edges.
    fn stroke_rect(&mut self, rect: IRect, color: Rgba8);

    /// Blends `color` over every pixel of `rect`.
    fn fill_rect(&mut self, rect: IRect, color: Rgba8);

    /// Uploads `pixels` into a new texture owned by this canvas.
    fn create_texture(&mut self, pixels: &RgbaImage) -> Result<TextureId, TextureError>;

    /// Releases a texture. Unknown ids are ignored.
    fn destroy_texture(&mut self, id: TextureId);

    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)>;

    /// Stretches the whole texture over `dst`, multiplying every texel by
    /// `modulate` before blending.
    fn copy(&mut self, id: TextureId, dst: IRect, modulate: Rgba8) -> Result<(), TextureError>;

    /// Number of textures currently alive.
    fn live_textures(&self) -> usize;
}

/// Texture that is destroyed when the guard goes out of scope.
///
/// Borrows the canvas for its whole lifetime; draw through
/// [`TransientTexture::copy`] while it is held.
pub struct TransientTexture<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    id: TextureId,
}

impl<'c, C: Canvas + ?Sized> TransientTexture<'c, C> {
    pub fn create(canvas: &'c mut C, pixels: &RgbaImage) -> Result<Self, TextureError> {
        let id = canvas.create_texture(pixels)?;
        Ok(Self { canvas, id })
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.canvas.texture_size(self.id)
    }

    pub fn copy(&mut self, dst: IRect, modulate: Rgba8) -> Result<(), TextureError> {
        self.canvas.copy(self.id, dst, modulate)
    }
}

impl<C: Canvas + ?Sized> Drop for TransientTexture<'_, C> {
    fn drop(&mut self) {
        self.canvas.destroy_texture(self.id);
    }
}
