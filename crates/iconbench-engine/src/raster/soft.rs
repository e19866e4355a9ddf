use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::coords::{IRect, Rgba8};

use super::blend::{blend_over, modulate};
use super::canvas::{Canvas, TextureError, TextureId};

/// Largest texture edge accepted by default, matching common GPU limits.
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 8192;

/// CPU canvas drawing into an RGBA8 composition buffer.
///
/// Textures are kept as decoded RGBA8 images and sampled nearest-neighbour
/// when stretched.
pub struct SoftwareCanvas {
    target: RgbaImage,
    textures: HashMap<TextureId, RgbaImage>,
    next_id: u32,
    max_texture_size: u32,
}

impl SoftwareCanvas {
    /// Creates a canvas cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            textures: HashMap::new(),
            next_id: 0,
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }

    pub fn with_max_texture_size(mut self, max: u32) -> Self {
        self.max_texture_size = max;
        self
    }

    /// The composition buffer.
    #[inline]
    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        Rgba8::from_array(self.target.get_pixel(x, y).0)
    }

    fn bounds(&self) -> IRect {
        IRect::new(0, 0, self.target.width() as i32, self.target.height() as i32)
    }

    #[inline]
    fn blend_at(&mut self, x: u32, y: u32, color: Rgba8) {
        let px = self.target.get_pixel_mut(x, y);
        *px = Rgba(blend_over(Rgba8::from_array(px.0), color).to_array());
    }

    /// Blends the inclusive span `x0..=x1` of row `y`, clipped to the target.
    fn hspan(&mut self, x0: i64, x1: i64, y: i64, color: Rgba8) {
        let (w, h) = (self.target.width() as i64, self.target.height() as i64);
        if y < 0 || y >= h {
            return;
        }
        for x in x0.max(0)..=x1.min(w - 1) {
            self.blend_at(x as u32, y as u32, color);
        }
    }

    /// Blends the inclusive span `y0..=y1` of column `x`, clipped to the
    /// target.
    fn vspan(&mut self, x: i64, y0: i64, y1: i64, color: Rgba8) {
        let (w, h) = (self.target.width() as i64, self.target.height() as i64);
        if x < 0 || x >= w {
            return;
        }
        for y in y0.max(0)..=y1.min(h - 1) {
            self.blend_at(x as u32, y as u32, color);
        }
    }
}

impl Canvas for SoftwareCanvas {
    fn size(&self) -> (u32, u32) {
        self.target.dimensions()
    }

    fn clear(&mut self, color: Rgba8) {
        let px = Rgba(color.to_array());
        for p in self.target.pixels_mut() {
            *p = px;
        }
    }

    fn stroke_rect(&mut self, rect: IRect, color: Rgba8) {
        if rect.is_empty() {
            return;
        }

        let (left, top) = (rect.x as i64, rect.y as i64);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        // Rows own the corners; columns cover only the interior so every
        // outline pixel is blended exactly once.
        self.hspan(left, right, top, color);
        if bottom > top {
            self.hspan(left, right, bottom, color);
        }
        self.vspan(left, top + 1, bottom - 1, color);
        if right > left {
            self.vspan(right, top + 1, bottom - 1, color);
        }
    }

    fn fill_rect(&mut self, rect: IRect, color: Rgba8) {
        let Some(clip) = rect.intersect(self.bounds()) else { return };
        for y in clip.y as i64..clip.bottom() {
            self.hspan(clip.x as i64, clip.right() - 1, y, color);
        }
    }

    fn create_texture(&mut self, pixels: &RgbaImage) -> Result<TextureId, TextureError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }
        if width > self.max_texture_size || height > self.max_texture_size {
            return Err(TextureError::TooLarge { width, height, max: self.max_texture_size });
        }

        let id = TextureId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.textures.insert(id, pixels.clone());
        log::trace!("SoftwareCanvas: created texture {id:?} ({width}x{height})");
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_some() {
            log::trace!("SoftwareCanvas: destroyed texture {id:?}");
        }
    }

    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id).map(|t| t.dimensions())
    }

    fn copy(&mut self, id: TextureId, dst: IRect, by: Rgba8) -> Result<(), TextureError> {
        let Some(texture) = self.textures.get(&id) else {
            return Err(TextureError::Unknown(id));
        };
        let Some(clip) = dst.intersect(self.bounds()) else { return Ok(()) };

        let (tw, th) = (texture.width() as i64, texture.height() as i64);
        let (dx, dy, dw, dh) = (dst.x as i64, dst.y as i64, dst.w as i64, dst.h as i64);

        for y in clip.y as i64..clip.bottom() {
            // Sample at destination pixel centers.
            let sy = ((2 * (y - dy) + 1) * th / (2 * dh)) as u32;
            for x in clip.x as i64..clip.right() {
                let sx = ((2 * (x - dx) + 1) * tw / (2 * dw)) as u32;
                let texel = Rgba8::from_array(texture.get_pixel(sx, sy).0);
                let src = modulate(texel, by);

                let px = self.target.get_pixel_mut(x as u32, y as u32);
                *px = Rgba(blend_over(Rgba8::from_array(px.0), src).to_array());
            }
        }
        Ok(())
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }
}
