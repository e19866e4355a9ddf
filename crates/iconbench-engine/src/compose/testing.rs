//! Test doubles for compositor tests.

use std::cell::RefCell;
use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::coords::{IRect, Rgba8};
use crate::raster::{Canvas, TextureError, TextureId};
use crate::text::{GlyphSource, TextError};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Clear(Rgba8),
    Stroke(IRect, Rgba8),
    Fill(IRect, Rgba8),
    Create(TextureId),
    Destroy(TextureId),
    Copy(TextureId, IRect, Rgba8),
}

impl Op {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Op::Clear(_) => "clear",
            Op::Stroke(..) => "stroke",
            Op::Fill(..) => "fill",
            Op::Create(_) => "create",
            Op::Destroy(_) => "destroy",
            Op::Copy(..) => "copy",
        }
    }
}

/// Canvas that records every call instead of drawing.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub fail_create: bool,
    pub fail_copy: bool,
    textures: HashMap<TextureId, (u32, u32)>,
    next_id: u32,
}

impl RecordingCanvas {
    /// Every `create_texture` fails.
    pub(crate) fn failing_create() -> Self {
        Self { fail_create: true, ..Self::default() }
    }

    /// Every `copy` fails; textures are still created and destroyed.
    pub(crate) fn failing_copy() -> Self {
        Self { fail_copy: true, ..Self::default() }
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (1024, 1024)
    }

    fn clear(&mut self, color: Rgba8) {
        self.ops.push(Op::Clear(color));
    }

    fn stroke_rect(&mut self, rect: IRect, color: Rgba8) {
        self.ops.push(Op::Stroke(rect, color));
    }

    fn fill_rect(&mut self, rect: IRect, color: Rgba8) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn create_texture(&mut self, pixels: &RgbaImage) -> Result<TextureId, TextureError> {
        if self.fail_create {
            return Err(TextureError::TooLarge { width: pixels.width(), height: pixels.height(), max: 0 });
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(id, pixels.dimensions());
        self.ops.push(Op::Create(id));
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        self.textures.remove(&id);
        self.ops.push(Op::Destroy(id));
    }

    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id).copied()
    }

    fn copy(&mut self, id: TextureId, dst: IRect, modulate: Rgba8) -> Result<(), TextureError> {
        if self.fail_copy || !self.textures.contains_key(&id) {
            return Err(TextureError::Unknown(id));
        }
        self.ops.push(Op::Copy(id, dst, modulate));
        Ok(())
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

/// Glyph source producing a solid `width x height` block in the requested
/// color, recording each request.
pub(crate) struct FixedGlyphs {
    width: u32,
    height: u32,
    requests: RefCell<Vec<(String, Rgba8)>>,
}

impl FixedGlyphs {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self { width, height, requests: RefCell::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<(String, Rgba8)> {
        self.requests.borrow().clone()
    }
}

impl GlyphSource for FixedGlyphs {
    fn rasterize(&self, text: &str, color: Rgba8) -> Result<RgbaImage, TextError> {
        self.requests.borrow_mut().push((text.to_string(), color));
        Ok(RgbaImage::from_pixel(self.width, self.height, Rgba(color.to_array())))
    }
}
