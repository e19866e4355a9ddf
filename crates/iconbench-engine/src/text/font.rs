use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::coords::Rgba8;
use crate::raster::mul_un8;

/// Text rasterization and font loading failures.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(String),

    #[error("text {0:?} has zero width")]
    ZeroWidth(String),

    #[error("no font loaded")]
    NoFont,
}

/// Something that can turn a string into a bitmap.
pub trait GlyphSource {
    /// Rasterizes `text` on one line. Coverage becomes alpha scaled by
    /// `color.a`; rgb is `color` for every pixel.
    fn rasterize(&self, text: &str, color: Rgba8) -> Result<RgbaImage, TextError>;
}

/// A parsed font at a fixed pixel size.
pub struct Font {
    inner: fontdue::Font,
    size: f32,
}

impl Font {
    /// Reads and parses a TrueType or OpenType font file.
    pub fn open(path: impl AsRef<Path>, size: f32) -> Result<Self, TextError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TextError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let font = Self::from_bytes(&bytes, size)?;
        log::info!("loaded font {} at {size}px", path.display());
        Ok(font)
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, TextError> {
        let settings = fontdue::FontSettings { scale: size, ..fontdue::FontSettings::default() };
        let inner = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| TextError::Parse(e.to_string()))?;
        Ok(Self { inner, size })
    }

    /// Line height in whole pixels (ascent minus descent, rounded up).
    pub fn line_height(&self) -> u32 {
        match self.inner.horizontal_line_metrics(self.size) {
            Some(m) => (m.ascent - m.descent).ceil().max(0.0) as u32,
            None => self.size.ceil() as u32,
        }
    }
}

impl GlyphSource for Font {
    fn rasterize(&self, text: &str, color: Rgba8) -> Result<RgbaImage, TextError> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.inner], &TextStyle::new(text, self.size, 0));

        let glyphs = layout.glyphs();

        // Width runs to the pen position after the last glyph, not the
        // bitmap edge, so trailing side bearings are kept.
        let width = glyphs
            .iter()
            .map(|g| {
                let m = self.inner.metrics_indexed(g.key.glyph_index, self.size);
                (g.x - m.xmin as f32 + m.advance_width).max(g.x + g.width as f32)
            })
            .fold(0.0f32, f32::max)
            .ceil() as u32;
        let height = glyphs
            .iter()
            .map(|g| (g.y + g.height as f32).ceil() as u32)
            .fold(self.line_height(), u32::max);

        if width == 0 || height == 0 {
            return Err(TextError::ZeroWidth(text.to_string()));
        }

        let mut bitmap = RgbaImage::from_pixel(width, height, Rgba(color.with_alpha(0).to_array()));

        for g in glyphs {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, coverage) = self.inner.rasterize_config(g.key);
            let (gx, gy) = (g.x.round() as i64, g.y.round() as i64);

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let (x, y) = (gx + col as i64, gy + row as i64);
                    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                        continue;
                    }
                    let alpha = mul_un8(coverage[row * metrics.width + col], color.a);
                    let px = bitmap.get_pixel_mut(x as u32, y as u32);
                    // Overlapping glyph boxes keep the stronger coverage.
                    px.0[3] = px.0[3].max(alpha);
                }
            }
        }

        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEJAVU_BOLD: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSans-Bold.ttf");
    const LABEL: Rgba8 = Rgba8::new(0xAF, 0xAF, 0xAF, 0xAF);

    fn fixture_font() -> Font {
        Font::from_bytes(DEJAVU_BOLD, 30.0).unwrap()
    }

    #[test]
    fn label_bitmap_covers_glyph_and_line() {
        let font = fixture_font();
        let bitmap = font.rasterize("A", LABEL).unwrap();

        assert!(bitmap.width() > 0);
        assert!(bitmap.height() >= font.line_height());
        assert!(bitmap.pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn coverage_alpha_is_scaled_by_color_alpha() {
        let bitmap = fixture_font().rasterize("A", LABEL).unwrap();

        let max = bitmap.pixels().map(|p| p.0[3]).max().unwrap_or(0);
        assert!(max > 0 && max <= LABEL.a, "max alpha {max}");
        assert!(bitmap.pixels().all(|p| p.0[..3] == [0xAF, 0xAF, 0xAF]));
    }

    #[test]
    fn longer_text_is_wider() {
        let font = fixture_font();
        let one = font.rasterize("A", LABEL).unwrap();
        let two = font.rasterize("AA", LABEL).unwrap();
        assert!(two.width() > one.width());
    }

    #[test]
    fn empty_text_has_zero_width() {
        let err = fixture_font().rasterize("", LABEL).err().unwrap();
        assert!(matches!(err, TextError::ZeroWidth(ref t) if t.is_empty()));
    }

    #[test]
    fn space_advances_but_stays_transparent() {
        let bitmap = fixture_font().rasterize(" ", LABEL).unwrap();
        assert!(bitmap.width() > 0);
        assert!(bitmap.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn missing_font_file_names_the_path() {
        let err = Font::open("/nonexistent/iconbench/Arimo-Bold.ttf", 30.0).err().unwrap();
        assert!(matches!(err, TextError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/iconbench/Arimo-Bold.ttf"));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Font::from_bytes(b"definitely not a font", 30.0).err().unwrap();
        assert!(matches!(err, TextError::Parse(_)));
    }
}
