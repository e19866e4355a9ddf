//! The fixed test scene.
//!
//! A column of plain icon, plain label, five framed icons and one
//! selected-filled icon, then a row of five framed icons ending in a selected
//! one, plus a lone icon in the top right quadrant. Cell size is a tenth of
//! the composition width.

use iconbench_engine::compose::{DrawCtx, IconCompositor};
use iconbench_engine::coords::{IRect, Viewport};
use iconbench_engine::raster::Canvas;

const FRAMED_RUN: usize = 5;

/// First cell of the scene for a `logical`-sized composition.
pub fn origin_cell(logical: Viewport) -> IRect {
    let w = to_i32(logical.width);
    let h = to_i32(logical.height);
    IRect::new(w / 8, h / 16, w / 10, w / 10)
}

/// Draws the whole scene. The canvas is not cleared first.
pub fn draw_scene<C: Canvas + ?Sized>(
    compositor: &IconCompositor,
    ctx: &mut DrawCtx<'_, C>,
    logical: Viewport,
) {
    let mut rc = origin_cell(logical);

    compositor.draw_icon(ctx, rc);
    rc.y += rc.h;
    compositor.draw_label(ctx, rc);
    rc.y += rc.h;

    for _ in 0..FRAMED_RUN {
        compositor.draw_icon_with_label_and_frame(ctx, rc);
        rc.y += rc.h;
    }
    compositor.draw_icon_selected_filled(ctx, rc);
    rc.y += rc.h;

    for _ in 0..FRAMED_RUN {
        compositor.draw_icon_with_label_and_frame(ctx, rc);
        rc.x += rc.w;
    }
    compositor.draw_icon_with_frame_and_selection(ctx, rc);

    let w = to_i32(logical.width);
    let lone = IRect::new(w / 8 + w / 2, to_i32(logical.height) / 16, w / 10, w / 10);
    compositor.draw_icon(ctx, lone);
}

#[inline]
fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    use iconbench_engine::compose::CompositorStyle;
    use iconbench_engine::coords::Rgba8;
    use iconbench_engine::raster::{SoftwareCanvas, TextureError, TextureId};
    use iconbench_engine::text::{GlyphSource, TextError};

    use super::*;

    struct Block;

    impl GlyphSource for Block {
        fn rasterize(&self, _text: &str, color: Rgba8) -> Result<RgbaImage, TextError> {
            Ok(RgbaImage::from_pixel(10, 12, Rgba(color.to_array())))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Stroke(IRect, Rgba8),
        Fill(IRect, Rgba8),
        Copy(TextureId, IRect),
    }

    /// Draws into a [`SoftwareCanvas`] while recording geometry calls.
    struct Recorder {
        inner: SoftwareCanvas,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(w: u32, h: u32) -> Self {
            Self { inner: SoftwareCanvas::new(w, h), calls: Vec::new() }
        }

        fn strokes(&self, color: Rgba8) -> Vec<IRect> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Stroke(r, c) if *c == color => Some(*r),
                    _ => None,
                })
                .collect()
        }

        fn copies_of(&self, id: TextureId) -> Vec<IRect> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Copy(t, r) if *t == id => Some(*r),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for Recorder {
        fn size(&self) -> (u32, u32) {
            self.inner.size()
        }

        fn clear(&mut self, color: Rgba8) {
            self.inner.clear(color);
        }

        fn stroke_rect(&mut self, rect: IRect, color: Rgba8) {
            self.calls.push(Call::Stroke(rect, color));
            self.inner.stroke_rect(rect, color);
        }

        fn fill_rect(&mut self, rect: IRect, color: Rgba8) {
            self.calls.push(Call::Fill(rect, color));
            self.inner.fill_rect(rect, color);
        }

        fn create_texture(&mut self, pixels: &RgbaImage) -> Result<TextureId, TextureError> {
            self.inner.create_texture(pixels)
        }

        fn destroy_texture(&mut self, id: TextureId) {
            self.inner.destroy_texture(id);
        }

        fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
            self.inner.texture_size(id)
        }

        fn copy(&mut self, id: TextureId, dst: IRect, modulate: Rgba8) -> Result<(), TextureError> {
            self.calls.push(Call::Copy(id, dst));
            self.inner.copy(id, dst, modulate)
        }

        fn live_textures(&self) -> usize {
            self.inner.live_textures()
        }
    }

    fn icon_pixels() -> RgbaImage {
        RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]))
    }

    fn render(logical: Viewport) -> (Recorder, TextureId) {
        let compositor = IconCompositor::new(CompositorStyle::default());
        let mut canvas = Recorder::new(logical.width, logical.height);
        let icon = canvas.create_texture(&icon_pixels()).unwrap();
        canvas.clear(Rgba8::BLACK);
        {
            let mut ctx = DrawCtx::new(&mut canvas).with_glyphs(&Block).with_icon(icon);
            draw_scene(&compositor, &mut ctx, logical);
        }
        (canvas, icon)
    }

    #[test]
    fn origin_cell_scales_with_width() {
        assert_eq!(origin_cell(Viewport::new(1000, 2000)), IRect::new(125, 125, 100, 100));
        assert_eq!(origin_cell(Viewport::new(480, 800)), IRect::new(60, 50, 48, 48));
    }

    #[test]
    fn icons_land_in_layout_order() {
        let (canvas, icon) = render(Viewport::new(1000, 2000));
        let copies = canvas.copies_of(icon);

        let mut expected = vec![IRect::new(125, 125, 100, 100)];
        expected.extend((0..6).map(|i| IRect::new(125, 325 + 100 * i, 100, 100)));
        expected.extend((0..6).map(|i| IRect::new(125 + 100 * i, 925, 100, 100)));
        expected.push(IRect::new(625, 125, 100, 100));

        assert_eq!(copies, expected);
    }

    #[test]
    fn every_composite_icon_gets_one_frame() {
        let (canvas, _) = render(Viewport::new(1000, 2000));
        let style = CompositorStyle::default();
        assert_eq!(canvas.strokes(style.frame_color).len(), 12);
    }

    #[test]
    fn selection_rings_follow_selected_cells() {
        let (canvas, _) = render(Viewport::new(1000, 2000));
        let style = CompositorStyle::default();
        let filled = IRect::new(125, 825, 100, 100);
        let selected = IRect::new(625, 925, 100, 100);
        assert_eq!(
            canvas.strokes(style.selection_color),
            vec![filled.outset(1), filled.outset(2), selected.outset(1), selected.outset(2)]
        );
    }

    #[test]
    fn one_marker_left_of_filled_cell() {
        let (canvas, _) = render(Viewport::new(1000, 2000));
        let fills: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Fill(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![(IRect::new(121, 825, 4, 100), CompositorStyle::default().accent_color)]);
    }

    #[test]
    fn labels_are_released_after_the_scene() {
        let (canvas, _) = render(Viewport::new(1000, 2000));
        assert_eq!(canvas.live_textures(), 1);
    }

    #[test]
    fn scene_is_deterministic() {
        let (a, _) = render(Viewport::new(480, 800));
        let (b, _) = render(Viewport::new(480, 800));
        assert!(a.inner.target().as_raw() == b.inner.target().as_raw());
        assert_eq!(a.calls, b.calls);
    }

    #[test]
    fn plain_icon_is_tinted() {
        let (canvas, _) = render(Viewport::new(1000, 2000));
        let tint = CompositorStyle::default().icon_tint;
        assert_eq!(canvas.inner.pixel(175, 175), tint);
    }

    #[test]
    fn tiny_composition_does_not_panic() {
        let (canvas, _) = render(Viewport::new(8, 8));
        assert_eq!(canvas.live_textures(), 1);
    }
}
