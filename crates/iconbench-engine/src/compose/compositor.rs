use crate::coords::{IRect, Rgba8};
use crate::raster::{Canvas, TransientTexture};

use super::{CompositorStyle, DrawCtx};

/// Draws icon compositions at increasing levels of decoration.
///
/// Stateless apart from its style: every operation draws into the canvas of
/// the given [`DrawCtx`] and retains nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct IconCompositor {
    style: CompositorStyle,
}

impl IconCompositor {
    pub fn new(style: CompositorStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &CompositorStyle {
        &self.style
    }

    /// Copies the tinted icon stretched over `r`. No-op without an icon.
    pub fn draw_icon<C: Canvas + ?Sized>(&self, ctx: &mut DrawCtx<'_, C>, r: IRect) {
        let Some(icon) = ctx.icon else { return };
        if let Err(e) = ctx.canvas.copy(icon, r, self.style.icon_tint) {
            log::error!("draw_icon: {e}");
        }
    }

    /// Rasterizes the label and copies it at `r`'s top-left corner.
    ///
    /// The bitmap keeps its natural size; `r` only supplies the position.
    /// The temporary texture is destroyed before this returns, whichever
    /// step fails.
    pub fn draw_label<C: Canvas + ?Sized>(&self, ctx: &mut DrawCtx<'_, C>, r: IRect) {
        let rasterized = match ctx.glyphs {
            Some(glyphs) => glyphs.rasterize(&self.style.label, self.style.label_color),
            None => Err(crate::text::TextError::NoFont),
        };
        let bitmap = match rasterized {
            Ok(bitmap) => bitmap,
            Err(e) => {
                log::error!("draw_label: rasterizing {:?} failed: {e}", self.style.label);
                return;
            }
        };

        let mut texture = match TransientTexture::create(&mut *ctx.canvas, &bitmap) {
            Ok(t) => t,
            Err(e) => {
                log::error!("draw_label: texture creation failed: {e}");
                return;
            }
        };

        let Some((w, h)) = texture.size() else {
            log::error!("draw_label: texture {:?} vanished before use", texture.id());
            return;
        };
        let dst = IRect::new(r.x, r.y, w as i32, h as i32);
        if let Err(e) = texture.copy(dst, Rgba8::WHITE) {
            log::error!("draw_label: {e}");
        }
    }

    /// Icon, label, and a faint frame at `r.outset(1)`.
    pub fn draw_icon_with_label_and_frame<C: Canvas + ?Sized>(
        &self,
        ctx: &mut DrawCtx<'_, C>,
        r: IRect,
    ) {
        self.draw_icon(ctx, r);
        self.draw_label(ctx, r);
        ctx.canvas.stroke_rect(r.outset(1), self.style.frame_color);
    }

    /// The framed icon plus two selection rings at `r.outset(1)` and
    /// `r.outset(2)`.
    ///
    /// The first ring lands on the frame's footprint; both draws are kept.
    pub fn draw_icon_with_frame_and_selection<C: Canvas + ?Sized>(
        &self,
        ctx: &mut DrawCtx<'_, C>,
        r: IRect,
    ) {
        self.draw_icon_with_label_and_frame(ctx, r);
        ctx.canvas.stroke_rect(r.outset(1), self.style.selection_color);
        ctx.canvas.stroke_rect(r.outset(2), self.style.selection_color);
    }

    /// The selected icon plus a solid marker directly left of `r`.
    pub fn draw_icon_selected_filled<C: Canvas + ?Sized>(
        &self,
        ctx: &mut DrawCtx<'_, C>,
        r: IRect,
    ) {
        self.draw_icon_with_frame_and_selection(ctx, r);
        ctx.canvas.fill_rect(self.marker_rect(r), self.style.accent_color);
    }

    /// Marker geometry: same height as `r`, `marker_width` wide, ending at
    /// `r.x`.
    #[inline]
    pub fn marker_rect(&self, r: IRect) -> IRect {
        let w = self.style.marker_width;
        IRect::new(r.x.wrapping_sub(w), r.y, w, r.h)
    }
}
