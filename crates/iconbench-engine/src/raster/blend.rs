//! 8-bit fixed-point pixel math.

use crate::coords::Rgba8;

/// `a * b / 255`, rounded to nearest.
#[inline]
pub fn mul_un8(a: u8, b: u8) -> u8 {
    let t = a as u32 * b as u32 + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Multiplies a texel by a modulation color (color mod in rgb, alpha mod in a).
#[inline]
pub fn modulate(texel: Rgba8, by: Rgba8) -> Rgba8 {
    Rgba8::new(
        mul_un8(texel.r, by.r),
        mul_un8(texel.g, by.g),
        mul_un8(texel.b, by.b),
        mul_un8(texel.a, by.a),
    )
}

/// Straight-alpha source-over:
/// `dst.rgb = src.rgb * a + dst.rgb * (1 - a)`, `dst.a = a + dst.a * (1 - a)`.
#[inline]
pub fn blend_over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src.a {
        0 => dst,
        255 => src,
        a => {
            let inv = 255 - a;
            let ch = |s: u8, d: u8| mul_un8(s, a).saturating_add(mul_un8(d, inv));
            Rgba8::new(
                ch(src.r, dst.r),
                ch(src.g, dst.g),
                ch(src.b, dst.b),
                a.saturating_add(mul_un8(dst.a, inv)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_un8_edges() {
        assert_eq!(mul_un8(255, 255), 255);
        assert_eq!(mul_un8(255, 0), 0);
        assert_eq!(mul_un8(0, 200), 0);
        assert_eq!(mul_un8(255, 0x3F), 0x3F);
        assert_eq!(mul_un8(128, 128), 64);
    }

    #[test]
    fn mul_un8_is_exact_for_all_inputs() {
        for a in 0..=255u32 {
            for b in 0..=255u32 {
                let expected = ((a * b) as f64 / 255.0).round() as u8;
                assert_eq!(mul_un8(a as u8, b as u8), expected, "{a} * {b}");
            }
        }
    }

    #[test]
    fn blend_transparent_source_keeps_destination() {
        let dst = Rgba8::new(10, 20, 30, 255);
        assert_eq!(blend_over(dst, Rgba8::new(200, 200, 200, 0)), dst);
    }

    #[test]
    fn blend_opaque_source_replaces_destination() {
        let src = Rgba8::rgb(0xDCDCDC);
        assert_eq!(blend_over(Rgba8::BLACK, src), src);
    }

    #[test]
    fn blend_quarter_alpha_over_black() {
        let out = blend_over(Rgba8::BLACK, Rgba8::new(0xCD, 0xCD, 0xCD, 0x3F));
        assert_eq!(out, Rgba8::new(mul_un8(0xCD, 0x3F), mul_un8(0xCD, 0x3F), mul_un8(0xCD, 0x3F), 0xFF));
    }

    #[test]
    fn modulate_white_texel_yields_tint() {
        let tint = Rgba8::rgb(0xADD8E6);
        assert_eq!(modulate(Rgba8::WHITE, tint), tint);
    }
}
