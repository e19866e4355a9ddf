/// 8-bit straight-alpha RGBA color.
///
/// Used as an immutable per-call value for draw colors and texture
/// modulation. Channels are sRGB-encoded, as they appear in the composition
/// buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::new(0x00, 0x00, 0x00, 0xFF);
    pub const WHITE: Rgba8 = Rgba8::new(0xFF, 0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn rgb(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xFF)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Channel values as `f64` in `[0, 1]`, for GPU clear colors.
    #[inline]
    pub fn to_unit_f64(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        ]
    }
}
