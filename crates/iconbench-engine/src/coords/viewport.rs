/// Size of a drawable area in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
