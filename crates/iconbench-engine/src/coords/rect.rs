/// Axis-aligned integer rectangle in logical pixels (top-left origin).
///
/// Width and height may be zero or negative; such rectangles are empty and
/// draw nothing, but arithmetic on them is never clamped. Moving or growing
/// a rectangle wraps on `i32` overflow; edges are reported as `i64` so they
/// are exact for every rectangle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Grows the rectangle by `n` pixels on every side:
    /// `{x - n, y - n, w + 2n, h + 2n}`.
    #[inline]
    pub const fn outset(self, n: i32) -> Self {
        let d = n.wrapping_mul(2);
        Self::new(
            self.x.wrapping_sub(n),
            self.y.wrapping_sub(n),
            self.w.wrapping_add(d),
            self.h.wrapping_add(d),
        )
    }

    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy), self.w, self.h)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i64 {
        self.y as i64 + self.h as i64
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Doubled center point. Kept doubled so odd sizes stay exact.
    #[inline]
    pub const fn center2(self) -> (i64, i64) {
        (2 * self.x as i64 + self.w as i64, 2 * self.y as i64 + self.h as i64)
    }

    #[inline]
    pub fn intersect(self, other: IRect) -> Option<IRect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        // Both spans are within one of the inputs, so they fit in i32.
        let (w, h) = (x1 - x0 as i64, y1 - y0 as i64);
        if w <= 0 || h <= 0 {
            None
        } else {
            Some(IRect::new(x0, y0, w as i32, h as i32))
        }
    }
}
