/// An axis-aligned rectangle in page coordinates.
///
/// `pos` is the top-left corner and `size` is `(width, height)`. The far edges
/// returned by [`Rect::max`] are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    /// Tells whether the two rectangles share any area. Rectangles that only
    /// touch along an edge or at a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let self_max = self.max();
        let other_max = other.max();

        self.pos.0 < other_max.0
            && self_max.0 > other.pos.0
            && self.pos.1 < other_max.1
            && self_max.1 > other.pos.1
    }

    /// Tells whether `other` lies completely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        let self_max = self.max();
        let other_max = other.max();

        other.pos.0 >= self.pos.0
            && other.pos.1 >= self.pos.1
            && other_max.0 <= self_max.0
            && other_max.1 <= self_max.1
    }
}

/// Free function form of [`Rect::overlaps`].
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
