use crate::coords::Vec2;

/// Axis-aligned box in a single coordinate space (top-left origin).
///
/// The box does not record which space it lives in; [`LayoutResult`](super::LayoutResult)
/// pairs a logical box with its device counterpart.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LayoutBox {
    pub origin: Vec2,
    pub size: Vec2,
}

impl LayoutBox {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Closed containment: `[min, max]` on both axes, edges included.
    ///
    /// A box with negative size contains nothing.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(x: f32, y: f32, w: f32, h: f32) -> LayoutBox {
        LayoutBox::new(x, y, w, h)
    }

    #[test]
    fn contains_interior_point() {
        assert!(b(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_all_four_edges() {
        let bx = b(0.0, 0.0, 10.0, 10.0);
        assert!(bx.contains(Vec2::new(0.0, 0.0)));
        assert!(bx.contains(Vec2::new(10.0, 10.0)));
        assert!(bx.contains(Vec2::new(10.0, 0.0)));
        assert!(bx.contains(Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        let bx = b(0.0, 0.0, 10.0, 10.0);
        assert!(!bx.contains(Vec2::new(10.1, 5.0)));
        assert!(!bx.contains(Vec2::new(-0.1, 5.0)));
        assert!(!bx.contains(Vec2::new(5.0, 10.1)));
    }

    #[test]
    fn negative_size_contains_nothing() {
        assert!(!b(10.0, 10.0, -5.0, -5.0).contains(Vec2::new(7.0, 7.0)));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(b(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!b(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
