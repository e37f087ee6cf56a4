use crate::coords::Vec2;

use super::{LayoutBox, RenderContext};

/// A logical box plus its device-space counterpart.
///
/// Produced once per layout pass; drawing reads `device`, input reads `logical`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub logical: LayoutBox,
    pub device: LayoutBox,
}

impl LayoutResult {
    #[inline]
    pub fn hit_test(&self, logical_point: Vec2) -> bool {
        layout_hit_test(self, logical_point)
    }
}

/// Resolves a logical box into device space.
///
/// Origin and size both go through `logical_to_screen`. Treating the size as a
/// point is exact only while that transform is a pure scale; a translating
/// transform would have to scale the size instead.
pub fn layout_resolve(logical: &LayoutBox, ctx: &RenderContext) -> LayoutResult {
    let t = ctx.transformer();
    LayoutResult {
        logical: *logical,
        device: LayoutBox::from_origin_size(t.logical_to_screen(logical.origin), t.logical_to_screen(logical.size)),
    }
}

/// Closed-rectangle hit test in logical space. Boundary points hit.
#[inline]
pub fn layout_hit_test(layout: &LayoutResult, logical_point: Vec2) -> bool {
    layout.logical.contains(logical_point)
}

/// Index of the top-most layout under `logical_point`.
///
/// Later entries paint over earlier ones, so the search runs back to front.
pub fn layout_hit_test_topmost(layouts: &[LayoutResult], logical_point: Vec2) -> Option<usize> {
    layouts.iter().rposition(|l| layout_hit_test(l, logical_point))
}

#[cfg(test)]
mod tests {
    use crate::coords::{CoordinateTransformer, Vec2};

    use super::*;

    fn ctx(dpi: f32) -> RenderContext {
        RenderContext::new(&CoordinateTransformer::new(dpi, 1.0, Vec2::new(800.0, 600.0)), None)
    }

    #[test]
    fn resolve_scales_origin_and_size() {
        let logical = LayoutBox::new(0.0, 0.0, 10.0, 20.0);
        let out = layout_resolve(&logical, &ctx(2.0));
        assert_eq!(out.logical, logical);
        assert_eq!(out.device, LayoutBox::new(0.0, 0.0, 20.0, 40.0));
    }

    #[test]
    fn resolve_offset_box() {
        let out = layout_resolve(&LayoutBox::new(5.0, 7.0, 3.0, 4.0), &ctx(1.5));
        assert_eq!(out.device, LayoutBox::new(7.5, 10.5, 4.5, 6.0));
    }

    #[test]
    fn resolve_ignores_ui_scale() {
        let t = CoordinateTransformer::new(1.0, 3.0, Vec2::new(100.0, 100.0));
        let out = layout_resolve(&LayoutBox::new(1.0, 1.0, 2.0, 2.0), &RenderContext::new(&t, None));
        assert_eq!(out.device, out.logical);
    }

    #[test]
    fn hit_test_is_inclusive() {
        let l = layout_resolve(&LayoutBox::new(0.0, 0.0, 10.0, 10.0), &ctx(2.0));
        assert!(layout_hit_test(&l, Vec2::new(0.0, 0.0)));
        assert!(layout_hit_test(&l, Vec2::new(10.0, 10.0)));
        assert!(layout_hit_test(&l, Vec2::new(5.0, 5.0)));
        assert!(!layout_hit_test(&l, Vec2::new(10.1, 5.0)));
        assert!(!layout_hit_test(&l, Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn hit_test_uses_logical_not_device() {
        let l = layout_resolve(&LayoutBox::new(0.0, 0.0, 10.0, 10.0), &ctx(2.0));
        // Inside the device box but outside the logical one.
        assert!(!l.hit_test(Vec2::new(15.0, 15.0)));
    }

    #[test]
    fn topmost_prefers_last_entry() {
        let c = ctx(1.0);
        let layouts = [
            layout_resolve(&LayoutBox::new(0.0, 0.0, 100.0, 100.0), &c),
            layout_resolve(&LayoutBox::new(10.0, 10.0, 20.0, 20.0), &c),
            layout_resolve(&LayoutBox::new(200.0, 200.0, 5.0, 5.0), &c),
        ];
        assert_eq!(layout_hit_test_topmost(&layouts, Vec2::new(15.0, 15.0)), Some(1));
        assert_eq!(layout_hit_test_topmost(&layouts, Vec2::new(50.0, 50.0)), Some(0));
        assert_eq!(layout_hit_test_topmost(&layouts, Vec2::new(150.0, 150.0)), None);
    }
}
