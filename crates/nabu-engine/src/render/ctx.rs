use crate::coords::{CoordinateTransformer, Mat4};

use super::{layout_resolve, LayoutBox, LayoutResult};

/// Projection plus coordinate transformer, as consumed by layout and backends.
///
/// Owns copies of both; changing the caller's transformer afterwards does not
/// affect an existing context.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderContext {
    projection: Mat4,
    transformer: CoordinateTransformer,
}

impl RenderContext {
    /// Copies `transformer` and `projection`, using identity when no projection is given.
    pub fn new(transformer: &CoordinateTransformer, projection: Option<&Mat4>) -> Self {
        Self {
            projection: projection.copied().unwrap_or(Mat4::IDENTITY),
            transformer: *transformer,
        }
    }

    /// Orthographic projection over the device-space viewport.
    pub fn from_viewport(transformer: &CoordinateTransformer) -> Self {
        let device = transformer.device_viewport();
        let projection = Mat4::orthographic(0.0, device.x, 0.0, device.y, -100.0, 100.0);
        Self::new(transformer, Some(&projection))
    }

    #[inline]
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Projection as raw bytes, ready for a uniform buffer upload.
    #[inline]
    pub fn projection_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.projection)
    }

    #[inline]
    pub fn resolve(&self, logical: &LayoutBox) -> LayoutResult {
        layout_resolve(logical, self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::coords::Vec2;

    use super::*;

    #[test]
    fn missing_projection_is_identity() {
        let ctx = RenderContext::new(&CoordinateTransformer::default(), None);
        assert_eq!(*ctx.projection(), Mat4::IDENTITY);
    }

    #[test]
    fn copies_caller_projection() {
        let proj = Mat4::scale(Vec2::new(3.0, 4.0));
        let ctx = RenderContext::new(&CoordinateTransformer::default(), Some(&proj));
        assert_eq!(*ctx.projection(), proj);
        assert_eq!(ctx.projection_bytes().len(), 64);
    }

    #[test]
    fn copies_transformer_by_value() {
        let mut t = CoordinateTransformer::new(2.0, 1.0, Vec2::new(10.0, 10.0));
        let ctx = RenderContext::new(&t, None);
        t.reinit(3.0, 1.0, Vec2::new(10.0, 10.0));
        assert_eq!(ctx.transformer().dpi_scale(), 2.0);
    }

    #[test]
    fn viewport_projection_spans_device_pixels() {
        let t = CoordinateTransformer::new(2.0, 1.0, Vec2::new(400.0, 300.0));
        let ctx = RenderContext::from_viewport(&t);
        let ndc = ctx.projection().transform_point2(Vec2::new(800.0, 600.0));
        assert_relative_eq!(ndc, Vec2::new(1.0, 1.0));
    }
}
