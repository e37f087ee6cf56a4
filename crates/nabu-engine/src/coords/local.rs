use super::{Mat4, Vec2};

/// Placement of a local frame inside world space.
///
/// Composition order is translate · rotate · scale. A zero scale component
/// is treated as `1.0` so the inverse always exists.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation_radians: f32,
    pub scale: Vec2,
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        translation: Vec2::ZERO,
        rotation_radians: 0.0,
        scale: Vec2::ONE,
    };

    fn safe_scale(&self) -> Vec2 {
        Vec2::new(
            if self.scale.x == 0.0 { 1.0 } else { self.scale.x },
            if self.scale.y == 0.0 { 1.0 } else { self.scale.y },
        )
    }

    pub fn local_to_world_matrix(&self) -> Mat4 {
        Mat4::translation(self.translation)
            * Mat4::rotation_z(self.rotation_radians)
            * Mat4::scale(self.safe_scale())
    }

    pub fn world_to_local_matrix(&self) -> Mat4 {
        let s = self.safe_scale();
        Mat4::scale(Vec2::new(1.0 / s.x, 1.0 / s.y))
            * Mat4::rotation_z(-self.rotation_radians)
            * Mat4::translation(-self.translation)
    }

    #[inline]
    pub fn local_to_world(&self, p: Vec2) -> Vec2 {
        self.local_to_world_matrix().transform_point2(p)
    }

    #[inline]
    pub fn world_to_local(&self, p: Vec2) -> Vec2 {
        self.world_to_local_matrix().transform_point2(p)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn local_world_round_trip() {
        let t = Transform2D {
            translation: Vec2::new(40.0, -12.0),
            rotation_radians: 0.6,
            scale: Vec2::new(2.0, 0.5),
        };
        let p = Vec2::new(3.0, 7.0);
        assert_relative_eq!(t.world_to_local(t.local_to_world(p)), p, epsilon = 1e-4);
    }

    #[test]
    fn scale_then_translate() {
        let t = Transform2D {
            translation: Vec2::new(10.0, 20.0),
            rotation_radians: 0.0,
            scale: Vec2::new(3.0, 3.0),
        };
        assert_relative_eq!(t.local_to_world(Vec2::new(1.0, 2.0)), Vec2::new(13.0, 26.0));
    }

    #[test]
    fn zero_scale_is_treated_as_unit() {
        let t = Transform2D {
            scale: Vec2::new(0.0, 2.0),
            ..Transform2D::IDENTITY
        };
        assert_relative_eq!(t.local_to_world(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 10.0));
        assert!(t.world_to_local(Vec2::new(5.0, 10.0)).is_finite());
    }
}
