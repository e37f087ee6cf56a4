use core::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// 4x4 float matrix, column-major (`m[12..15]` is the translation column).
///
/// Layout matches what GPU uniform buffers expect, so a `Mat4` can be uploaded
/// with `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    pub fn translation(t: Vec2) -> Self {
        let mut out = Self::IDENTITY;
        out.m[12] = t.x;
        out.m[13] = t.y;
        out
    }

    pub fn scale(s: Vec2) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0] = s.x;
        out.m[5] = s.y;
        out
    }

    /// Counter-clockwise rotation around +Z.
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut out = Self::IDENTITY;
        out.m[0] = c;
        out.m[1] = s;
        out.m[4] = -s;
        out.m[5] = c;
        out
    }

    /// OpenGL-style orthographic projection.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0] = 2.0 / (right - left);
        out.m[5] = 2.0 / (top - bottom);
        out.m[10] = -2.0 / (far - near);
        out.m[12] = -(right + left) / (right - left);
        out.m[13] = -(top + bottom) / (top - bottom);
        out.m[14] = -(far + near) / (far - near);
        out
    }

    /// Transforms `(p.x, p.y, 0, 1)`, dividing by `w` when it is not ~0.
    pub fn transform_point2(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        let x = p.x * m[0] + p.y * m[4] + m[12];
        let y = p.x * m[1] + p.y * m[5] + m[13];
        let w = p.x * m[3] + p.y * m[7] + m[15];
        if w.abs() > 1e-6 {
            Vec2::new(x / w, y / w)
        } else {
            Vec2::new(x, y)
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// `self * rhs`: applies `rhs` first, then `self`.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }
        Mat4 { m: out }
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m.iter().zip(&other.m).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .zip(&other.m)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
