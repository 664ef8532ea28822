//! View-frustum geometry for visibility culling
//!
//! The culling caller builds a [`Frustum`] from its camera's view-projection
//! matrix and hands it to the intersection library; this module never owns
//! camera state itself.

use crate::foundation::math::{Mat4, Vec3};

/// Plane defined by normal and distance from origin
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector (should be normalized)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from normal and distance
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Calculate signed distance from plane to point
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }

    /// Build a plane from the raw coefficients `ax + by + cz + d = 0`,
    /// rescaled so the normal has unit length
    fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let length = Vec3::new(a, b, c).magnitude();
        Self {
            normal: Vec3::new(a, b, c) / length,
            distance: d / length,
        }
    }
}

/// Frustum for visibility culling
///
/// Points with non-negative signed distance to all six planes are inside.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six planes defining the frustum (left, right, bottom, top, near, far)
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Create a frustum from six planes
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract frustum planes from a view-projection matrix
    ///
    /// Gribb-Hartmann extraction for clip-space bounds `-w <= x, y <= w` and
    /// `0 <= z <= w` (the depth range produced by
    /// [`Mat4Ext::perspective`](crate::foundation::math::Mat4Ext)).
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        let m = view_projection;
        let row = |i: usize| (m[(i, 0)], m[(i, 1)], m[(i, 2)], m[(i, 3)]);
        let (x0, y0, z0, w0) = row(0);
        let (x1, y1, z1, w1) = row(1);
        let (x2, y2, z2, w2) = row(2);
        let (x3, y3, z3, w3) = row(3);

        Self {
            planes: [
                // left: w + x >= 0
                Plane::from_coefficients(x3 + x0, y3 + y0, z3 + z0, w3 + w0),
                // right: w - x >= 0
                Plane::from_coefficients(x3 - x0, y3 - y0, z3 - z0, w3 - w0),
                // bottom: w + y >= 0
                Plane::from_coefficients(x3 + x1, y3 + y1, z3 + z1, w3 + w1),
                // top: w - y >= 0
                Plane::from_coefficients(x3 - x1, y3 - y1, z3 - z1, w3 - w1),
                // near: z >= 0
                Plane::from_coefficients(x2, y2, z2, w2),
                // far: w - z >= 0
                Plane::from_coefficients(x3 - x2, y3 - y2, z3 - z2, w3 - w2),
            ],
        }
    }
}
