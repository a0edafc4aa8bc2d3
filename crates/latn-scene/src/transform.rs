//! 4x4 affine transforms for scene entities.
//!
//! Hosts use these to place and orient objects after executing a command;
//! the parser itself only reads positions. Rotation angles are in degrees.

/// A row-major 4x4 transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformMatrix {
    m: [[f32; 4]; 4],
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformMatrix {
    #[must_use]
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    #[must_use]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut t = Self::identity();
        t.m[0][3] = x;
        t.m[1][3] = y;
        t.m[2][3] = z;
        t
    }

    #[must_use]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut s = Self::identity();
        s.m[0][0] = x;
        s.m[1][1] = y;
        s.m[2][2] = z;
        s
    }

    /// Rotation around the X axis by `degrees`.
    #[must_use]
    pub fn rotation_x(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let (sin, cos) = r.sin_cos();
        let mut m = Self::identity();
        m.m[1][1] = cos;
        m.m[1][2] = -sin;
        m.m[2][1] = sin;
        m.m[2][2] = cos;
        m
    }

    /// Rotation around the Y axis by `degrees`.
    #[must_use]
    pub fn rotation_y(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let (sin, cos) = r.sin_cos();
        let mut m = Self::identity();
        m.m[0][0] = cos;
        m.m[0][2] = sin;
        m.m[2][0] = -sin;
        m.m[2][2] = cos;
        m
    }

    /// Rotation around the Z axis by `degrees`.
    #[must_use]
    pub fn rotation_z(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let (sin, cos) = r.sin_cos();
        let mut m = Self::identity();
        m.m[0][0] = cos;
        m.m[0][1] = -sin;
        m.m[1][0] = sin;
        m.m[1][1] = cos;
        m
    }

    /// `self * other`: apply `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &TransformMatrix) -> Self {
        let mut m = [[0.0f32; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, slot) in row.iter_mut().enumerate() {
                *slot = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Self { m }
    }

    /// Transform a point (w = 1).
    #[must_use]
    pub fn apply_point(&self, point: [f32; 3]) -> [f32; 3] {
        let p = [point[0], point[1], point[2], 1.0];
        let mut out = [0.0f32; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self.m[i][k] * p[k]).sum();
        }
        out
    }

    /// The standard entity transform: scale, then rotate Z-Y-X, then
    /// translate.
    #[must_use]
    pub fn entity_transform(
        position: [f32; 3],
        rotation_degrees: [f32; 3],
        scale: [f32; 3],
    ) -> Self {
        let translation = Self::translation(position[0], position[1], position[2]);
        let rx = Self::rotation_x(rotation_degrees[0]);
        let ry = Self::rotation_y(rotation_degrees[1]);
        let rz = Self::rotation_z(rotation_degrees[2]);
        let s = Self::scale(scale[0], scale[1], scale[2]);
        translation.compose(&rx.compose(&ry.compose(&rz.compose(&s))))
    }
}
