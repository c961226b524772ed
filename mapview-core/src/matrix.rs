use crate::points::Point;
use nalgebra::{Matrix3, RowVector3};
use std::ops::Index;

/// A 3x3 homogeneous matrix for 2D similarity transforms.
///
/// Points are row vectors: `[x, y, 1] × M`. The translation lives in the last
/// row (`m[(2, 0)]`, `m[(2, 1)]`), and composing `a.multiply(&b)` applies `a`
/// first, then `b`.
///
/// The builder methods (`shift`, `scale`, `rotate`) each return a new matrix
/// that applies the given step after `self`, so a pipeline reads in the order
/// the steps are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(Matrix3<f64>);

impl Mat3 {
    /// Returns the identity matrix (no transformation)
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Row-major construction: `[[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]]`
    pub fn from_rows(data: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            data[0][0], data[0][1], data[0][2], //
            data[1][0], data[1][1], data[1][2], //
            data[2][0], data[2][1], data[2][2],
        ))
    }

    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        let m = &self.0;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Then translate by (dx, dy).
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        self.multiply(&Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [dx, dy, 1.0],
        ]))
    }

    /// Then scale each axis independently.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.multiply(&Self::from_rows([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ]))
    }

    /// Then rotate counter-clockwise by the angle with the given cosine and sine.
    pub fn rotate(&self, cos: f64, sin: f64) -> Self {
        self.multiply(&Self::from_rows([
            [cos, sin, 0.0],
            [-sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ]))
    }

    /// Then rotate counter-clockwise by `radians`.
    pub fn rotate_by(&self, radians: f64) -> Self {
        self.rotate(radians.cos(), radians.sin())
    }

    /// `self × other`: apply `self`, then `other`.
    pub fn multiply(&self, other: &Mat3) -> Self {
        Self(self.0 * other.0)
    }

    /// `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn transform_point(&self, p: &Point) -> Point {
        let v = RowVector3::new(p.x, p.y, 1.0) * self.0;
        Point::new(v[0], v[1])
    }

    /// Element-wise comparison with absolute tolerance.
    pub fn approx_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

impl From<Matrix3<f64>> for Mat3 {
    fn from(m: Matrix3<f64>) -> Self {
        Self(m)
    }
}

impl From<Mat3> for Matrix3<f64> {
    fn from(m: Mat3) -> Self {
        m.0
    }
}
