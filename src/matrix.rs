/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use std::fmt;
use std::ops::{Index, Mul};

///
/// Represents a 2D affine transformation matrix
///
/// The six coefficients describe the transform that maps the point `(x, y)` to
/// `(xx*x + xy*y + x0, yx*x + yy*y + y0)`: `xx, yx, xy, yy` form the linear part
/// (rotation, scaling and shearing) and `x0, y0` the translation.
///
/// Matrices compose by multiplication, with the left-hand transform applied first. The
/// elementary operations `rotate()`, `scale()` and `translate()` compose in place, so a
/// chain of transforms can be built up on a single value:
///
/// ```
/// # use flo_transform::*;
/// #
/// let mut transform = Matrix::identity();
/// transform.scale(2.0, 2.0);
/// transform.translate(100.0, 100.0);
/// ```
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Matrix {
    ///
    /// Creates a matrix from its six coefficients, in the order `xx, yx, xy, yy, x0, y0`
    ///
    #[inline]
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Matrix {
        Matrix { xx, yx, xy, yy, x0, y0 }
    }

    ///
    /// Creates the identity transform, which leaves every point where it is
    ///
    #[inline]
    pub fn identity() -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    ///
    /// Creates a transform that rotates anti-clockwise around the origin by an angle in
    /// radians
    ///
    pub fn from_rotation(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();

        Matrix::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    ///
    /// Creates a transform that scales by `sx` horizontally and `sy` vertically
    ///
    #[inline]
    pub fn from_scale(sx: f64, sy: f64) -> Matrix {
        Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    ///
    /// Creates a transform that moves every point by `(tx, ty)`
    ///
    #[inline]
    pub fn from_translation(tx: f64, ty: f64) -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    ///
    /// Returns the transform that applies this matrix first, then `other`
    ///
    /// This is the product `self · other` under the row-vector convention, which is also
    /// available as the `*` operator.
    ///
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            xx: self.xx * other.xx + self.yx * other.xy,
            yx: self.xx * other.yx + self.yx * other.yy,
            xy: self.xy * other.xx + self.yy * other.xy,
            yy: self.xy * other.yx + self.yy * other.yy,
            x0: self.x0 * other.xx + self.y0 * other.xy + other.x0,
            y0: self.x0 * other.yx + self.y0 * other.yy + other.y0,
        }
    }

    ///
    /// Composes a rotation by an angle in radians onto this transform
    ///
    /// Equivalent to `self = self.multiply(&Matrix::from_rotation(radians))`: the
    /// rotation applies after the existing transform.
    ///
    #[inline]
    pub fn rotate(&mut self, radians: f64) {
        *self = self.multiply(&Matrix::from_rotation(radians));
    }

    ///
    /// Composes a non-uniform scale onto this transform
    ///
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = self.multiply(&Matrix::from_scale(sx, sy));
    }

    ///
    /// Composes a translation by `(tx, ty)` onto this transform
    ///
    #[inline]
    pub fn translate(&mut self, tx: f64, ty: f64) {
        *self = self.multiply(&Matrix::from_translation(tx, ty));
    }

    ///
    /// The determinant of the linear part of this transform
    ///
    /// A transform is invertible exactly when its determinant is non-zero (and finite).
    ///
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.yx * self.xy
    }

    ///
    /// Replaces this transform with its inverse, so that the product of the two is the
    /// identity
    ///
    /// Returns `SingularMatrixError`, leaving the matrix unchanged, if the determinant
    /// is zero or not finite: such a transform collapses the plane onto a line or a
    /// point and cannot be undone.
    ///
    pub fn invert(&mut self) -> Result<(), SingularMatrixError> {
        let det = self.determinant();

        if det == 0.0 || !det.is_finite() {
            return Err(SingularMatrixError);
        }

        let xx = self.yy / det;
        let yx = -self.yx / det;
        let xy = -self.xy / det;
        let yy = self.xx / det;
        let x0 = -(self.x0 * xx + self.y0 * xy);
        let y0 = -(self.x0 * yx + self.y0 * yy);

        *self = Matrix { xx, yx, xy, yy, x0, y0 };

        Ok(())
    }

    ///
    /// Applies this transform to a point, including the translation
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.xx * x + self.xy * y + self.x0,
            self.yx * x + self.yy * y + self.y0,
        )
    }

    ///
    /// Applies the linear part of this transform to a distance vector
    ///
    /// Unlike `transform_point()` this ignores the translation: a direction or a delta
    /// between two points is rotated, scaled and sheared but never moved.
    ///
    #[inline]
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.xx * dx + self.xy * dy, self.yx * dx + self.yy * dy)
    }

    ///
    /// Reads a coefficient by position, in the order `xx, yx, xy, yy, x0, y0`
    ///
    /// Returns `IndexOutOfRange` for indexes outside of 0..=5.
    ///
    pub fn get(&self, index: usize) -> Result<f64, IndexOutOfRange> {
        self.coefficient(index)
            .copied()
            .ok_or(IndexOutOfRange { index })
    }

    #[inline]
    fn coefficient(&self, index: usize) -> Option<&f64> {
        match index {
            0 => Some(&self.xx),
            1 => Some(&self.yx),
            2 => Some(&self.xy),
            3 => Some(&self.yy),
            4 => Some(&self.x0),
            5 => Some(&self.y0),
            _ => None,
        }
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, other: Matrix) -> Matrix {
        self.multiply(&other)
    }
}

///
/// Coefficients can be read by position 0..=5, in the order `xx, yx, xy, yy, x0, y0`
///
impl Index<usize> for Matrix {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        self.coefficient(index)
            .unwrap_or_else(|| panic!("{}", IndexOutOfRange { index }))
    }
}

///
/// Matrices are formatted as `Matrix(xx, yx, xy, yy, x0, y0)`, with each coefficient
/// written out with enough digits to read back the same value
///
impl fmt::Display for Matrix {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Matrix({}, {}, {}, {}, {}, {})",
            self.xx, self.yx, self.xy, self.yy, self.x0, self.y0
        )
    }
}
