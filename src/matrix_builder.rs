/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::matrix::*;

///
/// Builds a `Matrix` from any subset of its six coefficients
///
/// Coefficients that are not set take their value from the identity transform
/// (`xx = 1, yx = 0, xy = 0, yy = 1, x0 = 0, y0 = 0`), so an empty builder produces the
/// identity, setting only `x0` and `y0` produces a translation, and setting only `xx`
/// and `yy` produces a scale:
///
/// ```
/// # use flo_transform::*;
/// #
/// let translate = MatrixBuilder::new().x0(20.0).y0(30.0).build();
///
/// assert!(translate == Matrix::from_translation(20.0, 30.0));
/// ```
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct MatrixBuilder {
    xx: Option<f64>,
    yx: Option<f64>,
    xy: Option<f64>,
    yy: Option<f64>,
    x0: Option<f64>,
    y0: Option<f64>,
}

impl MatrixBuilder {
    ///
    /// Creates a builder with no coefficients set
    ///
    pub fn new() -> MatrixBuilder {
        MatrixBuilder::default()
    }

    #[inline]
    pub fn xx(mut self, xx: f64) -> MatrixBuilder {
        self.xx = Some(xx);
        self
    }

    #[inline]
    pub fn yx(mut self, yx: f64) -> MatrixBuilder {
        self.yx = Some(yx);
        self
    }

    #[inline]
    pub fn xy(mut self, xy: f64) -> MatrixBuilder {
        self.xy = Some(xy);
        self
    }

    #[inline]
    pub fn yy(mut self, yy: f64) -> MatrixBuilder {
        self.yy = Some(yy);
        self
    }

    #[inline]
    pub fn x0(mut self, x0: f64) -> MatrixBuilder {
        self.x0 = Some(x0);
        self
    }

    #[inline]
    pub fn y0(mut self, y0: f64) -> MatrixBuilder {
        self.y0 = Some(y0);
        self
    }

    ///
    /// Creates the matrix, filling in unset coefficients from the identity transform
    ///
    pub fn build(self) -> Matrix {
        Matrix {
            xx: self.xx.unwrap_or(1.0),
            yx: self.yx.unwrap_or(0.0),
            xy: self.xy.unwrap_or(0.0),
            yy: self.yy.unwrap_or(1.0),
            x0: self.x0.unwrap_or(0.0),
            y0: self.y0.unwrap_or(0.0),
        }
    }
}
