/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Describing and composing 2D affine transformations
//!
//! ```
//! # use flo_transform::*;
//! #
//! let mut transform   = Matrix::from_rotation(std::f64::consts::PI / 2.0);
//! transform.translate(10.0, 0.0);
//!
//! let (x, y)          = transform.transform_point(1.0, 0.0);
//! let scaled          = transform.multiply(&Matrix::from_scale(2.0, 2.0));
//! let coefficients    = format!("{}", scaled);
//! ```
//!
//! The `Matrix` type represents a transformation of the plane as the six coefficients
//! `xx, yx, xy, yy, x0, y0`, mapping a point `(x, y)` to
//! `(xx*x + xy*y + x0, yx*x + yy*y + y0)`. This is the form used by 2D graphics
//! pipelines: the first four coefficients describe rotation, scaling and shearing, and
//! the last two describe a translation.
//!
//! Transforms compose by multiplication. `multiply()` and the `*` operator produce the
//! transform that applies the left-hand side first, then the right-hand side, and the
//! in-place operations `rotate()`, `scale()` and `translate()` compose an elementary
//! transform onto an existing matrix without allocating a new one.
//!
//! `MatrixBuilder` can be used to construct a matrix from any subset of the six
//! coefficients, with the remaining coefficients taking their values from the identity
//! transform.
//!

#[macro_use]
extern crate serde_derive;

mod error;
mod matrix;
mod matrix_builder;

pub use self::error::*;
pub use self::matrix::*;
pub use self::matrix_builder::*;
