/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Error returned when trying to invert a matrix that has no inverse
///
/// A matrix is singular when the determinant of its linear part is 0: the transform
/// collapses the plane onto a line or a point, so there is no transform that restores
/// the original coordinates. The matrix that failed to invert is left unchanged.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SingularMatrixError;

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Matrix is singular and cannot be inverted")
    }
}

impl Error for SingularMatrixError {}
