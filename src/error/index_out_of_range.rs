/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Error returned when reading a matrix coefficient by an index outside of 0..=5
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IndexOutOfRange {
    /// The index that was requested
    pub index: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Matrix index {} out of range (coefficients are numbered 0 to 5)",
            self.index
        )
    }
}

impl Error for IndexOutOfRange {}
