/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod index_out_of_range;
mod singular_matrix_error;

pub use self::index_out_of_range::*;
pub use self::singular_matrix_error::*;
