/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Slow, exact algorithms kept around to check the fast ones against.
//!
//! Nothing in here is used by the rest of the crate.

use crate::{Matrix, MatrixError};
use crate::minor::alternating_sign;

/// Determinant by recursive cofactor expansion along the first row.
///
/// This does no division, so it has none of the precision problems of
/// elimination, but it is `O(n!)`.  Don't use it past `n = 8` or so.
pub fn cofactor_expansion_determinant(m: &Matrix) -> Result<f64, MatrixError>
{
    if !m.is_square() {
        return Err(MatrixError::not_square("determinant", m.dims()));
    }
    Ok(expand(m))
}

fn expand(m: &Matrix) -> f64
{
    match m.num_rows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)],
        n => {
            (0..n)
                .map(|k| alternating_sign(k) * m[(0, k)] * expand(&m.without(0, k)))
                .sum()
        },
    }
}
