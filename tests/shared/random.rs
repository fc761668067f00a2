/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use dmat::Matrix;
use rand::{Rng, SeedableRng, XorShiftRng};

/// Fixed seed, so that failures can be reproduced.
pub fn rng() -> XorShiftRng
{ XorShiftRng::from_seed([0x1234_5678, 0x9abc_def0, 0x0fed_cba9, 0x8765_4321]) }

/// Entries uniform in `[-1, 1)`.
pub fn matrix(rng: &mut XorShiftRng, rows: usize, cols: usize) -> Matrix
{
    let data = (0..rows * cols).map(|_| 1.0 - 2.0 * rng.gen::<f64>()).collect();
    Matrix::from_row_major_data((rows, cols), data).unwrap()
}

pub fn square(rng: &mut XorShiftRng, n: usize) -> Matrix
{ matrix(rng, n, n) }

/// Strictly diagonally dominant, hence invertible and not too badly conditioned.
pub fn invertible(rng: &mut XorShiftRng, n: usize) -> Matrix
{
    let mut m = square(rng, n);
    for i in 0..n {
        let sign = if m[(i, i)] < 0.0 { -1.0 } else { 1.0 };
        m[(i, i)] += sign * n as f64;
    }
    m
}

/// Zero out everything strictly below the diagonal.
pub fn upper_triangular(rng: &mut XorShiftRng, n: usize) -> Matrix
{
    let mut m = invertible(rng, n);
    for r in 0..n {
        for c in 0..r {
            m[(r, c)] = 0.0;
        }
    }
    m
}

pub fn dims(rng: &mut XorShiftRng, max: usize) -> (usize, usize)
{ (rng.gen_range(1, max + 1), rng.gen_range(1, max + 1)) }
