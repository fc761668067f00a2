/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(dead_code)]

pub mod random;

use dmat::Matrix;

pub fn mat<R: AsRef<[f64]>>(rows: &[R]) -> Matrix
{ Matrix::from_rows(rows).unwrap() }
