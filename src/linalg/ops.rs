/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError};

use itertools::zip_eq;

fn zip_with(op: &'static str, a: &Matrix, b: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError>
{
    if a.dims() != b.dims() {
        return Err(MatrixError::shape_mismatch(op, a.dims(), b.dims()));
    }
    let data = zip_eq(a.row_major_data(), b.row_major_data())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Matrix::from_row_major_data(a.dims(), data)
}

/// Entrywise `a + b`.  The shapes must be identical.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>
{ zip_with("add", a, b, |x, y| x + y) }

/// Entrywise `a - b`.  The shapes must be identical.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>
{ zip_with("subtract", a, b, |x, y| x - y) }

pub fn scalar_multiply(k: f64, a: &Matrix) -> Matrix
{ a.map(|x| k * x) }

/// Matrix product `a b`.  Requires `a.num_cols() == b.num_rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>
{
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::shape_mismatch("multiply", a.dims(), b.dims()));
    }

    // walk both operands along contiguous rows
    let mut out = Matrix::allocate(a.num_rows(), b.num_cols());
    let b_t = b.transpose();
    for (out_row, a_row) in zip_eq(out.rows_mut(), a.rows()) {
        for (out, b_col) in zip_eq(out_row, b_t.rows()) {
            for (x, y) in zip_eq(a_row, b_col) {
                *out += x * y;
            }
        }
    }
    Ok(out)
}

impl Matrix {
    pub fn trace(&self) -> Result<f64, MatrixError>
    {
        if !self.is_square() {
            return Err(MatrixError::not_square("trace", self.dims()));
        }
        Ok(self.diagonal().sum())
    }
}

impl<'a> std::ops::Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix
    { scalar_multiply(self, rhs) }
}
