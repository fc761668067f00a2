/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError, DetSettings};

/// `(-1)^k`, from the parity of `k`.
#[inline]
pub(crate) fn alternating_sign(k: usize) -> f64
{
    match k % 2 {
        0 => 1.0,
        _ => -1.0,
    }
}

impl Matrix {
    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError>
    {
        match row < self.num_rows() && col < self.num_cols() {
            true => Ok(()),
            false => Err(MatrixError::IndexOutOfRange { row, col, dims: self.dims().into() }),
        }
    }

    /// Copy of this matrix without row `row` and column `col`.
    ///
    /// Fails with `Empty` if that would leave nothing (a single row or column).
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix, MatrixError>
    {
        self.check_index(row, col)?;
        let (h, w) = self.dims();
        if h == 1 || w == 1 {
            return Err(MatrixError::Empty { dims: (h - 1, w - 1).into() });
        }
        Ok(self.without(row, col))
    }

    // Index-list deletion: we gather the surviving rows and columns up front
    // and copy only those, so the result never shares storage with `self`.
    //
    // Caller must have checked bounds and that the result is nonempty.
    pub(crate) fn without(&self, row: usize, col: usize) -> Matrix
    {
        let kept_rows: Vec<usize> = (0..self.num_rows()).filter(|&r| r != row).collect();
        let kept_cols: Vec<usize> = (0..self.num_cols()).filter(|&c| c != col).collect();

        let mut data = Vec::with_capacity(kept_rows.len() * kept_cols.len());
        for &r in &kept_rows {
            data.extend(kept_cols.iter().map(|&c| self[(r, c)]));
        }
        Matrix::from_parts((kept_rows.len(), kept_cols.len()), data)
    }

    /// Determinant of the submatrix without row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, MatrixError>
    { self.minor_with(row, col, &DetSettings::default()) }

    pub fn minor_with(&self, row: usize, col: usize, settings: &DetSettings) -> Result<f64, MatrixError>
    {
        self.check_index(row, col)?;
        if !self.is_square() {
            return Err(MatrixError::not_square("minor", self.dims()));
        }

        match self.num_rows() {
            // the determinant of a 0x0 matrix is the empty product
            1 => Ok(1.0),
            _ => self.without(row, col).determinant_with(settings),
        }
    }

    /// `minor(row, col)` with sign `(-1)^(row + col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64, MatrixError>
    { self.cofactor_with(row, col, &DetSettings::default()) }

    pub fn cofactor_with(&self, row: usize, col: usize, settings: &DetSettings) -> Result<f64, MatrixError>
    { Ok(alternating_sign(row + col) * self.minor_with(row, col, settings)?) }
}
