/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError, DetSettings};
use crate::ops::scalar_multiply;

impl Matrix {
    /// Transpose of the matrix of cofactors.
    ///
    /// This computes `n^2` minors independently, so it costs `O(n^5)`.
    pub fn adjugate(&self) -> Result<Matrix, MatrixError>
    { self.adjugate_with(&DetSettings::default()) }

    pub fn adjugate_with(&self, settings: &DetSettings) -> Result<Matrix, MatrixError>
    {
        if !self.is_square() {
            return Err(MatrixError::not_square("adjugate", self.dims()));
        }

        let n = self.num_rows();
        let mut cofactors = Matrix::allocate(n, n);
        for r in 0..n {
            for c in 0..n {
                cofactors[(r, c)] = self.cofactor_with(r, c, settings)?;
            }
        }
        Ok(cofactors.transpose())
    }

    /// `adjugate / determinant`.
    ///
    /// Fails with `SingularMatrix` only when the determinant is exactly zero.
    /// Nearly singular input is inverted anyway, with whatever precision the
    /// determinant engine could manage.
    pub fn inverse(&self) -> Result<Matrix, MatrixError>
    { self.inverse_with(&DetSettings::default()) }

    pub fn inverse_with(&self, settings: &DetSettings) -> Result<Matrix, MatrixError>
    {
        if !self.is_square() {
            return Err(MatrixError::not_square("inverse", self.dims()));
        }

        let det = self.determinant_with(settings)?;
        if det == 0.0 {
            debug!("refusing to invert singular {}x{} matrix", self.num_rows(), self.num_cols());
            return Err(MatrixError::SingularMatrix);
        }

        let adjugate = self.adjugate_with(settings)?;
        Ok(scalar_multiply(1.0 / det, &adjugate))
    }
}
