/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Structural predicates.
//!
//! These use an exact comparison against zero.  A matrix with `1e-300` below
//! its diagonal is not upper triangular, and will take the elimination path
//! in `determinant`.

use crate::Matrix;

impl Matrix {
    /// True iff every entry strictly below the main diagonal is exactly 0.
    pub fn is_upper_triangular(&self) -> bool
    {
        self.rows().enumerate()
            .all(|(r, row)| row.iter().take(r).all(|&x| x == 0.0))
    }

    /// True iff every entry strictly above the main diagonal is exactly 0.
    pub fn is_lower_triangular(&self) -> bool
    {
        self.rows().enumerate()
            .all(|(r, row)| row.iter().skip(r + 1).all(|&x| x == 0.0))
    }

    pub fn is_triangular(&self) -> bool
    { self.is_upper_triangular() || self.is_lower_triangular() }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    fn mat(rows: &[[f64; 3]]) -> Matrix { Matrix::from_rows(rows).unwrap() }

    #[test]
    fn upper_and_lower() {
        let upper = mat(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]]);
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());
        assert!(upper.is_triangular());

        let lower = upper.transpose();
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());
        assert!(lower.is_triangular());

        let diag = Matrix::identity(3);
        assert!(diag.is_upper_triangular() && diag.is_lower_triangular());
    }

    #[test]
    fn zero_diagonal_is_still_triangular() {
        // only the strict triangle matters
        let m = mat(&[[0.0, 2.0, 3.0], [0.0, 0.0, 5.0], [0.0, 0.0, 0.0]]);
        assert!(m.is_upper_triangular());
    }

    #[test]
    fn exact_zero_test() {
        let m = mat(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [1e-300, 0.0, 6.0]]);
        assert!(!m.is_triangular());
    }

    #[test]
    fn general_matrix() {
        let m = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert!(!m.is_triangular());
    }

    #[test]
    fn non_square() {
        let wide = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0]]).unwrap();
        assert!(wide.is_upper_triangular());
        assert!(!wide.is_lower_triangular());
    }
}
