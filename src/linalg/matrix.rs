/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::MatrixError;
use dmat_assert_close::{CheckClose, CheckCloseError, Tolerances};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Owned dense matrix of `f64` with C layout.
///
/// A `Matrix` always has at least one row and one column; the checked
/// constructors reject anything else, and `allocate`/`identity` panic on it.
/// Every operation takes `&self` and produces a fresh value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: height * width == data.len()
    // invariant: height > 0 && width > 0
    height: usize,
    width: usize,
}

pub(crate) type RowsMut<'a> = std::slice::ChunksMut<'a, f64>;

impl Matrix {
    /// A matrix of the given shape with every entry set to zero.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn allocate(rows: usize, cols: usize) -> Self
    {
        assert!(rows > 0 && cols > 0, "cannot allocate a degenerate ({}, {}) matrix", rows, cols);
        Matrix { data: vec![0.0; rows * cols], height: rows, width: cols }
    }

    /// The `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self
    {
        let mut out = Matrix::allocate(n, n);
        for i in 0..n {
            out[(i, i)] = 1.0;
        }
        out
    }

    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError>
    {
        if height == 0 || width == 0 {
            return Err(MatrixError::Empty { dims: (height, width).into() });
        }
        if height.checked_mul(width) != Some(data.len()) {
            return Err(MatrixError::DataLength { dims: (height, width).into(), len: data.len() });
        }
        Ok(Matrix { data, height, width })
    }

    /// Build a matrix from a list of rows.
    ///
    /// ```
    /// # use dmat_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, -3.0]]).unwrap();
    /// assert_eq!(m.dims(), (2, 2));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError>
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.is_empty() || width == 0 {
            return Err(MatrixError::Empty { dims: (rows.len(), width).into() });
        }

        let mut data = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(MatrixError::Ragged { row, len: values.len(), expected: width });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix { data, height: rows.len(), width })
    }

    // for callers in this crate that have already established the shape
    pub(crate) fn from_parts((height, width): (usize, usize), data: Vec<f64>) -> Self
    {
        debug_assert!(height > 0 && width > 0);
        debug_assert_eq!(data.len(), height * width);
        Matrix { data, height, width }
    }

    /// Deep copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>>
    { self.rows().map(|row| row.to_vec()).collect() }
}

impl Matrix {
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn is_square(&self) -> bool { self.height == self.width }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn rows(&self) -> std::slice::Chunks<'_, f64> { self.data.chunks(self.width) }
    pub(crate) fn rows_mut(&mut self) -> RowsMut<'_> { self.data.chunks_mut(self.width) }

    pub fn get(&self, row: usize, col: usize) -> Option<f64>
    {
        match row < self.height && col < self.width {
            true => Some(self.data[row * self.width + col]),
            false => None,
        }
    }

    /// The main diagonal, for square or non-square matrices.
    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_
    { (0..self.height.min(self.width)).map(move |i| self[(i, i)]) }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize)
    {
        let w = self.width;
        for c in 0..w {
            self.data.swap(a * w + c, b * w + c);
        }
    }

    /// Build a new matrix of the same shape by mapping each entry.
    pub(crate) fn map(&self, f: impl FnMut(f64) -> f64) -> Matrix
    { Matrix { data: self.data.iter().cloned().map(f).collect(), ..*self } }
}

impl Matrix {
    /// `result[(j, i)] == self[(i, j)]`.  Works for any shape.
    pub fn transpose(&self) -> Matrix
    {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.width {
            for r in 0..self.height {
                data.push(self[(r, c)]);
            }
        }
        Matrix { data, height: self.width, width: self.height }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        debug_assert!(c < self.width, "column {} out of bounds for width {}", c, self.width);
        &self.data[r * self.width + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output
    {
        debug_assert!(c < self.width, "column {} out of bounds for width {}", c, self.width);
        &mut self.data[r * self.width + c]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error>
    { Matrix::from_rows(&rows) }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self
    { m.to_rows() }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix [")?;
        for row in self.rows() {
            writeln!(f, "  {:?},", row)?;
        }
        write!(f, "]")
    }
}

impl CheckClose for Matrix {
    /// Shapes must match exactly; entries are then compared pairwise.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.dims() != other.dims() {
            let (left, right) = (self.dims(), other.dims());
            return Err(CheckCloseError::Shape { left: vec![left.0, left.1], right: vec![right.0, right.1] });
        }
        self.data.check_close(&other.data, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mat<R: AsRef<[f64]>>(rows: &[R]) -> Matrix { Matrix::from_rows(rows).unwrap() }

    #[test]
    fn allocate_is_zeroed() {
        let m = Matrix::allocate(2, 3);
        assert_eq!(m.dims(), (2, 3));
        assert!(m.row_major_data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn identity_layout() {
        let eye = Matrix::identity(3);
        assert_eq!(eye.to_rows(), vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);
    }

    #[test]
    #[should_panic(expected = "degenerate")]
    fn allocate_rejects_empty() {
        let _ = Matrix::allocate(0, 3);
    }

    #[test]
    fn checked_construction() {
        let ragged: &[&[f64]] = &[&[1.0, 2.0], &[3.0]];
        assert_eq!(
            Matrix::from_rows(ragged),
            Err(MatrixError::Ragged { row: 1, len: 1, expected: 2 }),
        );

        let no_rows: &[[f64; 2]] = &[];
        match Matrix::from_rows(no_rows) {
            Err(MatrixError::Empty { .. }) => {},
            r => panic!("unexpected: {:?}", r),
        }

        let no_cols: &[[f64; 0]] = &[[], []];
        assert_eq!(Matrix::from_rows(no_cols), Err(MatrixError::Empty { dims: (2, 0).into() }));

        assert_eq!(Matrix::from_row_major_data((2, 2), vec![1.0, 2.0, 3.0, 4.0]), Ok(mat(&[[1.0, 2.0], [3.0, 4.0]])));
        assert_eq!(
            Matrix::from_row_major_data((2, 2), vec![1.0, 2.0, 3.0]),
            Err(MatrixError::DataLength { dims: (2, 2).into(), len: 3 }),
        );
        assert_eq!(
            Matrix::from_row_major_data((2, 2), vec![1.0; 6]),
            Err(MatrixError::DataLength { dims: (2, 2).into(), len: 6 }),
        );
        assert_eq!(
            Matrix::from_row_major_data((usize::max_value(), 2), vec![1.0; 2]),
            Err(MatrixError::DataLength { dims: (usize::max_value(), 2).into(), len: 2 }),
        );
    }

    #[test]
    fn transpose_non_square() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.diagonal().collect::<Vec<_>>(), vec![1.0, 4.0]);
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, -3.0]]).unwrap();
        assert_eq!(m.to_string(), "Matrix [\n  [1.0, 2.0],\n  [2.0, -3.0],\n]");
    }

    #[test]
    fn close_matrices() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0 + 1e-12, 2.0]]).unwrap();
        assert_close!(abs=1e-10, &a, &b);

        let tol = Tolerances { abs: 1e-10, rel: 0.0 };
        match a.check_close(&Matrix::allocate(1, 2), tol) {
            Err(CheckCloseError::Value { index: 0, .. }) => {},
            r => panic!("unexpected: {:?}", r),
        }
        match a.check_close(&a.transpose(), tol) {
            Err(CheckCloseError::Shape { ref left, ref right }) if *left == [1usize, 2] && *right == [2usize, 1] => {},
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_shape() {
        let m: Matrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(m.dims(), (2, 2));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1.0,2.0],[3.0,4.0]]");

        assert!(serde_json::from_str::<Matrix>("[[1.0, 2.0], [3.0]]").is_err());
        assert!(serde_json::from_str::<Matrix>("[]").is_err());
    }
}
