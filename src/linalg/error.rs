/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// A matrix shape, printed as `(rows, cols)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl From<(usize, usize)> for Dims {
    fn from((rows, cols): (usize, usize)) -> Self
    { Dims { rows, cols } }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "({}, {})", self.rows, self.cols) }
}

/// Every way that an operation in this crate can fail.
///
/// All of these are local, synchronous failures; no operation returns a
/// partial result alongside one of these.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum MatrixError {
    /// Operand shapes are incompatible for `op`.
    #[fail(display = "Can't {} matrices of size {} and {}", op, left, right)]
    ShapeMismatch { op: &'static str, left: Dims, right: Dims },

    #[fail(display = "{} requires a square matrix, got size {}", op, dims)]
    NotSquare { op: &'static str, dims: Dims },

    #[fail(display = "({}, {}) is outside the matrix of size {}", row, col, dims)]
    IndexOutOfRange { row: usize, col: usize, dims: Dims },

    #[fail(display = "The determinant is null, the inverse can't be computed")]
    SingularMatrix,

    /// A matrix must have at least one row and one column.
    #[fail(display = "matrix of size {} has no elements", dims)]
    Empty { dims: Dims },

    #[fail(display = "row {} has length {}, but row 0 has length {}", row, len, expected)]
    Ragged { row: usize, len: usize, expected: usize },

    #[fail(display = "{} values can't fill a matrix of size {}", len, dims)]
    DataLength { dims: Dims, len: usize },
}

impl MatrixError {
    pub(crate) fn not_square(op: &'static str, dims: (usize, usize)) -> Self
    { MatrixError::NotSquare { op, dims: dims.into() } }

    pub(crate) fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self
    { MatrixError::ShapeMismatch { op, left: left.into(), right: right.into() } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_shape() {
        let err = MatrixError::IndexOutOfRange { row: 3, col: 0, dims: (3, 3).into() };
        assert_eq!(err.to_string(), "(3, 0) is outside the matrix of size (3, 3)");

        let err = MatrixError::shape_mismatch("add", (2, 2), (3, 2));
        assert_eq!(err.to_string(), "Can't add matrices of size (2, 2) and (3, 2)");

        let err = MatrixError::not_square("trace", (2, 3));
        assert_eq!(err.to_string(), "trace requires a square matrix, got size (2, 3)");
    }
}
