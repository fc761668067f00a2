/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Determinant engine.
//!
//! Triangular inputs are handled in O(n) by multiplying the diagonal.
//! Everything else is copied into scratch storage and reduced to upper
//! triangular form by forward Gaussian elimination, in O(n^3).
//!
//! # Precision caveat
//!
//! The default elimination does not reorder rows.  When a pivot is exactly
//! zero it is replaced by a tiny epsilon (`1e-200`) so that the division
//! is defined.  This keeps exactly singular input from blowing up (the
//! determinant still comes out at or near zero), but it is an approximation:
//! matrices that merely *need* a row swap lose accuracy, and nearly singular
//! matrices can give determinants that are quite wrong.  No error is raised
//! in either case.  `Pivoting::Partial` trades that for proper row swaps.

use crate::{Matrix, MatrixError};

/// Value substituted for an exactly zero pivot under `Pivoting::ZeroSubstitution`.
pub const ZERO_PIVOT_EPSILON: f64 = 1e-200;

/// Knobs for the determinant engine.
///
/// These also apply to everything built on top of it
/// (`minor`, `cofactor`, `adjugate`, `inverse`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DetSettings {
    /// Multiply the diagonal directly when the input is exactly triangular.
    pub triangular_fast_path: bool,
    pub pivoting: Pivoting,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Pivoting {
    /// Never reorder rows; replace an exactly zero pivot with `epsilon`.
    ZeroSubstitution {
        #[cfg_attr(feature = "serde", serde(default = "zero_pivot_epsilon"))]
        epsilon: f64,
    },
    /// Swap in the row with the largest magnitude in the pivot column.
    ///
    /// A column whose best candidate is within rounding noise of zero
    /// (at most `n * f64::EPSILON` times the largest entry of the input)
    /// means the matrix is singular, and the determinant is reported as
    /// exactly 0.
    Partial,
}

#[cfg(feature = "serde")]
fn zero_pivot_epsilon() -> f64 { ZERO_PIVOT_EPSILON }

impl Default for DetSettings {
    fn default() -> Self
    { DetSettings {
        triangular_fast_path: true,
        pivoting: Pivoting::default(),
    }}
}

impl Default for Pivoting {
    fn default() -> Self
    { Pivoting::ZeroSubstitution { epsilon: ZERO_PIVOT_EPSILON } }
}

impl Matrix {
    /// Determinant of a square matrix, using the default `DetSettings`.
    ///
    /// See the [module documentation](index.html) for the precision caveat.
    pub fn determinant(&self) -> Result<f64, MatrixError>
    { self.determinant_with(&DetSettings::default()) }

    pub fn determinant_with(&self, settings: &DetSettings) -> Result<f64, MatrixError>
    {
        if !self.is_square() {
            return Err(MatrixError::not_square("determinant", self.dims()));
        }

        if settings.triangular_fast_path && self.is_triangular() {
            trace!("det: triangular fast path (n = {})", self.num_rows());
            return Ok(self.diagonal().product());
        }

        trace!("det: elimination (n = {}, {:?})", self.num_rows(), settings.pivoting);
        let mut scratch = self.clone();
        Ok(match settings.pivoting {
            Pivoting::ZeroSubstitution { epsilon } => eliminate_substituting(&mut scratch, epsilon),
            Pivoting::Partial => eliminate_partial(&mut scratch),
        })
    }
}

/// Subtract `scale * am[pivot_row]` from `am[row]`, for columns `start..`.
#[inline]
fn subtract_scaled_row(am: &mut Matrix, row: usize, pivot_row: usize, scale: f64, start: usize)
{
    for c in start..am.num_cols() {
        let x = am[(pivot_row, c)];
        am[(row, c)] -= scale * x;
    }
}

fn eliminate_substituting(am: &mut Matrix, epsilon: f64) -> f64
{
    let n = am.num_rows();
    for d in 0..n {
        for i in d + 1..n {
            if am[(d, d)] == 0.0 {
                debug!("det: zero pivot at {}, substituting {:e}", d, epsilon);
                am[(d, d)] = epsilon;
            }

            let scale = am[(i, d)] / am[(d, d)];
            subtract_scaled_row(am, i, d, scale, 0);
        }
    }
    am.diagonal().product()
}

fn eliminate_partial(am: &mut Matrix) -> f64
{
    let n = am.num_rows();
    let largest = am.row_major_data().iter().fold(0.0, |acc: f64, x| acc.max(x.abs()));
    let tol = n as f64 * ::std::f64::EPSILON * largest;

    let mut sign = 1.0;
    for d in 0..n {
        let mut best = d;
        for r in d + 1..n {
            if am[(r, d)].abs() > am[(best, d)].abs() {
                best = r;
            }
        }

        if am[(best, d)].abs() <= tol {
            debug!("det: column {} has no pivot above {:e}, matrix is singular", d, tol);
            return 0.0;
        }

        if best != d {
            debug!("det: swapping rows {} and {}", d, best);
            am.swap_rows(d, best);
            sign = -sign;
        }

        for i in d + 1..n {
            let scale = am[(i, d)] / am[(d, d)];
            subtract_scaled_row(am, i, d, scale, d);
        }
    }
    sign * am.diagonal().product::<f64>()
}
