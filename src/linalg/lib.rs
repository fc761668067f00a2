/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense matrix algebra over `f64`.
//!
//! Everything is a pure function of its inputs.  `Matrix` values are never
//! modified by the operations in this crate; scratch copies are made where
//! an algorithm needs to work in place.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[cfg(feature = "serde")] extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate dmat_assert_close;
extern crate itertools;
#[cfg(test)] extern crate env_logger;
#[cfg(test)] extern crate pretty_assertions;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;

pub use crate::error::{MatrixError, Dims};
mod error;

pub use crate::matrix::Matrix;
mod matrix;

mod triangular;

pub use crate::ops::{add, subtract, multiply, scalar_multiply};
pub mod ops;

mod minor;

pub use crate::det::{DetSettings, Pivoting, ZERO_PIVOT_EPSILON};
pub mod det;

mod inverse;

pub mod reference;
