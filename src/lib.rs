/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A small dense matrix algebra kernel.
//!
//! The algebra itself lives in `dmat-linalg` and is re-exported here,
//! alongside the logging and configuration used by programs that drive it.

#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
extern crate failure;
extern crate fern;
extern crate ansi_term;
extern crate serde_yaml;
extern crate serde_ignored;
#[cfg(test)] extern crate env_logger;
#[cfg(test)] extern crate tempdir;

pub extern crate dmat_linalg;

pub use dmat_linalg::{
    Matrix, MatrixError, Dims,
    DetSettings, Pivoting, ZERO_PIVOT_EPSILON,
    add, subtract, multiply, scalar_multiply,
};
pub use dmat_linalg::reference;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod logging;
pub mod config;
