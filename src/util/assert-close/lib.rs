/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floating point data.
//!
//! ```
//! #[macro_use] extern crate dmat_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-9, 0.1 + 0.2, 0.3);
//! assert_close!(rel=1e-12, vec![1.0, 2.0], vec![1.0, 2.0 + 1e-15]);
//! # }
//! ```

#[macro_use]
extern crate failure;

/// Relative tolerance used by `assert_close!` when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// `assert_close!([rel=TOL,] [abs=TOL,] left, right [, fmt...])`
///
/// Defaults to `rel=DEFAULT_NONZERO_TOL, abs=0.0`.  Note that with no
/// absolute tolerance, nothing but zero is close to zero.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs;
            let mut rel;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            let tol = $crate::Tolerances { abs, rel };
            if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
                panic!(
                    "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                    format!($($fmt)*), rel, abs, a, b, e,
                );
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Same rule as Python's `math.isclose`.
    pub fn is_close(&self, a: f64, b: f64) -> bool
    {
        let Tolerances { abs, rel } = *self;
        assert!(rel >= 0.0 && abs >= 0.0, "negative tolerance: {:?}", self);

        // catch infinities of same sign
        if a == b { return true; }

        // catch infinities of opposite sign, avoiding infinite relative tolerance
        if a.is_infinite() || b.is_infinite() { return false; }

        // case for general values and NaN.
        (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
    }
}

/// Where and how a comparison failed.
#[derive(Debug, Fail)]
pub enum CheckCloseError {
    #[fail(display = "failed at index {}:\n  left: {:?}\n right: {:?}\n   tol: {:?}", index, left, right, tol)]
    Value { index: usize, left: f64, right: f64, tol: Tolerances },
    #[fail(display = "lengths differ: {} vs {}", left, right)]
    Length { left: usize, right: usize },
    #[fail(display = "shapes differ: {:?} vs {:?}", left, right)]
    Shape { left: Vec<usize>, right: Vec<usize> },
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match tol.is_close(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError::Value { index: 0, left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    /// Reports the first element that differs, by position.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.len() != other.len() {
            return Err(CheckCloseError::Length { left: self.len(), right: other.len() });
        }
        for (index, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| match e {
                CheckCloseError::Value { left, right, tol, .. } => CheckCloseError::Value { index, left, right, tol },
                e => e,
            })?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Option<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match (self, other) {
            (Some(a), Some(b)) => a.check_close(b, tol),
            (None, None) => Ok(()),
            (a, b) => Err(CheckCloseError::Length { left: a.iter().count(), right: b.iter().count() }),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0, "{}", "with a message");
        debug_assert_close!(abs=1e-10, 2.0, 2.0);
    }

    #[test]
    fn reports_position() {
        let tol = Tolerances { abs: 1e-10, rel: 0.0 };
        match vec![1.0, 2.0, 3.0].check_close(&vec![1.0, 2.5, 3.0], tol) {
            Err(CheckCloseError::Value { index: 1, left, right, .. }) => {
                assert_eq!((left, right), (2.0, 2.5));
            },
            r => panic!("unexpected: {:?}", r),
        }
        match vec![1.0].check_close(&vec![1.0, 2.0], tol) {
            Err(CheckCloseError::Length { left: 1, right: 2 }) => {},
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn zero_needs_abs() {
        let rel_only = Tolerances { abs: 0.0, rel: 1e-3 };
        assert!(!rel_only.is_close(0.0, 1e-300));
        assert!(Tolerances { abs: 1e-12, rel: 0.0 }.is_close(0.0, 1e-300));
        assert!(rel_only.is_close(::std::f64::INFINITY, ::std::f64::INFINITY));
        assert!(!rel_only.is_close(::std::f64::NAN, ::std::f64::NAN));
    }

    #[test]
    fn options() {
        assert_close!(Some(1.0), Some(1.0));
        assert_close!(None::<f64>, None);
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
