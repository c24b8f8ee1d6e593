// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Subset-membership predicates for raw numeric values.
//!
//! Both predicates are total: they never panic and treat `NaN` and the
//! infinities as non-members.
//!
//! ```rust
//! use tally_core::num::validation::{is_in_range, is_integer};
//!
//! assert!(is_integer(42.0_f64));
//! assert!(!is_integer(4.2_f64));
//! assert!(!is_integer(f64::INFINITY));
//! assert!(is_in_range(5.0_f64, 0.0, 5.0));
//! assert!(!is_in_range(f64::NAN, 0.0, 5.0));
//! ```

use crate::num::constants::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use num_traits::Float;

/// Returns `true` iff `x` is finite and has no fractional part.
#[inline]
pub fn is_integer<F>(x: F) -> bool
where
    F: Float,
{
    x.is_finite() && x.fract() == F::zero()
}

/// Returns `true` iff `lo <= x <= hi`.
///
/// Comparisons involving `NaN` are false, so a `NaN` input is never in range.
#[inline]
pub fn is_in_range<F>(x: F, lo: F, hi: F) -> bool
where
    F: Float,
{
    lo <= x && x <= hi
}

/// Returns `true` iff `x` is an integer within `[MIN_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
#[inline]
pub fn is_safe_integer(x: f64) -> bool {
    is_integer(x) && is_in_range(x, MIN_SAFE_INTEGER, MAX_SAFE_INTEGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer() {
        assert!(is_integer(0.0_f64));
        assert!(is_integer(-0.0_f64));
        assert!(is_integer(-17.0_f64));
        assert!(is_integer(f64::MAX));
        assert!(is_integer(3.0_f32));

        assert!(!is_integer(0.5_f64));
        assert!(!is_integer(-1e-300_f64));
        assert!(!is_integer(f64::NAN));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NEG_INFINITY));
    }

    #[test]
    fn test_is_in_range_is_inclusive() {
        assert!(is_in_range(0.0, 0.0, 10.0));
        assert!(is_in_range(10.0, 0.0, 10.0));
        assert!(!is_in_range(-1.0, 0.0, 10.0));
        assert!(!is_in_range(10.5, 0.0, 10.0));
        assert!(!is_in_range(f64::NAN, f64::MIN, f64::MAX));
    }

    #[test]
    fn test_is_safe_integer() {
        assert!(is_safe_integer(MAX_SAFE_INTEGER));
        assert!(is_safe_integer(MIN_SAFE_INTEGER));
        assert!(!is_safe_integer(MAX_SAFE_INTEGER + 1.0));
        assert!(!is_safe_integer(1e20));
        assert!(!is_safe_integer(2.5));
    }
}
