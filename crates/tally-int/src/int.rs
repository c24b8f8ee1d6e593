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

//! # Int
//!
//! All finite integers representable by an `f64`, up to `±f64::MAX`.
//! Magnitudes beyond `2^53 - 1` are allowed and lose precision; use
//! [`SafeInt`](crate::safe_int::SafeInt) when exactness matters.
//!
//! Arithmetic only clamps non-integer results and results beyond the finite
//! float range.
//!
//! ```rust
//! use tally_int::int::{self, as_int};
//!
//! let a = as_int(12.0).unwrap();
//! let b = as_int(8.0).unwrap();
//! assert_eq!(int::sub(a, b).get(), 4.0);
//! assert_eq!(int::sub(b, a).get(), -4.0);
//! ```

use crate::branded::Branded;
use tally_core::bounds::Bounds;

/// Bounds descriptor for [`Int`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct IntBounds;

impl Bounds for IntBounds {
    const NAME: &'static str = "Int";
    const DESCRIPTION: &'static str = "finite integer";
    const LOWER: f64 = f64::MIN;
    const UPPER: f64 = f64::MAX;
}

/// A finite integer.
pub type Int = Branded<IntBounds>;

domain_functions!(Int, is_int, as_int, clamp_int);

#[cfg(test)]
mod tests {
    use super::*;

    fn i(raw: f64) -> Int {
        as_int(raw).unwrap()
    }

    #[test]
    fn test_membership() {
        assert!(is_int(0.0));
        assert!(is_int(-12.0));
        assert!(is_int(1e300));
        assert!(is_int(f64::MIN));
        assert!(!is_int(0.5));
        assert!(!is_int(f64::INFINITY));
        assert!(!is_int(f64::NAN));
        assert!(as_int(2.5).is_err());
    }

    #[test]
    fn test_clamp_only_rounds_and_caps_at_float_range() {
        assert_eq!(clamp_int(2.5).get(), 3.0);
        assert_eq!(clamp_int(-2.5).get(), -3.0);
        assert_eq!(clamp_int(1e20).get(), 1e20);
        assert_eq!(clamp_int(f64::INFINITY), Int::MAX);
        assert_eq!(clamp_int(f64::NEG_INFINITY), Int::MIN);
        assert_eq!(clamp_int(f64::NAN).get(), 0.0);
    }

    #[test]
    fn test_sub_and_abs() {
        assert_eq!(sub(i(12.0), i(8.0)).get(), 4.0);
        assert_eq!(abs(i(-12.0)).get(), 12.0);
        assert_eq!(abs(Int::MIN), Int::MAX);
    }

    #[test]
    fn test_add_and_mul_saturate_at_float_range() {
        assert_eq!(add(Int::MAX, Int::MAX), Int::MAX);
        assert_eq!(sub(Int::MIN, Int::MAX), Int::MIN);
        assert_eq!(mul(Int::MAX, i(-2.0)), Int::MIN);
        assert_eq!(add(Int::MAX, Int::MIN).get(), 0.0);
    }

    #[test]
    fn test_div_is_floor_division() {
        assert_eq!(div(i(-17.0), i(5.0)).get(), -4.0);
        assert_eq!(div(i(17.0), i(-5.0)).get(), -4.0);
        assert_eq!(div(i(17.0), i(0.0)).get(), 17.0);
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(i(-2.0), i(3.0)).get(), -8.0);
        assert_eq!(pow(i(2.0), i(-1.0)).get(), 0.0);
        assert_eq!(pow(i(-1.0), i(-3.0)).get(), -1.0);
        assert_eq!(pow(i(0.0), i(-1.0)), Int::MAX);
        assert_eq!(pow(i(10.0), i(400.0)), Int::MAX);
        assert_eq!(pow(i(-10.0), i(401.0)), Int::MIN);
    }

    #[test]
    fn test_extrema_and_clamp() {
        assert_eq!(min(i(-3.0), i(3.0)).get(), -3.0);
        assert_eq!(max(i(-3.0), i(3.0)).get(), 3.0);
        assert_eq!(min_of(i(4.0), [i(-9.0), i(2.0)]).get(), -9.0);
        assert_eq!(max_of(i(4.0), [i(-9.0), i(2.0)]).get(), 4.0);
        assert_eq!(clamp(i(50.0), i(-5.0), i(5.0)).get(), 5.0);
        assert_eq!(clamp(i(-50.0), i(-5.0), i(5.0)).get(), -5.0);
    }

    #[test]
    #[should_panic]
    fn test_clamp_rejects_inverted_range() {
        let _ = clamp(i(0.0), i(5.0), i(-5.0));
    }
}
