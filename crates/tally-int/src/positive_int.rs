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

//! # PositiveInt
//!
//! Strictly positive finite integers. Zero is excluded, so every result
//! `<= 0` clamps up to `1`.

use crate::branded::Branded;
use tally_core::bounds::Bounds;

/// Bounds descriptor for [`PositiveInt`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct PositiveIntBounds;

impl Bounds for PositiveIntBounds {
    const NAME: &'static str = "PositiveInt";
    const DESCRIPTION: &'static str = "positive integer";
    const LOWER: f64 = 1.0;
    const UPPER: f64 = f64::MAX;
}

/// A strictly positive integer.
pub type PositiveInt = Branded<PositiveIntBounds>;

domain_functions!(PositiveInt, is_positive_int, as_positive_int, clamp_positive_int);

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: f64) -> PositiveInt {
        as_positive_int(raw).unwrap()
    }

    #[test]
    fn test_membership() {
        assert!(is_positive_int(1.0));
        assert!(is_positive_int(1e200));
        assert!(!is_positive_int(0.0));
        assert!(!is_positive_int(-3.0));
        assert!(!is_positive_int(1.5));
        assert_eq!(as_positive_int(0.0).unwrap_err().expected, "PositiveInt");
    }

    #[test]
    fn test_clamp_raises_non_positive_to_one() {
        assert_eq!(clamp_positive_int(0.0).get(), 1.0);
        assert_eq!(clamp_positive_int(-100.0).get(), 1.0);
        assert_eq!(clamp_positive_int(0.49).get(), 1.0);
        assert_eq!(clamp_positive_int(f64::NAN).get(), 1.0);
    }

    #[test]
    fn test_div_and_sub() {
        assert_eq!(div(p(17.0), p(5.0)).get(), 3.0);
        assert_eq!(div(p(4.0), p(5.0)).get(), 1.0);
        assert_eq!(sub(p(5.0), p(7.0)).get(), 1.0);
        assert_eq!(sub(p(7.0), p(5.0)).get(), 2.0);
    }

    #[test]
    fn test_add_mul_pow() {
        assert_eq!(add(p(2.0), p(3.0)).get(), 5.0);
        assert_eq!(mul(p(4.0), p(6.0)).get(), 24.0);
        assert_eq!(pow(p(2.0), p(10.0)).get(), 1024.0);
        assert_eq!(pow(p(2.0), p(2000.0)), PositiveInt::MAX);
    }
}
