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

//! # Domain Bounds Descriptors
//!
//! A `Bounds` type names a numeric subset and decides how arbitrary raw
//! values are forced into it. Branded integer types are parameterized by a
//! zero-sized descriptor, so the clamp order is written once here and every
//! domain reuses it.
//!
//! ## Normalization
//!
//! `Bounds::normalize` is the clamp constructor's policy:
//!
//! 1. `NaN` maps to the in-domain value nearest zero.
//! 2. The value is rounded to the nearest integer, ties away from zero.
//! 3. `clamp_lower` is applied, then `clamp_upper`.
//!
//! Descriptors that describe the intersection of two domains override the
//! two clamp hooks to delegate to their parents. The order of step 3 is
//! fixed so the floor always runs before the ceiling.
//!
//! ```rust
//! use tally_core::bounds::Bounds;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
//! struct Percent;
//!
//! impl Bounds for Percent {
//!     const NAME: &'static str = "Percent";
//!     const DESCRIPTION: &'static str = "integer in [0, 100]";
//!     const LOWER: f64 = 0.0;
//!     const UPPER: f64 = 100.0;
//! }
//!
//! assert!(Percent::contains(42.0));
//! assert!(!Percent::contains(101.0));
//! assert_eq!(Percent::normalize(99.5), 100.0);
//! assert_eq!(Percent::normalize(-3.0), 0.0);
//! ```

use crate::num::validation::{is_in_range, is_integer};
use std::{fmt::Debug, hash::Hash};

/// Describes the bounds and clamp policy of a branded integer domain.
///
/// Implementors are zero-sized markers. `LOWER` and `UPPER` must both be
/// integers with `LOWER <= UPPER`.
pub trait Bounds:
    Copy + Clone + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// Human-readable type name used in `Debug` output and errors.
    const NAME: &'static str;
    /// Short description of the subset, used in error messages.
    const DESCRIPTION: &'static str;
    /// Inclusive lower bound.
    const LOWER: f64;
    /// Inclusive upper bound.
    const UPPER: f64;

    /// Returns `true` iff `raw` is an integer within `[LOWER, UPPER]`.
    #[inline]
    fn contains(raw: f64) -> bool {
        is_integer(raw) && is_in_range(raw, Self::LOWER, Self::UPPER)
    }

    /// Raises values below the domain to its lower bound.
    #[inline]
    fn clamp_lower(value: f64) -> f64 {
        if value < Self::LOWER {
            Self::LOWER
        } else {
            value
        }
    }

    /// Lowers values above the domain to its upper bound.
    #[inline]
    fn clamp_upper(value: f64) -> f64 {
        if value > Self::UPPER {
            Self::UPPER
        } else {
            value
        }
    }

    /// The member of the domain closest to zero.
    #[inline]
    fn nearest_to_zero() -> f64 {
        Self::clamp_upper(Self::clamp_lower(0.0))
    }

    /// Maps any raw value into the domain. Never fails.
    ///
    /// Members are returned unchanged (negative zero becomes positive zero).
    fn normalize(raw: f64) -> f64 {
        if raw.is_nan() {
            let normalized = Self::nearest_to_zero();
            tracing::trace!(domain = Self::NAME, normalized, "NaN coerced into domain");
            return normalized;
        }

        // Adding positive zero turns a negative zero into a positive one.
        let normalized = Self::clamp_upper(Self::clamp_lower(raw.round())) + 0.0;
        if normalized != raw {
            tracing::trace!(domain = Self::NAME, raw, normalized, "value coerced into domain");
        }
        normalized
    }

    /// Prepares a raw divisor: the value is normalized, then zero becomes one.
    #[inline]
    fn divisor(raw: f64) -> f64 {
        let normalized = Self::normalize(raw);
        if normalized == 0.0 { 1.0 } else { normalized }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
    struct Digit;

    impl Bounds for Digit {
        const NAME: &'static str = "Digit";
        const DESCRIPTION: &'static str = "integer in [0, 9]";
        const LOWER: f64 = 0.0;
        const UPPER: f64 = 9.0;
    }

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
    struct Signed;

    impl Bounds for Signed {
        const NAME: &'static str = "Signed";
        const DESCRIPTION: &'static str = "integer in [-5, 5]";
        const LOWER: f64 = -5.0;
        const UPPER: f64 = 5.0;
    }

    #[test]
    fn test_contains() {
        assert!(Digit::contains(0.0));
        assert!(Digit::contains(9.0));
        assert!(!Digit::contains(10.0));
        assert!(!Digit::contains(-1.0));
        assert!(!Digit::contains(4.5));
        assert!(!Digit::contains(f64::NAN));
    }

    #[test]
    fn test_normalize_rounds_half_away_from_zero() {
        assert_eq!(Signed::normalize(2.5), 3.0);
        assert_eq!(Signed::normalize(-2.5), -3.0);
        assert_eq!(Signed::normalize(2.4), 2.0);
        assert_eq!(Signed::normalize(-2.4), -2.0);
    }

    #[test]
    fn test_normalize_clamps_to_bounds() {
        assert_eq!(Digit::normalize(-3.0), 0.0);
        assert_eq!(Digit::normalize(12.0), 9.0);
        assert_eq!(Digit::normalize(f64::INFINITY), 9.0);
        assert_eq!(Digit::normalize(f64::NEG_INFINITY), 0.0);
        assert_eq!(Signed::normalize(-1e300), -5.0);
    }

    #[test]
    fn test_normalize_nan_goes_to_nearest_zero() {
        assert_eq!(Digit::normalize(f64::NAN), 0.0);
        assert_eq!(Signed::normalize(f64::NAN), 0.0);
    }

    #[test]
    fn test_normalize_never_yields_negative_zero() {
        let n = Signed::normalize(-0.4);
        assert_eq!(n, 0.0);
        assert!(n.is_sign_positive());
        assert!(Digit::normalize(-0.0).is_sign_positive());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [-7.3, -0.5, 0.0, 0.5, 3.49, 8.51, 1e9, f64::NAN] {
            let once = Signed::normalize(raw);
            assert_eq!(Signed::normalize(once), once);
        }
    }

    #[test]
    fn test_divisor_replaces_zero() {
        assert_eq!(Signed::divisor(0.0), 1.0);
        assert_eq!(Signed::divisor(-0.0), 1.0);
        assert_eq!(Signed::divisor(-3.0), -3.0);
        assert_eq!(Digit::divisor(-3.0), 1.0);
        assert_eq!(Digit::divisor(0.3), 1.0);
        assert_eq!(Digit::divisor(4.0), 4.0);
    }
}
