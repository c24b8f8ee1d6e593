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

//! # PositiveSafeInt
//!
//! The intersection of [`PositiveInt`](crate::positive_int::PositiveInt) and
//! [`SafeInt`](crate::safe_int::SafeInt): integers in `[1, 2^53 - 1]`.
//!
//! The bounds descriptor does not restate either limit. Its floor is
//! `PositiveInt`'s floor and its ceiling is `SafeInt`'s ceiling, and
//! normalization applies the floor before the ceiling.
//!
//! ```rust
//! use tally_int::positive_safe_int::{self, as_positive_safe_int};
//!
//! let five = as_positive_safe_int(5.0).unwrap();
//! let fifty = as_positive_safe_int(50.0).unwrap();
//! // 5 / 50 floors to 0, which the positivity floor raises to 1.
//! assert_eq!(positive_safe_int::div(five, fifty).get(), 1.0);
//! ```

use crate::{branded::Branded, positive_int::PositiveIntBounds, safe_int::SafeIntBounds};
use tally_core::bounds::Bounds;

/// Bounds descriptor for [`PositiveSafeInt`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct PositiveSafeIntBounds;

impl Bounds for PositiveSafeIntBounds {
    const NAME: &'static str = "PositiveSafeInt";
    const DESCRIPTION: &'static str = "integer in [1, 2^53 - 1]";
    const LOWER: f64 = PositiveIntBounds::LOWER;
    const UPPER: f64 = SafeIntBounds::UPPER;

    #[inline]
    fn clamp_lower(value: f64) -> f64 {
        PositiveIntBounds::clamp_lower(value)
    }

    #[inline]
    fn clamp_upper(value: f64) -> f64 {
        SafeIntBounds::clamp_upper(value)
    }
}

/// A strictly positive integer whose magnitude is exactly representable.
pub type PositiveSafeInt = Branded<PositiveSafeIntBounds>;

domain_functions!(
    PositiveSafeInt,
    is_positive_safe_int,
    as_positive_safe_int,
    clamp_positive_safe_int
);
