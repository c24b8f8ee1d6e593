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

//! Uniform sampling of branded values over inclusive ranges.
//!
//! Ranges whose endpoints fit an `i64` are sampled uniformly over the
//! integers they contain. Any other range (for example `Uint` over
//! `[0, 2^64]`) is sampled by interpolating between the endpoints with a
//! 53-bit fraction and rounding. The result is always a member within
//! `[min, max]` and approximately uniform over the real interval, but not
//! every integer in it is reachable: the attainable values are spaced by
//! roughly `(max - min) / 2^53`.

use crate::branded::Branded;
use rand::Rng;
use tally_core::bounds::Bounds;

/// `-2^63`, the smallest `i64`, which is exactly representable.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
/// `2^63`, one past the largest `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl<B> Branded<B>
where
    B: Bounds,
{
    /// Returns a uniformly distributed value in `[min, max]` drawn from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use tally_int::uint::Uint;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let lo = Uint::try_new(10.0).unwrap();
    /// let hi = Uint::try_new(20.0).unwrap();
    /// let x = Uint::random_with(lo, hi, &mut rng);
    /// assert!(lo <= x && x <= hi);
    /// ```
    pub fn random_with<R>(min: Self, max: Self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(
            min <= max,
            "Invalid range: min ({}) must be less than or equal to max ({})",
            min,
            max
        );

        let (lo, hi) = (min.get(), max.get());
        let sampled = if lo >= I64_LOWER && hi < I64_UPPER {
            rng.random_range(lo as i64..=hi as i64) as f64
        } else {
            let t: f64 = rng.random();
            (lo * (1.0 - t) + hi * t).round().clamp(lo, hi)
        };

        Self::new_unchecked(sampled + 0.0)
    }

    /// Returns a uniformly distributed value in `[min, max]` drawn from the
    /// thread-local generator.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn random(min: Self, max: Self) -> Self {
        Self::random_with(min, max, &mut rand::rng())
    }
}
