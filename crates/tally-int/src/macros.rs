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

/// Generates the free-function surface of a branded domain module.
///
/// Each domain module exposes its constructors (`is_*`, `as_*`, `clamp_*`)
/// and arithmetic (`add`, `sub`, `mul`, `div`, `pow`, `abs`, `min`, `max`,
/// `min_of`, `max_of`, `clamp`, `random`, `random_with`) as plain functions
/// over its type alias. All of them delegate to `Branded`.
macro_rules! domain_functions {
    ($ty:ident, $is_fn:ident, $as_fn:ident, $clamp_fn:ident) => {
        #[doc = concat!("Returns `true` iff `raw` is a valid [`", stringify!($ty), "`].")]
        #[inline]
        pub fn $is_fn(raw: f64) -> bool {
            $ty::is_valid(raw)
        }

        #[doc = concat!("Brands `raw` as a [`", stringify!($ty), "`].")]
        ///
        /// # Errors
        ///
        /// Returns a `ValidationError` if `raw` is not a member of the domain.
        #[inline]
        pub fn $as_fn(raw: f64) -> Result<$ty, tally_core::error::ValidationError> {
            $ty::try_new(raw)
        }

        #[doc = concat!("Forces `raw` into [`", stringify!($ty), "`]: rounds half away from zero, then clamps.")]
        #[inline]
        pub fn $clamp_fn(raw: f64) -> $ty {
            $ty::normalize(raw)
        }

        /// Clamped addition.
        #[inline]
        pub fn add(a: $ty, b: $ty) -> $ty {
            a.add_clamped(b)
        }

        /// Clamped subtraction.
        #[inline]
        pub fn sub(a: $ty, b: $ty) -> $ty {
            a.sub_clamped(b)
        }

        /// Clamped multiplication.
        #[inline]
        pub fn mul(a: $ty, b: $ty) -> $ty {
            a.mul_clamped(b)
        }

        /// Floor division; a zero divisor is treated as one.
        #[inline]
        pub fn div(a: $ty, b: $ty) -> $ty {
            a.div_floor(b)
        }

        /// Clamped integer power.
        #[inline]
        pub fn pow(base: $ty, exponent: $ty) -> $ty {
            base.pow_clamped(exponent)
        }

        /// Clamped absolute value.
        #[inline]
        pub fn abs(a: $ty) -> $ty {
            a.abs()
        }

        /// The smaller of two values.
        #[inline]
        pub fn min(a: $ty, b: $ty) -> $ty {
            Ord::min(a, b)
        }

        /// The larger of two values.
        #[inline]
        pub fn max(a: $ty, b: $ty) -> $ty {
            Ord::max(a, b)
        }

        /// The smallest of one or more values.
        #[inline]
        pub fn min_of<I>(first: $ty, rest: I) -> $ty
        where
            I: IntoIterator<Item = $ty>,
        {
            $ty::min_of(first, rest)
        }

        /// The largest of one or more values.
        #[inline]
        pub fn max_of<I>(first: $ty, rest: I) -> $ty
        where
            I: IntoIterator<Item = $ty>,
        {
            $ty::max_of(first, rest)
        }

        /// Restricts `value` to `[min, max]`.
        ///
        /// # Panics
        ///
        /// Panics if `min > max`.
        #[inline]
        pub fn clamp(value: $ty, min: $ty, max: $ty) -> $ty {
            Ord::clamp(value, min, max)
        }

        /// A uniformly distributed value in `[min, max]` from the thread-local generator.
        ///
        /// # Panics
        ///
        /// Panics if `min > max`.
        #[inline]
        pub fn random(min: $ty, max: $ty) -> $ty {
            $ty::random(min, max)
        }

        /// A uniformly distributed value in `[min, max]` drawn from `rng`.
        ///
        /// # Panics
        ///
        /// Panics if `min > max`.
        #[inline]
        pub fn random_with<R>(min: $ty, max: $ty, rng: &mut R) -> $ty
        where
            R: rand::Rng + ?Sized,
        {
            $ty::random_with(min, max, rng)
        }
    };
}
