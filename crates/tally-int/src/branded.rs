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

//! # Branded Values
//!
//! `Branded<B>` is the single arithmetic engine behind every branded integer
//! type. It wraps an `f64` and carries a zero-sized `Bounds` descriptor `B`
//! that encodes, at the type level, which subset the value belongs to. The
//! field is private: values only come into existence through the assertive
//! constructor (`try_new`) or the clamp constructor (`normalize`), so every
//! live value satisfies `B::contains`.
//!
//! ## Arithmetic
//!
//! Every operation runs the primitive computation and feeds the result back
//! through `B::normalize`. Overflow saturates at the domain bounds, results
//! below a non-negative or positive domain are raised to its floor, and a
//! zero divisor is replaced by one before dividing. Nothing here fails once a
//! value is branded.
//!
//! ```rust
//! use tally_int::uint::Uint;
//!
//! let a = Uint::try_new(5.0).unwrap();
//! let b = Uint::try_new(8.0).unwrap();
//! assert_eq!((a - b).get(), 0.0);
//! assert_eq!((b / a).get(), 1.0);
//! ```

use num_traits::ToPrimitive;
use std::{cmp::Ordering, hash::Hash, marker::PhantomData};
use tally_core::{
    bounds::Bounds,
    error::ValidationError,
    num::ops::integral_arithmetic::{FloorDivVal, IntegerPowVal},
};

/// An integer-valued `f64` proven to lie within the domain described by `B`.
#[repr(transparent)]
pub struct Branded<B> {
    value: f64,
    _marker: PhantomData<B>,
}

impl<B> Branded<B>
where
    B: Bounds,
{
    /// The smallest member of the domain.
    pub const MIN: Self = Self {
        value: B::LOWER,
        _marker: PhantomData,
    };

    /// The largest member of the domain.
    pub const MAX: Self = Self {
        value: B::UPPER,
        _marker: PhantomData,
    };

    /// Wraps a value that is already known to be a member of the domain.
    ///
    /// Contains a `debug_assert!` to catch invariant violations during development.
    #[inline(always)]
    pub(crate) fn new_unchecked(value: f64) -> Self {
        debug_assert!(
            B::contains(value),
            "{} invariant violated by {}",
            B::NAME,
            value
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns `true` iff `raw` is a member of the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_int::positive_int::PositiveInt;
    ///
    /// assert!(PositiveInt::is_valid(1.0));
    /// assert!(!PositiveInt::is_valid(0.0));
    /// assert!(!PositiveInt::is_valid(2.5));
    /// ```
    #[inline]
    pub fn is_valid(raw: f64) -> bool {
        B::contains(raw)
    }

    /// Brands `raw` if it is a member of the domain.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the domain and the rejected value
    /// if `raw` is not an integer within the domain's bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_int::uint::Uint;
    ///
    /// assert_eq!(Uint::try_new(3.0).unwrap().get(), 3.0);
    /// assert!(Uint::try_new(-3.0).is_err());
    /// ```
    pub fn try_new(raw: f64) -> Result<Self, ValidationError> {
        if B::contains(raw) {
            Ok(Self::new_unchecked(raw + 0.0))
        } else {
            tracing::debug!(domain = B::NAME, raw, "rejected value outside domain");
            Err(ValidationError::for_bounds::<B>(raw))
        }
    }

    /// Forces `raw` into the domain: rounds half away from zero, then clamps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_int::safe_int::SafeInt;
    /// use tally_core::num::constants::MAX_SAFE_INTEGER;
    ///
    /// assert_eq!(SafeInt::normalize(1e20).get(), MAX_SAFE_INTEGER);
    /// assert_eq!(SafeInt::normalize(-2.5).get(), -3.0);
    /// ```
    #[inline]
    pub fn normalize(raw: f64) -> Self {
        Self::new_unchecked(B::normalize(raw))
    }

    /// Returns the value as an `i64`, or `None` if it does not fit.
    #[inline]
    pub fn to_i64(self) -> Option<i64> {
        self.value.to_i64()
    }

    /// Clamped addition.
    #[inline]
    pub fn add_clamped(self, rhs: Self) -> Self {
        Self::normalize(self.value + rhs.value)
    }

    /// Clamped subtraction.
    #[inline]
    pub fn sub_clamped(self, rhs: Self) -> Self {
        Self::normalize(self.value - rhs.value)
    }

    /// Clamped multiplication.
    #[inline]
    pub fn mul_clamped(self, rhs: Self) -> Self {
        Self::normalize(self.value * rhs.value)
    }

    /// Floor division. A zero divisor is treated as one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_int::safe_int::SafeInt;
    ///
    /// let a = SafeInt::try_new(-17.0).unwrap();
    /// let b = SafeInt::try_new(5.0).unwrap();
    /// assert_eq!(a.div_floor(b).get(), -4.0);
    ///
    /// let zero = SafeInt::try_new(0.0).unwrap();
    /// assert_eq!(a.div_floor(zero), a);
    /// ```
    #[inline]
    pub fn div_floor(self, rhs: Self) -> Self {
        let divisor = B::divisor(rhs.value);
        Self::normalize(self.value.floor_div_val(divisor))
    }

    /// Clamped integer power.
    ///
    /// Negative exponents truncate toward zero, so only unit bases keep a
    /// non-zero result and a zero base saturates to `MAX`.
    #[inline]
    pub fn pow_clamped(self, exponent: Self) -> Self {
        Self::normalize(self.value.integer_pow_val(exponent.value))
    }

    /// Clamped absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::normalize(self.value.abs())
    }

    /// Returns the smallest of `first` and every value in `rest`.
    pub fn min_of<I>(first: Self, rest: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        rest.into_iter().fold(first, Ord::min)
    }

    /// Returns the largest of `first` and every value in `rest`.
    pub fn max_of<I>(first: Self, rest: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        rest.into_iter().fold(first, Ord::max)
    }
}

impl<B> Branded<B> {
    /// Returns the underlying `f64`.
    #[inline(always)]
    pub fn get(self) -> f64 {
        self.value
    }
}

impl<B> Clone for Branded<B> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Branded<B> {}

impl<B> PartialEq for Branded<B> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// Members are never NaN.
impl<B> Eq for Branded<B> {}

impl<B> PartialOrd for Branded<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B> Ord for Branded<B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl<B> Hash for Branded<B> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl<B> std::fmt::Debug for Branded<B>
where
    B: Bounds,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", B::NAME, self.value)
    }
}

impl<B> std::fmt::Display for Branded<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

macro_rules! impl_branded_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $engine:ident) => {
        impl<B> std::ops::$trait_name for Branded<B>
        where
            B: Bounds,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$engine(rhs)
            }
        }

        impl<B> std::ops::$assign_trait for Branded<B>
        where
            B: Bounds,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.$engine(rhs);
            }
        }
    };
}

impl_branded_op!(Add, add, AddAssign, add_assign, add_clamped);
impl_branded_op!(Sub, sub, SubAssign, sub_assign, sub_clamped);
impl_branded_op!(Mul, mul, MulAssign, mul_assign, mul_clamped);
impl_branded_op!(Div, div, DivAssign, div_assign, div_floor);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // A narrow domain keeps the saturation cases easy to read.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
    struct TestBounds;

    impl Bounds for TestBounds {
        const NAME: &'static str = "TestInt";
        const DESCRIPTION: &'static str = "integer in [-10, 10]";
        const LOWER: f64 = -10.0;
        const UPPER: f64 = 10.0;
    }

    type TestInt = Branded<TestBounds>;

    fn t(raw: f64) -> TestInt {
        TestInt::try_new(raw).unwrap()
    }

    #[test]
    fn test_try_new_accepts_members() {
        assert_eq!(t(-10.0).get(), -10.0);
        assert_eq!(t(10.0).get(), 10.0);
        assert!(t(-0.0).get().is_sign_positive());
    }

    #[test]
    fn test_try_new_rejects_non_members() {
        let err = TestInt::try_new(11.0).unwrap_err();
        assert_eq!(err.expected, "TestInt");
        assert_eq!(err.value, 11.0);
        assert!(TestInt::try_new(0.5).is_err());
        assert!(TestInt::try_new(f64::NAN).is_err());
        assert!(TestInt::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_min_and_max_constants() {
        assert_eq!(TestInt::MIN.get(), -10.0);
        assert_eq!(TestInt::MAX.get(), 10.0);
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(t(7.0).add_clamped(t(7.0)), TestInt::MAX);
        assert_eq!(t(-7.0).sub_clamped(t(7.0)), TestInt::MIN);
        assert_eq!(t(-4.0).mul_clamped(t(3.0)), TestInt::MIN);
        assert_eq!(t(3.0).mul_clamped(t(3.0)).get(), 9.0);
        assert_eq!(t(2.0).pow_clamped(t(5.0)), TestInt::MAX);
        assert_eq!(t(-10.0).abs(), TestInt::MAX);
    }

    #[test]
    fn test_div_floor() {
        assert_eq!(t(7.0).div_floor(t(2.0)).get(), 3.0);
        assert_eq!(t(-7.0).div_floor(t(2.0)).get(), -4.0);
        assert_eq!(t(7.0).div_floor(t(-2.0)).get(), -4.0);
        assert_eq!(t(7.0).div_floor(t(0.0)).get(), 7.0);
        assert!(t(0.0).div_floor(t(-3.0)).get().is_sign_positive());
    }

    #[test]
    fn test_operators_delegate_to_clamped_arithmetic() {
        assert_eq!(t(6.0) + t(6.0), TestInt::MAX);
        assert_eq!((t(6.0) - t(2.0)).get(), 4.0);
        assert_eq!((t(2.0) * t(-3.0)).get(), -6.0);
        assert_eq!((t(-9.0) / t(2.0)).get(), -5.0);

        let mut x = t(1.0);
        x += t(4.0);
        assert_eq!(x.get(), 5.0);
        x -= t(8.0);
        assert_eq!(x.get(), -3.0);
        x *= t(5.0);
        assert_eq!(x, TestInt::MIN);
        x /= t(3.0);
        assert_eq!(x.get(), -4.0);
    }

    #[test]
    fn test_min_of_and_max_of() {
        let values = [t(3.0), t(-2.0), t(9.0)];
        assert_eq!(TestInt::min_of(t(0.0), values).get(), -2.0);
        assert_eq!(TestInt::max_of(t(0.0), values).get(), 9.0);
        assert_eq!(TestInt::min_of(t(4.0), []).get(), 4.0);
    }

    #[test]
    fn test_ordering_and_hashing() {
        assert!(t(-3.0) < t(2.0));
        assert_eq!(t(5.0).cmp(&t(5.0)), Ordering::Equal);

        let set: HashSet<TestInt> = [t(1.0), t(1.0), t(-0.0), t(0.0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{}", t(7.0)), "7");
        assert_eq!(format!("{:?}", t(-7.0)), "TestInt(-7)");
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(t(-9.0).to_i64(), Some(-9));
    }
}
