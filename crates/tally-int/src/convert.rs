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

//! Conversions into, out of, and between branded domains.
//!
//! - `f64` and small primitive integers convert through the assertive
//!   constructor (`TryFrom`), and branded values always convert back to `f64`.
//! - Text parses with `FromStr`, reporting malformed literals and
//!   out-of-domain values separately.
//! - A domain converts infallibly (`From`) into every domain that contains it.
//!   Any other pair goes through `try_cast` (checked) or `saturating_cast`
//!   (clamp constructor of the target).

use crate::{
    branded::Branded,
    int::IntBounds,
    positive_int::PositiveIntBounds,
    positive_safe_int::PositiveSafeIntBounds,
    safe_int::SafeIntBounds,
    uint::UintBounds,
};
use std::str::FromStr;
use tally_core::{
    bounds::Bounds,
    error::{ParseBrandedError, ValidationError},
};

impl<B> Branded<B>
where
    B: Bounds,
{
    /// Re-brands the value into domain `C`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `C` if the value is not a member of `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_int::{int::Int, uint::Uint};
    ///
    /// let x = Int::try_new(-4.0).unwrap();
    /// assert!(x.try_cast::<tally_int::uint::UintBounds>().is_err());
    /// let y: Uint = Int::try_new(4.0).unwrap().try_cast().unwrap();
    /// assert_eq!(y.get(), 4.0);
    /// ```
    #[inline]
    pub fn try_cast<C>(self) -> Result<Branded<C>, ValidationError>
    where
        C: Bounds,
    {
        Branded::<C>::try_new(self.get())
    }

    /// Re-brands the value into domain `C`, clamping it into `C`'s bounds.
    #[inline]
    pub fn saturating_cast<C>(self) -> Branded<C>
    where
        C: Bounds,
    {
        Branded::<C>::normalize(self.get())
    }
}

impl<B> From<Branded<B>> for f64 {
    #[inline]
    fn from(value: Branded<B>) -> Self {
        value.get()
    }
}

impl<B> TryFrom<f64> for Branded<B>
where
    B: Bounds,
{
    type Error = ValidationError;

    #[inline]
    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::try_new(raw)
    }
}

macro_rules! impl_try_from_primitive {
    ($t:ty) => {
        impl<B> TryFrom<$t> for Branded<B>
        where
            B: Bounds,
        {
            type Error = ValidationError;

            #[inline]
            fn try_from(raw: $t) -> Result<Self, Self::Error> {
                Self::try_new(f64::from(raw))
            }
        }
    };
}

impl_try_from_primitive!(i8);
impl_try_from_primitive!(u8);
impl_try_from_primitive!(i16);
impl_try_from_primitive!(u16);
impl_try_from_primitive!(i32);
impl_try_from_primitive!(u32);

impl<B> FromStr for Branded<B>
where
    B: Bounds,
{
    type Err = ParseBrandedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: f64 = s.trim().parse()?;
        Ok(Self::try_new(raw)?)
    }
}

macro_rules! impl_widening {
    ($narrow:ty => $($wide:ty),+) => {
        $(
            impl From<Branded<$narrow>> for Branded<$wide> {
                #[inline]
                fn from(value: Branded<$narrow>) -> Self {
                    Self::new_unchecked(value.get())
                }
            }
        )+
    };
}

impl_widening!(SafeIntBounds => IntBounds);
impl_widening!(UintBounds => IntBounds);
impl_widening!(PositiveIntBounds => UintBounds, IntBounds);
impl_widening!(PositiveSafeIntBounds => SafeIntBounds, PositiveIntBounds, UintBounds, IntBounds);

#[cfg(test)]
mod tests {
    use crate::{
        int::Int, positive_int::PositiveInt, positive_safe_int::PositiveSafeInt,
        safe_int::SafeInt, uint::Uint,
    };
    use tally_core::{error::ParseBrandedError, num::constants::MAX_SAFE_INTEGER};

    #[test]
    fn test_widening_conversions() {
        let p = PositiveSafeInt::try_new(42.0).unwrap();
        let as_safe: SafeInt = p.into();
        let as_positive: PositiveInt = p.into();
        let as_uint: Uint = p.into();
        let as_int: Int = p.into();
        assert_eq!(as_safe.get(), 42.0);
        assert_eq!(as_positive.get(), 42.0);
        assert_eq!(as_uint.get(), 42.0);
        assert_eq!(as_int.get(), 42.0);

        let u: Uint = PositiveInt::MAX.into();
        assert_eq!(u, Uint::MAX);
        let i: Int = SafeInt::MIN.into();
        assert_eq!(i.get(), -MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_try_cast() {
        let big = Uint::try_new(1e20).unwrap();
        let err = big.try_cast::<crate::safe_int::SafeIntBounds>().unwrap_err();
        assert_eq!(err.expected, "SafeInt");
        assert_eq!(err.value, 1e20);

        let zero = Uint::try_new(0.0).unwrap();
        assert!(zero.try_cast::<crate::positive_int::PositiveIntBounds>().is_err());
    }

    #[test]
    fn test_saturating_cast() {
        let big = Uint::try_new(1e20).unwrap();
        let safe: SafeInt = big.saturating_cast();
        assert_eq!(safe, SafeInt::MAX);

        let negative = Int::try_new(-8.0).unwrap();
        let positive: PositiveSafeInt = negative.saturating_cast();
        assert_eq!(positive.get(), 1.0);
    }

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(Uint::try_from(7u32).unwrap().get(), 7.0);
        assert!(Uint::try_from(-7i32).is_err());
        assert!(PositiveInt::try_from(0u8).is_err());
        assert_eq!(SafeInt::try_from(-3.0).unwrap().get(), -3.0);
        assert!(SafeInt::try_from(0.25).is_err());
        assert_eq!(f64::from(PositiveInt::try_new(9.0).unwrap()), 9.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("12".parse::<Uint>().unwrap().get(), 12.0);
        assert_eq!(" -4 ".parse::<SafeInt>().unwrap().get(), -4.0);
        assert_eq!("1e3".parse::<PositiveInt>().unwrap().get(), 1000.0);

        assert!(matches!(
            "twelve".parse::<Uint>(),
            Err(ParseBrandedError::Malformed(_))
        ));
        assert!(matches!(
            "-1".parse::<Uint>(),
            Err(ParseBrandedError::Invalid(_))
        ));
        assert!(matches!(
            "1.5".parse::<Int>(),
            Err(ParseBrandedError::Invalid(_))
        ));
    }
}
