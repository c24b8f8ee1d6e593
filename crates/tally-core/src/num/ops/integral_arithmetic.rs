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

use core::ops::{Div, Mul};
use num_traits::Float;

#[inline(always)]
fn floor_div<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    // The float remainder is exact, so `dividend - remainder` is an exact
    // multiple of the divisor whenever the operands are safe integers.
    let remainder = dividend % divisor;
    let quotient = (dividend - remainder) / divisor;
    if remainder != F::zero() && ((remainder < F::zero()) != (divisor < F::zero())) {
        quotient - F::one()
    } else {
        quotient
    }
}

#[inline(always)]
fn is_odd<F>(exponent: F) -> bool
where
    F: Float,
{
    exponent % (F::one() + F::one()) != F::zero()
}

#[inline(always)]
fn integer_pow<F>(base: F, exponent: F) -> F
where
    F: Float,
{
    let zero = F::zero();
    let one = F::one();

    if exponent == zero {
        return one;
    }

    if exponent < zero {
        // Truncated toward zero: only unit bases keep a non-zero magnitude.
        return if base == one {
            one
        } else if base == -one {
            if is_odd(exponent) { -one } else { one }
        } else if base == zero {
            F::infinity()
        } else {
            zero
        };
    }

    match exponent.to_i32() {
        Some(n) => base.powi(n),
        None => {
            if base == zero || base == one {
                base
            } else if base == -one {
                if is_odd(exponent) { -one } else { one }
            } else if base.abs() < one {
                zero
            } else if base < zero && is_odd(exponent) {
                F::neg_infinity()
            } else {
                F::infinity()
            }
        }
    }
}

macro_rules! integral_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_fn:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                $src_fn(self, v)
            }
        }
    };
}

/// Floor division by value for integral floats.
///
/// The quotient is rounded toward negative infinity, matching the
/// mathematical `⌊a / b⌋`. For operands within the safe integer range the
/// result is exact; no rounding of an intermediate float quotient can push it
/// across an integer boundary.
///
/// Dividing by zero yields `NaN`; callers are expected to rule the zero
/// divisor out beforehand.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::integral_arithmetic::FloorDivVal;
///
/// assert_eq!(17.0_f64.floor_div_val(5.0), 3.0);
/// assert_eq!((-17.0_f64).floor_div_val(5.0), -4.0);
/// assert_eq!(17.0_f64.floor_div_val(-5.0), -4.0);
/// assert_eq!((-17.0_f64).floor_div_val(-5.0), 3.0);
/// ```
pub trait FloorDivVal: Sized + Div<Self, Output = Self> {
    /// Performs floor division by value.
    fn floor_div_val(self, v: Self) -> Self;
}

integral_impl_binary_val!(FloorDivVal, floor_div_val, f32, floor_div);
integral_impl_binary_val!(FloorDivVal, floor_div_val, f64, floor_div);

/// Integer power by value for integral floats.
///
/// Positive exponents are evaluated by repeated multiplication, so results
/// that fit the exactly representable range are exact. Results beyond the
/// finite range become `±∞`, which callers clamp.
///
/// A negative exponent yields the mathematical result truncated toward zero:
/// `1` for a base of `1`, `±1` by parity for a base of `-1`, `0` for all
/// other non-zero bases, and `+∞` for a base of `0`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::integral_arithmetic::IntegerPowVal;
///
/// assert_eq!(3.0_f64.integer_pow_val(3.0), 27.0);
/// assert_eq!((-2.0_f64).integer_pow_val(3.0), -8.0);
/// assert_eq!(2.0_f64.integer_pow_val(-1.0), 0.0);
/// assert_eq!((-1.0_f64).integer_pow_val(-3.0), -1.0);
/// assert_eq!(10.0_f64.integer_pow_val(400.0), f64::INFINITY);
/// ```
pub trait IntegerPowVal: Sized + Mul<Self, Output = Self> {
    /// Raises `self` to the integral power `v`.
    fn integer_pow_val(self, v: Self) -> Self;
}

integral_impl_binary_val!(IntegerPowVal, integer_pow_val, f32, integer_pow);
integral_impl_binary_val!(IntegerPowVal, integer_pow_val, f64, integer_pow);
