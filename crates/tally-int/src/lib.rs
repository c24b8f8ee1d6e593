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

//! # Tally Int
//!
//! Branded integer types: `f64` values that carry, in their type, a proof of
//! membership in a numeric subset, with arithmetic that keeps them there.
//!
//! | Type | Subset |
//! |---|---|
//! | [`Int`](int::Int) | finite integers |
//! | [`SafeInt`](safe_int::SafeInt) | integers in `[-(2^53 - 1), 2^53 - 1]` |
//! | [`Uint`](uint::Uint) | integers `>= 0` |
//! | [`PositiveInt`](positive_int::PositiveInt) | integers `>= 1` |
//! | [`PositiveSafeInt`](positive_safe_int::PositiveSafeInt) | integers in `[1, 2^53 - 1]` |
//!
//! ## Modules
//!
//! - `branded`: The generic `Branded<B>` engine shared by every type.
//! - `int`, `safe_int`, `uint`, `positive_int`, `positive_safe_int`: One module
//!   per type with its bounds descriptor, type alias, and free functions
//!   (`is_*`, `as_*`, `clamp_*`, `add`, `sub`, `mul`, `div`, `pow`, `abs`,
//!   `min`, `max`, `clamp`, `random`).
//! - `random`: Uniform sampling over inclusive branded ranges.
//! - `convert`: Primitive, textual, and cross-domain conversions.
//!
//! ## Construction and arithmetic
//!
//! Values are created with the assertive constructor (`as_*`, `try_new`),
//! which rejects non-members with a `ValidationError`, or the clamp
//! constructor (`clamp_*`, `normalize`), which rounds and clamps any input.
//! Arithmetic never fails: out-of-domain results are clamped.
//!
//! ```rust
//! use tally_int::positive_int::{self, as_positive_int};
//!
//! let five = as_positive_int(5.0).unwrap();
//! let seven = as_positive_int(7.0).unwrap();
//! assert_eq!(positive_int::sub(five, seven).get(), 1.0);
//! assert!(as_positive_int(0.0).is_err());
//! ```

#[macro_use]
mod macros;

pub mod branded;
pub mod convert;
pub mod int;
pub mod positive_int;
pub mod positive_safe_int;
pub mod random;
pub mod safe_int;
pub mod uint;

#[cfg(feature = "serde")]
mod serialization;

pub use branded::Branded;
pub use int::Int;
pub use positive_int::PositiveInt;
pub use positive_safe_int::PositiveSafeInt;
pub use safe_int::SafeInt;
pub use tally_core::{
    bounds::Bounds,
    error::{ParseBrandedError, ValidationError},
};
pub use uint::Uint;
