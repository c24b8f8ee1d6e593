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

//! # Uint
//!
//! Non-negative finite integers. Negative results clamp up to `0`.
//!
//! ```rust
//! use tally_int::uint::{self, as_uint, clamp_uint};
//!
//! assert_eq!(clamp_uint(-5.0).get(), 0.0);
//! let five = as_uint(5.0).unwrap();
//! let eight = as_uint(8.0).unwrap();
//! assert_eq!(uint::sub(five, eight).get(), 0.0);
//! ```

use crate::branded::Branded;
use tally_core::bounds::Bounds;

/// Bounds descriptor for [`Uint`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct UintBounds;

impl Bounds for UintBounds {
    const NAME: &'static str = "Uint";
    const DESCRIPTION: &'static str = "non-negative integer";
    const LOWER: f64 = 0.0;
    const UPPER: f64 = f64::MAX;
}

/// A non-negative integer.
pub type Uint = Branded<UintBounds>;

domain_functions!(Uint, is_uint, as_uint, clamp_uint);
