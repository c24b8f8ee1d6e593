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

//! # SafeInt
//!
//! Integers in `[-(2^53 - 1), 2^53 - 1]`, the range an `f64` represents
//! exactly. Results of larger magnitude saturate at the bounds rather than
//! silently losing precision.

use crate::branded::Branded;
use tally_core::{
    bounds::Bounds,
    num::constants::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER},
};

/// Bounds descriptor for [`SafeInt`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SafeIntBounds;

impl Bounds for SafeIntBounds {
    const NAME: &'static str = "SafeInt";
    const DESCRIPTION: &'static str = "integer in [-(2^53 - 1), 2^53 - 1]";
    const LOWER: f64 = MIN_SAFE_INTEGER;
    const UPPER: f64 = MAX_SAFE_INTEGER;
}

/// An integer whose magnitude is exactly representable.
pub type SafeInt = Branded<SafeIntBounds>;

domain_functions!(SafeInt, is_safe_int, as_safe_int, clamp_safe_int);
