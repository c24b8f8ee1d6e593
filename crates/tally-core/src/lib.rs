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

//! # Tally Core
//!
//! Foundational building blocks for the Tally branded integer types. This
//! crate holds everything that does not depend on a concrete domain: the
//! validation predicates, the `Bounds` descriptor that defines a domain, the
//! integral operations on float primitives, and the error types returned by
//! assertive construction.
//!
//! ## Modules
//!
//! - `num`: Validation predicates (`is_integer`, `is_in_range`), safe integer
//!   constants, and by-value traits for floor division and integer powers on
//!   `f32`/`f64`.
//! - `bounds`: The `Bounds` trait. A bounds descriptor names a numeric subset
//!   and owns its clamp order, so every domain shares one normalization rule.
//! - `error`: `ValidationError` and `ParseBrandedError`.
//!
//! Refer to `tally-int` for the branded types built on top of these pieces.

pub mod bounds;
pub mod error;
pub mod num;
