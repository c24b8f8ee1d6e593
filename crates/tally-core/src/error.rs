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

//! Errors surfaced by assertive construction and parsing.

use crate::bounds::Bounds;
use std::num::ParseFloatError;
use thiserror::Error;

/// A raw value was rejected because it is not a member of the expected domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("expected {expected} ({description}), got {value}")]
pub struct ValidationError {
    /// The name of the domain the value was checked against (e.g. "Uint").
    pub expected: &'static str,
    /// A description of the domain's subset.
    pub description: &'static str,
    /// The rejected raw value.
    pub value: f64,
}

impl ValidationError {
    /// Creates the error reported when `value` is not a member of `B`.
    #[inline]
    pub fn for_bounds<B>(value: f64) -> Self
    where
        B: Bounds,
    {
        Self {
            expected: B::NAME,
            description: B::DESCRIPTION,
            value,
        }
    }
}

/// The error type for parsing branded integers from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseBrandedError {
    /// The text is not a numeric literal.
    #[error("invalid numeric literal: {0}")]
    Malformed(#[from] ParseFloatError),
    /// The literal parsed but is not a member of the domain.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
