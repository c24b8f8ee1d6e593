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

//! `serde` support, enabled by the `serde` feature.
//!
//! Branded values serialize as plain numbers (an integer when the value fits
//! an `i64`) and deserialize through the assertive constructor, so a payload
//! carrying an out-of-domain value is rejected instead of being clamped.

use crate::branded::Branded;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tally_core::bounds::Bounds;

impl<B> Serialize for Branded<B>
where
    B: Bounds,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_i64() {
            Some(v) => serializer.serialize_i64(v),
            None => serializer.serialize_f64(self.get()),
        }
    }
}

impl<'de, B> Deserialize<'de> for Branded<B>
where
    B: Bounds,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::try_new(raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{positive_int::PositiveInt, safe_int::SafeInt, uint::Uint};

    #[test]
    fn test_serialize_as_number() {
        let x = SafeInt::try_new(-42.0).unwrap();
        assert_eq!(serde_json::to_string(&x).unwrap(), "-42");
        let big = Uint::try_new(1e20).unwrap();
        assert_eq!(serde_json::to_string(&big).unwrap(), "1e+20");
    }

    #[test]
    fn test_round_trip_beyond_i64_range() {
        for raw in [1e20, 2f64.powi(63), f64::MAX] {
            let x = Uint::try_new(raw).unwrap();
            let json = serde_json::to_string(&x).unwrap();
            let back: Uint = serde_json::from_str(&json).unwrap();
            assert_eq!(back, x);
        }

        let x = SafeInt::MIN;
        let back: SafeInt = serde_json::from_str(&serde_json::to_string(&x).unwrap()).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_deserialize_validates() {
        let p: PositiveInt = serde_json::from_str("7").unwrap();
        assert_eq!(p.get(), 7.0);

        let err = serde_json::from_str::<PositiveInt>("0").unwrap_err();
        assert!(err.to_string().contains("expected PositiveInt"));
        assert!(serde_json::from_str::<Uint>("1.5").is_err());
        assert!(serde_json::from_str::<Uint>("\"7\"").is_err());
    }

    #[test]
    fn test_values_nested_in_structures() {
        let values: Vec<Uint> = serde_json::from_str("[0, 1, 2]").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(serde_json::to_string(&values).unwrap(), "[0,1,2]");
    }
}
