//! Deserialize floats from numbers or float literal strings.
//!
//! Formats such as JSON have no syntax for infinities or NaN, and many
//! producers fall back to writing them, or numbers too precise for the
//! format's native parser, as strings. [`deserialize`] accepts both.
//!
//! ```
//! # use serde_derive::Deserialize;
//! #[derive(Deserialize)]
//! struct Reading {
//!     #[serde(deserialize_with = "lexical_float::de::deserialize")]
//!     value: f64,
//! }
//!
//! let reading: Reading = serde_json::from_str(r#"{"value": "-inf"}"#).unwrap();
//! assert_eq!(reading.value, f64::NEG_INFINITY);
//!
//! let reading: Reading = serde_json::from_str(r#"{"value": 2.5}"#).unwrap();
//! assert_eq!(reading.value, 2.5);
//! ```

use crate::lib::fmt;
use crate::lib::marker::PhantomData;
use crate::parse::{parse, FromChars};
use serde_core::de::{self, Deserializer, Unexpected, Visitor};

/// Deserialize an `f32` or `f64` from a number or a string holding a float
/// literal.
///
/// Numbers are converted with `as`. The deserializer has already rounded
/// them to `f64`, so an `f32` field given a number may round twice and land
/// one unit away from the correctly rounded value. Strings are parsed
/// directly into the target type and rounded once, so producers that need
/// correctly rounded `f32` values should send them as strings. A string
/// must contain exactly one literal with nothing around it.
///
/// ```
/// # use serde_derive::Deserialize;
/// #[derive(Deserialize)]
/// struct Single {
///     #[serde(deserialize_with = "lexical_float::de::deserialize")]
///     value: f32,
/// }
///
/// // Just above the midpoint of 1.0 and the next f32.
/// let json = r#"{"value": "1.00000005960464477539062501"}"#;
/// let single: Single = serde_json::from_str(json).unwrap();
/// assert_eq!(single.value, 1.00000012);
/// ```
///
/// # Errors
///
/// Fails if the input is neither a number nor a string, or if the string is
/// not a float literal.
pub fn deserialize<'de, D, F>(deserializer: D) -> Result<F, D::Error>
where
    D: Deserializer<'de>,
    F: FromChars,
{
    deserializer.deserialize_any(FloatVisitor {
        marker: PhantomData,
    })
}

struct FloatVisitor<F> {
    marker: PhantomData<F>,
}

impl<'de, F> Visitor<'de> for FloatVisitor<F>
where
    F: FromChars,
{
    type Value = F;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a float literal string")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<F, E> {
        Ok(F::from_i64(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<F, E> {
        Ok(F::from_u64(value))
    }

    #[inline]
    fn visit_f64<E>(self, value: f64) -> Result<F, E> {
        Ok(F::from_f64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<F, E>
    where
        E: de::Error,
    {
        parse(value).map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
    }
}
