//! Decimal to binary floating-point conversion
//!
//! This crate converts decimal floating-point literals, as they appear in
//! source code, JSON documents, logs or numeric data files, into the nearest
//! representable `f32` or `f64`. Rounding matches the C library's `strtod`
//! and `strtof` in the "C" locale (round to nearest, ties to even) without
//! consulting any locale or global state.
//!
//! ```
//! use lexical_float::{from_chars, Status};
//!
//! let input = b"3.14159265359 rest";
//! let result = from_chars::<f64>(input);
//! assert_eq!(result.status, Status::Ok);
//! assert_eq!(result.value, 3.14159265359);
//! assert_eq!(&input[result.consumed..], b" rest");
//! ```
//!
//! The common case, a handful of significant digits and a small exponent, is
//! converted with a single exact floating-point multiplication or division.
//! Everything else goes through the Eisel-Lemire algorithm over a table of
//! 128-bit powers of five, and the rare literal that lands too close to a
//! rounding boundary is settled by an exact big-integer comparison.
//!
//! # Literals
//!
//! The accepted grammar is
//!
//! ```text
//! [+-]? ( digits? ( '.' digits? )? ( [eE] [+-]? digits )?
//!       | "inf" | "infinity" | "nan" ( '(' [A-Za-z0-9_]* ')' )? )
//! ```
//!
//! with at least one digit in the integer or fraction part. Special tokens
//! are case-insensitive. Leading whitespace is never skipped.
//!
//! Values whose magnitude exceeds the target format parse successfully as a
//! signed infinity, and values below half the smallest subnormal parse as a
//! signed zero:
//!
//! ```
//! assert_eq!(lexical_float::parse::<f64>("1e1000").unwrap(), f64::INFINITY);
//! assert_eq!(lexical_float::parse::<f32>("-1e-500").unwrap().to_bits(), (-0.0f32).to_bits());
//! ```
//!
//! # Formats
//!
//! [`from_chars_with_format`] restricts the literal to [`Format::Fixed`]
//! (no exponent) or [`Format::Scientific`] (exponent required).
//!
//! # No-std support
//!
//! The conversion engine never allocates. Disable the default `std` feature
//! to use this crate in a `no_std` context; only the
//! [`std::error::Error`] impl of [`Error`] is lost.

#![doc(html_root_url = "https://docs.rs/lexical_float/0.1.0")]
// Ignored clippy lints
#![allow(clippy::comparison_chain, clippy::excessive_precision)]
// Ignored clippy_pedantic lints
#![allow(
    // integer and float conversions are pervasive in the engine
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::unreadable_literal,
    clippy::similar_names,
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    #[cfg(feature = "std")]
    pub(crate) use std::*;

    #[cfg(not(feature = "std"))]
    pub(crate) use core::*;
}

pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::format::Format;
pub use crate::parse::{
    from_chars, from_chars_with_format, parse, parse_partial, FromChars, ParseResult, Status,
};

#[cfg(feature = "serde")]
pub mod de;
pub mod error;

mod format;
mod lexical;
mod parse;
