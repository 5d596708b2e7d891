// The bignum comparison and rounding code in this module is derived from the
// `lexical` crate by @Alexhuszagh, by way of the condensed copy that ships in
// serde_json. The moderate path follows the Eisel-Lemire algorithm as
// described in "Number Parsing at a Gigabyte per Second" (Lemire, 2021).
//
// Dual licensed as MIT and Apache 2.0, copyright Alexander Huszagh.

//! Correctly rounded decimal to binary float conversion.
//!
//! A literal goes through up to three stages:
//!
//! 1. [`scan`] finds the longest literal at the start of the input.
//! 2. [`algorithm::fast_path`] converts mantissas that fit the target
//!    significand when the power of ten is exact.
//! 3. [`lemire`] computes the rounded result from 128-bit cached powers of
//!    five; when the approximation cannot decide the rounding direction,
//!    [`bhcomp`] compares the digits against the halfway point exactly.

mod algorithm;
mod bhcomp;
mod bignum;
mod cached;
mod digit;
mod exponent;
mod float;
mod lemire;
mod math;
mod num;
mod parse;
mod rounding;
pub(crate) mod scan;
mod small_powers;

// API
pub(crate) use self::num::Float;
pub(crate) use self::parse::parse_float;
