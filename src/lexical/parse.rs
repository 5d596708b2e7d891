use super::algorithm::*;
use super::digit::*;
use super::exponent::*;
use super::num::*;

/// Number of significant digits that always fit in a `u64`.
const MAX_MANTISSA_DIGITS: usize = 19;

// PARSERS
// -------

/// Parse the significant digits of the float.
///
/// * `integer`     - Slice containing the integer digits.
/// * `fraction`    - Slice containing the fraction digits.
///
/// Keeps the first 19 significant digits and returns how many digits
/// were dropped after them. Leading zeros are not significant.
fn parse_mantissa(integer: &[u8], fraction: &[u8]) -> (u64, usize) {
    let total = integer.len() + fraction.len();
    let mut value: u64 = 0;
    let mut digits = 0;
    for (index, &c) in integer.iter().chain(fraction).enumerate() {
        if digits == MAX_MANTISSA_DIGITS {
            return (value, total - index);
        }
        value = value * 10 + to_digit(c) as u64;
        if value != 0 {
            digits += 1;
        }
    }
    (value, 0)
}

/// Parse float from extracted float components.
///
/// * `integer`     - Slice containing the integer digits.
/// * `fraction`    - Slice containing the fraction digits.
/// * `exponent`    - Parsed, 32-bit exponent.
///
/// Returns the magnitude; the caller applies the sign.
pub(crate) fn parse_float<F>(mut integer: &[u8], mut fraction: &[u8], mut exponent: i32) -> F
where
    F: Float,
{
    // Leading zeros of the integer are not significant.
    let leading = integer.iter().take_while(|&&c| c == b'0').count();
    integer = &integer[leading..];

    // Trim trailing zeroes from the fraction part.
    while fraction.last() == Some(&b'0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    // Without a fraction, trailing zeros of the integer move into the exponent.
    if fraction.is_empty() {
        let trailing = integer.iter().rev().take_while(|&&c| c == b'0').count();
        integer = &integer[..integer.len() - trailing];
        exponent = exponent.saturating_add(into_i32(trailing));
    }

    // Parse the mantissa and attempt the fast and moderate-path algorithms.
    let (mantissa, truncated) = parse_mantissa(integer, fraction);

    if mantissa == 0 {
        // Literal 0, return early. Only zero digits remain once the
        // leading and trailing zeros are gone.
        return F::ZERO;
    }

    let mant_exp = mantissa_exponent(exponent, fraction.len(), truncated);

    // Try the fast path if no mantissa truncation.
    let is_truncated = truncated != 0;
    if !is_truncated {
        if let Some(float) = fast_path(mantissa, mant_exp) {
            return float;
        }
    }

    fallback_path(integer, fraction, mantissa, exponent, mant_exp, is_truncated)
}
