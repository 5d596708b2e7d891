//! Compare the mantissa to the halfway representation of the float.
//!
//! Compares the actual significant digits of the mantissa to the
//! theoretical digits from `b+h`, scaled into the proper range.

use crate::lib::cmp;
use super::bignum::*;
use super::digit::*;
use super::exponent::*;
use super::float::*;
use super::math::*;
use super::num::*;
use super::rounding::*;

// MANTISSA

/// Parse the full mantissa into a big integer.
///
/// At most `F::MAX_DIGITS` digits are kept: digits past that point only
/// matter through being non-zero, so they collapse into a trailing `1`.
fn parse_mantissa<'a, F, Iter>(mut iter: Iter) -> Bigint
where
    F: Float,
    Iter: Iterator<Item = &'a u8>,
{
    let small_powers = POW10_LIMB;
    let step = small_powers.len() - 2;
    let max_digits = F::MAX_DIGITS - 1;
    let mut counter = 0;
    let mut value: Limb = 0;
    let mut i: usize = 0;
    let mut result = Bigint::default();

    // Iteratively process all the data in the mantissa.
    for &digit in iter.by_ref() {
        // We've parsed the max digits using small values, add to bignum
        if counter == step {
            result.imul_small(small_powers[counter]);
            result.iadd_small(value);
            counter = 0;
            value = 0;
        }

        value *= 10;
        value += as_limb(to_digit(digit));

        i += 1;
        counter += 1;
        if i == max_digits {
            break;
        }
    }

    // We will always have a remainder, as long as we entered the loop
    // once, or counter % step is 0.
    if counter != 0 {
        result.imul_small(small_powers[counter]);
        result.iadd_small(value);
    }

    // Trailing zeros are trimmed before we get here, so any digits left
    // over contain a non-zero digit.
    if iter.next().is_some() {
        result.imul_small(10);
        result.iadd_small(1);
    }

    result
}

// FLOAT OPS

/// Calculate `b` from a a representation of `b` as a float.
#[inline]
fn b_extended<F: Float>(f: F) -> ExtendedFloat {
    ExtendedFloat::from_float(f)
}

/// Calculate `b+h` from a a representation of `b` as a float.
#[inline]
fn bh_extended<F: Float>(f: F) -> ExtendedFloat {
    // None of these can overflow.
    let b = b_extended(f);
    ExtendedFloat {
        mant: (b.mant << 1) + 1,
        exp: b.exp - 1,
    }
}

// ROUNDING

/// Round-nearest, tie-even, where truncated bits below the shift break ties.
#[inline]
fn round_nearest_tie_even_sticky(fp: &mut ExtendedFloat, shift: i32, is_truncated: bool) {
    let (mut is_above, mut is_halfway) = round_nearest(fp, shift);
    if is_halfway && is_truncated {
        is_above = true;
        is_halfway = false;
    }
    tie_even(fp, is_above, is_halfway);
}

// BHCOMP

/// Calculate the mantissa for a big integer with a positive exponent.
///
/// The value is an integer, so it is computed exactly.
fn large_atof<'a, F, Iter>(iter: Iter, exponent: i32) -> F
where
    F: Float,
    Iter: Iterator<Item = &'a u8>,
{
    let mut bigmant = parse_mantissa::<F, _>(iter);
    bigmant.imul_pow10(exponent as u32);

    // The binary exponent is the binary exponent for the mantissa
    // shifted to the hidden bit.
    let (mant, is_truncated) = bigmant.hi64();
    let exp = bigmant.bit_length() as i32 - EXTENDED_BITS;
    let mut fp = ExtendedFloat { mant, exp };
    fp.round_to_native::<F, _>(|fp, shift| round_nearest_tie_even_sticky(fp, shift, is_truncated));
    into_float(fp)
}

/// Calculate the mantissa for a big integer with a negative exponent.
///
/// This invokes the comparison with `b+h`.
fn small_atof<'a, F, Iter>(iter: Iter, exponent: i32, f: F) -> F
where
    F: Float,
    Iter: Iterator<Item = &'a u8>,
{
    // Get the significant digits and radix exponent for the real digits.
    let mut real_digits = parse_mantissa::<F, _>(iter);
    let real_exp = exponent;
    debug_assert!(real_exp < 0);

    // Get the significant digits and the binary exponent for `b+h`.
    let theor = bh_extended(f);
    let mut theor_digits = Bigint::from_u64(theor.mant);
    let theor_exp = theor.exp;

    // Compare `real * 10^real_exp` against `theor * 2^theor_exp`. Moving
    // the negative power of ten to the other side leaves `5^-real_exp`
    // on the theoretical digits, and the two powers of two combine into
    // a single shift on whichever side has the positive exponent.
    //
    // Example: 10^-10, 2^-15   -> 5^10 * 2^-5 on b+h
    // Example: 10^-10, 2^5     -> 5^10 * 2^15 on b+h
    let binary_exp = theor_exp - real_exp;
    let halfradix_exp = -real_exp;

    theor_digits.imul_pow5(halfradix_exp as u32);
    if binary_exp > 0 {
        theor_digits.imul_pow2(binary_exp as u32);
    } else if binary_exp < 0 {
        real_digits.imul_pow2(binary_exp.unsigned_abs());
    }

    // Compare real digits to theoretical digits and round the float.
    match real_digits.compare(&theor_digits) {
        cmp::Ordering::Greater => f.next_positive(),
        cmp::Ordering::Less => f,
        cmp::Ordering::Equal => f.round_positive_even(),
    }
}

/// Calculate the exact value of the float.
///
/// `b` must be the correctly rounded result or the float just below it.
/// The digits must not have trailing zeros, and the integer digits must
/// not have leading zeros.
pub(crate) fn bhcomp<F>(b: F, integer: &[u8], fraction: &[u8], exponent: i32) -> F
where
    F: Float,
{
    // Calculate the number of integer digits and use that to determine
    // where the significant digits start in the fraction.
    let integer_digits = integer.len();
    let fraction_digits = fraction.len();
    let digits_start = match integer_digits {
        0 => fraction.iter().take_while(|&&c| c == b'0').count(),
        _ => 0,
    };
    let sci_exp = scientific_exponent(exponent, integer_digits, digits_start);
    let count = F::MAX_DIGITS.min(integer_digits + fraction_digits - digits_start);
    let scaled_exponent = sci_exp + 1 - count as i32;

    // Skip all leading zeros (can occur if the integer is empty).
    let iter = integer.iter().chain(fraction.iter()).skip(digits_start);

    if scaled_exponent >= 0 {
        large_atof(iter, scaled_exponent)
    } else {
        small_atof(iter, scaled_exponent, b)
    }
}

// TESTS
// -----
