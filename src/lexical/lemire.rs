//! Eisel-Lemire algorithm over 128-bit cached powers of five.
//!
//! Multiplies the normalized decimal significand by a truncated 128-bit
//! approximation of `5^q`, which almost always determines the correctly
//! rounded result. Products too close to a rounding boundary are reported
//! as undecided so the caller can settle them exactly.

use super::cached::*;
use super::float::{AdjustedMantissa, ExtendedFloat};
use super::num::*;

/// Compute `w * 10^q` rounded to the nearest native float, if decidable.
///
/// Returns `None` when the truncated product cannot decide the rounding.
/// `w` must be non-zero.
pub(crate) fn compute_float<F: Float>(q: i32, mut w: u64) -> Option<AdjustedMantissa> {
    debug_assert!(w != 0);

    if q < F::SMALLEST_POWER_OF_TEN {
        return Some(AdjustedMantissa::zero_pow2(0));
    } else if q > F::LARGEST_POWER_OF_TEN {
        return Some(AdjustedMantissa::zero_pow2(F::INFINITE_POWER));
    }

    // Normalize our significant digits, so the most-significant bit is set.
    let lz = w.leading_zeros() as i32;
    w <<= lz;
    let (lo, hi) = compute_product_approx(q, w, F::MANTISSA_SIZE + 3);
    if lo == u64::MAX {
        // The lower bits of the product are all ones, so the truncated
        // part of `5^q` could carry into the bits we keep. Powers of five
        // in [0, 55] are exact, and below -27 a carry cannot land here.
        let inside_safe_exponent = (-27..=55).contains(&q);
        if !inside_safe_exponent {
            return None;
        }
    }

    let upperbit = (hi >> 63) as i32;
    let shift = upperbit + 64 - F::MANTISSA_SIZE - 3;
    let mut mantissa = hi >> shift;
    let mut power2 = power(q) + upperbit - lz - F::MINIMUM_EXPONENT;
    if power2 <= 0 {
        // Subnormal, or underflow to zero.
        if -power2 + 1 >= 64 {
            return Some(AdjustedMantissa::zero_pow2(0));
        }
        mantissa >>= -power2 + 1;
        mantissa += mantissa & 1;
        mantissa >>= 1;
        // Rounding up may produce the smallest normal float.
        power2 = (mantissa >= (1 << F::MANTISSA_SIZE)) as i32;
        return Some(AdjustedMantissa {
            mantissa: mantissa & F::MANTISSA_MASK.as_u64(),
            power2,
        });
    }

    // Exactly halfway between two floats only happens for small exponents,
    // and shows as the dropped bits being zero: undo the round-up below.
    if lo <= 1
        && q >= F::MIN_EXPONENT_ROUND_TO_EVEN
        && q <= F::MAX_EXPONENT_ROUND_TO_EVEN
        && mantissa & 3 == 1
        && (mantissa << shift) == hi
    {
        mantissa &= !1;
    }

    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= (2 << F::MANTISSA_SIZE) {
        mantissa = 1 << F::MANTISSA_SIZE;
        power2 += 1;
    }
    mantissa &= !(1 << F::MANTISSA_SIZE);
    if power2 >= F::INFINITE_POWER {
        return Some(AdjustedMantissa::zero_pow2(F::INFINITE_POWER));
    }
    Some(AdjustedMantissa { mantissa, power2 })
}

/// Approximate `w * 10^q` as an extended float, within one unit in the
/// last of its 64 bits.
///
/// Used to seed the exact comparison when `compute_float` is undecided.
pub(crate) fn extended_approximation(q: i32, w: u64) -> ExtendedFloat {
    debug_assert!(w != 0);
    debug_assert!(q >= SMALLEST_POWER_OF_FIVE && q <= LARGEST_POWER_OF_FIVE);

    let lz = w.leading_zeros() as i32;
    let w = w << lz;
    let (hi5, lo5) = POWER_OF_FIVE_128[(q - SMALLEST_POWER_OF_FIVE) as usize];
    let (first_lo, first_hi) = full_multiplication(w, hi5);
    let (_, second_hi) = full_multiplication(w, lo5);
    let carry = first_lo.overflowing_add(second_hi).1;
    ExtendedFloat {
        mant: first_hi + carry as u64,
        exp: power(q) - 62 - lz,
    }
}

/// Calculate a base 2 exponent from a decimal exponent.
///
/// This uses a pre-computed integer approximation for
/// `log2(10) * 65536`, which is exact within `[-1233, 1233]`.
#[inline]
fn power(q: i32) -> i32 {
    (q.wrapping_mul(152_170 + 65536) >> 16) + 63
}

/// Full 64x64 to 128-bit multiplication, as (lo, hi).
#[inline]
fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

/// Multiply `w` by the cached power of five, keeping `precision` bits.
///
/// The lower half of the cached power is only used when the upper
/// product leaves the kept bits ambiguous.
fn compute_product_approx(q: i32, w: u64, precision: i32) -> (u64, u64) {
    debug_assert!(q >= SMALLEST_POWER_OF_FIVE);
    debug_assert!(q <= LARGEST_POWER_OF_FIVE);
    debug_assert!(precision <= 64);

    let mask = if precision < 64 {
        u64::MAX >> precision
    } else {
        u64::MAX
    };

    let (hi5, lo5) = POWER_OF_FIVE_128[(q - SMALLEST_POWER_OF_FIVE) as usize];
    let (mut first_lo, mut first_hi) = full_multiplication(w, hi5);
    if first_hi & mask == mask {
        let (_, second_hi) = full_multiplication(w, lo5);
        first_lo = first_lo.wrapping_add(second_hi);
        if second_hi > first_lo {
            first_hi += 1;
        }
    }
    (first_lo, first_hi)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn compute<F: Float>(q: i32, w: u64) -> Option<F> {
        compute_float::<F>(q, w).map(|am| am.into_float::<F>())
    }

    #[test]
    fn power_test() {
        assert_eq!(power(0), 63);
        assert_eq!(power(1), 66);
        assert_eq!(power(-1), 59);
        assert_eq!(power(308), 1086);
        assert_eq!(power(-342), -1074);
    }

    #[test]
    fn compute_float_f64_test() {
        assert_eq!(compute::<f64>(0, 1), Some(1.0));
        assert_eq!(compute::<f64>(-1, 1), Some(0.1));
        assert_eq!(compute::<f64>(-11, 314159265359), Some(3.14159265359));
        assert_eq!(compute::<f64>(-17, 4628372940652459), Some(0.04628372940652459));
        assert_eq!(compute::<f64>(-272, 26383446160308229), Some(2.6383446160308229e-256));
        assert_eq!(compute::<f64>(308, 17976931348623157), Some(f64::INFINITY));
        assert_eq!(compute::<f64>(292, 17976931348623157), Some(1.7976931348623157e308));
        assert_eq!(compute::<f64>(-324, 5), Some(5e-324));
        assert_eq!(compute::<f64>(-343, 1), Some(0.0));
        assert_eq!(compute::<f64>(309, 1), Some(f64::INFINITY));
    }

    #[test]
    fn compute_float_f32_test() {
        assert_eq!(compute::<f32>(0, 16777217), Some(16777216.0));
        assert_eq!(compute::<f32>(-1, 1), Some(0.1));
        assert_eq!(compute::<f32>(28, 34028234664), Some(f32::MAX));
        assert_eq!(compute::<f32>(28, 34028236692), Some(f32::INFINITY));
        assert_eq!(compute::<f32>(-45, 1), Some(1e-45));
        assert_eq!(compute::<f32>(-66, 1), Some(0.0));
        assert_eq!(compute::<f32>(39, 1), Some(f32::INFINITY));
    }

    #[test]
    fn extended_approximation_test() {
        let fp = extended_approximation(0, 1);
        assert_eq!(fp, ExtendedFloat { mant: 1 << 62, exp: -62 });
        assert_eq!(fp.into_downward_float::<f64>(), 1.0);

        let fp = extended_approximation(1, 5);
        assert_eq!(fp.into_downward_float::<f64>(), 50.0);

        // Exact 0.1 lies below the nearest f64, so truncation lands on
        // the float just below it.
        let fp = extended_approximation(-1, 1);
        let b = fp.into_downward_float::<f64>();
        assert!(b == 0.1 || b.next_positive() == 0.1);
    }
}
