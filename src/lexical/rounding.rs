//! Defines rounding schemes for floating-point numbers.

use super::float::ExtendedFloat;
use super::num::*;

// MASKS

/// Calculate a scalar factor of 2 above the halfway point.
#[inline]
fn nth_bit(n: u64) -> u64 {
    debug_assert!(n < EXTENDED_BITS as u64, "nth_bit() overflow in shl.");

    1 << n
}

/// Generate a bitwise mask for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_mask(n: u64) -> u64 {
    debug_assert!(n <= EXTENDED_BITS as u64, "lower_n_mask() overflow in shl.");

    if n == EXTENDED_BITS as u64 {
        u64::MAX
    } else {
        (1 << n) - 1
    }
}

/// Calculate the halfway point for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_halfway(n: u64) -> u64 {
    debug_assert!(n <= EXTENDED_BITS as u64, "lower_n_halfway() overflow in shl.");

    if n == 0 {
        0
    } else {
        nth_bit(n - 1)
    }
}

/// Calculate a bitwise mask with `n` 1 bits starting at the `bit` position.
#[inline]
fn internal_n_mask(bit: u64, n: u64) -> u64 {
    debug_assert!(bit <= EXTENDED_BITS as u64, "internal_n_mask() overflow in shl.");
    debug_assert!(n <= bit, "internal_n_mask() overflow in sub.");

    lower_n_mask(bit) ^ lower_n_mask(bit - n)
}

// NEAREST ROUNDING

// Shift right N-bits and round to the nearest.
//
// Return if we are above halfway and if we are halfway.
#[inline]
pub(crate) fn round_nearest(fp: &mut ExtendedFloat, shift: i32) -> (bool, bool) {
    // For 4 truncated bits, the mask would be b1111 and the halfway
    // point would be b1000.
    let mask = lower_n_mask(shift as u64);
    let halfway = lower_n_halfway(shift as u64);

    let truncated_bits = fp.mant & mask;
    let is_above = truncated_bits > halfway;
    let is_halfway = truncated_bits == halfway;

    // Bit shift so the leading bit is in the hidden bit.
    fp.overflowing_shr(shift);

    (is_above, is_halfway)
}

// Tie rounded floating point to even.
#[inline]
pub(crate) fn tie_even(fp: &mut ExtendedFloat, is_above: bool, is_halfway: bool) {
    // Round up when above halfway, or when odd and exactly halfway.
    let is_odd = fp.mant & 1 == 1;
    if is_above || (is_odd && is_halfway) {
        fp.mant += 1;
    }
}

// Shift right N-bits and round nearest, tie-to-even.
#[cfg(test)]
pub(crate) fn round_nearest_tie_even(fp: &mut ExtendedFloat, shift: i32) {
    let (is_above, is_halfway) = round_nearest(fp, shift);
    tie_even(fp, is_above, is_halfway);
}

// DIRECTED ROUNDING

// Shift right N-bits and round toward zero.
//
// The truncated bits are discarded, which gives the largest native float
// that does not exceed the extended value.
#[inline]
pub(crate) fn round_downward(fp: &mut ExtendedFloat, shift: i32) {
    fp.overflowing_shr(shift);
}

// ROUND TO FLOAT

// Shift the ExtendedFloat fraction to the fraction bits in a native float.
#[inline]
fn round_to_float<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    // Calculate the difference to allow a single calculation
    // rather than a loop, to minimize the number of ops required.
    // This does underflow detection.
    let final_exp = fp.exp + F::DEFAULT_SHIFT;
    if final_exp < F::DENORMAL_EXPONENT {
        // We would end up with a denormal exponent, try to round to more
        // digits. Only shift right if we can avoid zeroing out the value,
        // which requires the exponent diff to be <= 64.
        let diff = F::DENORMAL_EXPONENT - fp.exp;
        if diff <= EXTENDED_BITS {
            algorithm(fp, diff);
        } else {
            // Certain underflow, assign literal 0s.
            fp.mant = 0;
            fp.exp = 0;
        }
    } else {
        algorithm(fp, F::DEFAULT_SHIFT);
    }

    if fp.mant & F::CARRY_MASK == F::CARRY_MASK {
        // Roundup carried over to 1 past the hidden bit.
        fp.shr(1);
    }
}

// AVOID OVERFLOW/UNDERFLOW

// Avoid overflow for large values, shift left as needed.
//
// Shift until a 1-bit is in the hidden bit, if the mantissa is not 0.
#[inline]
fn avoid_overflow<F>(fp: &mut ExtendedFloat)
where
    F: Float,
{
    if fp.exp >= F::MAX_EXPONENT {
        let diff = fp.exp - F::MAX_EXPONENT;
        if diff <= F::MANTISSA_SIZE {
            // The overflow mask starts at the hidden bit and needs
            // `diff+1` bits set to see if the value overflows.
            let bit = (F::MANTISSA_SIZE + 1) as u64;
            let n = (diff + 1) as u64;
            let mask = internal_n_mask(bit, n);
            if (fp.mant & mask) == 0 {
                fp.shl(diff + 1);
            }
        }
    }
}

// ROUND TO NATIVE

// Round an extended-precision float to a native float representation.
#[inline]
pub(crate) fn round_to_native<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    // The following right-shifts do not work for a non-normalized number.
    fp.normalize();

    round_to_float::<F, _>(fp, algorithm);
    avoid_overflow::<F>(fp);
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    // MASKS

    #[test]
    fn lower_n_mask_test() {
        assert_eq!(lower_n_mask(0), 0b0);
        assert_eq!(lower_n_mask(1), 0b1);
        assert_eq!(lower_n_mask(10), 0b1111111111);
        assert_eq!(lower_n_mask(32), 0xFFFFFFFF);
        assert_eq!(lower_n_mask(64), u64::MAX);
    }

    #[test]
    fn lower_n_halfway_test() {
        assert_eq!(lower_n_halfway(0), 0b0);
        assert_eq!(lower_n_halfway(1), 0b1);
        assert_eq!(lower_n_halfway(10), 0b1000000000);
        assert_eq!(lower_n_halfway(64), 1 << 63);
    }

    #[test]
    fn internal_n_mask_test() {
        assert_eq!(internal_n_mask(1, 0), 0b0);
        assert_eq!(internal_n_mask(1, 1), 0b1);
        assert_eq!(internal_n_mask(4, 2), 0b1100);
        assert_eq!(internal_n_mask(10, 4), 0b1111000000);
        assert_eq!(internal_n_mask(53, 1), 1 << 52);
    }

    // NEAREST ROUNDING

    #[test]
    fn round_nearest_test() {
        // Exactly halfway (b'1100000')
        let mut fp = ExtendedFloat { mant: 0x60, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (false, true));
        assert_eq!(fp, ExtendedFloat { mant: 1, exp: 6 });

        // Above halfway (b'1100001')
        let mut fp = ExtendedFloat { mant: 0x61, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (true, false));
        assert_eq!(fp.mant, 1);

        // Below halfway (b'1011111')
        let mut fp = ExtendedFloat { mant: 0x5F, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (false, false));
        assert_eq!(fp.mant, 1);
    }

    #[test]
    fn round_nearest_tie_even_test() {
        // Halfway, odd rounds up.
        let mut fp = ExtendedFloat { mant: 0x60, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 2);

        // Halfway, even stays.
        let mut fp = ExtendedFloat { mant: 0x20, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 0);

        // Above halfway.
        let mut fp = ExtendedFloat { mant: 0x21, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 1);

        // Below halfway.
        let mut fp = ExtendedFloat { mant: 0x5F, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 1);
    }

    // DIRECTED ROUNDING

    #[test]
    fn round_downward_test() {
        for (mant, expected) in [(0x00, 0), (0x40, 1), (0x60, 1), (0x7F, 1), (0x80, 2)] {
            let mut fp = ExtendedFloat { mant, exp: 0 };
            round_downward(&mut fp, 6);
            assert_eq!(fp, ExtendedFloat { mant: expected, exp: 6 });
        }
    }

    // HIGH-LEVEL

    #[test]
    fn round_to_float_test() {
        // Denormal
        let mut fp = ExtendedFloat { mant: 1 << 63, exp: f64::DENORMAL_EXPONENT - 15 };
        round_to_float::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 1 << 48);
        assert_eq!(fp.exp, f64::DENORMAL_EXPONENT);

        // Halfway, round-down
        let mut fp = ExtendedFloat { mant: 0x8000000000000400, exp: -63 };
        round_to_float::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 1 << 52);
        assert_eq!(fp.exp, -52);

        // Halfway, round-up
        let mut fp = ExtendedFloat { mant: 0x8000000000000C00, exp: -63 };
        round_to_float::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, (1 << 52) + 2);
        assert_eq!(fp.exp, -52);

        // Carry into the bit above the hidden bit.
        let mut fp = ExtendedFloat { mant: u64::MAX, exp: -63 };
        round_to_float::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 1 << 52);
        assert_eq!(fp.exp, -51);
    }

    #[test]
    fn avoid_overflow_test() {
        // Avoid overflow, fails by 1
        let mut fp = ExtendedFloat { mant: 0xFFFFFFFFFFFF, exp: f64::MAX_EXPONENT + 5 };
        avoid_overflow::<f64>(&mut fp);
        assert_eq!(fp.mant, 0xFFFFFFFFFFFF);
        assert_eq!(fp.exp, f64::MAX_EXPONENT + 5);

        // Avoid overflow, succeeds
        let mut fp = ExtendedFloat { mant: 0xFFFFFFFFFFFF, exp: f64::MAX_EXPONENT + 4 };
        avoid_overflow::<f64>(&mut fp);
        assert_eq!(fp.mant, 0x1FFFFFFFFFFFE0);
        assert_eq!(fp.exp, f64::MAX_EXPONENT - 1);
    }

    #[test]
    fn round_to_native_test() {
        // Need denormal
        let mut fp = ExtendedFloat { mant: 1, exp: f64::DENORMAL_EXPONENT + 48 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 1 << 48);
        assert_eq!(fp.exp, f64::DENORMAL_EXPONENT);

        // Above halfway
        let mut fp = ExtendedFloat { mant: 0x400000000000021, exp: -58 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, (1 << 52) + 1);
        assert_eq!(fp.exp, -52);

        // Underflow
        let mut fp = ExtendedFloat { exp: -1139, mant: 18446744073709550712 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 0);
        assert_eq!(fp.exp, 0);

        let mut fp = ExtendedFloat { exp: -1138, mant: 9223372036854776103 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp.mant, 1);
        assert_eq!(fp.exp, -1074);
    }
}
