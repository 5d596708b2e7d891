// FLOAT TYPE

use super::num::*;
use super::rounding::*;

/// Extended precision floating-point type.
///
/// Private implementation, exposed only for testing purposes.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExtendedFloat {
    /// Mantissa for the extended-precision float.
    pub mant: u64,
    /// Binary exponent for the extended-precision float.
    pub exp: i32,
}

impl ExtendedFloat {
    // SHIFT

    /// Shift right `shift` bits.
    #[inline]
    pub(crate) fn shr(&mut self, shift: i32) {
        debug_assert!(shift < EXTENDED_BITS, "shr() overflow in shift right.");

        self.mant >>= shift;
        self.exp += shift;
    }

    /// Shift right `shift` bits.
    ///
    /// Accepts a shift equal to the width of the mantissa, which sets the
    /// mantissa to 0.
    #[inline]
    pub(crate) fn overflowing_shr(&mut self, shift: i32) {
        debug_assert!(shift <= EXTENDED_BITS, "overflowing_shr() overflow in shift right.");

        self.mant = if shift == EXTENDED_BITS {
            0
        } else {
            self.mant >> shift
        };
        self.exp += shift;
    }

    /// Shift left `shift` bits.
    #[inline]
    pub(crate) fn shl(&mut self, shift: i32) {
        debug_assert!(shift < EXTENDED_BITS, "shl() overflow in shift left.");

        self.mant <<= shift;
        self.exp -= shift;
    }

    // NORMALIZE

    /// Normalize float-point number.
    ///
    /// Shift the mantissa so the number of leading zeros is 0, or the value
    /// itself is 0.
    ///
    /// Get the number of bits shifted.
    #[inline]
    pub(crate) fn normalize(&mut self) -> u32 {
        // Zero-out any overflowing bits, to avoid shl overflow when
        // self.mant == 0.
        let shift = if self.mant == 0 {
            0
        } else {
            self.mant.leading_zeros()
        };
        self.shl(shift as i32);
        shift
    }

    // ROUND

    /// Lossy round float-point number to native mantissa boundaries.
    #[inline]
    pub(crate) fn round_to_native<F, Algorithm>(&mut self, algorithm: Algorithm)
    where
        F: Float,
        Algorithm: FnOnce(&mut ExtendedFloat, i32),
    {
        round_to_native::<F, _>(self, algorithm);
    }

    // FROM

    /// Create extended float from native float.
    #[inline]
    pub(crate) fn from_float<F: Float>(f: F) -> ExtendedFloat {
        ExtendedFloat {
            mant: f.mantissa().as_u64(),
            exp: f.exponent(),
        }
    }

    // INTO

    /// Convert into default-rounded, lower-precision native float.
    #[cfg(test)]
    pub(crate) fn into_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_nearest_tie_even);
        into_float(self)
    }

    /// Convert into downward-rounded, lower-precision native float.
    #[inline]
    pub(crate) fn into_downward_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_downward);
        into_float(self)
    }
}

// INTO FLOAT

// Export extended-precision float to native float.
//
// The extended-precision float must be in native float representation,
// with overflow/underflow appropriately handled.
#[inline]
pub(crate) fn into_float<F>(fp: ExtendedFloat) -> F
where
    F: Float,
{
    if fp.mant == 0 || fp.exp < F::DENORMAL_EXPONENT {
        // sub-denormal, underflow
        F::ZERO
    } else if fp.exp >= F::MAX_EXPONENT {
        // overflow
        F::from_bits(F::INFINITY_BITS)
    } else {
        // calculate the exp and fraction bits, and return a float from bits.
        let exp: u64 =
            if fp.exp == F::DENORMAL_EXPONENT && fp.mant & F::HIDDEN_BIT_MASK.as_u64() == 0 {
                0
            } else {
                (fp.exp + F::EXPONENT_BIAS) as u64
            };
        let exp = exp << F::MANTISSA_SIZE;
        let mant = fp.mant & F::MANTISSA_MASK.as_u64();
        F::from_bits(F::Unsigned::as_cast(mant | exp))
    }
}

// ADJUSTED MANTISSA

/// Rounded significand and biased binary exponent of a native float.
///
/// `mantissa` excludes the hidden bit and `power2` is the biased exponent
/// field, so the pair packs directly into the float's bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AdjustedMantissa {
    pub mantissa: u64,
    pub power2: i32,
}

impl AdjustedMantissa {
    /// Zero significand with the given biased exponent.
    #[inline]
    pub(crate) fn zero_pow2(power2: i32) -> AdjustedMantissa {
        AdjustedMantissa {
            mantissa: 0,
            power2,
        }
    }

    /// Assemble the (positive) native float.
    #[inline]
    pub(crate) fn into_float<F: Float>(self) -> F {
        debug_assert!(self.power2 >= 0 && self.power2 <= F::INFINITE_POWER);
        debug_assert!(self.mantissa <= F::MANTISSA_MASK.as_u64());

        let bits = self.mantissa | (self.power2 as u64) << F::MANTISSA_SIZE;
        F::from_bits(F::Unsigned::as_cast(bits))
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    // SHIFT

    #[test]
    fn shift_test() {
        let mut fp = ExtendedFloat { mant: 0x60, exp: 0 };
        fp.shr(4);
        assert_eq!(fp, ExtendedFloat { mant: 0x6, exp: 4 });
        fp.shl(4);
        assert_eq!(fp, ExtendedFloat { mant: 0x60, exp: 0 });

        let mut fp = ExtendedFloat { mant: u64::MAX, exp: 0 };
        fp.overflowing_shr(64);
        assert_eq!(fp, ExtendedFloat { mant: 0, exp: 64 });
    }

    // NORMALIZE

    fn check_normalize(mant: u64, exp: i32, shift: u32, r_mant: u64, r_exp: i32) {
        let mut x = ExtendedFloat { mant, exp };
        assert_eq!(x.normalize(), shift);
        assert_eq!(x, ExtendedFloat { mant: r_mant, exp: r_exp });
    }

    #[test]
    fn normalize_test() {
        // 0
        check_normalize(0, 0, 0, 0, 0);

        // f32 min value
        check_normalize(1, -149, 63, 9223372036854775808, -212);

        // f32 1.0
        check_normalize(8388608, -23, 40, 9223372036854775808, -63);

        // f64 min value
        check_normalize(1, -1074, 63, 9223372036854775808, -1137);

        // f64 1.0e-20
        check_normalize(6646139978924579, -119, 11, 13611294676837537792, -130);

        // f64 1e150
        check_normalize(5503284107318959, 446, 11, 11270725851789228032, 435);

        // f64 max value
        check_normalize(9007199254740991, 971, 11, 18446744073709549568, 960);
    }

    // ROUND

    fn check_round_to_f64(mant: u64, exp: i32, r_mant: u64, r_exp: i32) {
        let mut x = ExtendedFloat { mant, exp };
        x.round_to_native::<f64, _>(round_nearest_tie_even);
        assert_eq!(x, ExtendedFloat { mant: r_mant, exp: r_exp });
    }

    #[test]
    fn round_to_f64_test() {
        // underflow
        check_round_to_f64(9223372036854775808, -1138, 0, -1074);

        // min value
        check_round_to_f64(9223372036854775808, -1137, 1, -1074);

        // 1.0
        check_round_to_f64(9223372036854775808, -63, 4503599627370496, -52);

        // 1e40
        check_round_to_f64(16940658945086007296, 69, 8271806125530277, 80);

        // max value
        check_round_to_f64(18446744073709549568, 960, 9007199254740991, 971);

        // 1.2345e-308
        check_round_to_f64(10234494226754558294, -1086, 2498655817078750, -1074)
    }

    #[test]
    fn from_float_test() {
        let values: [f32; 8] = [1e-40, 2e-35, 1e-20, 1.0, 2.0, 1e10, 2e15, 1e20];
        for value in values.iter() {
            let mut x = ExtendedFloat::from_float(*value);
            let mut y = ExtendedFloat::from_float(*value as f64);
            x.normalize();
            y.normalize();
            assert_eq!(x, y);
        }
    }

    // INTO

    #[test]
    fn to_f32_test() {
        // underflow
        let x = ExtendedFloat { mant: 9223372036854775808, exp: -213 };
        assert_eq!(x.into_float::<f32>(), 0.0);

        // min value
        let x = ExtendedFloat { mant: 9223372036854775808, exp: -212 };
        assert_eq!(x.into_float::<f32>(), 1e-45);

        // 1.0
        let x = ExtendedFloat { mant: 9223372036854775808, exp: -63 };
        assert_eq!(x.into_float::<f32>(), 1.0);

        // max value
        let x = ExtendedFloat { mant: 18446740775174668288, exp: 64 };
        assert_eq!(x.into_float::<f32>(), 3.402823e38);

        // max value + 1
        let x = ExtendedFloat { mant: 16777216, exp: 104 };
        assert_eq!(x.into_float::<f32>(), f32::INFINITY);
    }

    #[test]
    fn to_f64_test() {
        // underflow
        let x = ExtendedFloat { mant: 9223372036854775808, exp: -1138 };
        assert_eq!(x.into_float::<f64>(), 0.0);

        // min value
        let x = ExtendedFloat { mant: 9223372036854775808, exp: -1137 };
        assert_eq!(x.into_float::<f64>(), 5e-324);

        // 1e250
        let x = ExtendedFloat { mant: 12882297539194265600, exp: 767 };
        assert_eq!(x.into_float::<f64>(), 1e250);

        // max value
        let x = ExtendedFloat { mant: 9007199254740991, exp: 971 };
        assert_eq!(x.into_float::<f64>(), 1.7976931348623157e308);

        // overflow
        let x = ExtendedFloat { mant: 9007199254740992, exp: 971 };
        assert_eq!(x.into_float::<f64>(), f64::INFINITY);

        // Integers round like `as` casts.
        for int in [0u64, 1, 2047, 4294967295, 9007199254740993, u64::MAX] {
            let fp = ExtendedFloat { mant: int, exp: 0 };
            assert_eq!(fp.into_float::<f64>(), int as f64, "{:?} as f64", int);
        }
    }

    #[test]
    fn to_downward_float_test() {
        // 2^53 + 1 truncates to 2^53 instead of rounding to even.
        let fp = ExtendedFloat { mant: 9007199254740993, exp: 0 };
        assert_eq!(fp.into_downward_float::<f64>(), 9007199254740992.0);

        // 2^53 + 3 truncates instead of rounding up.
        let fp = ExtendedFloat { mant: 9007199254740995, exp: 0 };
        assert_eq!(fp.into_downward_float::<f64>(), 9007199254740994.0);

        // Below the smallest subnormal.
        let fp = ExtendedFloat { mant: u64::MAX, exp: -1139 };
        assert_eq!(fp.into_downward_float::<f64>(), 0.0);
    }

    // ADJUSTED MANTISSA

    #[test]
    fn adjusted_mantissa_test() {
        let am = AdjustedMantissa { mantissa: 0, power2: 1023 };
        assert_eq!(am.into_float::<f64>(), 1.0);

        let am = AdjustedMantissa { mantissa: 1, power2: 0 };
        assert_eq!(am.into_float::<f64>(), 5e-324);

        let am = AdjustedMantissa::zero_pow2(f32::INFINITE_POWER);
        assert_eq!(am.into_float::<f32>(), f32::INFINITY);

        let am = AdjustedMantissa { mantissa: 0x400000, power2: 127 };
        assert_eq!(am.into_float::<f32>(), 1.5);
    }
}
