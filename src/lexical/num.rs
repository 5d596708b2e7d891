//! Utilities for Rust numbers.

use crate::lib::ops;

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F32_POW10: [f32; 11] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10,
];

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F64_POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Type that can be converted to primitive with `as`.
pub trait AsPrimitive: Sized + Copy + PartialEq + PartialOrd {
    fn as_u32(self) -> u32;
    fn as_u64(self) -> u64;
    fn as_u128(self) -> u128;
    fn as_usize(self) -> usize;
    fn as_i32(self) -> i32;
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;
}

macro_rules! as_primitive_impl {
    ($($t:ty)*) => ($(
        impl AsPrimitive for $t {
            #[inline]
            fn as_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn as_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn as_i32(self) -> i32 {
                self as i32
            }

            #[inline]
            fn as_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*)
}

as_primitive_impl! { u32 u64 u128 usize i32 f32 f64 }

/// An interface for casting between machine scalars.
pub trait AsCast: AsPrimitive {
    /// Creates a number from another value that can be converted into
    /// a primitive via the `AsPrimitive` trait.
    fn as_cast<N: AsPrimitive>(n: N) -> Self;
}

macro_rules! as_cast_impl {
    ($($t:ty => $meth:ident),*) => ($(
        impl AsCast for $t {
            #[inline]
            fn as_cast<N: AsPrimitive>(n: N) -> $t {
                n.$meth()
            }
        }
    )*)
}

as_cast_impl!(u32 => as_u32, u64 => as_u64, u128 => as_u128, usize => as_usize, i32 => as_i32, f32 => as_f32, f64 => as_f64);

/// Numerical type trait.
pub trait Number:
    AsCast
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
{
}

impl<T> Number for T where
    T: AsCast
        + ops::Add<Output = T>
        + ops::Sub<Output = T>
        + ops::Mul<Output = T>
        + ops::Div<Output = T>
{
}

/// Defines a trait that supports integral operations.
pub trait Integer:
    Number
    + Eq
    + ops::BitAnd<Output = Self>
    + ops::BitOr<Output = Self>
    + ops::Shr<i32, Output = Self>
    + ops::Shl<i32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! integer_impl {
    ($($t:ty)*) => ($(
        impl Integer for $t {
            const ZERO: $t = 0;
            const ONE: $t = 1;
        }
    )*)
}

integer_impl! { u32 u64 u128 usize }

/// Number of bits in the mantissa of an extended-precision float.
pub(crate) const EXTENDED_BITS: i32 = 64;

/// Binary floating-point format the parser can produce.
///
/// Describes the IEEE 754 layout, the window where a single floating-point
/// multiplication is exact, and the decimal exponent range covered by the
/// cached powers of five.
pub trait Float: Number + ops::Neg<Output = Self> {
    /// Unsigned type of the same size.
    type Unsigned: Integer;

    /// Literal zero.
    const ZERO: Self;
    /// Maximum number of digits that can contribute in the mantissa.
    ///
    /// According to the "Handbook of Floating Point Arithmetic",
    /// for IEEE754, with emin being the min exponent, p2 being the
    /// precision, and b being the radix, the number of digits follows as:
    ///
    /// `−emin + p2 + ⌊(emin + 1) log(2, b) − log(1 − 2^(−p2), b)⌋`
    ///
    /// For f32 (emin = -126, p2 = 24) this is 112 and for f64
    /// (emin = -1022, p2 = 53) it is 767; two digits of slack are kept.
    const MAX_DIGITS: usize;

    // MASKS

    /// Bitmask for the exponent, including the hidden bit.
    const EXPONENT_MASK: Self::Unsigned;
    /// Bitmask for the hidden bit in exponent, which is an implicit 1 in the fraction.
    const HIDDEN_BIT_MASK: Self::Unsigned;
    /// Bitmask for the mantissa (fraction), excluding the hidden bit.
    const MANTISSA_MASK: Self::Unsigned;

    // PROPERTIES

    /// Positive infinity as bits.
    const INFINITY_BITS: Self::Unsigned;
    /// Quiet NaN as bits.
    const NAN_BITS: Self::Unsigned;
    /// Size of the significand (mantissa) without hidden bit.
    const MANTISSA_SIZE: i32;
    /// Bias of the exponent, relative to an integral mantissa.
    const EXPONENT_BIAS: i32;
    /// Exponent portion of a denormal float.
    const DENORMAL_EXPONENT: i32;
    /// Maximum exponent value in float.
    const MAX_EXPONENT: i32;

    // ROUNDING

    /// Default number of bits to shift (or 64 - mantissa size - 1).
    const DEFAULT_SHIFT: i32;
    /// Mask to determine if a full-carry occurred (1 in bit above hidden bit).
    const CARRY_MASK: u64;

    // EISEL-LEMIRE

    /// Smallest decimal exponent where round-to-even ties can be exact.
    const MIN_EXPONENT_ROUND_TO_EVEN: i32;
    /// Largest decimal exponent where round-to-even ties can be exact.
    const MAX_EXPONENT_ROUND_TO_EVEN: i32;
    /// Unbiased exponent of the smallest normal float, minus one.
    const MINIMUM_EXPONENT: i32;
    /// Biased exponent of infinity.
    const INFINITE_POWER: i32;
    /// Any value `w * 10^q` with `q` below this rounds to zero.
    const SMALLEST_POWER_OF_TEN: i32;
    /// Any value `w * 10^q` with `q` above this rounds to infinity.
    const LARGEST_POWER_OF_TEN: i32;

    /// Get min and max exponent limits (exact) from radix.
    fn exponent_limit() -> (i32, i32);

    /// Get the number of digits that can be shifted from exponent to mantissa.
    fn mantissa_limit() -> i32;

    // Re-exported methods from std.
    fn pow10(self, n: i32) -> Self;
    fn from_bits(u: Self::Unsigned) -> Self;
    fn to_bits(self) -> Self::Unsigned;
    fn is_sign_positive(self) -> bool;

    /// Returns true if the float is a denormal.
    #[inline]
    fn is_denormal(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == Self::Unsigned::ZERO
    }

    /// Returns true if the float is a NaN or Infinite.
    #[inline]
    fn is_special(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == Self::EXPONENT_MASK
    }

    /// Returns true if the float is infinite.
    #[inline]
    fn is_inf(self) -> bool {
        self.is_special() && (self.to_bits() & Self::MANTISSA_MASK) == Self::Unsigned::ZERO
    }

    /// Get exponent component from the float.
    #[inline]
    fn exponent(self) -> i32 {
        if self.is_denormal() {
            return Self::DENORMAL_EXPONENT;
        }

        let bits = self.to_bits();
        let biased_e: i32 = ((bits & Self::EXPONENT_MASK) >> Self::MANTISSA_SIZE).as_i32();
        biased_e - Self::EXPONENT_BIAS
    }

    /// Get mantissa (significand) component from float.
    #[inline]
    fn mantissa(self) -> Self::Unsigned {
        let bits = self.to_bits();
        let s = bits & Self::MANTISSA_MASK;
        if self.is_denormal() {
            s
        } else {
            s + Self::HIDDEN_BIT_MASK
        }
    }

    /// Get next greater float for a positive float.
    /// Value must be >= 0.0 and < INFINITY.
    #[inline]
    fn next_positive(self) -> Self {
        debug_assert!(self.is_sign_positive() && !self.is_inf());
        Self::from_bits(self.to_bits() + Self::Unsigned::ONE)
    }

    /// Round a positive number to even.
    #[inline]
    fn round_positive_even(self) -> Self {
        if self.mantissa() & Self::Unsigned::ONE == Self::Unsigned::ONE {
            self.next_positive()
        } else {
            self
        }
    }
}

impl Float for f32 {
    type Unsigned = u32;

    const ZERO: f32 = 0.0;
    const MAX_DIGITS: usize = 114;
    const EXPONENT_MASK: u32 = 0x7F800000;
    const HIDDEN_BIT_MASK: u32 = 0x00800000;
    const MANTISSA_MASK: u32 = 0x007FFFFF;
    const INFINITY_BITS: u32 = 0x7F800000;
    const NAN_BITS: u32 = 0x7FC00000;
    const MANTISSA_SIZE: i32 = 23;
    const EXPONENT_BIAS: i32 = 127 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0xFF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = EXTENDED_BITS - f32::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x1000000;

    const MIN_EXPONENT_ROUND_TO_EVEN: i32 = -17;
    const MAX_EXPONENT_ROUND_TO_EVEN: i32 = 10;
    const MINIMUM_EXPONENT: i32 = -127;
    const INFINITE_POWER: i32 = 0xFF;
    const SMALLEST_POWER_OF_TEN: i32 = -65;
    const LARGEST_POWER_OF_TEN: i32 = 38;

    #[inline]
    fn exponent_limit() -> (i32, i32) {
        (-10, 10)
    }

    #[inline]
    fn mantissa_limit() -> i32 {
        7
    }

    #[inline]
    fn pow10(self, n: i32) -> f32 {
        // Check the exponent is within bounds in debug builds.
        debug_assert!({
            let (min, max) = Self::exponent_limit();
            n >= min && n <= max
        });

        if n > 0 {
            self * F32_POW10[n as usize]
        } else {
            self / F32_POW10[(-n) as usize]
        }
    }

    #[inline]
    fn from_bits(u: u32) -> f32 {
        f32::from_bits(u)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline]
    fn is_sign_positive(self) -> bool {
        f32::is_sign_positive(self)
    }
}

impl Float for f64 {
    type Unsigned = u64;

    const ZERO: f64 = 0.0;
    const MAX_DIGITS: usize = 769;
    const EXPONENT_MASK: u64 = 0x7FF0000000000000;
    const HIDDEN_BIT_MASK: u64 = 0x0010000000000000;
    const MANTISSA_MASK: u64 = 0x000FFFFFFFFFFFFF;
    const INFINITY_BITS: u64 = 0x7FF0000000000000;
    const NAN_BITS: u64 = 0x7FF8000000000000;
    const MANTISSA_SIZE: i32 = 52;
    const EXPONENT_BIAS: i32 = 1023 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0x7FF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = EXTENDED_BITS - f64::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x20000000000000;

    const MIN_EXPONENT_ROUND_TO_EVEN: i32 = -4;
    const MAX_EXPONENT_ROUND_TO_EVEN: i32 = 23;
    const MINIMUM_EXPONENT: i32 = -1023;
    const INFINITE_POWER: i32 = 0x7FF;
    const SMALLEST_POWER_OF_TEN: i32 = -342;
    const LARGEST_POWER_OF_TEN: i32 = 308;

    #[inline]
    fn exponent_limit() -> (i32, i32) {
        (-22, 22)
    }

    #[inline]
    fn mantissa_limit() -> i32 {
        15
    }

    #[inline]
    fn pow10(self, n: i32) -> f64 {
        // Check the exponent is within bounds in debug builds.
        debug_assert!({
            let (min, max) = Self::exponent_limit();
            n >= min && n <= max
        });

        if n > 0 {
            self * F64_POW10[n as usize]
        } else {
            self / F64_POW10[(-n) as usize]
        }
    }

    #[inline]
    fn from_bits(u: u64) -> f64 {
        f64::from_bits(u)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn is_sign_positive(self) -> bool {
        f64::is_sign_positive(self)
    }
}

// TEST
// ----

#[cfg(test)]
mod tests {
    use super::*;

    fn check_pow10<T: Float>(one: T, expected: T, n: i32) {
        assert!(one.pow10(n).to_bits() == expected.to_bits(), "pow10({})", n);
    }

    #[test]
    fn pow10_test() {
        check_pow10(1f32, 1e10, 10);
        check_pow10(1f32, 1e-10, -10);
        check_pow10(3f32, 3e7, 7);
        check_pow10(1f64, 1e22, 22);
        check_pow10(1f64, 1e-22, -22);
        check_pow10(9007199254740991f64, 9007199254740991e-15, -15);
    }

    #[test]
    fn decompose_test() {
        assert_eq!(1f64.mantissa(), 1 << 52);
        assert_eq!(1f64.exponent(), -52);
        assert_eq!(1f32.mantissa(), 1 << 23);
        assert_eq!(1f32.exponent(), -23);

        // Smallest subnormal has no hidden bit.
        let min = f64::from_bits(1);
        assert!(min.is_denormal());
        assert_eq!(min.mantissa(), 1);
        assert_eq!(min.exponent(), f64::DENORMAL_EXPONENT);
    }

    #[test]
    fn special_test() {
        assert!(f64::INFINITY.is_special());
        assert!(f64::INFINITY.is_inf());
        assert!(f64::NAN.is_special());
        assert!(!f64::NAN.is_inf());
        assert!(f32::from_bits(f32::NAN_BITS).is_nan());
        assert!(f64::from_bits(f64::NAN_BITS).is_nan());
        assert!(!f32::MAX.is_special());
    }

    #[test]
    fn next_positive_test() {
        assert_eq!(0f64.next_positive(), f64::from_bits(1));
        assert_eq!(f64::MAX.next_positive(), f64::INFINITY);
        assert_eq!(1f32.next_positive(), 1.0000001);

        // Ties go to the even mantissa.
        assert_eq!(1f64.round_positive_even(), 1.0);
        assert_eq!(1f64.next_positive().round_positive_even(), 1f64.next_positive().next_positive());
        assert_eq!(f32::MAX.round_positive_even(), f32::INFINITY);
    }

    #[test]
    fn layout_test() {
        assert_eq!(f32::from_bits(f32::INFINITY_BITS), f32::INFINITY);
        assert_eq!(f64::from_bits(f64::INFINITY_BITS), f64::INFINITY);
        assert_eq!(f32::MAX_EXPONENT + f32::EXPONENT_BIAS, f32::INFINITE_POWER);
        assert_eq!(f64::MAX_EXPONENT + f64::EXPONENT_BIAS, f64::INFINITE_POWER);
        assert_eq!(f64::DEFAULT_SHIFT, 11);
        assert_eq!(f32::DEFAULT_SHIFT, 40);
    }
}
