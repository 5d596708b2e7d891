//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `[0, 1, 2, 3]` buffer, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Storage is a fixed-capacity array: the conversion never allocates.

use crate::lib::{cmp, iter};
use super::num::*;
use super::small_powers::*;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. 64-bit limbs are used on targets with
//  native 64x64->128 multiplication (see build.rs).

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub type Limb = u32;

#[cfg(limb_width_32)]
pub const POW5_LIMB: &[Limb] = &POW5_32;

#[cfg(limb_width_32)]
pub const POW10_LIMB: &[Limb] = &POW10_32;

#[cfg(limb_width_32)]
type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub type Limb = u64;

#[cfg(limb_width_64)]
pub const POW5_LIMB: &[Limb] = &POW5_64;

#[cfg(limb_width_64)]
pub const POW10_LIMB: &[Limb] = &POW10_64;

#[cfg(limb_width_64)]
type Wide = u128;

/// Number of bits in a limb.
const LIMB_BITS: usize = Limb::BITS as usize;

// The largest value ever stored is the halfway point scaled by the
// reciprocal power of five, (2^54) * 5^1111, about 2640 bits. Round up to 4k.
#[cfg(limb_width_32)]
pub(crate) type LimbVecType = arrayvec::ArrayVec<Limb, 128>;

#[cfg(limb_width_64)]
pub(crate) type LimbVecType = arrayvec::ArrayVec<Limb, 64>;

/// Cast to limb type.
#[inline(always)]
pub(crate) fn as_limb<T: AsPrimitive>(t: T) -> Limb {
    Limb::as_cast(t)
}

/// Cast to wide type.
#[inline(always)]
fn as_wide<T: AsPrimitive>(t: T) -> Wide {
    Wide::as_cast(t)
}

// SPLIT
// -----

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_32)]
fn split_u64(x: u64) -> [Limb; 2] {
    [as_limb(x), as_limb(x >> 32)]
}

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_64)]
fn split_u64(x: u64) -> [Limb; 1] {
    [x]
}

// HI64
// ----

/// Check if any of the limbs below the top `rindex` limbs are non-zero.
#[inline]
fn nonzero(x: &[Limb], rindex: usize) -> bool {
    x[..x.len() - rindex].iter().any(|&xi| xi != 0)
}

/// Shift 64-bit integer to high 64-bits.
#[inline]
fn u64_to_hi64_1(r0: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    (r0 << ls, false)
}

/// Shift 2 64-bit integers to high 64-bits.
#[inline]
fn u64_to_hi64_2(r0: u64, r1: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    let v = match ls {
        0 => r0,
        _ => (r0 << ls) | (r1 >> (64 - ls)),
    };
    let n = r1 << ls != 0;
    (v, n)
}

/// Extract the high 64 bits from a normalized little-endian buffer, and
/// whether any lower bits were truncated.
#[inline]
#[cfg(limb_width_32)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let len = x.len();
    match len {
        0 => (0, false),
        1 => u64_to_hi64_1(x[0] as u64),
        2 => u64_to_hi64_1((x[1] as u64) << 32 | x[0] as u64),
        _ => {
            let r0 = x[len - 1] as u64;
            let r1 = (x[len - 2] as u64) << 32 | x[len - 3] as u64;
            let (v, n) = u64_to_hi64_2(r0, r1);
            (v, n || nonzero(x, 3))
        }
    }
}

/// Extract the high 64 bits from a normalized little-endian buffer, and
/// whether any lower bits were truncated.
#[inline]
#[cfg(limb_width_64)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let len = x.len();
    match len {
        0 => (0, false),
        1 => u64_to_hi64_1(x[0]),
        _ => {
            let (v, n) = u64_to_hi64_2(x[len - 1], x[len - 2]);
            (v, n || nonzero(x, 2))
        }
    }
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

mod scalar {
    use super::*;

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let (v, overflow) = x.overflowing_add(y);
        *x = v;
        overflow
    }

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::MAX - (Narrow::MAX * Narrow::MAX) >= Narrow::MAX`
        let z: Wide = as_wide(x) * as_wide(y) + as_wide(carry);
        (as_limb(z), as_limb(z >> LIMB_BITS))
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let (lo, hi) = mul(*x, y, carry);
        *x = lo;
        hi
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

mod small {
    use super::*;

    // ADDITION

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVecType, y: Limb) {
        if x.is_empty() {
            if y != 0 {
                x.push(y);
            }
            return;
        }

        // Initial add, then increment until overflow stops occurring.
        let mut carry = scalar::iadd(&mut x[0], y);
        let mut size = 1;
        while carry && size < x.len() {
            carry = scalar::iadd(&mut x[size], 1);
            size += 1;
        }

        // If we overflowed the buffer entirely, need to add 1 to the end
        // of the buffer.
        if carry {
            x.push(1);
        }
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut LimbVecType, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// MulAssign by a power of 5.
    ///
    /// Iteratively multiplying by the largest small power beats
    /// exponentiation by squaring for the operand sizes a float can reach.
    pub fn imul_pow5(x: &mut LimbVecType, n: u32) {
        let small_powers = POW5_LIMB;
        let step = small_powers.len() - 1;
        let power = small_powers[step];

        // Multiply by the largest small power until n < step.
        let mut n = n as usize;
        while n >= step {
            imul(x, power);
            n -= step;
        }

        // Multiply by the remainder.
        imul(x, small_powers[n]);
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(&hi) => hi.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        LIMB_BITS * x.len() - leading_zeros(x)
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < Limb::BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishl_bits(x: &mut LimbVecType, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left `n` limbs inside a buffer.
    ///
    /// Assumes `n` is not 0.
    #[inline]
    pub fn ishl_limbs(x: &mut LimbVecType, n: usize) {
        debug_assert!(n != 0);
        if !x.is_empty() {
            let len = x.len();
            x.extend(iter::repeat(0).take(n));
            x.copy_within(..len, n);
            x[..n].fill(0);
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut LimbVecType, n: usize) {
        // Need to pad with zeros for the number of `bits / Limb::BITS`,
        // and shift-left with carry for `bits % Limb::BITS`.
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem);
        if div != 0 {
            ishl_limbs(x, div);
        }
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut LimbVecType) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }
}

// LARGE
// -----

mod large {
    use super::*;

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both buffers must be normalized.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

// TRAITS
// ------

/// Traits for shared operations for big integers.
///
/// None of these are implemented using normal traits, since these
/// are very expensive operations, and we want to deliberately
/// and explicitly use these functions.
pub(crate) trait Math: Clone + Sized + Default {
    // DATA

    /// Get access to the underlying data
    fn data(&self) -> &LimbVecType;

    /// Get access to the underlying data
    fn data_mut(&mut self) -> &mut LimbVecType;

    // RELATIVE OPERATIONS

    /// Compare self to y.
    #[inline]
    fn compare(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    // PROPERTIES

    /// Get the high 64-bits from the bigint and if there are remaining bits.
    #[inline]
    fn hi64(&self) -> (u64, bool) {
        hi64(self.data())
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    fn bit_length(&self) -> usize {
        small::bit_length(self.data())
    }

    // INTEGER CONVERSIONS

    /// Create new big integer from u64.
    #[inline]
    fn from_u64(x: u64) -> Self {
        let mut v = Self::default();
        v.data_mut().extend(split_u64(x));
        v.normalize();
        v
    }

    // NORMALIZE

    /// Normalize the integer, so any leading zero values are removed.
    #[inline]
    fn normalize(&mut self) {
        small::normalize(self.data_mut());
    }

    // ADDITION

    /// AddAssign small integer.
    #[inline]
    fn iadd_small(&mut self, y: Limb) {
        small::iadd(self.data_mut(), y);
    }

    // MULTIPLICATION

    /// MulAssign small integer.
    #[inline]
    fn imul_small(&mut self, y: Limb) {
        small::imul(self.data_mut(), y);
    }

    /// Multiply by a power of 2.
    #[inline]
    fn imul_pow2(&mut self, n: u32) {
        self.ishl(n as usize);
    }

    /// Multiply by a power of 5.
    #[inline]
    fn imul_pow5(&mut self, n: u32) {
        small::imul_pow5(self.data_mut(), n);
    }

    /// MulAssign by a power of 10.
    #[inline]
    fn imul_pow10(&mut self, n: u32) {
        self.imul_pow5(n);
        self.imul_pow2(n);
    }

    // SHIFTS

    /// Shift-left the entire buffer n bits.
    #[inline]
    fn ishl(&mut self, n: usize) {
        small::ishl(self.data_mut(), n);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Bigint {
        data: LimbVecType,
    }

    impl Math for Bigint {
        #[inline]
        fn data(&self) -> &LimbVecType {
            &self.data
        }

        #[inline]
        fn data_mut(&mut self) -> &mut LimbVecType {
            &mut self.data
        }
    }

    #[cfg(limb_width_32)]
    pub(crate) fn from_u32(x: &[u32]) -> LimbVecType {
        x.iter().cloned().collect()
    }

    #[cfg(limb_width_64)]
    pub(crate) fn from_u32(x: &[u32]) -> LimbVecType {
        let mut v = LimbVecType::default();
        for xi in x.chunks(2) {
            match xi.len() {
                1 => v.push(xi[0] as u64),
                2 => v.push(((xi[1] as u64) << 32) | (xi[0] as u64)),
                _ => unreachable!(),
            }
        }
        v
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = Bigint { data: from_u32(&[1]) };
        let y = Bigint { data: from_u32(&[2]) };
        assert_eq!(x.compare(&y), cmp::Ordering::Less);
        assert_eq!(x.compare(&x), cmp::Ordering::Equal);
        assert_eq!(y.compare(&x), cmp::Ordering::Greater);

        // Check asymmetric
        let x = Bigint { data: from_u32(&[5, 1]) };
        let y = Bigint { data: from_u32(&[2]) };
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = Bigint { data: from_u32(&[5, 1, 9]) };
        let y = Bigint { data: from_u32(&[6, 2, 8]) };
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);

        // Complex scenario, check it properly uses reverse ordering.
        let x = Bigint { data: from_u32(&[0, 1, 9]) };
        let y = Bigint { data: from_u32(&[4294967295, 0, 9]) };
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);
    }

    #[test]
    fn hi64_test() {
        assert_eq!(Bigint::from_u64(0xA).hi64(), (0xA000000000000000, false));
        assert_eq!(Bigint::from_u64(0xAB).hi64(), (0xAB00000000000000, false));
        assert_eq!(Bigint::from_u64(0xAB00000000).hi64(), (0xAB00000000000000, false));
        assert_eq!(Bigint::from_u64(0xA23456789A).hi64(), (0xA23456789A000000, false));

        // Bits below the top 64 are reported as truncated.
        let x = Bigint { data: from_u32(&[1, 0, 0x80000000]) };
        assert_eq!(x.hi64(), (0x8000000000000000, true));
        let x = Bigint { data: from_u32(&[0, 0, 0x80000000]) };
        assert_eq!(x.hi64(), (0x8000000000000000, false));
    }

    #[test]
    fn bit_length_test() {
        let x = Bigint { data: from_u32(&[0, 0, 0, 1]) };
        assert_eq!(x.bit_length(), 97);

        let x = Bigint { data: from_u32(&[0, 0, 0, 3]) };
        assert_eq!(x.bit_length(), 98);

        let x = Bigint { data: from_u32(&[1 << 31]) };
        assert_eq!(x.bit_length(), 32);

        assert_eq!(Bigint::default().bit_length(), 0);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        let mut x = Bigint { data: from_u32(&[4294967295]) };
        x.iadd_small(5);
        assert_eq!(x.data, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = Bigint { data: from_u32(&[5]) };
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = Bigint::from_u64(0x80000000FFFFFFFF);
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = Bigint::from_u64(0xFFFFFFFFFFFFFFFF);
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[6, 0, 1]));

        // Empty stays normalized.
        let mut x = Bigint::default();
        x.iadd_small(0);
        assert!(x.data.is_empty());
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = Bigint { data: from_u32(&[5]) };
        x.imul_small(7);
        assert_eq!(x.data, from_u32(&[35]));

        // No overflow check, 2-ints.
        let mut x = Bigint::from_u64(0x4000000040000);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[0x00140000, 0x140000]));

        // Overflow, 1 carry.
        let mut x = Bigint { data: from_u32(&[0x33333334]) };
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 1]));

        // Overflow, 1 carry, internal.
        let mut x = Bigint::from_u64(0x133333334);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 6]));

        // Overflow, 2 carries.
        let mut x = Bigint::from_u64(0x3333333333333334);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 0, 1]));
    }

    #[test]
    fn imul_pow_test() {
        let mut x = Bigint::from_u64(1);
        x.imul_pow5(27);
        assert_eq!(x.data, Bigint::from_u64(7450580596923828125).data);

        // 10^20 = 0x56BC75E2D63100000
        let mut x = Bigint::from_u64(1);
        x.imul_pow10(20);
        assert_eq!(x.data, from_u32(&[0x63100000, 0x6BC75E2D, 0x5]));

        let mut x = Bigint::from_u64(3);
        x.imul_pow2(65);
        assert_eq!(x.data, from_u32(&[0, 0, 6]));
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = Bigint { data: from_u32(&[0xD2210408]) };
        big.ishl(5);
        assert_eq!(big.data, from_u32(&[0x44208100, 0x1A]));
        big.ishl(32);
        assert_eq!(big.data, from_u32(&[0, 0x44208100, 0x1A]));
        big.ishl(27);
        assert_eq!(big.data, from_u32(&[0, 0, 0xD2210408]));

        // 96-bits of previous pattern
        let mut big = Bigint { data: from_u32(&[0x20020010, 0x8040100, 0xD2210408]) };
        big.ishl(5);
        assert_eq!(big.data, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        big.ishl(32);
        assert_eq!(big.data, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        big.ishl(27);
        assert_eq!(big.data, from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]));
    }

    #[test]
    fn capacity_test() {
        // Halfway point of the smallest f64 subnormal scaled for the longest
        // literal: the largest value the comparison ever builds.
        let mut x = Bigint::from_u64((1 << 54) + 1);
        x.imul_pow5(1111);
        x.imul_pow2(64);
        assert!(x.bit_length() < LIMB_BITS * x.data.capacity());
    }
}
