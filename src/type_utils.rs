//! Low-level SIMD wrapper types for byte-lane predicate evaluation.
//!
//! `wide` offers at most 32 byte lanes, so the 64-lane vector used by the
//! scanner is composed from two `i8x32` halves. Every comparison condenses to
//! one bit per lane: the low half lands in bits 0..32 and the high half in
//! bits 32..64, which is exactly one bitmap word.
//!
//! Lane comparisons are signed only. Unsigned columns go through the
//! unsigned-to-signed domain shift first: XOR with `0x80` maps 0..=255 onto
//! -128..=127 while keeping relative order.
#![allow(non_camel_case_types)]

use std::ops::BitXor;

use wide::*;

/// Rows handled per vector iteration, one bitmap word.
pub const LANES: usize = 64;
const HALF_LANES: usize = 32;

/// Domain shift applied to unsigned bytes before signed lane comparison.
pub const UNSIGNED_BIAS: u8 = 0x80;

/// Scalar form of the domain shift. `bias` is `0` for signed data.
#[inline(always)]
pub fn shift_byte(byte: u8, bias: u8) -> i8 {
    (byte ^ bias) as i8
}

#[derive(Debug, Clone, Copy)]
pub struct i8x64 {
    low: i8x32,
    high: i8x32,
}

impl i8x64 {
    #[inline]
    pub fn splat(value: i8) -> Self {
        Self {
            low: i8x32::splat(value),
            high: i8x32::splat(value),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[i8]) -> Self {
        debug_assert_eq!(slice.len(), LANES);
        let low: [i8; HALF_LANES] = std::array::from_fn(|i| slice[i]);
        let high: [i8; HALF_LANES] = std::array::from_fn(|i| slice[HALF_LANES + i]);
        Self {
            low: i8x32::from(low),
            high: i8x32::from(high),
        }
    }

    /// Loads 64 raw column bytes, reinterpreting each as a signed lane.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), LANES);
        let low: [i8; HALF_LANES] = std::array::from_fn(|i| bytes[i] as i8);
        let high: [i8; HALF_LANES] = std::array::from_fn(|i| bytes[HALF_LANES + i] as i8);
        Self {
            low: i8x32::from(low),
            high: i8x32::from(high),
        }
    }

    /// Applies the domain shift to every lane.
    #[inline]
    pub fn shift(self, bias: u8) -> Self {
        self ^ Self::splat(bias as i8)
    }

    #[inline]
    pub fn cmp_eq(self, other: Self) -> u64 {
        let low_mask = self.low.cmp_eq(other.low).move_mask();
        let high_mask = self.high.cmp_eq(other.high).move_mask();
        join_masks(low_mask as u32, high_mask as u32)
    }

    #[inline]
    pub fn cmp_ne(self, other: Self) -> u64 {
        !self.cmp_eq(other)
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> u64 {
        let low_mask = self.low.cmp_gt(other.low).move_mask();
        let high_mask = self.high.cmp_gt(other.high).move_mask();
        join_masks(low_mask as u32, high_mask as u32)
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> u64 {
        // a < b is b > a
        other.cmp_gt(self)
    }

    #[inline]
    pub fn cmp_gte(self, other: Self) -> u64 {
        !self.cmp_lt(other)
    }

    #[inline]
    pub fn cmp_lte(self, other: Self) -> u64 {
        !self.cmp_gt(other)
    }
}

impl BitXor for i8x64 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            low: self.low ^ rhs.low,
            high: self.high ^ rhs.high,
        }
    }
}

#[inline(always)]
fn join_masks(low: u32, high: u32) -> u64 {
    (low as u64) | ((high as u64) << 32)
}
