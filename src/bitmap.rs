//! Physical layout of the match vector.
//!
//! Row `i` lives in bit `i & 63` of word `i >> 6`, least significant bit
//! first, words ascending with row index. A column of `n` rows needs
//! `word_count(n)` words. The scanner combines whole words, so bits past the
//! last row in the final word are left to the caller; `clear_tail` zeroes
//! them when a clean boundary is wanted.

use bitvec::prelude::*;

use crate::type_utils::LANES;

#[inline]
pub fn word_count(rows: usize) -> usize {
    rows.div_ceil(LANES)
}

/// Mask of the bits in the final word that correspond to real rows.
#[inline]
pub fn tail_mask(rows: usize) -> u64 {
    match rows % LANES {
        0 => u64::MAX,
        r => (1u64 << r) - 1,
    }
}

/// Zeroes every bit at a position `>= rows` inside the final data word.
pub fn clear_tail(bitmap: &mut [u64], rows: usize) {
    let words = word_count(rows);
    if words == 0 {
        return;
    }
    if let Some(last) = bitmap.get_mut(words - 1) {
        *last &= tail_mask(rows);
    }
}

#[inline]
pub fn is_match(bitmap: &[u64], row: usize) -> bool {
    bitmap
        .get(row / LANES)
        .is_some_and(|word| (word >> (row % LANES)) & 1 == 1)
}

/// Row indices whose bit is set, restricted to the first `rows` rows.
pub fn matching_rows(bitmap: &[u64], rows: usize) -> impl Iterator<Item = usize> + '_ {
    let bits = bitmap.view_bits::<Lsb0>();
    bits[..rows.min(bits.len())].iter_ones()
}
