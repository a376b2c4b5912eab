use crate::bitmap::{tail_mask, word_count};

/// Number of set bits across the first `word_count` words of `bitmap`.
///
/// A `word_count` past the end of the slice is clamped to it. Bits are counted
/// as found, including any beyond the last real row of the data.
pub fn count(bitmap: &[u64], word_count: usize) -> usize {
    bitmap
        .iter()
        .take(word_count)
        .map(|word| word.count_ones() as usize)
        .sum()
}

pub fn count_all(bitmap: &[u64]) -> usize {
    count(bitmap, bitmap.len())
}

/// Counts matches among the first `rows` rows only.
pub fn count_rows(bitmap: &[u64], rows: usize) -> usize {
    let words = word_count(rows).min(bitmap.len());
    let Some((last, body)) = bitmap[..words].split_last() else {
        return 0;
    };
    let last = if words == word_count(rows) {
        last & tail_mask(rows)
    } else {
        *last
    };
    count_all(body) + last.count_ones() as usize
}
