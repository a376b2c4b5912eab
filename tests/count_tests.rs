use bytescan::prelude::*;
use rand::random_range;

fn random_column(rows: usize) -> Vec<u8> {
    (0..rows).map(|_| random_range(0..=u8::MAX)).collect()
}

#[cfg(test)]
mod count_tests {
    use super::*;

    #[test]
    fn test_count_sums_popcounts() {
        let bitmap = [0u64, 1, u64::MAX, 0b1011];
        assert_eq!(count(&bitmap, 4), 68);
        assert_eq!(count_all(&bitmap), 68);
    }

    #[test]
    fn test_count_respects_word_count() {
        let bitmap = [u64::MAX, u64::MAX, u64::MAX];
        assert_eq!(count(&bitmap, 0), 0);
        assert_eq!(count(&bitmap, 1), 64);
        assert_eq!(count(&bitmap, 2), 128);
    }

    #[test]
    fn test_count_clamps_word_count_to_slice() {
        let bitmap = [u64::MAX, 1];
        assert_eq!(count(&bitmap, 10), 65);
        assert_eq!(count(&[], 3), 0);
    }

    #[test]
    fn test_count_includes_stale_high_bits() {
        // 3 real rows, but the word carries garbage above them
        let bitmap = [0b101 | (1u64 << 40)];
        assert_eq!(count(&bitmap, word_count(3)), 3);
        assert_eq!(count_rows(&bitmap, 3), 2);
    }

    #[test]
    fn test_count_rows_masks_tail_word() {
        let bitmap = [u64::MAX, u64::MAX];
        assert_eq!(count_rows(&bitmap, 0), 0);
        assert_eq!(count_rows(&bitmap, 1), 1);
        assert_eq!(count_rows(&bitmap, 64), 64);
        assert_eq!(count_rows(&bitmap, 65), 65);
        assert_eq!(count_rows(&bitmap, 100), 100);
        assert_eq!(count_rows(&bitmap, 128), 128);
    }

    #[test]
    fn test_count_rows_on_short_bitmap_counts_available_words() {
        let bitmap = [u64::MAX];
        assert_eq!(count_rows(&bitmap, 200), 64);
    }

    #[test]
    fn test_count_matches_rescan() {
        for rows in [1usize, 63, 64, 65, 500, 4096, 4097] {
            let column = random_column(rows);
            let value = random_range(0..=u8::MAX);
            for signing in Signing::ALL {
                for cmp in CmpOp::ALL {
                    let mut bitmap = vec![0u64; word_count(rows)];
                    scan(cmp, BoolOp::Or, signing, &column, value, &mut bitmap);

                    let expected = column
                        .iter()
                        .filter(|&&b| cmp.eval(b, value, signing))
                        .count();
                    assert_eq!(count(&bitmap, word_count(rows)), expected);
                    assert_eq!(count_rows(&bitmap, rows), expected);
                }
            }
        }
    }

    #[test]
    fn test_count_after_and_chain() {
        let column: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let mut bitmap = vec![u64::MAX; word_count(column.len())];

        scan(CmpOp::Gt, BoolOp::And, Signing::Unsigned, &column, 99, &mut bitmap);
        scan(CmpOp::Lte, BoolOp::And, Signing::Unsigned, &column, 199, &mut bitmap);

        let expected = column.iter().filter(|&&b| (100u8..=199).contains(&b)).count();
        assert_eq!(count_rows(&bitmap, column.len()), expected);
    }
}
