// Tests for the 64-lane SIMD wrapper and the domain shift in `bytescan::type_utils`.
use bytescan::type_utils::*;

fn ramp() -> [i8; 64] {
    std::array::from_fn(|i| i as i8 - 32)
}

#[cfg(test)]
mod i8x64_tests {
    use super::*;

    #[test]
    fn test_i8x64_splat() {
        let vec = i8x64::splat(42);
        let expected = i8x64::from_slice(&[42i8; 64]);

        assert_eq!(vec.cmp_eq(expected), u64::MAX); // All 64 bits should be set
    }

    #[test]
    fn test_i8x64_from_slice_lane_order() {
        let vec = i8x64::from_slice(&ramp());

        // Lane i holds i - 32, so only lane 32 equals zero
        assert_eq!(vec.cmp_eq(i8x64::splat(0)), 1u64 << 32);
        assert_eq!(vec.cmp_eq(i8x64::splat(-32)), 1);
        assert_eq!(vec.cmp_eq(i8x64::splat(31)), 1u64 << 63);
    }

    #[test]
    fn test_i8x64_from_bytes_reinterprets_as_signed() {
        let mut bytes = [0u8; 64];
        bytes[5] = 0xFF;
        bytes[40] = 0x80;
        let vec = i8x64::from_bytes(&bytes);

        assert_eq!(vec.cmp_eq(i8x64::splat(-1)), 1u64 << 5);
        assert_eq!(vec.cmp_eq(i8x64::splat(i8::MIN)), 1u64 << 40);
        // 0xFF and 0x80 are negative lanes, so they are not greater than zero
        assert_eq!(vec.cmp_gt(i8x64::splat(0)), 0);
    }

    #[test]
    fn test_i8x64_cmp_gt() {
        let vec = i8x64::from_slice(&ramp());

        let mask = vec.cmp_gt(i8x64::splat(0));
        // Lanes 33..64 hold 1..=31
        assert_eq!(mask, !0u64 << 33);
    }

    #[test]
    fn test_i8x64_cmp_lt() {
        let vec = i8x64::from_slice(&ramp());

        let mask = vec.cmp_lt(i8x64::splat(0));
        // Lanes 0..32 hold -32..=-1
        assert_eq!(mask, 0xFFFF_FFFF);
    }

    #[test]
    fn test_i8x64_cmp_gte_lte() {
        let vec = i8x64::from_slice(&ramp());
        let zero = i8x64::splat(0);

        assert_eq!(vec.cmp_gte(zero), !0u64 << 32);
        assert_eq!(vec.cmp_lte(zero), (1u64 << 33) - 1);
    }

    #[test]
    fn test_i8x64_cmp_ne() {
        let vec = i8x64::from_slice(&ramp());

        assert_eq!(vec.cmp_ne(i8x64::splat(0)), !(1u64 << 32));
    }

    #[test]
    fn test_i8x64_halves_are_independent() {
        let mut lanes = [0i8; 64];
        lanes[31] = 7;
        lanes[32] = 7;
        let vec = i8x64::from_slice(&lanes);

        assert_eq!(vec.cmp_eq(i8x64::splat(7)), (1u64 << 31) | (1u64 << 32));
    }
}

#[cfg(test)]
mod domain_shift_tests {
    use super::*;

    #[test]
    fn test_shift_byte_preserves_unsigned_order() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let shifted = shift_byte(a, UNSIGNED_BIAS) < shift_byte(b, UNSIGNED_BIAS);
                assert_eq!(shifted, a < b, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_shift_byte_without_bias_is_signed_reinterpretation() {
        assert_eq!(shift_byte(0xFF, 0), -1);
        assert_eq!(shift_byte(0x80, 0), i8::MIN);
        assert_eq!(shift_byte(0x7F, 0), i8::MAX);
    }

    #[test]
    fn test_shift_byte_with_bias_endpoints() {
        assert_eq!(shift_byte(0, UNSIGNED_BIAS), i8::MIN);
        assert_eq!(shift_byte(255, UNSIGNED_BIAS), i8::MAX);
        assert_eq!(shift_byte(128, UNSIGNED_BIAS), 0);
    }

    #[test]
    fn test_vector_shift_matches_scalar_shift() {
        let bytes: [u8; 64] = std::array::from_fn(|i| (i * 4) as u8);
        let shifted = i8x64::from_bytes(&bytes).shift(UNSIGNED_BIAS);

        for (i, &b) in bytes.iter().enumerate() {
            let mask = shifted.cmp_eq(i8x64::splat(shift_byte(b, UNSIGNED_BIAS)));
            assert_eq!(mask, 1u64 << i, "lane {i}");
        }
    }
}
