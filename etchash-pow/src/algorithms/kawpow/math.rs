/// 32-bit integer operators used by the KawPow random program
///
/// All of these are total and wrap instead of overflowing, so GPU kernels and
/// verifiers in any language agree bit for bit.

/// Rotate left by `b mod 32`
#[inline(always)]
pub fn rotl32(a: u32, b: u32) -> u32 {
    a << (b & 31) | a >> (32u32.wrapping_sub(b) & 31)
}

/// Rotate right by `b mod 32`
#[inline(always)]
pub fn rotr32(a: u32, b: u32) -> u32 {
    a << (32u32.wrapping_sub(b) & 31) | a >> (b & 31)
}

/// Count leading zero bits (32 for zero)
#[inline(always)]
pub fn clz32(a: u32) -> u32 {
    a.leading_zeros()
}

/// Count set bits
#[inline(always)]
pub fn popcount32(a: u32) -> u32 {
    a.count_ones()
}

/// High 32 bits of the full 64-bit product
#[inline(always)]
pub fn mul_hi32(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) >> 32) as u32
}

#[inline(always)]
pub fn min_u32(a: u32, b: u32) -> u32 {
    a.min(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations() {
        assert_eq!(rotl32(1, 1), 2);
        assert_eq!(rotr32(2, 1), 1);
        assert_eq!(rotl32(0x8000_0000, 1), 1);
        assert_eq!(rotr32(1, 1), 0x8000_0000);
    }

    #[test]
    fn test_rotation_amount_is_mod_32() {
        let a = 0x1234_5678;
        assert_eq!(rotl32(a, 0), a);
        assert_eq!(rotl32(a, 32), a);
        assert_eq!(rotl32(a, 33), rotl32(a, 1));
        assert_eq!(rotr32(a, 32), a);
        assert_eq!(rotr32(a, u32::MAX), rotr32(a, 31));
    }

    #[test]
    fn test_rotations_match_std() {
        let a = 0xDEAD_BEEF;
        for k in 0..64 {
            assert_eq!(rotl32(a, k), a.rotate_left(k));
            assert_eq!(rotr32(a, k), a.rotate_right(k));
        }
    }

    #[test]
    fn test_rotr_inverts_rotl() {
        for a in [0u32, 1, 0x8000_0001, 0xCAFE_BABE, u32::MAX] {
            for k in 0..32 {
                assert_eq!(rotr32(rotl32(a, k), k), a);
            }
        }
    }

    #[test]
    fn test_bit_counts() {
        assert_eq!(clz32(0), 32);
        assert_eq!(clz32(1), 31);
        assert_eq!(clz32(u32::MAX), 0);
        assert_eq!(popcount32(0), 0);
        assert_eq!(popcount32(0xF0F0_0001), 9);
    }

    #[test]
    fn test_mul_hi32() {
        assert_eq!(mul_hi32(5, 3), 0);
        assert_eq!(mul_hi32(0x1_0000, 0x1_0000), 1);
        assert_eq!(mul_hi32(u32::MAX, u32::MAX), 0xFFFF_FFFE);
    }

    #[test]
    fn test_min_u32() {
        assert_eq!(min_u32(5, 3), 3);
        assert_eq!(min_u32(0, u32::MAX), 0);
        assert_eq!(min_u32(7, 7), 7);
    }
}
