/// FNV mixing for Ethash-family dataset lookups
///
/// Ethash folds dataset words into the mix with FNV1 (multiply, then xor).
/// ProgPoW and KawPow use FNV1a (xor, then multiply) for their lane
/// reductions. Both are used as word mixers here, not as standalone hashes.

/// FNV constants for 32-bit variant
pub const FNV_PRIME: u32 = 0x0100_0193;
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV1 step: `(u * FNV_PRIME) ^ v`
#[inline(always)]
pub fn fnv1(u: u32, v: u32) -> u32 {
    u.wrapping_mul(FNV_PRIME) ^ v
}

/// FNV1a step: `(u ^ v) * FNV_PRIME`
#[inline(always)]
pub fn fnv1a(u: u32, v: u32) -> u32 {
    (u ^ v).wrapping_mul(FNV_PRIME)
}

/// Mix `data` into `mix` word by word with [`fnv1`].
///
/// `data` must hold at least `mix.len()` words.
///
/// # Panics
///
/// Panics if `data` is shorter than `mix`.
#[inline]
pub fn fnv_mix(mix: &mut [u32], data: &[u32]) {
    let data = &data[..mix.len()];
    for (m, &d) in mix.iter_mut().zip(data) {
        *m = fnv1(*m, d);
    }
}
