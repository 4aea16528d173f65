/// Ethash and Etchash building blocks
///
/// Keccak digests, the per-epoch seed chain and the FNV mixer shared by the
/// cache/dataset generator and the hashimoto loop. Etchash is Ethash with a
/// doubled epoch length (ECIP-1099), so both use the same primitives.

pub mod fnv;
pub mod keccak;
pub mod seed;

pub use fnv::{fnv1, fnv1a, fnv_mix, FNV_OFFSET_BASIS, FNV_PRIME};
pub use keccak::{digest256, digest512, make_hasher, DigestAlgorithm, RepeatHasher, ReusableDigest};
pub use seed::{epoch_of, seed_hash, seed_hash_for_epoch, seed_hashes};

/// Blocks per epoch for Ethash
pub const ETHASH_EPOCH_LENGTH: u64 = 30_000;
/// Blocks per epoch for Etchash after ECIP-1099
pub const ETCHASH_EPOCH_LENGTH: u64 = 60_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etchash_epochs_are_doubled() {
        assert_eq!(ETCHASH_EPOCH_LENGTH, 2 * ETHASH_EPOCH_LENGTH);
        assert_eq!(
            seed_hash(60_000, ETCHASH_EPOCH_LENGTH),
            seed_hash(30_000, ETHASH_EPOCH_LENGTH)
        );
    }
}
