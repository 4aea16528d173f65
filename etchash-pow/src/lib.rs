//! Etchash PoW - proof-of-work hashing primitives
//!
//! This crate provides the deterministic building blocks shared by Ethash,
//! Etchash and KawPow cache/dataset generators and verifiers: legacy Keccak
//! digests, reusable hashers, the per-epoch seed chain, FNV mixing and the
//! KawPow random math/merge instructions.

pub mod algorithms;
pub mod common;
pub mod config;
pub mod error;

// Re-export main types
pub use algorithms::ethash::{
    digest256, digest512, epoch_of, fnv1, fnv1a, fnv_mix, make_hasher, seed_hash,
    seed_hash_for_epoch, seed_hashes, DigestAlgorithm, RepeatHasher, ReusableDigest,
    ETCHASH_EPOCH_LENGTH, ETHASH_EPOCH_LENGTH, FNV_OFFSET_BASIS, FNV_PRIME,
};
pub use algorithms::kawpow::{random_math, random_merge, MathOp, MergeOp, KAWPOW_EPOCH_LENGTH};
pub use common::endian::{bytes_to_words, is_little_endian, words_to_bytes, words_to_hex_digest};
pub use common::hash_types::{Hash256, Hash512};
pub use common::paths::default_dir;
pub use config::PowConfig;
pub use error::{PowError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Test that main types are accessible
        let _hash = Hash256::default();
        let _config = PowConfig::default();
        let _hasher = ReusableDigest::<sha3::Keccak256>::new();
        assert_eq!(random_math(1, 2, 0), 3);
    }
}
