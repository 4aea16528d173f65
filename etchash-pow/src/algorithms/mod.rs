/// Proof-of-work algorithm primitives

pub mod ethash;
pub mod kawpow;

// Re-export main entry points
pub use ethash::{digest256, digest512, fnv1, fnv1a, fnv_mix, seed_hash, seed_hashes};
pub use kawpow::{random_math, random_merge};
