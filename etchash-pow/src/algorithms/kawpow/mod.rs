/// KawPow instruction semantics
///
/// KawPow is a variant of ProgPoW configured for Ravencoin. This module holds
/// the deterministic integer operators and the random math/merge decoders of
/// its programmatic mix step; the selector stream itself is produced by the
/// caller.

pub mod math;
pub mod progpow;

pub use math::{clz32, min_u32, mul_hi32, popcount32, rotl32, rotr32};
pub use progpow::{merge_rotation, random_math, random_merge, MathOp, MergeOp};

/// KawPow specific parameters
pub const KAWPOW_EPOCH_LENGTH: u64 = 7500; // Blocks per epoch
