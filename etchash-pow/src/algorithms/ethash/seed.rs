/// Epoch seed chain
///
/// The seed for epoch `n` is Keccak-256 applied `n` times to 32 zero bytes.
/// Each step depends on the one before, so a single chain runs sequentially;
/// only independent chains are computed in parallel.

use rayon::prelude::*;
use sha3::Keccak256;
use tracing::{debug, trace};

use super::keccak::ReusableDigest;
use crate::common::hash_types::Hash256;

/// Epoch number of a block
///
/// # Panics
///
/// Panics if `epoch_length` is zero.
#[inline]
pub fn epoch_of(block_number: u64, epoch_length: u64) -> u64 {
    block_number / epoch_length
}

/// Seed used to generate the verification cache and the mining dataset for
/// the epoch containing `block_number`.
///
/// Blocks in the first epoch get the zero seed.
///
/// # Panics
///
/// Panics if `epoch_length` is zero.
pub fn seed_hash(block_number: u64, epoch_length: u64) -> Hash256 {
    if block_number < epoch_length {
        return Hash256::default();
    }
    seed_hash_for_epoch(epoch_of(block_number, epoch_length))
}

/// Seed for `epoch`, hashing the zero seed `epoch` times.
pub fn seed_hash_for_epoch(epoch: u64) -> Hash256 {
    let mut seed = Hash256::default();
    if epoch == 0 {
        return seed;
    }

    trace!("Computing seed chain of {} hashes", epoch);
    let mut keccak256 = ReusableDigest::<Keccak256>::new();
    for _ in 0..epoch {
        keccak256.reset();
        keccak256.absorb(seed.as_bytes());
        keccak256.read_digest(seed.as_bytes_mut());
    }
    seed
}

/// Seeds for many blocks at once, in input order.
///
/// Every block's chain is independent, so they are spread over the rayon
/// pool, each with its own hasher.
///
/// # Panics
///
/// Panics if `epoch_length` is zero.
pub fn seed_hashes(block_numbers: &[u64], epoch_length: u64) -> Vec<Hash256> {
    debug!(
        "Computing {} seeds in parallel, epoch length {}",
        block_numbers.len(),
        epoch_length
    );
    block_numbers
        .par_iter()
        .map(|&block| seed_hash(block, epoch_length))
        .collect()
}
