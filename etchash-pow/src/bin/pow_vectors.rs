//! Print reference vectors for the PoW primitives
//!
//! Usage: `pow_vectors [BLOCK...]`. Epoch length and digest come from a JSON
//! config in `ETCHASH_POW_CONFIG`, defaulting to Ethash parameters.

use etchash_pow::{
    digest256, digest512, fnv_mix, random_math, random_merge, seed_hashes, words_to_hex_digest,
    PowConfig,
};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("ETCHASH_POW_CONFIG") {
        Ok(json) => PowConfig::from_json(&json)?,
        Err(_) => PowConfig::default(),
    };
    info!("Data directory: {}", config.data_dir.display());

    let mut blocks = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    if blocks.is_empty() {
        blocks = (0..4).map(|epoch| epoch * config.epoch_length).collect();
    }

    println!("Digests:");
    println!("  keccak256(\"\") = {}", digest256(&[]).to_prefixed_hex());
    println!("  keccak512(\"\") = 0x{}", digest512(&[]).to_hex());

    println!("\nSeeds (epoch length {}):", config.epoch_length);
    let start = Instant::now();
    let seeds = seed_hashes(&blocks, config.epoch_length);
    for (block, seed) in blocks.iter().zip(&seeds) {
        println!("  block {:>10}: {}", block, seed.to_prefixed_hex());
    }
    info!("Computed {} seeds in {:?}", seeds.len(), start.elapsed());

    println!("\nFNV mix:");
    let mut mix = [1u32, 2];
    fnv_mix(&mut mix, &[3, 4]);
    println!("  fnv_mix([1, 2], [3, 4]) = [{:#010x}, {:#010x}]", mix[0], mix[1]);
    println!("  mix digest = {}", words_to_hex_digest(&mix));

    println!("\nRandom math (a=5, b=3):");
    for selector in 0..11 {
        println!("  selector {:>2}: {:#010x}", selector, random_math(5, 3, selector));
    }

    println!("\nRandom merge (a=5, b=3):");
    for selector in [0x0001_0000u32, 0x0001_0001, 0x0001_0002, 0x0001_0003] {
        println!("  selector {:#010x}: {:#010x}", selector, random_merge(5, 3, selector));
    }

    let mut hasher = config.hasher();
    let mut dest = vec![0u8; hasher.output_len()];
    hasher.hash(&mut dest, b"etchash");
    println!("\n{}(\"etchash\") = 0x{}", config.digest, hex::encode(&dest));

    Ok(())
}
