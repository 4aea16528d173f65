use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::algorithms::ethash::{seed_hash, DigestAlgorithm, RepeatHasher, ETHASH_EPOCH_LENGTH};
use crate::common::hash_types::Hash256;
use crate::common::paths::default_dir;
use crate::error::{PowError, Result};

/// Proof-of-work primitive configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowConfig {
    /// Blocks per epoch (30000 for Ethash, 60000 for Etchash, 7500 for KawPow)
    #[serde(default = "default_epoch_length")]
    pub epoch_length: u64,

    /// Directory where cache and dataset files are kept
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Digest used by the reusable hashers
    #[serde(default)]
    pub digest: DigestAlgorithm,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            epoch_length: default_epoch_length(),
            data_dir: default_data_dir(),
            digest: DigestAlgorithm::default(),
        }
    }
}

impl PowConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PowConfig = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            "Loaded PoW config: epoch_length={}, digest={}, data_dir={}",
            config.epoch_length,
            config.digest,
            config.data_dir.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.epoch_length == 0 {
            return Err(PowError::InvalidConfiguration(
                "epoch_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Epoch seed for `block_number` under this configuration
    pub fn seed_for_block(&self, block_number: u64) -> Hash256 {
        seed_hash(block_number, self.epoch_length)
    }

    /// A new reusable hasher for the configured digest, one per worker
    pub fn hasher(&self) -> Box<dyn RepeatHasher> {
        self.digest.hasher()
    }
}

// Default value functions for serde
fn default_epoch_length() -> u64 { ETHASH_EPOCH_LENGTH }
fn default_data_dir() -> PathBuf { default_dir() }
