use thiserror::Error;

/// Proof-of-work primitive error types
///
/// Hashing and word arithmetic are total and never produce these; they come
/// from construction and configuration only.
#[derive(Error, Debug)]
pub enum PowError {
    #[error("Unsupported digest algorithm: {0} (reset-and-read hashing is required)")]
    UnsupportedDigest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PowError>;
