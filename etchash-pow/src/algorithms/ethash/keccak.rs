/// Keccak digests for Ethash-family proof of work
///
/// These are the original Keccak submissions (`0x01` domain padding), not the
/// FIPS-202 SHA-3 functions. The two produce different digests for the same
/// input and only the legacy variant matches existing seeds and datasets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha3::digest::{Digest, FixedOutputReset, Output};
use sha3::{Keccak256, Keccak512};
use tracing::{debug, warn};

use crate::common::hash_types::{Hash256, Hash512};
use crate::error::{PowError, Result};

/// Keccak-256 of `data`
pub fn digest256(data: &[u8]) -> Hash256 {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    Hash256::from_bytes(out)
}

/// Keccak-512 of `data`
pub fn digest512(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Keccak512::digest(data));
    Hash512::from_bytes(out)
}

/// Digest state that is reset and reused between hash runs instead of being
/// created anew for every call.
///
/// Dataset generation hashes millions of small items, so the state is kept
/// across calls. Every method takes `&mut self`: an instance can be moved to a
/// worker thread but never shared, and only one hash runs on it at a time.
///
/// Any `D` that can hand out its digest and reset in one step
/// ([`FixedOutputReset`]) qualifies; other digest types do not satisfy the
/// bound and are rejected at compile time.
pub struct ReusableDigest<D> {
    state: D,
}

impl<D: Digest + FixedOutputReset> ReusableDigest<D> {
    pub fn new() -> Self {
        Self { state: <D as Digest>::new() }
    }

    /// Number of bytes written by [`read_digest`](Self::read_digest)
    #[inline]
    pub fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    /// Discard any absorbed input
    #[inline]
    pub fn reset(&mut self) {
        Digest::reset(&mut self.state);
    }

    #[inline]
    pub fn absorb(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    /// Write the digest of everything absorbed since the last reset into the
    /// first `output_len()` bytes of `dest`, leaving the state reset.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is shorter than `output_len()`.
    #[inline]
    pub fn read_digest(&mut self, dest: &mut [u8]) {
        let len = self.output_len();
        let out = Output::<D>::from_mut_slice(&mut dest[..len]);
        Digest::finalize_into_reset(&mut self.state, out);
    }

    /// Reset, absorb `data` and write the digest into `dest`.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is shorter than `output_len()`.
    #[inline]
    pub fn hash(&mut self, dest: &mut [u8], data: &[u8]) {
        self.reset();
        self.absorb(data);
        self.read_digest(dest);
    }
}

impl<D: Digest + FixedOutputReset> Default for ReusableDigest<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + FixedOutputReset> fmt::Debug for ReusableDigest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableDigest")
            .field("output_len", &self.output_len())
            .finish()
    }
}

/// Object-safe view of a [`ReusableDigest`], for hashers picked at runtime.
pub trait RepeatHasher: Send {
    fn output_len(&self) -> usize;

    /// Reset, absorb `data` and write `output_len()` bytes into `dest`.
    fn hash(&mut self, dest: &mut [u8], data: &[u8]);
}

impl<D> RepeatHasher for ReusableDigest<D>
where
    D: Digest + FixedOutputReset + Send,
{
    fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn hash(&mut self, dest: &mut [u8], data: &[u8]) {
        self.reset();
        self.absorb(data);
        self.read_digest(dest);
    }
}

/// Digest algorithms available for reusable hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DigestAlgorithm {
    #[default]
    Keccak256,
    Keccak512,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Keccak256 => "keccak256",
            DigestAlgorithm::Keccak512 => "keccak512",
        }
    }

    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Keccak256 => 32,
            DigestAlgorithm::Keccak512 => 64,
        }
    }

    /// Build a fresh reusable hasher for this algorithm
    pub fn hasher(&self) -> Box<dyn RepeatHasher> {
        match self {
            DigestAlgorithm::Keccak256 => Box::new(ReusableDigest::<Keccak256>::new()),
            DigestAlgorithm::Keccak512 => Box::new(ReusableDigest::<Keccak512>::new()),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "keccak256" => Ok(DigestAlgorithm::Keccak256),
            "keccak512" => Ok(DigestAlgorithm::Keccak512),
            _ => Err(PowError::UnsupportedDigest(s.to_string())),
        }
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = PowError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Create a reusable hasher from an algorithm name.
///
/// Fails with [`PowError::UnsupportedDigest`] when the named algorithm cannot
/// be reset and read repeatedly. This is a setup error: resolve it once at
/// startup and keep the returned hasher, one per worker.
pub fn make_hasher(name: &str) -> Result<Box<dyn RepeatHasher>> {
    match name.parse::<DigestAlgorithm>() {
        Ok(algorithm) => {
            debug!("Creating reusable {} hasher", algorithm);
            Ok(algorithm.hasher())
        }
        Err(e) => {
            warn!("Cannot create reusable hasher: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            digest256(&[]).0,
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_keccak512_empty() {
        assert_eq!(
            digest512(&[]).0,
            hex!(
                "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304"
                "c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
            )
        );
    }

    #[test]
    fn test_keccak256_zero_word() {
        assert_eq!(
            digest256(&[0u8; 32]).0,
            hex!("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563")
        );
    }

    #[test]
    fn test_legacy_padding_differs_from_sha3() {
        let sha3_empty = sha3::Sha3_256::digest(b"");
        assert_ne!(digest256(&[]).as_bytes()[..], sha3_empty[..]);
    }

    #[test]
    fn test_digests_deterministic() {
        let data = b"etchash";
        assert_eq!(digest256(data), digest256(data));
        assert_eq!(digest512(data), digest512(data));
        assert_ne!(digest256(data), digest256(b"etchasH"));
    }

    #[test]
    fn test_reusable_digest_matches_one_shot() {
        let mut hasher = ReusableDigest::<Keccak256>::new();
        let mut dest = [0u8; 32];

        let inputs: [&[u8]; 3] = [b"", b"abc", &[0xAB; 200]];
        for input in inputs {
            hasher.hash(&mut dest, input);
            assert_eq!(dest, digest256(input).0);
        }
    }

    #[test]
    fn test_reusable_digest_resets_between_calls() {
        let mut hasher = ReusableDigest::<Keccak512>::new();
        let mut first = [0u8; 64];
        let mut second = [0u8; 64];

        hasher.absorb(b"stale input");
        hasher.hash(&mut first, b"data");
        hasher.hash(&mut second, b"data");

        assert_eq!(first, second);
        assert_eq!(first, digest512(b"data").0);
    }

    #[test]
    fn test_reusable_digest_incremental_absorb() {
        let mut hasher = ReusableDigest::<Keccak256>::new();
        let mut dest = [0u8; 32];

        hasher.reset();
        hasher.absorb(b"hello ");
        hasher.absorb(b"world");
        hasher.read_digest(&mut dest);

        assert_eq!(dest, digest256(b"hello world").0);
    }

    #[test]
    fn test_reusable_digest_writes_only_output_len() {
        let mut hasher = ReusableDigest::<Keccak256>::new();
        let mut dest = [0xEEu8; 40];

        hasher.hash(&mut dest, b"abc");

        assert_eq!(hasher.output_len(), 32);
        assert_eq!(dest[..32], digest256(b"abc").0);
        assert_eq!(dest[32..], [0xEE; 8]);
    }

    #[test]
    #[should_panic]
    fn test_reusable_digest_short_dest_panics() {
        let mut hasher = ReusableDigest::<Keccak256>::new();
        let mut dest = [0u8; 16];
        hasher.hash(&mut dest, b"abc");
    }

    #[test]
    fn test_make_hasher() {
        let mut hasher = make_hasher("keccak512").unwrap();
        assert_eq!(hasher.output_len(), 64);

        let mut dest = [0u8; 64];
        hasher.hash(&mut dest, b"abc");
        assert_eq!(dest, digest512(b"abc").0);
    }

    #[test]
    fn test_make_hasher_unsupported() {
        let err = make_hasher("sha3-256").err().unwrap();
        assert!(matches!(err, PowError::UnsupportedDigest(ref name) if name == "sha3-256"));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("Keccak-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Keccak256);
        assert_eq!("keccak_512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Keccak512);

        for algorithm in [DigestAlgorithm::Keccak256, DigestAlgorithm::Keccak512] {
            assert_eq!(algorithm.name().parse::<DigestAlgorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.hasher().output_len(), algorithm.output_len());
        }
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&DigestAlgorithm::Keccak512).unwrap();
        assert_eq!(json, "\"keccak512\"");

        let parsed: DigestAlgorithm = serde_json::from_str("\"keccak256\"").unwrap();
        assert_eq!(parsed, DigestAlgorithm::Keccak256);

        assert!(serde_json::from_str::<DigestAlgorithm>("\"blake3\"").is_err());
    }
}
