//! Fingerprint Value Object
//!
//! A deterministic SHA-256 digest used to detect deploy-relevant change.
//! Always 64 lowercase hexadecimal characters, never prefixed.

use std::fmt;

use sha2::{Digest, Sha256};

/// Fingerprint value object
///
/// Produced by finalizing a SHA-256 state. The engine always initializes
/// the state, feeds content only when there is any, and always finalizes,
/// so "nothing to hash" yields the digest of the empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex encoding
    pub const HEX_LEN: usize = 64;

    /// Finalize a hash state into a fingerprint
    pub fn finalize(hasher: Sha256) -> Self {
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Digest a byte slice
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self::finalize(hasher)
    }

    /// Digest of the empty input
    pub fn empty() -> Self {
        Self::finalize(Sha256::new())
    }

    /// Parse an existing hex digest (e.g. one read back from a previous run)
    ///
    /// Returns `None` unless the input is exactly 64 hex characters.
    /// Uppercase input is normalized to lowercase.
    pub fn parse(hex: &str) -> Option<Self> {
        if hex.len() == Self::HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(hex.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// The hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}
