//! Digest output type.

use std::fmt;

/// The output of a [`HashProvider`](super::HashProvider).
///
/// Length depends on the algorithm (16 bytes for MD5 up to 64 for SHA-512).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashDigest(Vec<u8>);

impl HashDigest {
    /// Wraps raw digest bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for a zero-length digest.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses a digest from hex.
    ///
    /// Returns `None` if the string is not valid hex.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        hex::decode(hex_str).ok().map(Self)
    }

    /// Consumes the digest and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for HashDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<HashDigest> for Vec<u8> {
    fn from(digest: HashDigest) -> Self {
        digest.0
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let digest = HashDigest::new([0u8; 16]);
        assert_eq!(digest.as_bytes(), &[0u8; 16]);
        assert_eq!(digest.len(), 16);
        assert!(!digest.is_empty());
    }

    #[test]
    fn test_hex_round_trip() {
        let digest = HashDigest::new(vec![0xAB; 20]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 40);
        assert_eq!(HashDigest::from_hex(&hex), Some(digest));
        assert!(HashDigest::from_hex("xyz").is_none());
    }

    #[test]
    fn test_display() {
        let digest = HashDigest::new(vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        assert_eq!(digest.to_string(), "0123456789abcdef");
        assert_eq!(digest.to_string(), digest.to_hex());
    }
}
