//! Hash providers.
//!
//! A [`HashProvider`] is a stateful digest engine: feed it bytes with
//! [`update`](HashProvider::update), then consume it with
//! [`digest`](HashProvider::digest). Providers come from one of two
//! interchangeable backends:
//!
//! - [`Backend::Native`] - RustCrypto implementations (requires `native-hash` feature)
//! - [`Backend::Portable`] - Pure Rust implementations shipped in this crate
//!
//! Both backends support the same [`Algorithm`] set and produce identical digests.
//!
//! # Example
//!
//! ```
//! use nodebuf::hash::{Backend, create_hash};
//!
//! let mut hasher = create_hash(Backend::Portable, "sha256")?;
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let digest = hasher.digest();
//! assert_eq!(
//!     digest.to_hex(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! # Ok::<(), nodebuf::HashError>(())
//! ```

mod digest;
#[cfg(feature = "native-hash")]
mod native;
mod portable;

use std::fmt;
use std::str::FromStr;

use crate::buffer::ByteBuffer;
use crate::error::HashError;

pub use digest::HashDigest;

/// A stateful digest engine.
pub trait HashProvider: Send {
    /// The algorithm this provider computes.
    fn algorithm(&self) -> Algorithm;

    /// Feeds more input.
    fn update(&mut self, data: &[u8]);

    /// Feeds the visible bytes of a buffer.
    fn update_buffer(&mut self, buffer: &ByteBuffer) {
        buffer.with_bytes(|bytes| self.update(bytes));
    }

    /// Finishes the computation and returns the digest.
    fn digest(self: Box<Self>) -> HashDigest;
}

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
}

impl Algorithm {
    /// Every supported algorithm, in benchmark order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ];

    /// The name used to select this algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Digest length in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 | Algorithm::Sha3_224 => 28,
            Algorithm::Sha256 | Algorithm::Sha3_256 => 32,
            Algorithm::Sha3_384 => 48,
            Algorithm::Sha512 | Algorithm::Sha3_512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| HashError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Which family of implementations backs a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Optimized RustCrypto crates.
    Native,
    /// Portable implementations in this crate.
    Portable,
}

impl Backend {
    /// Returns true when this backend is compiled in.
    pub const fn is_available(self) -> bool {
        match self {
            Backend::Native => cfg!(feature = "native-hash"),
            Backend::Portable => true,
        }
    }

    /// The name used to select this backend.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Native => "native",
            Backend::Portable => "portable",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Backend::Native),
            "portable" => Ok(Backend::Portable),
            other => Err(HashError::UnknownBackend(other.to_owned())),
        }
    }
}

/// Creates a provider for an algorithm selected by name.
///
/// # Errors
///
/// [`HashError::UnknownAlgorithm`] for names outside [`Algorithm::ALL`], and
/// [`HashError::BackendUnavailable`] when the backend is not compiled in.
pub fn create_hash(backend: Backend, name: &str) -> Result<Box<dyn HashProvider>, HashError> {
    let algorithm: Algorithm = name.parse()?;
    create_provider(backend, algorithm)
}

/// Creates a provider for an already parsed algorithm.
pub fn create_provider(
    backend: Backend,
    algorithm: Algorithm,
) -> Result<Box<dyn HashProvider>, HashError> {
    tracing::debug!(%backend, %algorithm, "creating hash provider");
    match backend {
        #[cfg(feature = "native-hash")]
        Backend::Native => Ok(native::create(algorithm)),
        #[cfg(not(feature = "native-hash"))]
        Backend::Native => Err(HashError::BackendUnavailable(backend)),
        Backend::Portable => Ok(portable::create(algorithm)),
    }
}

/// Hashes `data` in one shot.
pub fn hash_bytes(
    backend: Backend,
    algorithm: Algorithm,
    data: &[u8],
) -> Result<HashDigest, HashError> {
    let mut provider = create_provider(backend, algorithm)?;
    provider.update(data);
    Ok(provider.digest())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_round_trip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = create_hash(Backend::Portable, "sha384").err().unwrap();
        assert!(matches!(err, HashError::UnknownAlgorithm(name) if name == "sha384"));
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!("native".parse::<Backend>().unwrap(), Backend::Native);
        assert_eq!("portable".parse::<Backend>().unwrap(), Backend::Portable);
        assert!("rust".parse::<Backend>().is_err());
    }

    #[test]
    fn test_output_sizes() {
        for alg in Algorithm::ALL {
            let digest = hash_bytes(Backend::Portable, alg, b"abc").unwrap();
            assert_eq!(digest.len(), alg.output_size(), "{alg}");
        }
    }

    #[cfg(feature = "native-hash")]
    #[test]
    fn test_backends_agree() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 + 13) as u8).collect();
        for alg in Algorithm::ALL {
            let native = hash_bytes(Backend::Native, alg, &data).unwrap();
            let portable = hash_bytes(Backend::Portable, alg, &data).unwrap();
            assert_eq!(native, portable, "{alg}");
        }
    }

    #[test]
    fn test_update_buffer_uses_view() {
        let buf = ByteBuffer::from("xxabcxx");
        let view = buf.slice(Some(2), Some(5));

        let mut provider = create_hash(Backend::Portable, "md5").unwrap();
        provider.update_buffer(&view);
        let expected = hash_bytes(Backend::Portable, Algorithm::Md5, b"abc").unwrap();
        assert_eq!(provider.digest(), expected);
    }
}
