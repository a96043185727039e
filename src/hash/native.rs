//! RustCrypto-backed providers.

use sha2::Digest;

use super::{Algorithm, HashDigest, HashProvider};

/// Adapts any RustCrypto [`Digest`] to [`HashProvider`].
#[derive(Debug, Clone)]
struct NativeHasher<D> {
    algorithm: Algorithm,
    state: D,
}

impl<D: Digest + Send> HashProvider for NativeHasher<D> {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn digest(self: Box<Self>) -> HashDigest {
        HashDigest::new(self.state.finalize().to_vec())
    }
}

fn boxed<D: Digest + Send + 'static>(algorithm: Algorithm) -> Box<dyn HashProvider> {
    Box::new(NativeHasher {
        algorithm,
        state: D::new(),
    })
}

pub(super) fn create(algorithm: Algorithm) -> Box<dyn HashProvider> {
    match algorithm {
        Algorithm::Md5 => boxed::<md5::Md5>(algorithm),
        Algorithm::Sha1 => boxed::<sha1::Sha1>(algorithm),
        Algorithm::Sha224 => boxed::<sha2::Sha224>(algorithm),
        Algorithm::Sha256 => boxed::<sha2::Sha256>(algorithm),
        Algorithm::Sha512 => boxed::<sha2::Sha512>(algorithm),
        Algorithm::Sha3_224 => boxed::<sha3::Sha3_224>(algorithm),
        Algorithm::Sha3_256 => boxed::<sha3::Sha3_256>(algorithm),
        Algorithm::Sha3_384 => boxed::<sha3::Sha3_384>(algorithm),
        Algorithm::Sha3_512 => boxed::<sha3::Sha3_512>(algorithm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = create(Algorithm::Sha256);
        hasher.update(b"hello ");
        hasher.update(b"world");
        let digest = hasher.digest();

        let expected = sha2::Sha256::digest(b"hello world");
        assert_eq!(digest.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_reports_algorithm() {
        for alg in Algorithm::ALL {
            assert_eq!(create(alg).algorithm(), alg);
        }
    }
}
