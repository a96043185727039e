//! Pure Rust providers.
//!
//! These exist so the benchmark has a second, dependency-free backend to
//! compare the RustCrypto crates against. They favour readability over speed.

mod md5;
mod sha1;
mod sha256;
mod sha3;
mod sha512;

use super::{Algorithm, HashProvider};

pub(crate) use self::md5::Md5;
pub(crate) use self::sha1::Sha1;
pub(crate) use self::sha256::Sha256;
pub(crate) use self::sha3::Sha3;
pub(crate) use self::sha512::Sha512;

pub(super) fn create(algorithm: Algorithm) -> Box<dyn HashProvider> {
    match algorithm {
        Algorithm::Md5 => Box::new(Md5::new()),
        Algorithm::Sha1 => Box::new(Sha1::new()),
        Algorithm::Sha224 => Box::new(Sha256::new_224()),
        Algorithm::Sha256 => Box::new(Sha256::new()),
        Algorithm::Sha512 => Box::new(Sha512::new()),
        Algorithm::Sha3_224 => Box::new(Sha3::<144>::new(Algorithm::Sha3_224)),
        Algorithm::Sha3_256 => Box::new(Sha3::<136>::new(Algorithm::Sha3_256)),
        Algorithm::Sha3_384 => Box::new(Sha3::<104>::new(Algorithm::Sha3_384)),
        Algorithm::Sha3_512 => Box::new(Sha3::<72>::new(Algorithm::Sha3_512)),
    }
}

/// Accumulates input into fixed-size blocks for a compression function.
#[derive(Debug, Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
    block: [u8; N],
    filled: usize,
    total: u128,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            block: [0; N],
            filled: 0,
            total: 0,
        }
    }

    /// Feeds `data`, calling `compress` for every completed block.
    pub(crate) fn update(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
        self.total += data.len() as u128;

        if self.filled > 0 {
            let take = (N - self.filled).min(data.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
            if self.filled < N {
                return;
            }
            compress(&self.block);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(N);
        for block in &mut blocks {
            if let Ok(block) = <&[u8; N]>::try_from(block) {
                compress(block);
            }
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Applies Merkle-Damgard padding: `0x80`, zeros, then the message bit
    /// length in the last `len_bytes` bytes of the final block.
    pub(crate) fn finish_md(
        &mut self,
        len_bytes: usize,
        big_endian: bool,
        mut compress: impl FnMut(&[u8; N]),
    ) {
        let bit_len = self.total.wrapping_mul(8);
        let pos = self.filled;

        self.block[pos] = 0x80;
        self.block[pos + 1..].fill(0);
        if pos + 1 > N - len_bytes {
            compress(&self.block);
            self.block.fill(0);
        }

        if big_endian {
            let trailer = bit_len.to_be_bytes();
            self.block[N - len_bytes..].copy_from_slice(&trailer[16 - len_bytes..]);
        } else {
            let trailer = bit_len.to_le_bytes();
            self.block[N - len_bytes..].copy_from_slice(&trailer[..len_bytes]);
        }
        compress(&self.block);
    }

    /// Pads for a Keccak sponge: domain byte at the end of the data and
    /// `0x80` in the last byte of the block.
    pub(crate) fn finish_sponge(&mut self, domain: u8, mut absorb: impl FnMut(&[u8; N])) {
        let pos = self.filled;
        self.block[pos..].fill(0);
        self.block[pos] ^= domain;
        self.block[N - 1] ^= 0x80;
        absorb(&self.block);
    }
}

/// Shared glue from a concrete hasher to [`HashProvider`].
macro_rules! impl_provider {
    ($ty:ty) => {
        impl crate::hash::HashProvider for $ty {
            fn algorithm(&self) -> crate::hash::Algorithm {
                self.algorithm
            }

            fn update(&mut self, data: &[u8]) {
                <$ty>::update(self, data);
            }

            fn digest(self: Box<Self>) -> crate::hash::HashDigest {
                crate::hash::HashDigest::new((*self).finalize())
            }
        }
    };
}

pub(crate) use impl_provider;

#[cfg(test)]
fn one_shot(algorithm: Algorithm, data: &[u8]) -> super::HashDigest {
    let mut provider = create(algorithm);
    provider.update(data);
    provider.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_buffer_counts_blocks() {
        let mut buffer = BlockBuffer::<4>::new();
        let mut seen = Vec::new();
        buffer.update(b"abcdefghij", |b| seen.push(*b));
        buffer.update(b"kl", |b| seen.push(*b));
        assert_eq!(seen, vec![*b"abcd", *b"efgh", *b"ijkl"]);
        assert_eq!(buffer.filled, 0);
    }

    #[test]
    fn test_split_updates_match_one_shot() {
        let data: Vec<u8> = (0..777u32).map(|i| (i % 251) as u8).collect();
        for alg in Algorithm::ALL {
            let mut provider = create(alg);
            for piece in data.chunks(37) {
                provider.update(piece);
            }
            assert_eq!(provider.digest(), one_shot(alg, &data), "{alg}");
        }
    }

    #[test]
    fn test_padding_boundaries() {
        // Lengths around the point where the length trailer spills into a new block.
        for len in [55usize, 56, 63, 64, 111, 112, 127, 128] {
            let data = vec![0x61u8; len];
            for alg in Algorithm::ALL {
                let mut provider = create(alg);
                provider.update(&data[..len / 2]);
                provider.update(&data[len / 2..]);
                assert_eq!(provider.digest(), one_shot(alg, &data), "{alg} len {len}");
            }
        }
    }
}
