//! SHA-3 (FIPS 202) over Keccak-f[1600].

use super::BlockBuffer;
use crate::hash::{Algorithm, HashDigest, HashProvider};

const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

// Rho rotations, in the order lanes are visited by the pi permutation.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

const DOMAIN_SHA3: u8 = 0x06;

/// SHA-3 with a sponge rate of `RATE` bytes. The output length is
/// `(200 - RATE) / 2`.
#[derive(Debug, Clone)]
pub(crate) struct Sha3<const RATE: usize> {
    algorithm: Algorithm,
    state: [u64; 25],
    buffer: BlockBuffer<RATE>,
}

impl<const RATE: usize> Sha3<RATE> {
    pub(crate) const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: [0; 25],
            buffer: BlockBuffer::new(),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        self.buffer.update(data, |block| absorb(&mut self.state, block));
    }

    pub(crate) fn finalize(mut self) -> Vec<u8> {
        self.buffer
            .finish_sponge(DOMAIN_SHA3, |block| absorb(&mut self.state, block));
        let output_size = (200 - RATE) / 2;
        self.state
            .iter()
            .flat_map(|lane| lane.to_le_bytes())
            .take(output_size)
            .collect()
    }
}

impl<const RATE: usize> HashProvider for Sha3<RATE> {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        Sha3::update(self, data);
    }

    fn digest(self: Box<Self>) -> HashDigest {
        HashDigest::new((*self).finalize())
    }
}

fn absorb(state: &mut [u64; 25], block: &[u8]) {
    for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(bytes);
        *lane ^= u64::from_le_bytes(le);
    }
    keccak_f(state);
}

fn keccak_f(a: &mut [u64; 25]) {
    for rc in ROUND_CONSTANTS {
        // theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in (0..25).step_by(5) {
                a[y + x] ^= d;
            }
        }

        // rho and pi
        let mut last = a[1];
        for (&j, &r) in PI.iter().zip(RHO.iter()) {
            let next = a[j];
            a[j] = last.rotate_left(r);
            last = next;
        }

        // chi
        for y in (0..25).step_by(5) {
            let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
            for x in 0..5 {
                a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        a[0] ^= rc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of<const RATE: usize>(algorithm: Algorithm, data: &[u8]) -> String {
        let mut hasher = Sha3::<RATE>::new(algorithm);
        hasher.update(data);
        hex::encode(hasher.finalize())
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(
            hex_of::<144>(Algorithm::Sha3_224, b""),
            "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"
        );
        assert_eq!(
            hex_of::<136>(Algorithm::Sha3_256, b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_abc_vectors() {
        assert_eq!(
            hex_of::<136>(Algorithm::Sha3_256, b"abc"),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
        assert_eq!(
            hex_of::<104>(Algorithm::Sha3_384, b"abc"),
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
             98d88cea927ac7f539f1edf228376d25"
        );
        assert_eq!(
            hex_of::<72>(Algorithm::Sha3_512, b"abc"),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        );
    }

    #[test]
    fn test_input_longer_than_rate() {
        let data = vec![0xa3u8; 200];
        let mut split = Sha3::<136>::new(Algorithm::Sha3_256);
        split.update(&data[..135]);
        split.update(&data[135..]);
        assert_eq!(
            hex::encode(split.finalize()),
            hex_of::<136>(Algorithm::Sha3_256, &data)
        );
    }
}
