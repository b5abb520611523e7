//! Shared helpers for integration tests.

#![allow(dead_code)]

use polycrc::Word;

/// A 4-bit input word.
///
/// Lets the big-table divider group four words into a 16-bit table, which is
/// cheap to build, where four bytes would need a 32-bit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nibble(pub u8);

impl Word for Nibble {
    const BITS: u32 = 4;

    fn to_u128(self) -> u128 {
        u128::from(self.0 & 0x0F)
    }
}

/// Split bytes into nibbles, high nibble first.
pub fn nibbles(data: &[u8]) -> Vec<Nibble> {
    data.iter()
        .flat_map(|&byte| [Nibble(byte >> 4), Nibble(byte & 0x0F)])
        .collect()
}

/// Reproducible pseudo-random bytes.
pub fn pseudo_random(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        // Linear congruential generator
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}
