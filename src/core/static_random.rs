// src/core/static_random.rs

use chrono::Utc;
use log::debug;
use num::BigUint;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single pseudo-random source of a run.
///
/// Seeded once and passed by `&mut` through every stage that draws, so a run
/// can be replayed from its seed.
pub struct StaticRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn from_seed(seed: u64) -> Self {
        StaticRandom {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock.
    pub fn from_time() -> Self {
        let seed = Utc::now().timestamp_micros() as u64;
        debug!("Seeding random source from time: {}", seed);
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be nonzero.
    pub fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn next_range(&mut self, min_value: usize, max_value: usize) -> usize {
        self.rng.random_range(min_value..max_value)
    }

    pub fn next_bytes(&mut self, bytes: &mut [u8]) {
        self.rng.fill_bytes(bytes);
    }

    /// Uniform integer in `[0, 2^bit_length)`.
    pub fn next_bits(&mut self, bit_length: u32) -> BigUint {
        if bit_length == 0 {
            return BigUint::default();
        }

        let byte_len = bit_length.div_ceil(8) as usize;
        let mut buffer = vec![0u8; byte_len];
        self.next_bytes(&mut buffer);

        let excess = byte_len as u32 * 8 - bit_length;
        buffer[0] &= 0xFFu8 >> excess;

        BigUint::from_bytes_be(&buffer)
    }
}
