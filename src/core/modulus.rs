// src/core/modulus.rs

use std::fmt;

use log::{debug, info};
use num::{BigInt, Integer, ToPrimitive};

use crate::core::error::{QrdbError, Result};
use crate::core::static_random::StaticRandom;
use crate::integer_math::prime_factory::PrimeFactory;
use crate::integer_math::primality::Primality;

/// Smallest bit length that can yield an odd prime.
pub const MIN_BIT_LENGTH: u32 = 2;

/// Largest bit length accepted. Classification is linear in p.
pub const MAX_BIT_LENGTH: u32 = 24;

/// An odd prime modulus p > 2. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modulus(BigInt);

impl Modulus {
    pub fn new(p: BigInt) -> Result<Self> {
        if p < BigInt::from(3) || p.is_even() || !Primality::is_probable_prime(&p) {
            return Err(QrdbError::invalid(format!("modulus {} is not an odd prime", p)));
        }
        Ok(Modulus(p))
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// (p - 1) / 2, the size of each residue class.
    pub fn half_order(&self) -> BigInt {
        (&self.0 - 1) / 2
    }

    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_bit_length(bit_length: u32) -> Result<()> {
    if bit_length < MIN_BIT_LENGTH {
        return Err(QrdbError::invalid(format!(
            "bit length {} only admits p = 2; at least {} bits are required",
            bit_length, MIN_BIT_LENGTH
        )));
    }
    if bit_length > MAX_BIT_LENGTH {
        return Err(QrdbError::invalid(format!(
            "bit length {} exceeds the maximum of {} for exhaustive classification",
            bit_length, MAX_BIT_LENGTH
        )));
    }
    Ok(())
}

/// Draws a uniform value in `[0, 2^bit_length)` and rounds it up to the next odd prime.
pub fn generate_prime(bit_length: u32, rng: &mut StaticRandom) -> Result<Modulus> {
    validate_bit_length(bit_length)?;

    let candidate = BigInt::from(rng.next_bits(bit_length));
    debug!("Random {}-bit candidate: {}", bit_length, candidate);

    let modulus = Modulus::new(PrimeFactory::get_next_odd_prime(&candidate)?)?;
    info!("Generated prime modulus p = {} ({} bits)", modulus, modulus.bits());

    Ok(modulus)
}
