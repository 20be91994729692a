// src/integer_math/prime_factory.rs

use num::{BigInt, Integer};
use log::trace;
use crate::core::error::{QrdbError, Result};
use crate::integer_math::primality::Primality;

/// Upper bound on odd candidates examined by a single next-prime search.
pub const MAX_PRIME_SEARCH_STEPS: usize = 1_000_000;

pub struct PrimeFactory;

impl PrimeFactory {
    /// Smallest odd prime >= max(from_value, 3).
    pub fn get_next_odd_prime(from_value: &BigInt) -> Result<BigInt> {
        Self::get_next_odd_prime_bounded(from_value, MAX_PRIME_SEARCH_STEPS)
    }

    pub fn get_next_odd_prime_bounded(from_value: &BigInt, max_steps: usize) -> Result<BigInt> {
        let three = BigInt::from(3);
        let mut result = if from_value < &three { three } else { from_value.clone() };
        if result.is_even() {
            result += 1;
        }

        for step in 0..max_steps {
            if Primality::is_probable_prime(&result) {
                trace!("Next prime {} found after {} odd candidates", result, step + 1);
                return Ok(result);
            }
            result += 2;
        }

        Err(QrdbError::PrimeSearchExhausted {
            start: from_value.to_string(),
            steps: max_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(v: i64) -> BigInt {
        PrimeFactory::get_next_odd_prime(&BigInt::from(v)).unwrap()
    }

    #[test]
    fn test_small_starts_round_up_to_three() {
        assert_eq!(next(0), BigInt::from(3));
        assert_eq!(next(1), BigInt::from(3));
        assert_eq!(next(2), BigInt::from(3));
        assert_eq!(next(3), BigInt::from(3));
    }

    #[test]
    fn test_prime_start_is_kept() {
        assert_eq!(next(11), BigInt::from(11));
        assert_eq!(next(1009), BigInt::from(1009));
    }

    #[test]
    fn test_composite_start_advances() {
        assert_eq!(next(12), BigInt::from(13));
        assert_eq!(next(24), BigInt::from(29));
        assert_eq!(next(1000), BigInt::from(1009));
    }

    #[test]
    fn test_search_bound_is_enforced() {
        // 114..=126 holds no prime; three steps examine 115, 117 and 119
        let err = PrimeFactory::get_next_odd_prime_bounded(&BigInt::from(114), 3).unwrap_err();
        match err {
            QrdbError::PrimeSearchExhausted { start, steps } => {
                assert_eq!(start, "114");
                assert_eq!(steps, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
