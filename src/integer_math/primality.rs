// src/integer_math/primality.rs

use num::{BigInt, Integer, One, Zero};

pub struct Primality;

impl Primality {
    const SMALL_PRIMES: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    /// Miller-Rabin over the first fifteen prime bases, after trial division by the same primes.
    ///
    /// Deterministic for every input below 3.3 * 10^24, which covers all moduli
    /// this crate generates.
    pub fn is_probable_prime(input: &BigInt) -> bool {
        if input < &BigInt::from(2) {
            return false;
        }

        for &p in &Self::SMALL_PRIMES {
            let p = BigInt::from(p);
            if input == &p {
                return true;
            }
            if (input % &p).is_zero() {
                return false;
            }
        }

        let n_minus_one: BigInt = input - 1;
        let mut d = n_minus_one.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        let two = BigInt::from(2);
        'witness: for &a in &Self::SMALL_PRIMES {
            let mut x = BigInt::from(a).modpow(&d, input);
            if x.is_one() || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = x.modpow(&two, input);
                if x == n_minus_one {
                    continue 'witness;
                }
                if x.is_one() {
                    return false;
                }
            }
            return false;
        }
        true
    }
}
