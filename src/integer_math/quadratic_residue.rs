// src/integer_math/quadratic_residue.rs

use num::{BigInt, Integer, One, Zero};

pub struct QuadraticResidue;

impl QuadraticResidue {
    // a^(p-1)/2 ≡ 1 (mod p)
    pub fn is_quadratic_residue(a: &BigInt, p: &BigInt) -> bool {
        Self::euler_criterion(a, p) == 1
    }

    /// Euler's criterion mapped onto the Legendre symbol's values: 1, -1 (a^(p-1)/2 ≡ p-1), or 0.
    ///
    /// Only meaningful for an odd prime p. Any other residue of the power is reported as 0.
    pub fn euler_criterion(a: &BigInt, p: &BigInt) -> i32 {
        let reduced = a.mod_floor(p);
        if reduced.is_zero() {
            return 0;
        }

        let quotient = (p - 1) / 2;
        let mod_pow = reduced.modpow(&quotient, p);
        if mod_pow.is_one() {
            1
        } else if mod_pow == p - 1 {
            -1
        } else {
            0
        }
    }
}
