// src/integer_math/legendre.rs

use num::{BigInt, Integer, One, Zero};
use crate::core::error::{QrdbError, Result};

pub struct Legendre;

impl Legendre {
    /// Legendre Symbol returns 1 for a (nonzero) quadratic residue mod p, -1 for a
    /// non-quadratic residue (non-residue), or 0 when p | a.
    ///
    /// Computed with the binary reciprocity algorithm, so for an odd composite
    /// modulus the result is the Jacobi symbol instead. The modulus must be odd and >= 3.
    pub fn symbol(a: &BigInt, p: &BigInt) -> Result<i32> {
        if p < &BigInt::from(3) || p.is_even() {
            return Err(QrdbError::invalid(format!(
                "Legendre symbol needs an odd modulus >= 3, but got {}",
                p
            )));
        }

        let mut a = a.mod_floor(p);
        let mut n = p.clone();
        let mut result = 1;

        while !a.is_zero() {
            // (2/n) = -1 exactly when n = 3 or 5 mod 8
            while a.is_even() {
                a >>= 1;
                let r = low_bits(&n, 7);
                if r == 3 || r == 5 {
                    result = -result;
                }
            }

            std::mem::swap(&mut a, &mut n);

            // quadratic reciprocity flips the sign when both are 3 mod 4
            if low_bits(&a, 3) == 3 && low_bits(&n, 3) == 3 {
                result = -result;
            }
            a = a.mod_floor(&n);
        }

        if n.is_one() {
            Ok(result)
        } else {
            Ok(0)
        }
    }
}

fn low_bits(value: &BigInt, mask: u32) -> u32 {
    let (_, digits) = value.to_u32_digits();
    digits.first().copied().unwrap_or(0) & mask
}
