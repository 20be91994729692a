// src/core/residue_classifier.rs

use log::{debug, info, trace};
use num::{BigInt, One};

use crate::core::error::{QrdbError, Result};
use crate::core::modulus::Modulus;
use crate::integer_math::legendre::Legendre;

/// The partition of `{1, ..., p-1}` into quadratic residues and non-residues.
///
/// Both sequences are ascending. The struct is read-only after `classify`
/// returns; the sampler borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueClasses {
    modulus: Modulus,
    qr: Vec<BigInt>,
    qnr: Vec<BigInt>,
}

impl ResidueClasses {
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    pub fn qr(&self) -> &[BigInt] {
        &self.qr
    }

    pub fn qnr(&self) -> &[BigInt] {
        &self.qnr
    }

    /// Smallest quadratic non-residue mod p.
    pub fn least_non_residue(&self) -> Option<&BigInt> {
        self.qnr.first()
    }

    /// Checks the partition law: each of `1..p` appears exactly once across
    /// the two classes, and each class holds `(p-1)/2` elements.
    pub fn is_complete(&self) -> bool {
        let half = self.modulus.half_order();
        if BigInt::from(self.qr.len()) != half || BigInt::from(self.qnr.len()) != half {
            return false;
        }

        // Merge the two ascending runs and expect 1, 2, ..., p-1
        let mut expected = BigInt::one();
        let (mut i, mut j) = (0, 0);
        while i < self.qr.len() || j < self.qnr.len() {
            let next = match (self.qr.get(i), self.qnr.get(j)) {
                (Some(a), Some(b)) if a < b => {
                    i += 1;
                    a
                }
                (Some(_), Some(b)) => {
                    j += 1;
                    b
                }
                (Some(a), None) => {
                    i += 1;
                    a
                }
                (None, Some(b)) => {
                    j += 1;
                    b
                }
                (None, None) => break,
            };
            if next != &expected {
                return false;
            }
            expected += 1;
        }

        &expected == self.modulus.value()
    }
}

/// Partitions the nonzero residues mod p by the sign of the Legendre symbol.
pub fn classify(modulus: &Modulus) -> Result<ResidueClasses> {
    let p = modulus.value();
    let capacity = modulus.to_u64().map(|v| (v / 2) as usize).unwrap_or(0);
    let mut qr = Vec::with_capacity(capacity);
    let mut qnr = Vec::with_capacity(capacity);

    info!("Classifying residues 1..{}", p);

    let mut a = BigInt::one();
    while &a < p {
        match Legendre::symbol(&a, p)? {
            1 => {
                trace!("{} is a QR mod {}", a, p);
                qr.push(a.clone());
            }
            -1 => {
                trace!("{} is a QNR mod {}", a, p);
                qnr.push(a.clone());
            }
            _ => {
                return Err(QrdbError::invalid(format!(
                    "{} shares a factor with modulus {}",
                    a, p
                )));
            }
        }
        a += 1;
    }

    debug!("|QR| = {}, |QNR| = {}", qr.len(), qnr.len());

    Ok(ResidueClasses {
        modulus: modulus.clone(),
        qr,
        qnr,
    })
}
