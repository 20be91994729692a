// src/core/witness_sampler.rs

use std::collections::HashSet;

use log::{debug, info};
use num::BigInt;

use crate::core::error::{QrdbError, Result};
use crate::core::modulus::Modulus;
use crate::core::residue_classifier::ResidueClasses;
use crate::integer_math::quadratic_residue::QuadraticResidue;
use crate::core::static_random::StaticRandom;

/// A witness set of `n` values: `n-1` distinct quadratic residues followed by one non-residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_qrs: Vec<BigInt>,
    selected_qnr: BigInt,
}

impl Selection {
    /// QRs in the order they were drawn.
    pub fn selected_qrs(&self) -> &[BigInt] {
        &self.selected_qrs
    }

    pub fn selected_qnr(&self) -> &BigInt {
        &self.selected_qnr
    }

    /// Total witness-set size n.
    pub fn size(&self) -> usize {
        self.selected_qrs.len() + 1
    }

    /// Re-checks the selection against p with Euler's criterion, independently of
    /// the Legendre symbol used to classify: QRs distinct residues, the last pick a non-residue.
    pub fn is_valid_for(&self, modulus: &Modulus) -> bool {
        let p = modulus.value();
        let distinct: HashSet<&BigInt> = self.selected_qrs.iter().collect();

        distinct.len() == self.selected_qrs.len()
            && self
                .selected_qrs
                .iter()
                .all(|a| QuadraticResidue::is_quadratic_residue(a, p))
            && QuadraticResidue::euler_criterion(&self.selected_qnr, p) == -1
    }
}

/// Checks that `n - 1` distinct QRs and one QNR can be drawn.
pub fn validate_request(qr_count: usize, qnr_count: usize, n: usize) -> Result<()> {
    if n < 2 {
        return Err(QrdbError::invalid(format!("database size n = {} must be at least 2", n)));
    }
    if n - 1 > qr_count {
        return Err(QrdbError::invalid(format!(
            "n - 1 = {} exceeds the {} quadratic residues available",
            n - 1,
            qr_count
        )));
    }
    if qnr_count == 0 {
        return Err(QrdbError::invalid("no quadratic non-residue to select"));
    }
    Ok(())
}

pub fn sample(classes: &ResidueClasses, n: usize, rng: &mut StaticRandom) -> Result<Selection> {
    sample_from(classes.qr(), classes.qnr(), n, rng)
}

/// Draws `n-1` QRs without replacement and one QNR, each uniformly.
///
/// QR positions come from a partial Fisher-Yates shuffle over indices, so the
/// draw finishes after exactly `n-1` steps.
pub fn sample_from(
    qr: &[BigInt],
    qnr: &[BigInt],
    n: usize,
    rng: &mut StaticRandom,
) -> Result<Selection> {
    validate_request(qr.len(), qnr.len(), n)?;

    let wanted = n - 1;
    let mut indices: Vec<usize> = (0..qr.len()).collect();
    let mut selected_qrs = Vec::with_capacity(wanted);

    for i in 0..wanted {
        let j = rng.next_range(i, indices.len());
        indices.swap(i, j);
        selected_qrs.push(qr[indices[i]].clone());
    }

    let qnr_index = rng.next_index(qnr.len());
    let selected_qnr = qnr[qnr_index].clone();

    debug!("Selected QR indices: {:?}", &indices[..wanted]);
    info!("Selected {} QRs and QNR {}", wanted, selected_qnr);

    Ok(Selection {
        selected_qrs,
        selected_qnr,
    })
}
