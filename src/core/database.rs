// src/core/database.rs

use log::info;

use crate::config::QrdbConfig;
use crate::core::error::Result;
use crate::core::modulus::{generate_prime, Modulus};
use crate::core::residue_classifier::{classify, ResidueClasses};
use crate::core::static_random::StaticRandom;
use crate::core::witness_sampler::{sample, Selection};

/// Output of one run: the modulus, its residue classes and the sampled witness set.
#[derive(Debug, Clone)]
pub struct WitnessDatabase {
    pub classes: ResidueClasses,
    pub selection: Selection,
    pub seed: u64,
}

impl WitnessDatabase {
    /// Runs generator → classifier → sampler.
    pub fn build(config: &QrdbConfig, rng: &mut StaticRandom) -> Result<Self> {
        config.validate()?;

        let modulus = generate_prime(config.bit_length, rng)?;
        Self::build_for_modulus(&modulus, config.database_size, rng)
    }

    /// Classifier and sampler stages for a caller-supplied modulus.
    pub fn build_for_modulus(
        modulus: &Modulus,
        database_size: usize,
        rng: &mut StaticRandom,
    ) -> Result<Self> {
        let classes = classify(modulus)?;
        let selection = sample(&classes, database_size, rng)?;

        info!(
            "Built witness database of size {} over p = {}",
            selection.size(),
            modulus
        );

        Ok(WitnessDatabase {
            classes,
            selection,
            seed: rng.seed(),
        })
    }

    pub fn modulus(&self) -> &Modulus {
        self.classes.modulus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn test_build_from_config() {
        // 16 bits keeps p above 19, and so |QR| >= 9, for all but a handful of draws
        let config = QrdbConfig { bit_length: 16, seed: Some(10), ..QrdbConfig::default() };
        let mut rng = StaticRandom::from_seed(10);
        let db = WitnessDatabase::build(&config, &mut rng).unwrap();

        assert_eq!(db.selection.size(), 10);
        assert!(db.classes.is_complete());
        assert_eq!(db.seed, 10);
    }

    #[test]
    fn test_build_for_modulus_11() {
        let modulus = Modulus::new(BigInt::from(11)).unwrap();
        let mut rng = StaticRandom::from_seed(4);
        let db = WitnessDatabase::build_for_modulus(&modulus, 4, &mut rng).unwrap();

        assert_eq!(db.modulus(), &modulus);
        assert_eq!(db.selection.selected_qrs().len(), 3);
    }

    #[test]
    fn test_build_rejects_oversized_request() {
        let modulus = Modulus::new(BigInt::from(11)).unwrap();
        let mut rng = StaticRandom::from_seed(4);
        let err = WitnessDatabase::build_for_modulus(&modulus, 7, &mut rng).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_build_rejects_one_bit_modulus() {
        let config = QrdbConfig { bit_length: 1, ..QrdbConfig::default() };
        let mut rng = StaticRandom::from_seed(4);
        assert!(WitnessDatabase::build(&config, &mut rng).unwrap_err().is_invalid_configuration());
    }
}
