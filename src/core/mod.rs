// src/core/mod.rs

pub mod database;
pub mod error;
pub mod modulus;
pub mod reporter;
pub mod residue_classifier;
pub mod static_random;
pub mod witness_sampler;

pub use database::WitnessDatabase;
pub use error::{QrdbError, Result};
pub use modulus::{generate_prime, Modulus};
pub use residue_classifier::{classify, ResidueClasses};
pub use static_random::StaticRandom;
pub use witness_sampler::{sample, sample_from, Selection};
