// src/config/qrdb_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use log::warn;

use crate::core::error::Result;
use crate::core::modulus::validate_bit_length;
use crate::core::witness_sampler::validate_request;

/// `validate` warns when `small_modulus_risk` exceeds this.
pub const SMALL_MODULUS_RISK_WARNING: f64 = 0.01;

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run configuration for building a witness database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrdbConfig {
    /// Bit length of the random prime modulus
    pub bit_length: u32,

    /// Total witness-set size n (n-1 QRs plus one QNR)
    pub database_size: usize,

    /// Fixed seed for the random source; seeded from the clock when absent
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Report rendering
    pub output: OutputFormat,
}

impl Default for QrdbConfig {
    fn default() -> Self {
        QrdbConfig {
            bit_length: 10,
            database_size: 10,
            seed: None,
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl QrdbConfig {
    fn builder_with_defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("bit_length", 10i64)?
            .set_default("database_size", 10i64)?
            .set_default("log_level", "info")?
            .set_default("output", "text")
    }

    fn environment() -> Environment {
        // QRDB_BIT_LENGTH, QRDB_DATABASE_SIZE, QRDB_SEED, ...
        Environment::with_prefix("QRDB")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("qrdb.toml").exists() {
            builder = builder.add_source(File::with_name("qrdb.toml"));
        } else if Path::new("qrdb.yaml").exists() {
            builder = builder.add_source(File::with_name("qrdb.yaml"));
        }

        let config = builder.add_source(Self::environment()).build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        let config = builder.add_source(Self::environment()).build()?;
        config.try_deserialize()
    }

    /// Checks everything that can be checked before the prime is known.
    /// `n - 1 <= |QR|` is checked again by the sampler once p is fixed, so
    /// `bit_length` should comfortably exceed `log2(2n)`; see `small_modulus_risk`.
    pub fn validate(&self) -> Result<()> {
        validate_bit_length(self.bit_length)?;
        // Any odd prime has at least one QR and one QNR, so only n >= 2 matters here
        validate_request(usize::MAX, 1, self.database_size)?;

        let risk = self.small_modulus_risk();
        if risk > SMALL_MODULUS_RISK_WARNING {
            warn!(
                "bit length {} leaves little room for n = {}: about {:.1}% of runs \
                 draw a prime below {} and fail; raise bit_length",
                self.bit_length,
                self.database_size,
                risk * 100.0,
                2 * self.database_size - 1
            );
        }
        Ok(())
    }

    /// Approximate chance that the drawn prime is below `2n - 1`, where `n - 1 > |QR|`.
    ///
    /// The candidate is uniform in `[0, 2^bit_length)`, so this is roughly
    /// `(2n - 1) / 2^bit_length`.
    pub fn small_modulus_risk(&self) -> f64 {
        let needed = 2.0 * self.database_size as f64 - 1.0;
        let range = 2f64.powi(self.bit_length.min(1023) as i32);
        (needed / range).min(1.0)
    }
}
