// src/config/mod.rs

pub mod qrdb_config;

// Re-export main types for convenience
pub use qrdb_config::{OutputFormat, QrdbConfig};
