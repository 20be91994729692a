// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;
