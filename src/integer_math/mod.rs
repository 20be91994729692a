// src/integer_math/mod.rs

pub mod legendre;
pub mod prime_factory;
pub mod primality;
pub mod quadratic_residue;
