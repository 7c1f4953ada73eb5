//! Deterministic test-vector generation for simulating a hardware matrix
//! multiplication unit.
//!
//! Two independent generators share a fixed-width encoding discipline:
//! [`matrix`] builds a random matrix pair plus its exact product and renders
//! them as `.mif` memory-initialization files, while [`vector`] builds a
//! single random vector pair and renders it as testbench assignment
//! statements. Callers pass the random source in explicitly; [`rng`] provides
//! the fixed-seed source used for reproducible vectors.

pub mod config;
pub mod encode;
pub mod error;
pub mod matrix;
pub mod rng;
pub mod vector;
