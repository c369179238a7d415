//! Random-number generation engine for Rollcast.
//!
//! This crate turns a resolved [`rollcast_core::RunConfig`] into output:
//! it builds the requested PRNG engine, drives the uncapped or forced
//! generation loop, and writes values, statistics and the flags dump.

pub mod engine;
pub mod errors;
pub mod model;
pub mod rng;
pub mod sampler;

pub use engine::RollEngine;
pub use errors::GenerateError;
pub use model::RollReport;
pub use rng::{BadRandom, build_engine};
pub use sampler::Sampler;
