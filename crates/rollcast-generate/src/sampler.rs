use rand::RngCore;
use rand::distr::{Distribution, Uniform};

use rollcast_core::RunConfig;

use crate::errors::GenerateError;
use crate::rng;

/// A stateful sampler: one catalog engine feeding one closed-interval
/// uniform distribution. Every raw value in a run comes from
/// [`Sampler::draw`].
pub struct Sampler {
    engine: Box<dyn RngCore>,
    distribution: Uniform<f64>,
}

impl Sampler {
    /// Builds the engine named by the configuration and a uniform
    /// distribution over `[lbound, ubound]`.
    ///
    /// The bounds are already ordered by validation; non-finite bounds
    /// still fail here, as a runtime error.
    pub fn new(config: &RunConfig) -> Result<Sampler, GenerateError> {
        let distribution = Uniform::new_inclusive(config.lbound, config.ubound)?;
        Ok(Sampler {
            engine: rng::build_engine(config.generator, config.seed),
            distribution,
        })
    }

    /// Draws the next raw value.
    pub fn draw(&mut self) -> f64 {
        self.distribution.sample(&mut self.engine)
    }
}
