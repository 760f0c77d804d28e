//! Uniform distribution on the unit interval.

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::uniform;

/// Uniform(0, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformDistribution;

impl UniformDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> Real {
        if (0.0..=1.0).contains(&x) {
            1.0
        } else {
            0.0
        }
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: Real) -> Real {
        x.clamp(0.0, 1.0)
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        uniform(rng)
    }
}
