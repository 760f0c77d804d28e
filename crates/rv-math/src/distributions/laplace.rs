//! Standard Laplace (double exponential) distribution.

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::laplace;

/// Standard Laplace distribution (location 0, scale 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplaceDistribution;

impl LaplaceDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `exp(-|x|) / 2`
    pub fn pdf(&self, x: Real) -> Real {
        0.5 * (-x.abs()).exp()
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            0.5 * x.exp()
        } else {
            1.0 - 0.5 * (-x).exp()
        }
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        laplace(rng)
    }
}
