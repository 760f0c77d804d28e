//! Exponential distribution.

use rv_core::{ensure, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::exponential;

/// Exponential distribution parameterised by its mean `mu`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialDistribution {
    mu: Real,
}

impl ExponentialDistribution {
    /// Create an exponential distribution with mean `mu > 0`.
    pub fn new(mu: Real) -> Result<Self> {
        ensure!(
            mu > 0.0 && mu.is_finite(),
            "exponential mean must be positive and finite, got {mu}"
        );
        Ok(Self { mu })
    }

    /// Mean.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        (-x / self.mu).exp() / self.mu
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x / self.mu).exp_m1()
    }

    /// Draw a variate: `mu * E` with `E` standard exponential.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        self.mu * exponential(rng)
    }
}
