//! Gumbel (extreme value type I) distributions for maxima and minima.

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::{gumbel_max, gumbel_min};

/// Standard Gumbel distribution for maxima.
#[derive(Debug, Clone, Copy, Default)]
pub struct GumbelMaxDistribution;

impl GumbelMaxDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `exp(-x - e^{-x})`
    pub fn pdf(&self, x: Real) -> Real {
        (-x - (-x).exp()).exp()
    }

    /// `exp(-e^{-x})`
    pub fn cdf(&self, x: Real) -> Real {
        (-(-x).exp()).exp()
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        gumbel_max(rng)
    }
}

/// Standard Gumbel distribution for minima, the mirror image of
/// [`GumbelMaxDistribution`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GumbelMinDistribution;

impl GumbelMinDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `exp(x - e^{x})`
    pub fn pdf(&self, x: Real) -> Real {
        (x - x.exp()).exp()
    }

    /// `1 - exp(-e^{x})`
    pub fn cdf(&self, x: Real) -> Real {
        -(-x.exp()).exp_m1()
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        gumbel_min(rng)
    }
}
