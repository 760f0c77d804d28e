//! Bernoulli distribution.

use rv_core::{ensure, Count, Probability, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::bernoulli;

/// Bernoulli(`p`): 1 with probability `p`, 0 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct BernoulliDistribution {
    p: Probability,
}

impl BernoulliDistribution {
    /// Create a Bernoulli distribution with `0 ≤ p ≤ 1`.
    pub fn new(p: Probability) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "Bernoulli p must lie in [0, 1], got {p}");
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// Probability mass function.
    pub fn pmf(&self, k: Count) -> Real {
        match k {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        }
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, k: Count) -> Real {
        if k == 0 {
            1.0 - self.p
        } else {
            1.0
        }
    }

    /// Draw a trial.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Count {
        bernoulli(rng, self.p)
    }
}
