//! Geometric distribution on `{0, 1, 2, …}`.

use rv_core::{ensure, Count, Probability, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::geometric;

/// Number of failures before the first success in Bernoulli(`p`) trials.
#[derive(Debug, Clone, Copy)]
pub struct GeometricDistribution {
    p: Probability,
}

impl GeometricDistribution {
    /// Create a geometric distribution with success probability `0 < p < 1`.
    pub fn new(p: Probability) -> Result<Self> {
        ensure!(p > 0.0 && p < 1.0, "geometric p must lie in (0, 1), got {p}");
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// `p (1 - p)^k`
    pub fn pmf(&self, k: Count) -> Real {
        self.p * (k as Real * (-self.p).ln_1p()).exp()
    }

    /// `1 - (1 - p)^{k+1}`
    pub fn cdf(&self, k: Count) -> Real {
        -((k as Real + 1.0) * (-self.p).ln_1p()).exp_m1()
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Count {
        geometric(rng, self.p)
    }
}
