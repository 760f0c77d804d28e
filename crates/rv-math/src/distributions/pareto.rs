//! Pareto distribution with unit minimum.

use rv_core::{ensure, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::pareto;

/// Pareto distribution with shape `a` supported on `[1, ∞)`.
#[derive(Debug, Clone, Copy)]
pub struct ParetoDistribution {
    a: Real,
}

impl ParetoDistribution {
    /// Create a Pareto distribution with shape `a > 0`.
    pub fn new(a: Real) -> Result<Self> {
        ensure!(
            a > 0.0 && a.is_finite(),
            "Pareto shape must be positive and finite, got {a}"
        );
        Ok(Self { a })
    }

    /// Shape parameter.
    pub fn a(&self) -> Real {
        self.a
    }

    /// `a x^{-a-1}` for `x ≥ 1`.
    pub fn pdf(&self, x: Real) -> Real {
        if x < 1.0 {
            return 0.0;
        }
        (self.a.ln() - (self.a + 1.0) * x.ln()).exp()
    }

    /// `1 - x^{-a}`
    pub fn cdf(&self, x: Real) -> Real {
        if x <= 1.0 {
            return 0.0;
        }
        -(-self.a * x.ln()).exp_m1()
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        pareto(rng, self.a)
    }
}
