//! Standard Weibull distribution.

use rv_core::{ensure, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::weibull;

/// Weibull distribution with shape `a` and unit scale.
#[derive(Debug, Clone, Copy)]
pub struct WeibullDistribution {
    a: Real,
}

impl WeibullDistribution {
    /// Create a Weibull distribution with shape `a > 0`.
    pub fn new(a: Real) -> Result<Self> {
        ensure!(
            a > 0.0 && a.is_finite(),
            "Weibull shape must be positive and finite, got {a}"
        );
        Ok(Self { a })
    }

    /// Shape parameter.
    pub fn a(&self) -> Real {
        self.a
    }

    /// `a x^{a-1} exp(-x^a)`, evaluated in the log domain.
    ///
    /// At `x = 0` the density is `+∞`, 1 or 0 for `a` below, equal to or
    /// above one.
    pub fn pdf(&self, x: Real) -> Real {
        let a = self.a;
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match a.partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => Real::INFINITY,
                Some(std::cmp::Ordering::Equal) => 1.0,
                _ => 0.0,
            };
        }
        let ln_x = x.ln();
        (a.ln() + (a - 1.0) * ln_x - (a * ln_x).exp()).exp()
    }

    /// `1 - exp(-x^a)`
    pub fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x.powf(self.a)).exp_m1()
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        weibull(rng, self.a)
    }
}
