//! Chi-square distribution.

use rv_core::{ensure, Real, Result};
use std::f64::consts::LN_2;

use crate::random_numbers::UniformRng;
use crate::special_functions::{log_gamma, regularized_lower_gamma};
use crate::variates::chi_square;

/// Chi-square distribution with `n` (possibly fractional) degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareDistribution {
    n: Real,
}

impl ChiSquareDistribution {
    /// Create a chi-square distribution with `n > 0` degrees of freedom.
    pub fn new(n: Real) -> Result<Self> {
        ensure!(
            n > 0.0 && n.is_finite(),
            "degrees of freedom must be positive and finite, got {n}"
        );
        Ok(Self { n })
    }

    /// Degrees of freedom.
    pub fn degrees_of_freedom(&self) -> Real {
        self.n
    }

    /// Probability density function, evaluated in the log domain.
    pub fn pdf(&self, x: Real) -> Real {
        let k = 0.5 * self.n;
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match k.partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => Real::INFINITY,
                Some(std::cmp::Ordering::Equal) => 0.5,
                _ => 0.0,
            };
        }
        ((k - 1.0) * x.ln() - 0.5 * x - k * LN_2 - log_gamma(k)).exp()
    }

    /// `P(n/2, x/2)`, the regularized lower incomplete gamma function.
    pub fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        if x == Real::INFINITY {
            return 1.0;
        }
        regularized_lower_gamma(0.5 * self.n, 0.5 * x)
    }

    /// Draw a variate as twice a Gamma(n/2) deviate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        chi_square(rng, self.n)
    }
}
