//! Poisson distribution.

use rv_core::{ensure, Count, Real, Result};

use crate::random_numbers::UniformRng;
use crate::special_functions::{log_gamma, regularized_upper_gamma};
use crate::variates::poisson;

/// Poisson distribution with mean `mu`.
#[derive(Debug, Clone, Copy)]
pub struct PoissonDistribution {
    mu: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with mean `mu > 0`.
    pub fn new(mu: Real) -> Result<Self> {
        ensure!(
            mu > 0.0 && mu.is_finite(),
            "Poisson mean must be positive and finite, got {mu}"
        );
        Ok(Self { mu })
    }

    /// Mean.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// `P(X = k) = exp(k ln mu - mu - ln k!)`
    pub fn pmf(&self, k: Count) -> Real {
        let k = k as Real;
        (k * self.mu.ln() - self.mu - log_gamma(k + 1.0)).exp()
    }

    /// `P(X ≤ k) = Q(k + 1, mu)`
    pub fn cdf(&self, k: Count) -> Real {
        regularized_upper_gamma(k as Real + 1.0, self.mu)
    }

    /// Draw a variate by counting exponential inter-arrival times.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Count {
        poisson(rng, self.mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn poisson_pmf_values() {
        let d = PoissonDistribution::new(2.0).unwrap();
        let e2 = (-2.0_f64).exp();
        assert_abs_diff_eq!(d.pmf(0), e2, epsilon = 1e-15);
        assert_abs_diff_eq!(d.pmf(1), 2.0 * e2, epsilon = 1e-14);
        assert_abs_diff_eq!(d.pmf(3), 8.0 / 6.0 * e2, epsilon = 1e-14);
    }

    #[test]
    fn cdf_is_running_sum_of_pmf() {
        let d = PoissonDistribution::new(3.5).unwrap();
        let mut sum = 0.0;
        for k in 0..15 {
            sum += d.pmf(k);
            assert_abs_diff_eq!(d.cdf(k), sum, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_bad_mean() {
        assert!(PoissonDistribution::new(0.0).is_err());
        assert!(PoissonDistribution::new(Real::INFINITY).is_err());
    }
}
