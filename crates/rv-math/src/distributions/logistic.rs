//! Standard logistic distribution.

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::logistic;

/// Standard logistic distribution (location 0, scale 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticDistribution;

impl LogisticDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `e^{-|x|} / (1 + e^{-|x|})²`, written in terms of `|x|` so the
    /// exponential never overflows.
    pub fn pdf(&self, x: Real) -> Real {
        let e = (-x.abs()).exp();
        e / ((1.0 + e) * (1.0 + e))
    }

    /// The logistic sigmoid `1 / (1 + e^{-x})`.
    pub fn cdf(&self, x: Real) -> Real {
        if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        }
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        logistic(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn logistic_values() {
        let d = LogisticDistribution::new();
        assert_abs_diff_eq!(d.pdf(0.0), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(d.cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(d.cdf(2.0_f64.ln()), 2.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn far_tails_do_not_overflow() {
        let d = LogisticDistribution::new();
        assert_eq!(d.pdf(1000.0), 0.0);
        assert_eq!(d.cdf(1000.0), 1.0);
        assert_eq!(d.cdf(-1000.0), 0.0);
        assert_relative_eq!(d.cdf(-30.0), (-30.0_f64).exp(), max_relative = 1e-12);
    }
}
