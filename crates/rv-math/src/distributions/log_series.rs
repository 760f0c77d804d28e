//! Logarithmic-series distribution on `{1, 2, 3, …}`.

use rv_core::{ensure, Count, Probability, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::log_series;

/// Logarithmic-series distribution with parameter `p`.
#[derive(Debug, Clone, Copy)]
pub struct LogSeriesDistribution {
    p: Probability,
    /// `-1 / ln(1 - p)`
    norm: Real,
}

impl LogSeriesDistribution {
    /// Create a log-series distribution with `0 < p < 1`.
    pub fn new(p: Probability) -> Result<Self> {
        ensure!(p > 0.0 && p < 1.0, "log-series p must lie in (0, 1), got {p}");
        Ok(Self {
            p,
            norm: -1.0 / (-p).ln_1p(),
        })
    }

    /// Parameter `p`.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// `-p^k / (k ln(1 - p))` for `k ≥ 1`.
    pub fn pmf(&self, k: Count) -> Real {
        if k == 0 {
            return 0.0;
        }
        let k = k as Real;
        (k * self.p.ln() - k.ln() + self.norm.ln()).exp()
    }

    /// Partial sum of the pmf up to `k`. The sum stops early once the
    /// remaining terms no longer change it.
    pub fn cdf(&self, k: Count) -> Real {
        let mut power = 1.0;
        let mut sum = 0.0;
        for j in 1..=k {
            power *= self.p;
            let term = power / j as Real;
            sum += term;
            if term <= sum * Real::EPSILON {
                break;
            }
        }
        (self.norm * sum).min(1.0)
    }

    /// Draw a variate by Kemp's method.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Count {
        log_series(rng, self.p)
    }
}
