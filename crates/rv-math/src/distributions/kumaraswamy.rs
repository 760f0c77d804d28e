//! Kumaraswamy distribution on the unit interval.

use rv_core::{ensure, Real, Result};

use crate::random_numbers::UniformRng;
use crate::variates::kumaraswamy;

/// Kumaraswamy(`a`, `b`), a beta-like law with closed-form CDF and quantile.
#[derive(Debug, Clone, Copy)]
pub struct KumaraswamyDistribution {
    a: Real,
    b: Real,
}

impl KumaraswamyDistribution {
    /// Create a Kumaraswamy distribution with shapes `a, b > 0`.
    pub fn new(a: Real, b: Real) -> Result<Self> {
        ensure!(
            a > 0.0 && a.is_finite(),
            "Kumaraswamy shape a must be positive and finite, got {a}"
        );
        ensure!(
            b > 0.0 && b.is_finite(),
            "Kumaraswamy shape b must be positive and finite, got {b}"
        );
        Ok(Self { a, b })
    }

    /// First shape parameter.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Second shape parameter.
    pub fn b(&self) -> Real {
        self.b
    }

    /// `a b x^{a-1} (1 - x^a)^{b-1}` on `[0, 1]`.
    pub fn pdf(&self, x: Real) -> Real {
        let (a, b) = (self.a, self.b);
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        if x == 0.0 || x == 1.0 {
            // powf(0, 0) == 1 gives the right endpoint limits
            return a * b * x.powf(a - 1.0) * (1.0 - x.powf(a)).powf(b - 1.0);
        }
        let ln_x = x.ln();
        let ln_tail = (-(a * ln_x).exp()).ln_1p();
        ((a * b).ln() + (a - 1.0) * ln_x + (b - 1.0) * ln_tail).exp()
    }

    /// `1 - (1 - x^a)^b`
    pub fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        -(self.b * (-x.powf(self.a)).ln_1p()).exp_m1()
    }

    /// Draw a variate by inversion.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        kumaraswamy(rng, self.a, self.b)
    }
}
