//! Standard Cauchy distribution.

use rv_core::{Real, Result, Settings};
use std::f64::consts::PI;

use crate::random_numbers::UniformRng;
use crate::variates::{cauchy, try_cauchy};

/// Standard Cauchy distribution (location 0, scale 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct CauchyDistribution;

impl CauchyDistribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `1 / (π (1 + x²))`
    pub fn pdf(&self, x: Real) -> Real {
        1.0 / (PI * (1.0 + x * x))
    }

    /// `1/2 + atan(x)/π`
    pub fn cdf(&self, x: Real) -> Real {
        0.5 + x.atan() / PI
    }

    /// Draw a variate by the ratio-of-uniforms method. A zero denominator
    /// yields `f64::MAX`.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        cauchy(rng)
    }

    /// Draw a variate, honouring the rejection cap in [`Settings`].
    pub fn try_sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        match Settings::instance().rejection_limit() {
            Some(limit) => try_cauchy(rng, limit),
            None => Ok(cauchy(rng)),
        }
    }
}
