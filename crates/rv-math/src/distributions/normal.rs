//! Normal (Gaussian) distribution.

use rv_core::{ensure, Real, Result, Settings};
use std::f64::consts::{PI, SQRT_2};

use crate::random_numbers::UniformRng;
use crate::special_functions::erfc;
use crate::variates::PolarMarsaglia;

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x), via `erfc`
/// so that the lower tail keeps full relative precision.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x / SQRT_2)
}

/// Normal distribution N(`mean`, `sd`²).
///
/// Owns a [`PolarMarsaglia`] generator, so sampling takes `&mut self` and
/// every second call is served from the generator's cache.
#[derive(Debug, Clone)]
pub struct GaussianDistribution {
    mean: Real,
    sd: Real,
    generator: PolarMarsaglia,
}

impl GaussianDistribution {
    /// Create N(`mean`, `sd`²). `sd` must be positive and finite.
    pub fn new(mean: Real, sd: Real) -> Result<Self> {
        ensure!(mean.is_finite(), "mean must be finite, got {mean}");
        ensure!(
            sd > 0.0 && sd.is_finite(),
            "standard deviation must be positive and finite, got {sd}"
        );
        Ok(Self {
            mean,
            sd,
            generator: PolarMarsaglia::new(),
        })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            sd: 1.0,
            generator: PolarMarsaglia::new(),
        }
    }

    /// Mean μ.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Standard deviation σ.
    pub fn sd(&self) -> Real {
        self.sd
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> Real {
        normal_pdf((x - self.mean) / self.sd) / self.sd
    }

    /// Cumulative distribution function P(X ≤ x).
    pub fn cdf(&self, x: Real) -> Real {
        normal_cdf((x - self.mean) / self.sd)
    }

    /// Draw a variate.
    pub fn sample<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Real {
        self.generator.sample_scaled(rng, self.mean, self.sd)
    }

    /// Draw a variate, honouring the rejection cap in [`Settings`].
    pub fn try_sample<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Result<Real> {
        let z = match Settings::instance().rejection_limit() {
            Some(limit) => self.generator.try_sample(rng, limit)?,
            None => self.generator.sample(rng),
        };
        Ok(self.mean + self.sd * z)
    }
}
