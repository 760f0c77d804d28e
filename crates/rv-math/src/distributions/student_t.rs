//! Student-t distribution with two degrees of freedom.

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::student_t2;

/// Student-t with ν = 2, which has closed-form density, CDF and quantile.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentT2Distribution;

impl StudentT2Distribution {
    /// Create the distribution.
    pub fn new() -> Self {
        Self
    }

    /// `(2 + x²)^{-3/2}`
    pub fn pdf(&self, x: Real) -> Real {
        (2.0 + x * x).powf(-1.5)
    }

    /// `1/2 + x / (2√(2 + x²))`.
    ///
    /// The lower tail is evaluated as `1 / (s (s + |x|))` with
    /// `s = √(2 + x²)`, which avoids the cancellation of the direct form.
    pub fn cdf(&self, x: Real) -> Real {
        let s = (2.0 + x * x).sqrt();
        let lower = 1.0 / (s * (s + x.abs()));
        if x < 0.0 {
            lower
        } else {
            1.0 - lower
        }
    }

    /// Draw a variate by inversion.
    pub fn sample<R: UniformRng + ?Sized>(&self, rng: &mut R) -> Real {
        student_t2(rng)
    }
}
