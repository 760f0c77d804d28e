//! Uniform random sources.
//!
//! Every sampler in this crate draws its randomness through the
//! [`UniformRng`] trait. Implementors supply `next_uniform`; the exponential
//! and gamma draws have default implementations built on it and may be
//! overridden by sources that carry faster generators of their own.

mod replay;
mod std_rng;

pub use replay::ReplayUniform;
pub use std_rng::StdUniformRng;

use rand_mt::Mt19937GenRand64;
use rv_core::Real;

/// A source of independent uniform variates on the open interval `(0, 1)`.
///
/// Callers rely on `next_uniform` never returning exactly 0 or 1. A few
/// samplers still guard against a zero draw before taking a logarithm in
/// case an implementation breaks that contract.
pub trait UniformRng {
    /// Next uniform deviate in `(0, 1)`.
    fn next_uniform(&mut self) -> Real;

    /// Next standard exponential deviate (mean 1), by inversion.
    fn exponential_draw(&mut self) -> Real {
        exponential_by_inversion(self.next_uniform())
    }

    /// Next standard gamma deviate with the given `shape` (unit scale).
    ///
    /// Returns NaN when `shape` is not positive.
    fn gamma_draw(&mut self, shape: Real) -> Real {
        crate::variates::gamma::marsaglia_tsang(self, shape)
    }
}

impl<R: UniformRng + ?Sized> UniformRng for &mut R {
    fn next_uniform(&mut self) -> Real {
        (**self).next_uniform()
    }

    fn exponential_draw(&mut self) -> Real {
        (**self).exponential_draw()
    }

    fn gamma_draw(&mut self, shape: Real) -> Real {
        (**self).gamma_draw(shape)
    }
}

/// `-ln(u)`, the inverse exponential CDF applied to `1 - u`.
#[inline]
pub fn exponential_by_inversion(u: Real) -> Real {
    -u.ln()
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// 2⁻⁵².
    const SCALE: Real = 1.0 / 4_503_599_627_370_496.0;

    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "seeding MT19937-64 uniform source");
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformRng for MersenneTwisterUniformRng {
    /// Maps the top 52 bits `k` to `(k + 0.5) / 2⁵²`, which lies strictly
    /// inside `(0, 1)` and is exactly representable.
    fn next_uniform(&mut self) -> Real {
        let k = self.rng.next_u64() >> 12;
        (k as Real + 0.5) * Self::SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mt_open_interval() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!(u > 0.0 && u < 1.0, "draw {u} outside (0, 1)");
        }
    }

    #[test]
    fn mt_is_reproducible() {
        let mut a = MersenneTwisterUniformRng::new(7);
        let mut b = MersenneTwisterUniformRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn mt_extreme_words_stay_inside() {
        let lowest = (0u64 >> 12) as Real + 0.5;
        let highest = (u64::MAX >> 12) as Real + 0.5;
        assert!(lowest * MersenneTwisterUniformRng::SCALE > 0.0);
        assert!(highest * MersenneTwisterUniformRng::SCALE < 1.0);
    }

    #[test]
    fn default_exponential_mean() {
        let mut rng = MersenneTwisterUniformRng::new(3);
        let n = 100_000;
        let mean = (0..n).map(|_| rng.exponential_draw()).sum::<Real>() / n as Real;
        assert!((mean - 1.0).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn default_gamma_rejects_bad_shape() {
        let mut rng = MersenneTwisterUniformRng::new(3);
        assert!(rng.gamma_draw(0.0).is_nan());
        assert!(rng.gamma_draw(-2.0).is_nan());
        assert!(rng.gamma_draw(Real::NAN).is_nan());
    }

    #[test]
    fn borrowed_source_forwards() {
        let mut rng = MersenneTwisterUniformRng::new(11);
        let mut twin = MersenneTwisterUniformRng::new(11);
        let mut borrowed = &mut rng;
        assert_eq!(borrowed.next_uniform(), twin.next_uniform());
    }
}
