//! Uniform source backed by `rand`'s standard generator.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, Gamma};
use rv_core::Real;

use super::UniformRng;

/// [`UniformRng`] over `rand::rngs::StdRng`.
///
/// Exponential and gamma draws come from `rand_distr` (`Exp1`, `Gamma`)
/// rather than the trait defaults.
pub struct StdUniformRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl StdUniformRng {
    /// Seeded, reproducible source.
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeding StdRng uniform source");
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed, if this source was created with one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl UniformRng for StdUniformRng {
    #[inline]
    fn next_uniform(&mut self) -> Real {
        self.inner.sample(Open01)
    }

    #[inline]
    fn exponential_draw(&mut self) -> Real {
        self.inner.sample(Exp1)
    }

    fn gamma_draw(&mut self, shape: Real) -> Real {
        match Gamma::new(shape, 1.0) {
            Ok(gamma) => gamma.sample(&mut self.inner),
            Err(_) => Real::NAN,
        }
    }
}
