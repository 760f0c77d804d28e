//! Gaussian generators that produce variates in pairs.
//!
//! Box–Muller and Polar-Marsaglia both turn two uniforms into two
//! independent N(0, 1) variates. The samplers here hand them out one at a
//! time: odd-numbered calls compute a fresh pair, return the first value and
//! cache the second; even-numbered calls return the cached value and clear
//! the cache.
//!
//! Each sampler owns its cache and sampling takes `&mut self`, so a sampler
//! shared between threads has to sit behind a lock. Two samplers never share
//! a cache.

use rv_core::{Real, Result};
use std::f64::consts::PI;

use super::rejection::{disk_point, polar_transform, try_disk_point};
use crate::random_numbers::UniformRng;

/// One cached variate and its validity flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairCache {
    value: Real,
    valid: bool,
}

impl PairCache {
    /// An empty cache.
    pub const fn new() -> Self {
        Self {
            value: 0.0,
            valid: false,
        }
    }

    /// Whether a value is waiting to be consumed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Take the cached value, leaving the cache empty.
    #[inline]
    pub fn take(&mut self) -> Option<Real> {
        if self.valid {
            self.valid = false;
            Some(self.value)
        } else {
            None
        }
    }

    /// Store `value` for the next call.
    #[inline]
    pub fn store(&mut self, value: Real) {
        self.value = value;
        self.valid = true;
    }

    /// Drop any cached value.
    pub fn clear(&mut self) {
        self.valid = false;
    }

    /// Serve the cached value if there is one, otherwise compute a fresh
    /// pair, cache its second half and return the first.
    #[inline]
    fn serve(&mut self, fresh: impl FnOnce() -> (Real, Real)) -> Real {
        if let Some(value) = self.take() {
            return value;
        }
        let (first, second) = fresh();
        tracing::trace!(first, second, "pair cache refilled");
        self.store(second);
        first
    }
}

/// Box–Muller normal generator.
///
/// `r = sqrt(-2 ln u₁)`, `θ = 2π u₂`, pair `(r cos θ, r sin θ)`. A zero
/// first uniform is replaced by the smallest positive normal double before
/// the logarithm.
#[derive(Debug, Clone, Default)]
pub struct BoxMuller {
    cache: PairCache,
}

impl BoxMuller {
    /// A generator with an empty cache.
    pub const fn new() -> Self {
        Self {
            cache: PairCache::new(),
        }
    }

    /// Compute one pair from two fresh uniforms.
    pub fn pair<R: UniformRng + ?Sized>(rng: &mut R) -> (Real, Real) {
        let u1 = rng.next_uniform();
        let u2 = rng.next_uniform();
        let u1 = if u1 == 0.0 { Real::MIN_POSITIVE } else { u1 };
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        (r * theta.cos(), r * theta.sin())
    }

    /// Next N(0, 1) variate.
    pub fn sample<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Real {
        self.cache.serve(|| Self::pair(rng))
    }

    /// Next N(`mean`, `sd`²) variate.
    pub fn sample_scaled<R: UniformRng + ?Sized>(
        &mut self,
        rng: &mut R,
        mean: Real,
        sd: Real,
    ) -> Real {
        mean + sd * self.sample(rng)
    }

    /// Whether the next call will be served from the cache.
    pub fn has_cached(&self) -> bool {
        self.cache.is_valid()
    }

    /// Discard the cached variate.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

/// Polar-Marsaglia normal generator built on the unit-disk rejection loop.
#[derive(Debug, Clone, Default)]
pub struct PolarMarsaglia {
    cache: PairCache,
}

impl PolarMarsaglia {
    /// A generator with an empty cache.
    pub const fn new() -> Self {
        Self {
            cache: PairCache::new(),
        }
    }

    /// Compute one pair, looping until a candidate is accepted.
    pub fn pair<R: UniformRng + ?Sized>(rng: &mut R) -> (Real, Real) {
        polar_transform(disk_point(rng))
    }

    /// Next N(0, 1) variate.
    pub fn sample<R: UniformRng + ?Sized>(&mut self, rng: &mut R) -> Real {
        self.cache.serve(|| Self::pair(rng))
    }

    /// Next N(0, 1) variate, giving up after `max_attempts` rejected
    /// candidates. A cached value is always served without drawing.
    pub fn try_sample<R: UniformRng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: u64,
    ) -> Result<Real> {
        if let Some(value) = self.cache.take() {
            return Ok(value);
        }
        let (first, second) = polar_transform(try_disk_point(rng, max_attempts)?);
        self.cache.store(second);
        Ok(first)
    }

    /// Next N(`mean`, `sd`²) variate.
    pub fn sample_scaled<R: UniformRng + ?Sized>(
        &mut self,
        rng: &mut R,
        mean: Real,
        sd: Real,
    ) -> Real {
        mean + sd * self.sample(rng)
    }

    /// Whether the next call will be served from the cache.
    pub fn has_cached(&self) -> bool {
        self.cache.is_valid()
    }

    /// Discard the cached variate.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}
