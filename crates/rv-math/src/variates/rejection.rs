//! Rejection samplers over the unit disk.
//!
//! Both the Cauchy ratio-of-uniforms method and the Polar-Marsaglia normal
//! pair draw points uniformly on `[-1, 1]²` until one lands inside the unit
//! disk. The expected number of candidates is `4/π ≈ 1.27`.
//!
//! The plain functions loop until acceptance, with no cap. A source that
//! never lands inside the disk makes them spin forever; the `try_` variants
//! take an attempt cap and report [`Error::RejectionLimit`] instead.

use rv_core::{Error, Real, Result};

use crate::random_numbers::UniformRng;

/// A point accepted inside the unit disk: `(u, v, w = u² + v²)`.
pub type DiskPoint = (Real, Real, Real);

#[inline]
fn disk_candidate<R: UniformRng + ?Sized>(rng: &mut R) -> Option<DiskPoint> {
    let u = 2.0 * rng.next_uniform() - 1.0;
    let v = 2.0 * rng.next_uniform() - 1.0;
    let w = u * u + v * v;
    (w <= 1.0).then_some((u, v, w))
}

/// Draw candidates until one lies in the closed unit disk.
pub fn disk_point<R: UniformRng + ?Sized>(rng: &mut R) -> DiskPoint {
    loop {
        if let Some(point) = disk_candidate(rng) {
            return point;
        }
    }
}

/// As [`disk_point`], giving up after `max_attempts` candidates.
pub fn try_disk_point<R: UniformRng + ?Sized>(
    rng: &mut R,
    max_attempts: u64,
) -> Result<DiskPoint> {
    for _ in 0..max_attempts {
        if let Some(point) = disk_candidate(rng) {
            return Ok(point);
        }
    }
    tracing::debug!(max_attempts, "unit-disk rejection loop exhausted");
    Err(Error::RejectionLimit {
        attempts: max_attempts,
    })
}

/// `u / v`, with `f64::MAX` standing in for division by an exact zero.
#[inline]
fn cauchy_ratio(u: Real, v: Real) -> Real {
    if v == 0.0 {
        Real::MAX
    } else {
        u / v
    }
}

/// Standard Cauchy variate by the ratio of uniforms over the unit disk.
pub fn cauchy<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    let (u, v, _) = disk_point(rng);
    cauchy_ratio(u, v)
}

/// Bounded [`cauchy`].
pub fn try_cauchy<R: UniformRng + ?Sized>(rng: &mut R, max_attempts: u64) -> Result<Real> {
    let (u, v, _) = try_disk_point(rng, max_attempts)?;
    Ok(cauchy_ratio(u, v))
}

/// Turn an accepted disk point into two independent N(0, 1) variates,
/// `(u k, v k)` with `k = sqrt(-2 ln(w) / w)`.
///
/// `w == 0` is replaced by the smallest positive normal double before the
/// logarithm.
#[inline]
pub fn polar_transform((u, v, w): DiskPoint) -> (Real, Real) {
    let w = if w == 0.0 { Real::MIN_POSITIVE } else { w };
    let k = (-2.0 * w.ln() / w).sqrt();
    (u * k, v * k)
}
