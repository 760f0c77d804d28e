//! Standard gamma variates (Marsaglia–Tsang), the default behind
//! [`UniformRng::gamma_draw`](crate::random_numbers::UniformRng::gamma_draw).

use rv_core::Real;

use crate::random_numbers::UniformRng;
use crate::variates::paired::BoxMuller;

/// Gamma(`shape`, 1) by Marsaglia and Tsang's squeeze method.
///
/// Shapes below one are boosted to `shape + 1` and corrected by
/// `u^(1/shape)`. Each candidate takes the cosine half of a fresh
/// Box–Muller pair. Returns NaN for a non-positive or NaN shape.
pub fn marsaglia_tsang<R: UniformRng + ?Sized>(rng: &mut R, shape: Real) -> Real {
    if !(shape > 0.0) {
        return Real::NAN;
    }
    if shape < 1.0 {
        let u = rng.next_uniform();
        return marsaglia_tsang(rng, shape + 1.0) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let (x, _) = BoxMuller::pair(rng);
        let v = 1.0 + c * x;
        if v <= 0.0 {
            continue;
        }
        let v = v * v * v;
        let u = rng.next_uniform();
        let x2 = x * x;
        if u < 1.0 - 0.0331 * x2 * x2 {
            return d * v;
        }
        if u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}
