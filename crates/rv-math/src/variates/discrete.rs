//! Integer-valued samplers built on logarithmic comparisons.

use rv_core::{Count, Probability, Real};

use crate::random_numbers::UniformRng;

/// Geometric(`p`) variate: the number of failures before the first success,
/// `⌊-e / ln(1 - p)⌋` for one exponential draw `e`.
///
/// Both `-e` and `ln(1 - p)` are non-positive, so the quotient is
/// non-negative and truncation toward zero is a floor.
#[inline]
pub fn geometric<R: UniformRng + ?Sized>(rng: &mut R, p: Probability) -> Count {
    let e = rng.exponential_draw();
    (-e / (-p).ln_1p()) as Count
}

/// Logarithmic-series(`p`) variate by Kemp's method.
///
/// The first uniform `u` decides most draws on its own: `u >= p` returns 1
/// without a second draw. Otherwise `y = 1 - (1 - p)^t` for a second uniform
/// `t`, and the branches below are tried in order; each is only valid once
/// the previous conditions have failed.
pub fn log_series<R: UniformRng + ?Sized>(rng: &mut R, p: Probability) -> Count {
    let u = rng.next_uniform();
    if u >= p {
        return 1;
    }
    let t = rng.next_uniform();
    let y = -(t * (-p).ln_1p()).exp_m1();
    if u > y {
        1
    } else if u > y * y {
        2
    } else {
        (1.0 + u.ln() / y.ln()).floor() as Count
    }
}

/// Poisson(`mu`) variate: the number of unit-rate exponential inter-arrival
/// times that fit in `[0, mu]`.
///
/// Cost grows linearly with `mu`. An infinite mean returns `Count::MAX`.
pub fn poisson<R: UniformRng + ?Sized>(rng: &mut R, mu: Real) -> Count {
    if mu == Real::INFINITY {
        return Count::MAX;
    }
    let mut k: Count = 0;
    let mut arrival = rng.exponential_draw();
    while arrival <= mu {
        k += 1;
        arrival += rng.exponential_draw();
    }
    k
}
