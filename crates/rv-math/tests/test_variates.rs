//! Deterministic sampler scenarios driven by replayed uniform sequences,
//! plus empirical moment checks against the Mersenne Twister source.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rv_core::Real;
use rv_math::random_numbers::{MersenneTwisterUniformRng, ReplayUniform, UniformRng};
use rv_math::special_functions::{power_series_cin, power_series_si};
use rv_math::statistics::Statistics;
use rv_math::variates::{bernoulli, cauchy, log_series, weibull, BoxMuller, PolarMarsaglia};

fn replay(draws: &[Real]) -> ReplayUniform {
    ReplayUniform::new(draws.to_vec()).unwrap()
}

// ─── Guards and shortcuts ─────────────────────────────────────────────────────

#[test]
fn weibull_with_zero_exponential_is_zero() {
    let mut rng = replay(&[0.5]).with_exponential(0.0);
    let x = weibull(&mut rng, 2.0);
    assert_eq!(x, 0.0);
    assert!(!x.is_nan());
}

#[test]
fn log_series_large_uniform_skips_second_draw() {
    let mut rng = replay(&[0.9, 0.3]);
    assert_eq!(log_series(&mut rng, 0.5), 1);
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn si_below_threshold_uses_closed_form() {
    let x: Real = 0.0001;
    assert_eq!(power_series_si(x), x * (-x * x / 18.0).exp());
}

#[test]
fn si_and_cin_at_moderate_arguments() {
    assert_relative_eq!(power_series_si(5.0), 1.549_931_244_944_674_1, max_relative = 1e-13);
    assert_relative_eq!(power_series_si(-10.0), -1.658_347_594_218_874, max_relative = 1e-13);
    assert_relative_eq!(power_series_cin(2.5), -1.207_635_200_410_304_4, max_relative = 1e-13);
}

// ─── Cauchy ───────────────────────────────────────────────────────────────────

#[test]
fn cauchy_zero_denominator_returns_max() {
    // u = 0.5, v = 0
    let mut rng = replay(&[0.75, 0.5]);
    assert_eq!(cauchy(&mut rng), Real::MAX);
}

#[test]
fn cauchy_median_and_quartiles() {
    let mut rng = MersenneTwisterUniformRng::new(2024);
    let n = 100_000;
    let mut draws: Vec<Real> = (0..n).map(|_| cauchy(&mut rng)).collect();
    draws.sort_by(|a, b| a.total_cmp(b));
    assert_abs_diff_eq!(draws[n / 2], 0.0, epsilon = 0.03);
    assert_abs_diff_eq!(draws[n / 4], -1.0, epsilon = 0.05);
    assert_abs_diff_eq!(draws[3 * n / 4], 1.0, epsilon = 0.05);
}

// ─── Paired generators ────────────────────────────────────────────────────────

#[test]
fn polar_marsaglia_replayed_pair_then_fresh_draws() {
    // u = 0.5, v = -0.5, w = 0.5, k = 2 sqrt(ln 2)
    let mut rng = replay(&[0.75, 0.25]);
    let mut sampler = PolarMarsaglia::new();
    let expected = 2.0_f64.ln().sqrt();

    let first = sampler.sample(&mut rng);
    assert_eq!(rng.consumed(), 2);
    let second = sampler.sample(&mut rng);
    assert_eq!(rng.consumed(), 2);
    assert_abs_diff_eq!(first, expected, epsilon = 1e-15);
    assert_abs_diff_eq!(second, -expected, epsilon = 1e-15);

    let third = sampler.sample(&mut rng);
    assert_eq!(rng.consumed(), 4);
    assert_abs_diff_eq!(third, expected, epsilon = 1e-15);
}

#[test]
fn paired_generators_never_repeat_a_variate() {
    let mut rng = MersenneTwisterUniformRng::new(11);
    let mut box_muller = BoxMuller::new();
    let mut polar = PolarMarsaglia::new();
    let mut previous = (box_muller.sample(&mut rng), polar.sample(&mut rng));
    for _ in 0..10_000 {
        let next = (box_muller.sample(&mut rng), polar.sample(&mut rng));
        assert_ne!(next.0, previous.0);
        assert_ne!(next.1, previous.1);
        previous = next;
    }
}

#[test]
fn paired_generators_have_standard_moments() {
    let mut rng = MersenneTwisterUniformRng::new(42);
    let mut box_muller = BoxMuller::new();
    let mut polar = PolarMarsaglia::new();
    let n = 200_000;
    let bm: Statistics = (0..n).map(|_| box_muller.sample(&mut rng)).collect();
    let pm: Statistics = (0..n).map(|_| polar.sample(&mut rng)).collect();
    for stats in [bm, pm] {
        assert_abs_diff_eq!(stats.mean().unwrap(), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(stats.variance().unwrap(), 1.0, epsilon = 0.02);
    }
}

// ─── Bernoulli ────────────────────────────────────────────────────────────────

#[test]
fn bernoulli_mean_converges_to_p() {
    let mut rng = MersenneTwisterUniformRng::new(99);
    let n = 100_000;
    for p in [0.05, 0.5, 0.8] {
        let stats: Statistics = (0..n).map(|_| bernoulli(&mut rng, p) as Real).collect();
        let tolerance = 5.0 * (p * (1.0 - p) / n as Real).sqrt();
        assert!(
            (stats.mean().unwrap() - p).abs() < tolerance,
            "p = {p}: mean {}",
            stats.mean().unwrap()
        );
    }
}

#[test]
fn bernoulli_counts_draw_equal_to_p_as_success() {
    let mut rng = replay(&[0.25]);
    assert_eq!(bernoulli(&mut rng, 0.25), 1);
    assert_eq!(rng.next_uniform(), 0.25);
}
