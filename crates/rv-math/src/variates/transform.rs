//! One-shot transform samplers.
//!
//! Each function maps one or two draws from a [`UniformRng`] to a variate of
//! the target distribution. None of them validate parameters: an
//! out-of-domain shape or probability gives a meaningless number, never a
//! panic.

use rv_core::{Count, Probability, Real};

use crate::random_numbers::UniformRng;

/// Uniform(0, 1) variate.
#[inline]
pub fn uniform<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    rng.next_uniform()
}

/// Standard exponential variate (mean 1).
#[inline]
pub fn exponential<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    rng.exponential_draw()
}

/// Standard Weibull variate with shape `a`: `e^(1/a)`.
///
/// A zero exponential draw returns exactly zero instead of going through
/// `0^(1/a)`.
pub fn weibull<R: UniformRng + ?Sized>(rng: &mut R, a: Real) -> Real {
    let e = rng.exponential_draw();
    if e == 0.0 {
        return 0.0;
    }
    e.powf(1.0 / a)
}

/// Pareto variate with shape `a` and unit minimum: `1 + e/g`, `g ~ Gamma(a)`.
pub fn pareto<R: UniformRng + ?Sized>(rng: &mut R, a: Real) -> Real {
    let e = rng.exponential_draw();
    let g = rng.gamma_draw(a);
    1.0 + e / g
}

/// Gumbel variate for maxima: `-ln(e)`.
#[inline]
pub fn gumbel_max<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    -rng.exponential_draw().ln()
}

/// Gumbel variate for minima: `ln(e)`.
#[inline]
pub fn gumbel_min<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    rng.exponential_draw().ln()
}

/// Standard logistic variate: `ln(u / (1 - u))`.
#[inline]
pub fn logistic<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    let u = rng.next_uniform();
    (u / (1.0 - u)).ln()
}

/// Standard Laplace variate.
///
/// The uniform picks the sign and the exponential the magnitude. A draw of
/// exactly one half returns zero.
pub fn laplace<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    let u = rng.next_uniform();
    let e = rng.exponential_draw();
    if u < 0.5 {
        -e
    } else if u > 0.5 {
        e
    } else {
        0.0
    }
}

/// Kumaraswamy(`a`, `b`) variate by inversion: `(1 - u^(1/b))^(1/a)`.
#[inline]
pub fn kumaraswamy<R: UniformRng + ?Sized>(rng: &mut R, a: Real, b: Real) -> Real {
    let u = rng.next_uniform();
    (1.0 - u.powf(1.0 / b)).powf(1.0 / a)
}

/// Bernoulli(`p`) trial. A draw equal to `p` counts as a success.
#[inline]
pub fn bernoulli<R: UniformRng + ?Sized>(rng: &mut R, p: Probability) -> Count {
    if rng.next_uniform() <= p {
        1
    } else {
        0
    }
}

/// Student-t variate with two degrees of freedom, by inversion:
/// `(2u - 1) / sqrt(2u(1 - u))`.
pub fn student_t2<R: UniformRng + ?Sized>(rng: &mut R) -> Real {
    let u = rng.next_uniform();
    (2.0 * u - 1.0) / (2.0 * u * (1.0 - u)).sqrt()
}

/// Chi-square variate with `n` degrees of freedom: `2 * Gamma(n/2)`.
#[inline]
pub fn chi_square<R: UniformRng + ?Sized>(rng: &mut R, n: Real) -> Real {
    2.0 * rng.gamma_draw(0.5 * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_numbers::{MersenneTwisterUniformRng, ReplayUniform};
    use crate::statistics::Statistics;
    use approx::assert_abs_diff_eq;

    fn replay(draws: &[Real]) -> ReplayUniform {
        ReplayUniform::new(draws.to_vec()).unwrap()
    }

    fn sample_mean(mut f: impl FnMut(&mut MersenneTwisterUniformRng) -> Real) -> Real {
        let mut rng = MersenneTwisterUniformRng::new(31);
        let mut stats = Statistics::new();
        for _ in 0..100_000 {
            stats.add(f(&mut rng));
        }
        stats.mean().unwrap()
    }

    #[test]
    fn weibull_zero_exponential_is_exact_zero() {
        let mut rng = replay(&[0.5]).with_exponential(0.0);
        let x = weibull(&mut rng, 2.0);
        assert_eq!(x, 0.0);
        assert!(!x.is_nan());
    }

    #[test]
    fn weibull_power_of_exponential() {
        let mut rng = replay(&[0.5]).with_exponential(4.0);
        assert_abs_diff_eq!(weibull(&mut rng, 2.0), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn weibull_shape_one_is_exponential() {
        let mean = sample_mean(|rng| weibull(rng, 1.0));
        assert!((mean - 1.0).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn pareto_mean() {
        // E[X] = a / (a - 1) for a > 1
        let mean = sample_mean(|rng| pareto(rng, 3.0));
        assert!((mean - 1.5).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn pareto_never_below_one() {
        let mut rng = MersenneTwisterUniformRng::new(8);
        assert!((0..10_000).all(|_| pareto(&mut rng, 2.0) >= 1.0));
    }

    #[test]
    fn gumbel_signs_mirror() {
        let mut a = replay(&[0.5]).with_exponential(2.0);
        let mut b = replay(&[0.5]).with_exponential(2.0);
        assert_eq!(gumbel_max(&mut a), -gumbel_min(&mut b));
        assert_abs_diff_eq!(gumbel_min(&mut a), 2.0_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn gumbel_max_mean_is_euler_gamma() {
        let mean = sample_mean(|rng| gumbel_max(rng));
        assert!((mean - 0.577_215_664_9).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn logistic_is_log_odds() {
        let mut rng = replay(&[0.75]);
        assert_abs_diff_eq!(logistic(&mut rng), 3.0_f64.ln(), epsilon = 1e-15);
        let mut rng = replay(&[0.5]);
        assert_eq!(logistic(&mut rng), 0.0);
    }

    #[test]
    fn laplace_branches() {
        let mut rng = replay(&[0.25]).with_exponential(1.5);
        assert_eq!(laplace(&mut rng), -1.5);
        let mut rng = replay(&[0.75]).with_exponential(1.5);
        assert_eq!(laplace(&mut rng), 1.5);
        let mut rng = replay(&[0.5]).with_exponential(1.5);
        assert_eq!(laplace(&mut rng), 0.0);
    }

    #[test]
    fn laplace_draws_uniform_then_exponential() {
        // Without an override the exponential consumes the second uniform.
        let mut rng = replay(&[0.25, 0.5]);
        assert_abs_diff_eq!(laplace(&mut rng), 0.5_f64.ln(), epsilon = 1e-15);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn kumaraswamy_inversion() {
        let mut rng = replay(&[0.25]);
        // a = 2, b = 0.5: (1 - 0.25^2)^(1/2)
        let expected = (1.0_f64 - 0.0625).sqrt();
        assert_abs_diff_eq!(kumaraswamy(&mut rng, 2.0, 0.5), expected, epsilon = 1e-15);
    }

    #[test]
    fn kumaraswamy_in_unit_interval() {
        let mut rng = MersenneTwisterUniformRng::new(4);
        for _ in 0..10_000 {
            let x = kumaraswamy(&mut rng, 0.7, 3.0);
            assert!((0.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn bernoulli_boundary_counts_as_success() {
        let mut rng = replay(&[0.3]);
        assert_eq!(bernoulli(&mut rng, 0.3), 1);
        let mut rng = replay(&[0.300_000_000_000_1]);
        assert_eq!(bernoulli(&mut rng, 0.3), 0);
    }

    #[test]
    fn bernoulli_mean_converges() {
        for p in [0.05, 0.3, 0.5, 0.9] {
            let mut rng = MersenneTwisterUniformRng::new(77);
            let n = 100_000;
            let hits: Count = (0..n).map(|_| bernoulli(&mut rng, p)).sum();
            let mean = hits as Real / n as Real;
            // five standard errors
            let tol = 5.0 * (p * (1.0 - p) / n as Real).sqrt();
            assert!((mean - p).abs() < tol, "p = {p}: mean {mean}");
        }
    }

    #[test]
    fn student_t2_median_and_quartile() {
        let mut rng = replay(&[0.5]);
        assert_eq!(student_t2(&mut rng), 0.0);
        // F(x) = 1/2 + x / (2 sqrt(2 + x^2)) gives F(sqrt(2/3)) = 3/4
        let mut rng = replay(&[0.75]);
        assert_abs_diff_eq!(student_t2(&mut rng), (2.0_f64 / 3.0).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn chi_square_mean_is_dof() {
        let mean = sample_mean(|rng| chi_square(rng, 5.0));
        assert!((mean - 5.0).abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn uniform_and_exponential_forward() {
        let mut rng = replay(&[0.125]);
        assert_eq!(uniform(&mut rng), 0.125);
        assert_abs_diff_eq!(exponential(&mut rng), 8.0_f64.ln(), epsilon = 1e-15);
    }
}
