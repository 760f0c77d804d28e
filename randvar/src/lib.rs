//! # randvar
//!
//! Random-variate generators for common continuous and discrete
//! distributions, together with power-series evaluation of the sine and
//! entire cosine integrals.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! randvar = "0.1"
//! ```
//!
//! ```rust
//! use randvar::math::distributions::WeibullDistribution;
//! use randvar::math::random_numbers::MersenneTwisterUniformRng;
//!
//! let mut rng = MersenneTwisterUniformRng::new(42);
//! let weibull = WeibullDistribution::new(1.5).unwrap();
//! let x = weibull.sample(&mut rng);
//! assert!(x >= 0.0);
//! assert!((weibull.cdf(1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, errors and settings.
pub use rv_core as core;

/// Uniform sources, samplers, special functions and distributions.
pub use rv_math as math;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn facade_reexports_reach_both_crates() {
        let x: core::Real = 0.5;
        assert_abs_diff_eq!(
            math::power_series_si(x),
            0.493_107_418_043_066_7,
            epsilon = 1e-14
        );
        assert!(math::distributions::GeometricDistribution::new(2.0).is_err());
    }
}
