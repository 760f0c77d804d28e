//! # rv-math
//!
//! Random-variate generation: uniform sources, transform, rejection and
//! paired samplers, series-evaluated special functions (Si, Cin), validated
//! distributions and a running statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Validated probability distributions.
pub mod distributions;

/// Uniform random number sources.
pub mod random_numbers;

/// Power-series special functions and `statrs` wrappers.
pub mod special_functions;

/// Statistics accumulators.
pub mod statistics;

/// Raw random variate samplers.
pub mod variates;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_pdf};
pub use random_numbers::{MersenneTwisterUniformRng, UniformRng};
pub use special_functions::{power_series_cin, power_series_si};
pub use statistics::Statistics;
