//! Special functions.
//!
//! The sine and entire cosine integrals are evaluated here by truncated power
//! series; the gamma family and error functions are thin wrappers over
//! `statrs`.

pub mod cos_integral;
pub mod gamma;
pub mod sin_integral;

pub use cos_integral::{cin_series_order, cos_integral, power_series_cin, EULER_GAMMA};
pub use gamma::{
    erfc, error_function, gamma_function, log_gamma, regularized_lower_gamma,
    regularized_upper_gamma,
};
pub use sin_integral::{power_series_si, si_series_order};
