//! Random variate generators.
//!
//! The free functions here are the raw samplers: they take any
//! [`UniformRng`](crate::random_numbers::UniformRng), perform no parameter
//! validation and never fail. The validated entry points are the
//! distribution types in [`crate::distributions`].

pub mod discrete;
pub mod gamma;
pub mod paired;
pub mod rejection;
pub mod transform;

pub use discrete::{geometric, log_series, poisson};
pub use paired::{BoxMuller, PairCache, PolarMarsaglia};
pub use rejection::{cauchy, disk_point, polar_transform, try_cauchy, try_disk_point};
pub use transform::{
    bernoulli, chi_square, exponential, gumbel_max, gumbel_min, kumaraswamy, laplace, logistic,
    pareto, student_t2, uniform, weibull,
};
