//! Validated probability distributions.
//!
//! Each type checks its parameters once at construction, returning
//! [`Error::Precondition`](rv_core::Error::Precondition) for out-of-domain
//! input, and then exposes the density (or mass) function, the cumulative
//! distribution function and a sampler delegating to [`crate::variates`].
//! Values outside the support have density 0 and CDF 0 or 1.

pub mod bernoulli;
pub mod cauchy;
pub mod chi_square;
pub mod exponential;
pub mod geometric;
pub mod gumbel;
pub mod kumaraswamy;
pub mod laplace;
pub mod log_series;
pub mod logistic;
pub mod normal;
pub mod pareto;
pub mod poisson;
pub mod student_t;
pub mod uniform;
pub mod weibull;

pub use bernoulli::BernoulliDistribution;
pub use cauchy::CauchyDistribution;
pub use chi_square::ChiSquareDistribution;
pub use exponential::ExponentialDistribution;
pub use geometric::GeometricDistribution;
pub use gumbel::{GumbelMaxDistribution, GumbelMinDistribution};
pub use kumaraswamy::KumaraswamyDistribution;
pub use laplace::LaplaceDistribution;
pub use log_series::LogSeriesDistribution;
pub use logistic::LogisticDistribution;
pub use normal::{normal_cdf, normal_pdf, GaussianDistribution};
pub use pareto::ParetoDistribution;
pub use poisson::PoissonDistribution;
pub use student_t::StudentT2Distribution;
pub use uniform::UniformDistribution;
pub use weibull::WeibullDistribution;
