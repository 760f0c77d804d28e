//! Gamma-family and error functions, delegated to `statrs`.

use rv_core::Real;

/// The Gamma function Γ(z).
///
/// Uses the Lanczos approximation via `statrs`.
pub fn gamma_function(z: Real) -> Real {
    statrs::function::gamma::gamma(z)
}

/// The natural logarithm of the Gamma function: ln Γ(z).
pub fn log_gamma(z: Real) -> Real {
    statrs::function::gamma::ln_gamma(z)
}

/// Regularized lower incomplete gamma function P(a, x).
pub fn regularized_lower_gamma(a: Real, x: Real) -> Real {
    statrs::function::gamma::gamma_lr(a, x)
}

/// Regularized upper incomplete gamma function Q(a, x) = 1 − P(a, x).
pub fn regularized_upper_gamma(a: Real, x: Real) -> Real {
    statrs::function::gamma::gamma_ur(a, x)
}

/// The error function erf(x).
pub fn error_function(x: Real) -> Real {
    statrs::function::erf::erf(x)
}

/// The complementary error function erfc(x) = 1 − erf(x).
pub fn erfc(x: Real) -> Real {
    statrs::function::erf::erfc(x)
}
