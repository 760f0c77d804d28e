//! Error types for randvar.
//!
//! The raw samplers and special functions never fail: out-of-domain input
//! produces a meaningless number. Errors only surface from the validating
//! layer (distribution constructors) and from bounded rejection loops.

use thiserror::Error;

/// The top-level error type used throughout randvar.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated, typically a parameter outside its domain.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A rejection sampler exhausted its attempt cap without accepting a
    /// candidate.
    #[error("rejection sampler gave up after {attempts} attempts")]
    RejectionLimit {
        /// Number of candidates drawn before giving up.
        attempts: u64,
    },
}

/// Shorthand `Result` type used throughout randvar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rv_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
