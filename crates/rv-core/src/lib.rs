//! # rv-core
//!
//! Core types, error definitions, and settings for randvar.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – type aliases, the error hierarchy, and the
//! process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (rejection attempt cap).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A probability in `[0, 1]`.
pub type Probability = Real;

/// Non-negative integer outcome of a discrete distribution.
pub type Count = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedRejectionLimit, Settings};
