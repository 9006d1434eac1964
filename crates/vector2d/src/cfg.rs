//! Tolerance defaults.
//!
//! Policy
//! - Comparisons inside the crate are exact; this constant only backs the
//!   approximate helpers (`Vector2D::approx_eq` callers, CLI `--eps`).

/// Default absolute tolerance for componentwise approximate equality.
pub const DEFAULT_EPS: f64 = 1e-12;
