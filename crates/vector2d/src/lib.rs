//! A 2D `f64` vector value type with XNA-style semantics.
//!
//! - `Vector2D`: Cartesian storage with a recomputed polar view (length, angle).
//! - Operators: componentwise for vector operands; length-scaling polar round
//!   trips for scalar operands (see `ops`).
//! - `Vector2D::sum` / `KahanSum`: compensated summation over sequences.
//!
//! Conversions to/from nalgebra's `Vector2`/`Point2` live in `convert`.

mod cfg;
mod convert;
mod ops;
pub mod sum;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DEFAULT_EPS;
pub use sum::{naive_sum, KahanSum, SumError};
pub use vector::{angle_between, Vector2D};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sum::{KahanSum, SumError};
    pub use crate::vector::{angle_between, Vector2D};
    pub use crate::DEFAULT_EPS;
}
