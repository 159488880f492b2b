//! # u-numkit
//!
//! Small, stateless numeric helpers.
//!
//! Every function is pure: no shared state, no I/O, safe to call from any
//! thread. Caller-contract violations (empty input, out-of-range values,
//! malformed digits) come back as [`NumericError`] rather than NaN or a
//! panic.
//!
//! ## Modules
//!
//! - [`compare`] — relative-tolerance and decimal-text float equality,
//!   round-half-up to `i32`
//! - [`stats`] — average, median, sum, product, min/max with positions,
//!   membership
//! - [`special`] — checked factorial
//! - [`geometry`] — areas, 3D vector length and dot product, 3×3 transpose
//! - [`binary`] — binary digit strings to integers
//!
//! ## Design Philosophy
//!
//! - **Explicit edge cases**: every tie-break and degenerate input is
//!   documented on the function and pinned by a test
//! - **Fixed sizes in the types**: 3D points are `[f64; 3]`, 3×3 matrices
//!   are `[f64; 9]`
//! - **Property-based testing**: algebraic invariants verified via proptest

pub mod binary;
pub mod compare;
pub mod error;
pub mod geometry;
pub mod special;
pub mod stats;

pub use error::{NumericError, Result};
pub use stats::Extremum;
