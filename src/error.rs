//! Error type shared by every fallible helper in the crate.
//!
//! All failures are caller-contract violations: an empty sequence where at
//! least one element is required, a value outside the representable range,
//! or a malformed argument. None of them are retried or recovered from
//! internally.

use thiserror::Error;

/// Errors returned by the numeric helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// The operation needs at least one element.
    #[error("{operation} requires a non-empty sequence")]
    EmptyInput {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },

    /// The input sequence contains NaN, which has no ordering.
    #[error("{operation} is undefined for sequences containing NaN")]
    NotANumber {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },

    /// The rounded value does not fit in a 32-bit signed integer.
    #[error("{value} is out of the i32 range")]
    OutOfRange {
        /// The offending input
        value: f64,
    },

    /// A binary string contains something other than `'0'` or `'1'`.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Zero-based character index, counted from the left
        position: usize,
    },

    /// Factorial is not defined for negative integers.
    #[error("factorial is undefined for negative n = {n}")]
    NegativeFactorial {
        /// The rejected argument
        n: i64,
    },

    /// The exact result does not fit in the return type.
    #[error("{operation} overflowed u64")]
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
    },
}

impl NumericError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    pub(crate) fn nan(operation: &'static str) -> Self {
        Self::NotANumber { operation }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumericError>;
