//! Floating-point comparison and rounding.
//!
//! # Comparison modes
//!
//! - [`approx_eq`]: **relative** tolerance, scaled by the smaller operand's
//!   magnitude rather than a fixed absolute epsilon.
//! - [`approx_eq_decimals`]: textual comparison after formatting both values
//!   to a fixed number of fractional digits. Slower, but matches what a user
//!   sees when the numbers are printed.
//!
//! # Rounding
//!
//! [`round_half_up`] breaks ties toward positive infinity, which differs from
//! both [`f64::round`] (ties away from zero) and banker's rounding
//! (ties to even) for negative halves.

use crate::error::{NumericError, Result};

/// Smallest positive subnormal `f64` (2⁻¹⁰⁷⁴ ≈ 4.94 × 10⁻³²⁴).
///
/// Substituted for non-positive tolerances in [`approx_eq`]. Not to be
/// confused with [`f64::MIN_POSITIVE`], the smallest *normal* value.
pub const SMALLEST_POSITIVE: f64 = 4.940_656_458_412_465_4e-324;

/// Compares two values with a relative tolerance.
///
/// Returns `true` iff `|x − y| ≤ tolerance · min(|x|, |y|)`.
///
/// When `tolerance ≤ 0` (or NaN), [`SMALLEST_POSITIVE`] is used instead,
/// which demands equality down to the last representable bit.
///
/// # Edge cases
/// - If either operand is zero, `min(|x|, |y|)` is zero and the test
///   degenerates to exact equality. `approx_eq(0.0, 1e-300, 0.5)` is
///   therefore `false`. This is intended: a relative tolerance carries no
///   information about the scale of zero.
/// - Identical values always compare equal, including infinities.
/// - NaN never compares equal to anything.
///
/// # Examples
/// ```
/// use u_numkit::compare::approx_eq;
/// assert!(approx_eq(100.0, 100.9, 0.01));
/// assert!(!approx_eq(100.0, 102.0, 0.01));
/// assert!(!approx_eq(0.1 + 0.2, 0.3, -1.0));
/// assert!(approx_eq(0.0, 0.0, -1.0));
/// ```
pub fn approx_eq(x: f64, y: f64, tolerance: f64) -> bool {
    if x == y {
        return true;
    }
    let tolerance = if tolerance > 0.0 {
        tolerance
    } else {
        SMALLEST_POSITIVE
    };
    (x - y).abs() <= tolerance * x.abs().min(y.abs())
}

/// Compares two values by their decimal text with `decimals` fractional
/// digits.
///
/// Both values are formatted as `{:.decimals$}` and the strings compared.
/// Values of different magnitude produce strings of different length and
/// are rejected before the character comparison.
///
/// `decimals` is a `u16` because the formatter caps precision at
/// `u16::MAX`.
///
/// Formatting rounds to nearest, so `1.005` and `1.0049` may or may not
/// agree at two decimals depending on their binary representation. Negative
/// zero prints as `-0.00`, so `approx_eq_decimals(-0.0, 0.0, 2)` is `false`.
///
/// # Examples
/// ```
/// use u_numkit::compare::approx_eq_decimals;
/// assert!(approx_eq_decimals(1.23456, 1.23462, 3));
/// assert!(!approx_eq_decimals(1.23456, 1.23462, 5));
/// assert!(!approx_eq_decimals(12.32, 592.85, 2));
/// ```
pub fn approx_eq_decimals(x: f64, y: f64, decimals: u16) -> bool {
    let decimals = usize::from(decimals);
    let a = format!("{x:.decimals$}");
    let b = format!("{y:.decimals$}");
    a.len() == b.len() && a == b
}

/// Rounds to the nearest `i32`, with ties toward positive infinity.
///
/// The fractional part is measured from the floor, so a fraction of at
/// least 0.5 always rounds up regardless of sign:
///
/// | x | result |
/// |---|---|
/// | 2.5 | 3 |
/// | 2.4 | 2 |
/// | −2.5 | −2 |
/// | −2.6 | −3 |
///
/// # Errors
/// Returns [`NumericError::OutOfRange`] if `x` is NaN or the rounded value
/// lies outside `[i32::MIN, i32::MAX]`.
///
/// # Examples
/// ```
/// use u_numkit::compare::round_half_up;
/// assert_eq!(round_half_up(2.5), Ok(3));
/// assert_eq!(round_half_up(-2.5), Ok(-2));
/// assert!(round_half_up(3e9).is_err());
/// ```
pub fn round_half_up(x: f64) -> Result<i32> {
    let floor = x.floor();
    // x - floor can round up to 0.5 only for x in (-0.5, 0), where both
    // branches give 0
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded) {
        return Err(NumericError::OutOfRange { value: x });
    }
    Ok(rounded as i32)
}
