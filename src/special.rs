//! Integer special functions.

use crate::error::{NumericError, Result};

/// Largest `n` whose factorial fits in a `u64` (20! ≈ 2.43 × 10¹⁸).
pub const MAX_FACTORIAL_U64: i64 = 20;

/// Computes `n!` by iterative multiplication, with `0! = 1`.
///
/// # Errors
/// - [`NumericError::NegativeFactorial`] if `n < 0`.
/// - [`NumericError::Overflow`] if `n > 20`.
///
/// # Examples
/// ```
/// use u_numkit::special::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(NumericError::NegativeFactorial { n });
    }
    (1..=n.unsigned_abs()).try_fold(1_u64, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| NumericError::overflow("factorial"))
    })
}
