//! Binary digit strings.

use crate::error::{NumericError, Result};

/// Parses a string of `'0'`/`'1'` digits into its integer value.
///
/// The **rightmost** character is the least-significant bit, as binary
/// numbers are normally written: `"110"` is 6. Leading zeros are allowed
/// and ignored. The empty string is 0.
///
/// # Errors
/// - [`NumericError::InvalidDigit`] for the first character that is not
///   `'0'` or `'1'`, including signs, whitespace and `0b` prefixes.
/// - [`NumericError::Overflow`] if the value needs more than 64 bits.
///
/// # Examples
/// ```
/// use u_numkit::binary::binary_to_decimal;
/// assert_eq!(binary_to_decimal("1011"), Ok(11));
/// assert_eq!(binary_to_decimal("0001"), Ok(1));
/// assert!(binary_to_decimal("10a1").is_err());
/// ```
pub fn binary_to_decimal(binary: &str) -> Result<u64> {
    binary
        .chars()
        .enumerate()
        .try_fold(0_u64, |acc, (position, digit)| {
            let bit = match digit {
                '0' => 0,
                '1' => 1,
                _ => return Err(NumericError::InvalidDigit { digit, position }),
            };
            acc.checked_mul(2)
                .and_then(|shifted| shifted.checked_add(bit))
                .ok_or_else(|| NumericError::overflow("binary_to_decimal"))
        })
}
