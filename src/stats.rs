//! Descriptive helpers over `f64` sequences.
//!
//! Every function takes a slice and leaves it untouched. Functions that need
//! at least one element return [`NumericError::EmptyInput`] instead of
//! producing NaN or panicking on an out-of-bounds index.
//!
//! # Ordering and NaN
//!
//! [`min_with_positions`], [`max_with_positions`] and [`sorted_median`]
//! reject NaN with [`NumericError::NotANumber`], since NaN has no place in
//! an ordering. [`average`], [`median`], [`sum`] and [`product`] let NaN
//! propagate through the arithmetic as usual.

use crate::error::{NumericError, Result};

/// An extremal value together with every position where it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    /// The minimum or maximum value.
    pub value: f64,
    /// Zero-based indices attaining `value`, in ascending order. Never empty.
    pub positions: Vec<usize>,
}

/// Computes the arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`NumericError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::average;
/// assert_eq!(average(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert!(average(&[]).is_err());
/// ```
pub fn average(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(NumericError::empty("average"));
    }
    Ok(sum(data) / data.len() as f64)
}

/// Returns the middle of `data` **as given**, without sorting.
///
/// For odd `n` this is `data[n / 2]`; for even `n` it is the mean of
/// `data[n / 2 − 1]` and `data[n / 2]`.
///
/// <div class="warning">
///
/// This is only the statistical median if `data` is already sorted.
/// `median(&[3.0, 1.0, 2.0])` returns `1.0`, not `2.0`. Use
/// [`sorted_median`] for unsorted input.
///
/// </div>
///
/// # Complexity
/// Time: O(1), Space: O(1)
///
/// # Errors
/// [`NumericError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// // not sorted: the middle element is returned as-is
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(1.0));
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    let n = data.len();
    if n == 0 {
        return Err(NumericError::empty("median"));
    }
    let middle = n / 2;
    if n % 2 == 1 {
        Ok(data[middle])
    } else {
        Ok((data[middle - 1] + data[middle]) / 2.0)
    }
}

/// Computes the statistical median of unsorted data.
///
/// Clones and sorts the data, then applies [`median`].
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - [`NumericError::EmptyInput`] if `data` is empty.
/// - [`NumericError::NotANumber`] if `data` contains NaN.
///
/// # Examples
/// ```
/// use u_numkit::stats::sorted_median;
/// assert_eq!(sorted_median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(sorted_median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn sorted_median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(NumericError::empty("sorted_median"));
    }
    if data.iter().any(|x| x.is_nan()) {
        return Err(NumericError::nan("sorted_median"));
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    median(&sorted)
}

/// Sums the sequence left to right. The empty sum is `0.0`.
///
/// Plain accumulation: no compensation for rounding error.
///
/// # Examples
/// ```
/// use u_numkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Multiplies the sequence left to right. The empty product is `1.0`.
///
/// # Examples
/// ```
/// use u_numkit::stats::product;
/// assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(product(&[]), 1.0);
/// ```
pub fn product(data: &[f64]) -> f64 {
    data.iter().fold(1.0, |acc, &x| acc * x)
}

/// Finds the minimum and every position where it occurs.
///
/// # Algorithm
/// Single linear scan. An element equal to the current minimum appends its
/// index; a strictly smaller element becomes the new minimum and resets the
/// positions to exactly that index.
///
/// `-0.0` and `0.0` compare equal and share a position set; the value kept
/// is whichever appeared first.
///
/// # Complexity
/// Time: O(n), Space: O(k) for k occurrences
///
/// # Errors
/// - [`NumericError::EmptyInput`] if `data` is empty.
/// - [`NumericError::NotANumber`] if `data` contains NaN.
///
/// # Examples
/// ```
/// use u_numkit::stats::min_with_positions;
/// let m = min_with_positions(&[3.0, 1.0, 1.0, 2.0]).unwrap();
/// assert_eq!(m.value, 1.0);
/// assert_eq!(m.positions, vec![1, 2]);
/// ```
pub fn min_with_positions(data: &[f64]) -> Result<Extremum> {
    scan_extremum(data, "min_with_positions", |x, current| x < current)
}

/// Finds the maximum and every position where it occurs.
///
/// Mirror image of [`min_with_positions`].
///
/// # Errors
/// - [`NumericError::EmptyInput`] if `data` is empty.
/// - [`NumericError::NotANumber`] if `data` contains NaN.
///
/// # Examples
/// ```
/// use u_numkit::stats::max_with_positions;
/// let m = max_with_positions(&[3.0, 1.0, 3.0, 2.0]).unwrap();
/// assert_eq!(m.value, 3.0);
/// assert_eq!(m.positions, vec![0, 2]);
/// ```
pub fn max_with_positions(data: &[f64]) -> Result<Extremum> {
    scan_extremum(data, "max_with_positions", |x, current| x > current)
}

fn scan_extremum(
    data: &[f64],
    operation: &'static str,
    is_better: fn(f64, f64) -> bool,
) -> Result<Extremum> {
    let Some(&first) = data.first() else {
        return Err(NumericError::empty(operation));
    };
    if data.iter().any(|x| x.is_nan()) {
        return Err(NumericError::nan(operation));
    }
    let mut value = first;
    let mut positions = Vec::new();
    for (i, &x) in data.iter().enumerate() {
        if x == value {
            positions.push(i);
        } else if is_better(x, value) {
            value = x;
            positions.clear();
            positions.push(i);
        }
    }
    Ok(Extremum { value, positions })
}

/// Returns `true` if any element is exactly equal to `target`.
///
/// No tolerance is applied; use [`crate::compare::approx_eq`] on the
/// elements for tolerant search. A NaN target is never found.
///
/// # Examples
/// ```
/// use u_numkit::stats::contains;
/// assert!(contains(2.0, &[1.0, 2.0, 3.0]));
/// assert!(!contains(9.0, &[1.0, 2.0, 3.0]));
/// ```
pub fn contains(target: f64, data: &[f64]) -> bool {
    data.iter().any(|&x| x == target)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // --- average ---

    #[test]
    fn test_average_basic() {
        assert_eq!(average(&[1.0, 2.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn test_average_single() {
        assert_eq!(average(&[42.0]), Ok(42.0));
    }

    #[test]
    fn test_average_fractional() {
        assert_relative_eq!(average(&[0.1, 0.2, 0.3, 0.4]).unwrap(), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(
            average(&[]),
            Err(NumericError::EmptyInput {
                operation: "average"
            })
        );
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.0]), Ok(7.0));
    }

    #[test]
    fn test_median_does_not_sort() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(1.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_median_empty() {
        assert!(matches!(median(&[]), Err(NumericError::EmptyInput { .. })));
    }

    // --- sorted_median ---

    #[test]
    fn test_sorted_median() {
        assert_eq!(sorted_median(&[3.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(sorted_median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    }

    #[test]
    fn test_sorted_median_leaves_input() {
        let data = [5.0, -1.0, 3.0];
        let _ = sorted_median(&data);
        assert_eq!(data, [5.0, -1.0, 3.0]);
    }

    #[test]
    fn test_sorted_median_edge_cases() {
        assert!(matches!(sorted_median(&[]), Err(NumericError::EmptyInput { .. })));
        assert!(matches!(
            sorted_median(&[1.0, f64::NAN]),
            Err(NumericError::NotANumber { .. })
        ));
    }

    // --- sum / product ---

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[-1.5, 1.5]), 0.0);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_product() {
        assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
        assert_eq!(product(&[2.0, 0.0, f64::MAX]), 0.0);
        assert_eq!(product(&[-2.0, 3.0]), -6.0);
    }

    #[test]
    fn test_product_empty() {
        assert_eq!(product(&[]), 1.0);
    }

    // --- min / max ---

    #[test]
    fn test_min_with_positions() {
        let m = min_with_positions(&[3.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            m,
            Extremum {
                value: 1.0,
                positions: vec![1, 2]
            }
        );
    }

    #[test]
    fn test_max_with_positions() {
        let m = max_with_positions(&[3.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(
            m,
            Extremum {
                value: 3.0,
                positions: vec![0, 2]
            }
        );
    }

    #[test]
    fn test_max_reset_has_no_placeholder() {
        // a new maximum replaces the positions with exactly its own index,
        // with no leading zero entry
        let m = max_with_positions(&[1.0, 5.0, 2.0, 5.0]).unwrap();
        assert_eq!(m.value, 5.0);
        assert_eq!(m.positions, vec![1, 3]);

        let m = max_with_positions(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.positions, vec![2]);
    }

    #[test]
    fn test_min_max_symmetric() {
        let data = [4.0, -2.0, 7.0, -2.0, 7.0, 0.0];
        let negated: Vec<f64> = data.iter().map(|x| -x).collect();
        let min = min_with_positions(&data).unwrap();
        let max = max_with_positions(&negated).unwrap();
        assert_eq!(min.value, -max.value);
        assert_eq!(min.positions, max.positions);
    }

    #[test]
    fn test_min_max_single() {
        let expected = Extremum {
            value: 9.0,
            positions: vec![0],
        };
        assert_eq!(min_with_positions(&[9.0]), Ok(expected.clone()));
        assert_eq!(max_with_positions(&[9.0]), Ok(expected));
    }

    #[test]
    fn test_min_max_all_equal() {
        let data = [2.0; 4];
        assert_eq!(min_with_positions(&data).unwrap().positions, vec![0, 1, 2, 3]);
        assert_eq!(max_with_positions(&data).unwrap().positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_min_max_signed_zero() {
        let m = min_with_positions(&[0.0, -0.0, 1.0]).unwrap();
        assert_eq!(m.positions, vec![0, 1]);
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(
            min_with_positions(&[]),
            Err(NumericError::EmptyInput {
                operation: "min_with_positions"
            })
        );
        assert_eq!(
            max_with_positions(&[]),
            Err(NumericError::EmptyInput {
                operation: "max_with_positions"
            })
        );
    }

    #[test]
    fn test_min_max_nan() {
        assert!(matches!(
            min_with_positions(&[f64::NAN, 1.0]),
            Err(NumericError::NotANumber { .. })
        ));
        assert!(matches!(
            max_with_positions(&[1.0, f64::NAN]),
            Err(NumericError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_min_max_infinities() {
        let data = [f64::INFINITY, 0.0, f64::NEG_INFINITY];
        assert_eq!(min_with_positions(&data).unwrap().value, f64::NEG_INFINITY);
        assert_eq!(max_with_positions(&data).unwrap().positions, vec![0]);
    }

    // --- contains ---

    #[test]
    fn test_contains() {
        assert!(contains(2.0, &[1.0, 2.0, 3.0]));
        assert!(!contains(9.0, &[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(!contains(0.3, &[0.1 + 0.2]));
        assert!(contains(0.0, &[-0.0]));
    }

    #[test]
    fn test_contains_edge_cases() {
        assert!(!contains(1.0, &[]));
        assert!(!contains(f64::NAN, &[f64::NAN]));
    }
}
