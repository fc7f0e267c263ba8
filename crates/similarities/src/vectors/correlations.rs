//! Provides functions for calculating correlations between vectors.

use crate::{validate_length, Float, Metric, Number, ValidationError};

use super::utils::float_pairs;

/// Pearson correlation coefficient between two attribute vectors.
///
/// Measures the linear correlation between the vectors: `1` is a perfect
/// positive correlation, `-1` a perfect negative correlation and `0` no
/// correlation.
///
/// The coefficient is computed in a single pass from the sums, the sums of
/// squares and the sum of products of the elements.
///
/// When either vector is constant, or both are empty, the coefficient is
/// undefined and `0` is returned.
///
/// All sums are accumulated in the output `Float` type, including for
/// integer inputs. Earlier implementations divided integer sums with
/// truncation and reported `-0.9078412990032038` for `[5, 7, 8, 10]` and
/// `[10, 9, 8, 4]`; this function returns the exact coefficient,
/// `-0.9437369765993736`.
///
/// # Arguments
///
/// * `x` - The first slice of `Number`s.
/// * `y` - The second slice of `Number`s.
///
/// # Errors
///
/// If the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use similarities::vectors::pearson_correlation;
///
/// let x = vec![1_i32, 2, 3, 4];
/// let y = vec![8_i32, 6, 4, 2];
///
/// let r: f64 = pearson_correlation(&x, &y).unwrap();
/// assert!((r + 1.0).abs() <= 1e-12);
///
/// let r: f64 = pearson_correlation(&[5, 7, 8, 10], &[10, 9, 8, 4]).unwrap();
/// assert!((r + 0.943_736_976_599_373_6).abs() <= 1e-15);
///
/// let y = vec![5_i32, 5, 5, 5];
/// let r: f64 = pearson_correlation(&x, &y).unwrap();
/// assert_eq!(r, 0.0);
/// ```
pub fn pearson_correlation<T: Number, U: Float>(x: &[T], y: &[T]) -> Result<U, ValidationError> {
    validate_length(x, y, Metric::Pearson)?;

    if x.is_empty() {
        return Ok(U::ZERO);
    }

    let [sx, sy, sxx, syy, sxy] =
        float_pairs::<T, U>(x, y).fold([U::ZERO; 5], |[sx, sy, sxx, syy, sxy], (a, b)| {
            [sx + a, sy + b, a.mul_add(a, sxx), b.mul_add(b, syy), a.mul_add(b, sxy)]
        });
    let n = U::from(x.len());

    let numerator = sxy - sx * sy / n;

    // A constant vector has zero variance. Cancellation may also leave a
    // tiny negative variance.
    let variances = (sxx - sx * sx / n) * (syy - sy * sy / n);
    if variances <= U::ZERO {
        return Ok(U::ZERO);
    }

    Ok(numerator / variances.sqrt())
}
