//! Similarity derived from the Euclidean distance.

use crate::{validate_length, Float, Metric, Number, ValidationError};

use super::utils::float_pairs;

/// Euclidean similarity between two attribute vectors.
///
/// Computes the Euclidean (L2) distance `d` between the vectors and maps it
/// to `1 / (1 + d)`. The result lies in `(0, 1]`, is exactly `1.0` for
/// identical vectors and decreases as the distance grows.
///
/// When the distance between finite vectors is too large to represent, the
/// vectors are rescaled by their largest magnitude so that the result stays
/// positive. Only elements which are infinite in the output type give `0`.
///
/// Empty vectors are at distance zero from each other, so their similarity
/// is `1.0`.
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
/// use similarities::vectors::euclidean_distance;
///
/// let x = vec![1_u32, 2, 3];
/// let y = vec![1_u32, 2, 3];
///
/// let similarity: f64 = euclidean_distance(&x, &y).unwrap();
/// assert!((similarity - 1.0).abs() <= f64::EPSILON);
///
/// let y = vec![4_u32, 6, 3];
/// let similarity: f64 = euclidean_distance(&x, &y).unwrap();
/// assert!((similarity - 1.0 / 6.0).abs() <= f64::EPSILON);
///
/// let similarity: f64 = euclidean_distance(&[f64::MAX], &[-f64::MAX]).unwrap();
/// assert!(similarity > 0.0);
/// ```
pub fn euclidean_distance<T: Number, U: Float>(x: &[T], y: &[T]) -> Result<U, ValidationError> {
    validate_length(x, y, Metric::Euclidean)?;

    let distance = float_pairs::<T, U>(x, y)
        .fold(U::ZERO, |acc, (a, b)| {
            let d = a - b;
            d.mul_add(d, acc)
        })
        .sqrt();

    if distance.is_finite() {
        return Ok((U::ONE + distance).inv());
    }

    let scale = float_pairs::<T, U>(x, y).fold(U::ZERO, |s, (a, b)| {
        let m = if a.abs() > b.abs() { a.abs() } else { b.abs() };
        if m > s {
            m
        } else {
            s
        }
    });
    if !scale.is_finite() {
        return Ok(U::ZERO);
    }

    // With `d = scale * r`, `1 / (1 + d) = (1 / scale) / (1 / scale + r)`.
    let r = float_pairs::<T, U>(x, y)
        .fold(U::ZERO, |acc, (a, b)| {
            let d = a / scale - b / scale;
            d.mul_add(d, acc)
        })
        .sqrt();
    let inv_scale = scale.inv();

    Ok(inv_scale / (inv_scale + r))
}
