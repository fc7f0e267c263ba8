//! Angular similarity between vectors.

use crate::{validate_length, Float, Metric, Number, ValidationError};

use super::utils::float_pairs;

/// Computes the Cosine similarity between two vectors.
///
/// The cosine similarity is defined as the dot product of the two vectors
/// divided by the product of their magnitudes. It ranges from `-1`, for
/// vectors pointing in opposite directions, to `1`, for vectors pointing in
/// the same direction, with `0` for orthogonal vectors.
///
/// If either vector has zero magnitude, `0` is returned.
///
/// # Arguments
///
/// * `x`: A slice of numbers.
/// * `y`: A slice of numbers.
///
/// # Errors
///
/// If the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use similarities::vectors::cosine_similarity;
///
/// let x: Vec<f32> = vec![1.0, 0.0, 0.0];
/// let y: Vec<f32> = vec![0.0, 1.0, 0.0];
///
/// let similarity: f32 = cosine_similarity(&x, &y).unwrap();
/// assert!(similarity.abs() < f32::EPSILON);
/// ```
///
/// # References
///
/// * [Cosine similarity](https://en.wikipedia.org/wiki/Cosine_similarity)
pub fn cosine_similarity<T: Number, U: Float>(x: &[T], y: &[T]) -> Result<U, ValidationError> {
    validate_length(x, y, Metric::Cosine)?;

    let [xx, yy, xy] = float_pairs::<T, U>(x, y).fold([U::ZERO; 3], |[xx, yy, xy], (a, b)| {
        [a.mul_add(a, xx), b.mul_add(b, yy), a.mul_add(b, xy)]
    });

    let magnitudes = xx.sqrt() * yy.sqrt();
    if magnitudes == U::ZERO {
        Ok(U::ZERO)
    } else {
        Ok(xy / magnitudes)
    }
}
