//! Similarity functions for sets.
//!
//! The attribute vectors are read as sets: duplicate elements collapse and
//! order is irrelevant. The vectors may have different lengths. Elements are
//! compared with `Number::total_cmp`, after `-0.0` is folded into `0.0`.

use crate::{Float, Number};

/// Jaccard index.
///
/// The Jaccard (or Tanimoto) index is the cardinality of the intersection of
/// the sets divided by the cardinality of their union. It lies in `[0, 1]`
/// and is `1` when the sets are identical and non-empty.
///
/// If both sets are empty, `0` is returned.
///
/// # Arguments
///
/// * `x`: A set represented as a slice of `Number`s.
/// * `y`: A set represented as a slice of `Number`s.
///
/// # Examples
///
/// ```
/// use similarities::sets::jaccard_index;
///
/// let x: Vec<u32> = vec![1, 2, 3];
/// let y: Vec<u32> = vec![2, 3, 4, 4];
///
/// let similarity: f32 = jaccard_index(&x, &y);
///
/// assert!((similarity - 0.5).abs() < f32::EPSILON);
/// ```
pub fn jaccard_index<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let (x, y) = (unique_sorted(x), unique_sorted(y));

    let intersection = intersection_size(&x, &y);
    let union = x.len() + y.len() - intersection;

    if union == 0 {
        U::ZERO
    } else {
        U::from(intersection) / U::from(union)
    }
}

/// Ochiai coefficient.
///
/// Computed as the cardinality of the intersection of the sets divided by the
/// product of their cardinalities, `|x ∩ y| / (|x| * |y|)`. For identical
/// sets this is `1 / |x|`, not `1`. See [`ochiai_coefficient_geometric`] for
/// the form which divides by the geometric mean of the cardinalities.
///
/// If either set is empty, `0` is returned.
///
/// # Arguments
///
/// * `x`: A set represented as a slice of `Number`s.
/// * `y`: A set represented as a slice of `Number`s.
///
/// # Examples
///
/// ```
/// use similarities::sets::ochiai_coefficient;
///
/// let x: Vec<i64> = vec![5, 7, 8, 10];
/// let y: Vec<i64> = vec![10, 9, 8, 4, 6];
///
/// let similarity: f64 = ochiai_coefficient(&x, &y);
///
/// assert!((similarity - 0.1).abs() < f64::EPSILON);
/// ```
pub fn ochiai_coefficient<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let (x, y) = (unique_sorted(x), unique_sorted(y));

    if x.is_empty() || y.is_empty() {
        U::ZERO
    } else {
        U::from(intersection_size(&x, &y)) / (U::from(x.len()) * U::from(y.len()))
    }
}

/// Ochiai coefficient, as the cosine similarity of set membership.
///
/// Computed as `|x ∩ y| / sqrt(|x| * |y|)`. It lies in `[0, 1]` and is `1`
/// when the sets are identical and non-empty.
///
/// If either set is empty, `0` is returned.
///
/// # Arguments
///
/// * `x`: A set represented as a slice of `Number`s.
/// * `y`: A set represented as a slice of `Number`s.
pub fn ochiai_coefficient_geometric<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let (x, y) = (unique_sorted(x), unique_sorted(y));

    if x.is_empty() || y.is_empty() {
        U::ZERO
    } else {
        U::from(intersection_size(&x, &y)) / (U::from(x.len()) * U::from(y.len())).sqrt()
    }
}

/// Sorts and deduplicates the elements of `x`.
///
/// Zeros of either sign become the same element.
fn unique_sorted<T: Number>(x: &[T]) -> Vec<T> {
    let mut x = x.iter().map(|&v| if v == T::ZERO { T::ZERO } else { v }).collect::<Vec<_>>();
    x.sort_by(|a, b| a.total_cmp(b));
    x.dedup_by(|a, b| a.total_cmp(b).is_eq());
    x
}

/// Number of elements shared by two sorted and deduplicated slices.
fn intersection_size<T: Number>(x: &[T], y: &[T]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < x.len() && j < y.len() {
        match x[i].total_cmp(&y[j]) {
            core::cmp::Ordering::Less => i += 1,
            core::cmp::Ordering::Greater => j += 1,
            core::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}
