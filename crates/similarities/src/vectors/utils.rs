//! Utility functions for vector based similarity calculations.

use crate::{Float, Number};

/// An iterator over the corresponding elements of two vectors, converted to
/// the output `Float` type.
pub fn float_pairs<'a, T: Number, U: Float>(x: &'a [T], y: &'a [T]) -> impl Iterator<Item = (U, U)> + 'a {
    x.iter().zip(y.iter()).map(|(&a, &b)| (U::from(a), U::from(b)))
}
