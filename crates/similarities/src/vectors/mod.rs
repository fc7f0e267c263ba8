//! Similarity functions for position-indexed attribute vectors.
//!
//! These functions compare elements at the same index in both vectors, so
//! the two vectors must have the same length. All arithmetic is done in the
//! output `Float` type, after converting each element.

mod angular;
mod correlations;
mod euclidean;
mod utils;

pub use angular::cosine_similarity;
pub use correlations::pearson_correlation;
pub use euclidean::euclidean_distance;
