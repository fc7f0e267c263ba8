#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod errors;
mod metric;
pub mod number;
pub mod sets;
mod validation;
pub mod vectors;

pub use errors::{Cause, ValidationError};
pub use metric::Metric;
pub use number::{Float, Number};
pub use sets::{jaccard_index, ochiai_coefficient};
pub use validation::{validate_length, validate_type};
pub use vectors::{cosine_similarity, euclidean_distance, pearson_correlation};

/// The version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
