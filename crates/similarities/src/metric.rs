//! Selecting a similarity metric by name.

use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{sets, validate_type, vectors, Float, Number, ValidationError};

/// The similarity metrics provided by this crate.
///
/// A `Metric` can be parsed from its snake_case identifier or deserialized
/// from a consumer's configuration, e.g. `metric = "pearson"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// See [`vectors::euclidean_distance`].
    Euclidean,
    /// See [`vectors::pearson_correlation`].
    Pearson,
    /// See [`sets::jaccard_index`].
    Jaccard,
    /// See [`sets::ochiai_coefficient`].
    Ochiai,
    /// See [`vectors::cosine_similarity`].
    Cosine,
}

impl Metric {
    /// All metrics, in declaration order.
    pub const ALL: [Self; 5] = [Self::Euclidean, Self::Pearson, Self::Jaccard, Self::Ochiai, Self::Cosine];

    /// The human-readable name of the metric.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "Euclidean distance",
            Self::Pearson => "Pearson correlation",
            Self::Jaccard => "Jaccard index",
            Self::Ochiai => "Ochiai coefficient",
            Self::Cosine => "Cosine similarity",
        }
    }

    /// The snake_case identifier of the metric.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Pearson => "pearson",
            Self::Jaccard => "jaccard",
            Self::Ochiai => "ochiai",
            Self::Cosine => "cosine",
        }
    }

    /// Whether the metric compares elements by position, and so needs both
    /// vectors to have the same length.
    #[must_use]
    pub const fn requires_equal_length(&self) -> bool {
        matches!(self, Self::Euclidean | Self::Pearson | Self::Cosine)
    }

    /// Computes the similarity between two attribute vectors.
    ///
    /// # Errors
    ///
    /// If the metric requires equal lengths and the vectors differ in length.
    pub fn similarity<T: Number, U: Float>(&self, x: &[T], y: &[T]) -> Result<U, ValidationError> {
        match self {
            Self::Euclidean => vectors::euclidean_distance(x, y),
            Self::Pearson => vectors::pearson_correlation(x, y),
            Self::Jaccard => Ok(sets::jaccard_index(x, y)),
            Self::Ochiai => Ok(sets::ochiai_coefficient(x, y)),
            Self::Cosine => vectors::cosine_similarity(x, y),
        }
    }

    /// Computes the similarity between two attribute vectors read from JSON.
    ///
    /// # Errors
    ///
    /// * If either value is not an array of numbers.
    /// * If the metric requires equal lengths and the arrays differ in length.
    pub fn similarity_of_values(&self, a: &Value, b: &Value) -> Result<f64, ValidationError> {
        let (x, y) = validate_type(a, b, *self)?;
        self.similarity(&x, &y)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown metric: {s}"))
    }
}
