//! The error returned when an attribute vector is rejected.

use core::fmt::Display;

use thiserror::Error;

use crate::Metric;

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// An argument was not an ordered sequence of numbers.
    NotASequence,
    /// The two attribute vectors have different lengths.
    LengthMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
}

impl Display for Cause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotASequence => write!(f, "attribute vector is not a sequence of numbers"),
            Self::LengthMismatch { left, right } => {
                write!(f, "attribute vectors have different lengths ({left} != {right})")
            }
        }
    }
}

/// Invalid input to one of the similarity metrics.
///
/// Carries the metric which rejected the input and the `Cause`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{metric}: {cause}")]
pub struct ValidationError {
    /// The metric which rejected the input.
    metric: Metric,
    /// Why the input was rejected.
    cause: Cause,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub const fn new(metric: Metric, cause: Cause) -> Self {
        Self { metric, cause }
    }

    /// The metric which rejected the input.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Why the input was rejected.
    #[must_use]
    pub const fn cause(&self) -> Cause {
        self.cause
    }
}
