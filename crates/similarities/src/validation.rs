//! Validation of attribute vectors before a metric is computed.
//!
//! Statically typed inputs (`&[T]` with `T: Number`) are always sequences of
//! numbers, so only their lengths need checking at runtime. Inputs which
//! arrive as `serde_json::Value`s are checked by `validate_type` first.

use serde_json::Value;

use crate::{Cause, Metric, ValidationError};

/// Checks that both values are arrays of numbers.
///
/// # Arguments
///
/// * `a`: The first attribute vector.
/// * `b`: The second attribute vector.
/// * `metric`: The metric which will consume the vectors.
///
/// # Returns
///
/// The contents of both arrays as `f64`s.
///
/// # Errors
///
/// If either value is not an array, or contains something other than a
/// number, with `Cause::NotASequence`.
pub fn validate_type(a: &Value, b: &Value, metric: Metric) -> Result<(Vec<f64>, Vec<f64>), ValidationError> {
    match (as_numbers(a), as_numbers(b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(reject(metric, Cause::NotASequence)),
    }
}

/// Checks that both attribute vectors have the same length.
///
/// Only the position-indexed metrics need this. The set-based metrics ignore
/// length.
///
/// # Errors
///
/// If the lengths differ, with `Cause::LengthMismatch`.
pub fn validate_length<T>(x: &[T], y: &[T], metric: Metric) -> Result<(), ValidationError> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(reject(
            metric,
            Cause::LengthMismatch {
                left: x.len(),
                right: y.len(),
            },
        ))
    }
}

/// Reads a JSON array of numbers.
fn as_numbers(value: &Value) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(Value::as_f64).collect()
}

/// Logs and builds the error for a rejected input.
fn reject(metric: Metric, cause: Cause) -> ValidationError {
    let err = ValidationError::new(metric, cause);
    ftlog::error!("{err}");
    err
}
