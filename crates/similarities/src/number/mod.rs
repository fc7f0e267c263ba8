//! The `Number` trait is used to represent the elements of attribute vectors.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
//! * All primitive floating point numbers: `f32`, `f64`.
//!
//! Similarity values are computed in a `Float`, i.e. `f32` or `f64`.

mod _float;
mod _number;
mod arithmetic;

pub use _float::Float;
pub use _number::Number;
pub use arithmetic::{Addition, Multiplication};
