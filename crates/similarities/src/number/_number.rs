//! A `Number` is a general numeric type.
//!
//! Attribute vectors are slices of `Number`s.

use core::fmt::{Debug, Display};

use super::{Addition, Multiplication};

/// Attribute vectors are slices of `Number`s.
pub trait Number: Addition + Multiplication + PartialEq + Clone + Send + Sync + Debug + Display + Default {
    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f32`. This may be a lossy conversion.
    fn as_f32(self) -> f32;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns the name of the type.
    #[must_use]
    fn type_name<'a>() -> &'a str {
        core::any::type_name::<Self>()
    }

    /// Returns a random `Number`.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Returns a total ordering of the number.
    ///
    /// For floats this is IEEE 754 `totalOrder`, so `-0.0` sorts before `0.0`
    /// and `NaN`s compare equal to themselves.
    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering;
}

impl Number for f32 {
    fn from<T: Number>(n: T) -> Self {
        n.as_f32()
    }

    fn as_f32(self) -> f32 {
        self
    }

    #[allow(clippy::cast_lossless)]
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_cmp(other)
    }
}

impl Number for f64 {
    fn from<T: Number>(n: T) -> Self {
        n.as_f64()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_f32(self) -> f32 {
        self as f32
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_cmp(other)
    }
}

/// A macro to implement the `Number` trait for primitive integer types.
macro_rules! impl_number_int {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss, clippy::cast_lossless)]
            impl Number for $ty {
                fn from<T: Number>(n: T) -> Self {
                    n.as_f64() as $ty
                }

                fn as_f32(self) -> f32 {
                    self as f32
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }

                fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
                    self.cmp(other)
                }
            }
        )*
    }
}

impl_number_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
