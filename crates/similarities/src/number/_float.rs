//! The `Float` variant of `Number`, used for similarity values.

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
pub trait Float: Number + core::ops::Neg<Output = Self> {
    /// Returns the square root of a `Float`.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns the absolute value of a `Float`.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns `true` if the number is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;
}

/// Macro to implement `Float` for the primitive floating point types.
macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                fn sqrt(self) -> Self {
                    Self::sqrt(self)
                }

                fn abs(self) -> Self {
                    Self::abs(self)
                }

                fn is_finite(self) -> bool {
                    Self::is_finite(self)
                }
            }
        )*
    }
}

impl_float!(f32, f64);
