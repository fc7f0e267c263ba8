//! Addition and Multiplication of `Number` types.

use core::ops::{Add, Div, Mul, Sub};

/// The `Addition` trait provides the additive identity and operations for a
/// `Number` type.
pub trait Addition: Copy + PartialOrd + Add<Output = Self> + Sub<Self, Output = Self> {
    /// The additive identity.
    const ZERO: Self;
}

/// Macro to implement `Addition` for all integer types.
macro_rules! impl_addition {
    ($($ty:ty),*) => {
        $(
            impl Addition for $ty {
                const ZERO: Self = 0;
            }
        )*
    }
}

impl_addition!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Addition for f32 {
    const ZERO: Self = 0.0;
}

impl Addition for f64 {
    const ZERO: Self = 0.0;
}

/// The `Multiplication` trait provides the multiplicative identity and
/// operations for a `Number` type.
pub trait Multiplication: Addition + Mul<Output = Self> + Div<Self, Output = Self> {
    /// The multiplicative identity.
    const ONE: Self;

    /// Returns the multiplicative inverse of `self`.
    #[must_use]
    fn inv(self) -> Self {
        Self::ONE / self
    }

    /// Returns `self * a + b`, potentially as a fused multiply-add operation.
    #[must_use]
    fn mul_add(self, a: Self, b: Self) -> Self;
}

/// Macro to implement `Multiplication` for all floating-point types.
macro_rules! impl_multiplication_float {
    ($($ty:ty),*) => {
        $(
            impl Multiplication for $ty {
                const ONE: Self = 1.0;

                fn mul_add(self, a: Self, b: Self) -> Self {
                    self.mul_add(a, b)
                }
            }
        )*
    }
}

impl_multiplication_float!(f32, f64);

/// Macro to implement `Multiplication` for all integer types.
macro_rules! impl_multiplication_int {
    ($($ty:ty),*) => {
        $(
            impl Multiplication for $ty {
                const ONE: Self = 1;

                fn mul_add(self, a: Self, b: Self) -> Self {
                    self * a + b
                }
            }
        )*
    }
}

impl_multiplication_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
