use std::fmt::{Debug, Display};

use num_traits::{Float, Num, WrappingAdd, WrappingMul, WrappingSub};

mod sealed {
    pub trait Sealed {}
}

/// The numeric component type of a [`Complex`](crate::Complex).
///
/// Implemented for every primitive integer and float, and sealed so nothing else can be used as
/// a component. `Complex<String>` is a compile error, not a runtime one.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display + sealed::Sealed {
    /// Floating point type that division and exponentiation promote into.
    ///
    /// `f32` stays `f32`, `f64` stays `f64`, integers widen to `f64`.
    type Float: Scalar + Float;

    /// Widens to the associated float type.
    fn promote(self) -> Self::Float;

    /// Widens to `f64` regardless of [`Scalar::Float`].
    fn into_f64(self) -> f64;

    /// Narrows an `f64` with `as` semantics: truncated toward zero, saturated at the type's
    /// bounds, `NaN` becomes zero for integers.
    fn from_f64_lossy(v: f64) -> Self;

    /// `self + rhs`, wrapping around at the bounds of integer types.
    fn add_wrapped(self, rhs: Self) -> Self;

    fn sub_wrapped(self, rhs: Self) -> Self;

    fn mul_wrapped(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            type Float = $t;

            #[inline]
            fn promote(self) -> $t {
                self
            }

            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_lossy(v: f64) -> $t {
                v as $t
            }

            #[inline]
            fn add_wrapped(self, rhs: $t) -> $t {
                self + rhs
            }

            #[inline]
            fn sub_wrapped(self, rhs: $t) -> $t {
                self - rhs
            }

            #[inline]
            fn mul_wrapped(self, rhs: $t) -> $t {
                self * rhs
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            type Float = f64;

            #[inline]
            fn promote(self) -> f64 {
                self as f64
            }

            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_lossy(v: f64) -> $t {
                v as $t
            }

            #[inline]
            fn add_wrapped(self, rhs: $t) -> $t {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn sub_wrapped(self, rhs: $t) -> $t {
                WrappingSub::wrapping_sub(&self, &rhs)
            }

            #[inline]
            fn mul_wrapped(self, rhs: $t) -> $t {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);
