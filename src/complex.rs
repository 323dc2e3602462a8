use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::error::ComplexError;
use crate::scalar::Scalar;
use crate::Result;

/// Divisors whose squared magnitude is below this are treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-6;

/// A complex number `re + im*i` with components of type `T`.
///
/// # Comparisons use the magnitude
///
/// `==`, `!=`, `<`, `>`, `<=` and `>=` compare [`magnitude`](Complex::magnitude), both between
/// two complex values and between a complex value and a bare scalar. Two different values of
/// the same length are *equal*:
///
/// ```
/// use complex_number::Complex;
///
/// assert!(Complex::new(1, 0) == Complex::new(0, 1));
/// assert!(Complex::new(3, 4) == 5);
/// ```
///
/// Compare [`real`](Complex::real) and [`imaginary`](Complex::imaginary) directly when you need
/// component-wise equality.
///
/// # Division and powers
///
/// Division and [`powf`](Complex::powf) always produce a `Complex<T::Float>`, so integer
/// components are promoted to `f64` instead of being truncated.
///
/// # Integer overflow
///
/// `+`, `-` and `*` wrap on integer overflow in every build profile, so
/// `Complex::<u8>::i() * Complex::<u8>::i()` is `255 + 0i`.
///
/// # Components must be numeric
///
/// `T` is bounded by the sealed [`Scalar`] trait, so no path builds a non-numeric value:
///
/// ```compile_fail
/// use complex_number::Complex;
///
/// let z = Complex::<String>::new(String::new(), String::new());
/// ```
///
/// ```compile_fail
/// use complex_number::Complex;
///
/// let z = Complex::<String>::default();
/// ```
///
/// ```compile_fail
/// use complex_number::Complex;
///
/// let z: Complex<&str> = num_complex::Complex::new("a", "b").into();
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Complex<T: Scalar> {
    re: T,
    im: T,
}

impl<T: Scalar> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Complex::new(T::zero(), T::one())
    }

    pub fn real(&self) -> T {
        self.re
    }

    pub fn imaginary(&self) -> T {
        self.im
    }

    pub fn set_real(&mut self, re: T) {
        self.re = re;
    }

    pub fn set_imaginary(&mut self, im: T) {
        self.im = im;
    }

    /// `sqrt(re² + im²)`, computed in `f64` and converted back into `T`.
    ///
    /// For integer `T` this truncates toward zero (`|1+1i|` is `1`) and saturates at `T::MAX`.
    /// Use [`norm`](Complex::norm) for the untruncated value.
    pub fn magnitude(&self) -> T {
        let (re, im) = (self.re.into_f64(), self.im.into_f64());
        T::from_f64_lossy((re * re + im * im).sqrt())
    }

    /// `re² + im²` in floating point.
    pub fn norm_sqr(&self) -> T::Float {
        let (re, im) = (self.re.promote(), self.im.promote());
        re * re + im * im
    }

    pub fn norm(&self) -> T::Float {
        self.norm_sqr().sqrt()
    }

    /// The angle from the positive real axis, in `(-π, π]`.
    pub fn arg(&self) -> T::Float {
        self.im.promote().atan2(self.re.promote())
    }

    /// Returns `(norm, arg)`.
    pub fn to_polar(&self) -> (T::Float, T::Float) {
        (self.norm(), self.arg())
    }

    pub fn to_float(&self) -> Complex<T::Float> {
        Complex {
            re: self.re.promote(),
            im: self.im.promote(),
        }
    }

    /// Divides `self` by `rhs` in floating point.
    ///
    /// Fails with [`ComplexError::DivisionByZero`] if `rhs.norm_sqr()` is below
    /// [`DIVISION_EPSILON`]. A zero divisor never produces `inf` or `NaN`.
    pub fn try_div(self, rhs: Self) -> Result<Complex<T::Float>> {
        let divisor = rhs.norm_sqr();
        if divisor.abs().into_f64() < DIVISION_EPSILON {
            tracing::debug!(
                divisor = divisor.into_f64(),
                "refusing to divide by near-zero complex value"
            );
            return Err(ComplexError::DivisionByZero);
        }

        let (ar, ai) = (self.re.promote(), self.im.promote());
        let (br, bi) = (rhs.re.promote(), rhs.im.promote());
        Ok(Complex {
            re: (ar * br + ai * bi) / divisor,
            im: (ai * br - ar * bi) / divisor,
        })
    }

    /// Raises `self` to a real power through polar form.
    ///
    /// The magnitude is raised to `exponent` and the angle multiplied by it. Computed in `f64`.
    pub fn powf(self, exponent: f64) -> Complex<T::Float> {
        let (re, im) = (self.re.into_f64(), self.im.into_f64());
        let magnitude = (re * re + im * im).sqrt().powf(exponent);
        let angle = im.atan2(re) * exponent;
        Complex {
            re: <T::Float as Scalar>::from_f64_lossy(magnitude * angle.cos()),
            im: <T::Float as Scalar>::from_f64_lossy(magnitude * angle.sin()),
        }
    }
}

impl<T: Scalar> Default for Complex<T> {
    fn default() -> Self {
        Complex::new(T::zero(), T::zero())
    }
}

impl<F: Scalar + Float> Complex<F> {
    pub fn from_polar(r: F, theta: F) -> Self {
        Complex::new(r * theta.cos(), r * theta.sin())
    }

    /// e^(i*theta)
    pub fn cis(theta: F) -> Self {
        Complex::new(theta.cos(), theta.sin())
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: Self) -> Self {
        Complex {
            re: self.re.add_wrapped(rhs.re),
            im: self.im.add_wrapped(rhs.im),
        }
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: Self) -> Self {
        Complex {
            re: self.re.sub_wrapped(rhs.re),
            im: self.im.sub_wrapped(rhs.im),
        }
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self {
        Complex {
            re: self.re.mul_wrapped(rhs.re).sub_wrapped(self.im.mul_wrapped(rhs.im)),
            im: self.re.mul_wrapped(rhs.im).add_wrapped(rhs.re.mul_wrapped(self.im)),
        }
    }
}

/// `a / b` is [`a.try_div(b)`](Complex::try_div), so the result must be checked.
impl<T: Scalar> Div for Complex<T> {
    type Output = Result<Complex<T::Float>>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Self {
        Complex {
            re: T::zero().sub_wrapped(self.re),
            im: T::zero().sub_wrapped(self.im),
        }
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Equality and ordering are by magnitude only, see the type docs.

impl<T: Scalar> PartialEq for Complex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude() == other.magnitude()
    }
}

impl<T: Scalar> PartialOrd for Complex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}

impl<T: Scalar> PartialEq<T> for Complex<T> {
    fn eq(&self, other: &T) -> bool {
        self.magnitude() == *other
    }
}

impl<T: Scalar> PartialOrd<T> for Complex<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.magnitude().partial_cmp(other)
    }
}

impl<T: Scalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({}f, {}f)", self.re, self.im)
    }
}

impl<T: Scalar> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Complex::new(re, T::zero())
    }
}

#[cfg(feature = "num-complex")]
impl<T: Scalar> From<num_complex::Complex<T>> for Complex<T> {
    fn from(z: num_complex::Complex<T>) -> Self {
        Complex { re: z.re, im: z.im }
    }
}

#[cfg(feature = "num-complex")]
impl<T: Scalar> From<Complex<T>> for num_complex::Complex<T> {
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}
