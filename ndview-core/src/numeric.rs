use num_complex::Complex;
use num_traits::{Float, Num, NumAssignOps, NumCast};
use std::fmt::Debug;
use std::ops::Neg;

/// A trait representing the floating-point types accepted by the order-statistic
/// reductions (median, quantile) and by sequence generation.
///
/// This trait bounds the types (like `f32`, `f64`) that require a usable order
/// over finite values plus transcendental functions (`sqrt`, `powf`). Complex
/// elements are handled through [`Modulus`], [`Conjugate`] and [`ClampParts`]
/// instead, since they carry no total order.
pub trait Numeric:
    Float // Includes Num + Copy + Signed + Bounded + etc.
    + NumAssignOps
    + NumCast
    + PartialOrd
    + Debug
    + Copy
    + Send
    + Sync
    + 'static
{
}

impl Numeric for f32 {}
impl Numeric for f64 {}

/// Complex conjugation applied on element read.
///
/// For real element types the conjugate is the value itself.
pub trait Conjugate: Copy {
    fn conj(self) -> Self;
}

impl Conjugate for f32 {
    fn conj(self) -> Self {
        self
    }
}

impl Conjugate for f64 {
    fn conj(self) -> Self {
        self
    }
}

impl Conjugate for i32 {
    fn conj(self) -> Self {
        self
    }
}

impl Conjugate for i64 {
    fn conj(self) -> Self {
        self
    }
}

impl<T> Conjugate for Complex<T>
where
    T: Clone + Copy + Num + Neg<Output = T>,
{
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

/// Absolute value (modulus) of an element, as a real scalar.
///
/// The moment reductions pass deviations through the modulus before squaring,
/// so the variance of complex data is a real number.
pub trait Modulus: Copy {
    type Real: Float + NumCast;

    fn modulus(self) -> Self::Real;
}

impl Modulus for f32 {
    type Real = f32;

    fn modulus(self) -> f32 {
        self.abs()
    }
}

impl Modulus for f64 {
    type Real = f64;

    fn modulus(self) -> f64 {
        self.abs()
    }
}

impl<T: Float> Modulus for Complex<T> {
    type Real = T;

    fn modulus(self) -> T {
        self.norm()
    }
}

// Shared scalar clamp used by the real and complex impls below.
fn clamp_scalar<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamping into `[min, max]`.
///
/// Complex values clamp their real and imaginary parts independently.
pub trait ClampParts: Copy {
    fn clamp_parts(self, min: Self, max: Self) -> Self;
}

impl ClampParts for f32 {
    fn clamp_parts(self, min: Self, max: Self) -> Self {
        clamp_scalar(self, min, max)
    }
}

impl ClampParts for f64 {
    fn clamp_parts(self, min: Self, max: Self) -> Self {
        clamp_scalar(self, min, max)
    }
}

impl ClampParts for i32 {
    fn clamp_parts(self, min: Self, max: Self) -> Self {
        clamp_scalar(self, min, max)
    }
}

impl ClampParts for i64 {
    fn clamp_parts(self, min: Self, max: Self) -> Self {
        clamp_scalar(self, min, max)
    }
}

impl<T: Float> ClampParts for Complex<T> {
    fn clamp_parts(self, min: Self, max: Self) -> Self {
        Complex::new(
            clamp_scalar(self.re, min.re, max.re),
            clamp_scalar(self.im, min.im, max.im),
        )
    }
}
