//! Scalar abstraction and the [`Complex`] value type used by every transform.
//!
//! All transcendental functions route through `libm` so the crate stays
//! usable without `std`.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// Minimal float trait for the generic transform (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Narrowing conversion from `f64`; used for angles and scale factors so
    /// they are computed at full precision before conversion.
    fn from_f64(x: f64) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn exp(self) -> Self;
    fn atan2(self, x: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn abs(self) -> Self;
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn sinh(self) -> Self {
        libm::sinhf(self)
    }
    fn cosh(self) -> Self {
        libm::coshf(self)
    }
    fn exp(self) -> Self {
        libm::expf(self)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn sinh(self) -> Self {
        libm::sinh(self)
    }
    fn cosh(self) -> Self {
        libm::cosh(self)
    }
    fn exp(self) -> Self {
        libm::exp(self)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

/// An immutable complex number. Every operation returns a new value.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }

    /// Unit phasor `cos(theta) + i sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiply both components by a real scalar.
    #[inline(always)]
    pub fn scale(self, alpha: T) -> Self {
        Self {
            re: self.re * alpha,
            im: self.im * alpha,
        }
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude `re² + im²`.
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Multiplicative inverse `1 / self`.
    ///
    /// # Precondition
    /// `self` must not be exactly zero. The zero value is not guarded and
    /// yields non-finite components. Use [`Complex::checked_reciprocal`] when
    /// the divisor is not known to be non-zero.
    pub fn reciprocal(self) -> Self {
        let scale = self.norm_sqr();
        Self {
            re: self.re / scale,
            im: -self.im / scale,
        }
    }

    /// [`Complex::reciprocal`] that returns `None` for the zero value.
    pub fn checked_reciprocal(self) -> Option<Self> {
        if self.re == T::zero() && self.im == T::zero() {
            None
        } else {
            Some(self.reciprocal())
        }
    }

    /// `self / other`, computed as `self * other.reciprocal()`.
    ///
    /// Shares the precondition of [`Complex::reciprocal`] on `other`.
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: Self) -> Self {
        self.mul(other.reciprocal())
    }

    pub fn checked_div(self, other: Self) -> Option<Self> {
        other.checked_reciprocal().map(|r| self.mul(r))
    }

    /// Euclidean magnitude, computed with `hypot` to avoid intermediate
    /// overflow or underflow.
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }

    /// Argument in `(-π, π]`.
    ///
    /// A negative real axis with a `-0.0` imaginary part (as produced by
    /// `conj`) reports `π`, not `-π`.
    pub fn phase(self) -> T {
        let p = self.im.atan2(self.re);
        if p == -T::pi() {
            T::pi()
        } else {
            p
        }
    }

    pub fn exp(self) -> Self {
        let r = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        Self {
            re: r * cos,
            im: r * sin,
        }
    }

    pub fn sin(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self {
            re: sin * self.im.cosh(),
            im: cos * self.im.sinh(),
        }
    }

    pub fn cos(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self {
            re: cos * self.im.cosh(),
            im: -(sin * self.im.sinh()),
        }
    }

    /// `sin(self) / cos(self)`; undefined where `cos(self)` is exactly zero.
    pub fn tan(self) -> Self {
        self.sin().div(self.cos())
    }

    /// Componentwise comparison within an absolute tolerance.
    pub fn approx_eq(self, other: Self, tol: T) -> bool {
        (self.re - other.re).abs() <= tol && (self.im - other.im).abs() <= tol
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, alpha: T) -> Self {
        self.scale(alpha)
    }
}

impl<T: Float> Div for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, other: Self) -> Self {
        Complex::<T>::div(self, other)
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

/// Renders `re`, `{im}i`, `re - {|im|}i` or `re + {im}i`.
impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == T::zero() {
            return write!(f, "{}", self.re);
        }
        if self.re == T::zero() {
            return write!(f, "{}i", self.im);
        }
        if self.im < T::zero() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
