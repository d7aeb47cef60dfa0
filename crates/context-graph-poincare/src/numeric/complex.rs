//! Total complex arithmetic.
//!
//! Disk points are complex numbers, so every Mobius transform in the kernel
//! is written against this type. Unlike `num_complex`, every operation here
//! is total: results are always finite.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::guards::{EPSILON, LARGE_MAGNITUDE};

/// Complex number with finite components.
///
/// # Example
///
/// ```
/// use context_graph_poincare::numeric::Complex;
///
/// let z = Complex::new(f64::NAN, 2.0);
/// assert_eq!(z, Complex::new(0.0, 2.0));
///
/// let w = Complex::new(1.0, 1.0) / Complex::ZERO;
/// assert!(w.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Construct from parts, substituting `0` for non-finite components.
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re: if re.is_finite() { re } else { 0.0 },
            im: if im.is_finite() { im } else { 0.0 },
        }
    }

    /// `r * e^(i theta)`.
    #[inline]
    pub fn polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// True if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Re-apply the constructor guard (for values built from raw fields).
    #[inline]
    pub fn sanitized(self) -> Self {
        Self::new(self.re, self.im)
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    #[inline]
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Guarded division.
    ///
    /// A denominator with magnitude below `EPSILON^2` yields the origin when
    /// the dividend is also ~0, and otherwise `LARGE_MAGNITUDE` in the
    /// dividend's direction.
    pub fn div(self, other: Self) -> Self {
        let den_abs = other.abs();
        if den_abs < EPSILON * EPSILON {
            return self.blow_up();
        }
        let den = den_abs * den_abs;
        let re = (self.re * other.re + self.im * other.im) / den;
        let im = (self.im * other.re - self.re * other.im) / den;
        if re.is_finite() && im.is_finite() {
            Self { re, im }
        } else {
            self.blow_up()
        }
    }

    fn blow_up(self) -> Self {
        if self.abs() < EPSILON {
            Self::ZERO
        } else {
            self.normalize().scale(LARGE_MAGNITUDE)
        }
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude (overflow-safe).
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Argument in `(-PI, PI]`. The origin has argument 0.
    #[inline]
    pub fn arg(self) -> f64 {
        if self.re == 0.0 && self.im == 0.0 {
            0.0
        } else {
            self.im.atan2(self.re)
        }
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.re * k, self.im * k)
    }

    /// Unit vector in the same direction, or the origin for `|z| < EPSILON`.
    #[inline]
    pub fn normalize(self) -> Self {
        let norm = self.abs();
        if norm < EPSILON || !norm.is_finite() {
            Self::ZERO
        } else {
            Self::new(self.re / norm, self.im / norm)
        }
    }

    /// Euclidean dot product, treating both as 2D vectors.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.re * other.re + self.im * other.im
    }

    /// 2D cross product `self.re * other.im - self.im * other.re`.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.re * other.im - self.im * other.re
    }
}

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::mul(self, rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        Complex::div(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
