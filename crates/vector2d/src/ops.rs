//! Operator overloads.
//!
//! - Vector ⊕ vector: componentwise (`+`, `-`, and `*` as the Hadamard product).
//! - Vector ⊕ scalar: acts on the *length* and keeps the angle. All four
//!   (`+`, `-`, `*`, `/`) reconstruct through `Vector2D::from_polar(length ∘ s, angle)`,
//!   so `ZERO + 5.0 == (5, 0)` and `v * -1.0` flips `v` up to rounding.
//!   Division by zero propagates Inf/NaN.
//!
//! Length ordering (`<`, `>`) is not an operator here; see
//! `Vector2D::{shorter_than, longer_than, cmp_length}`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::vector::Vector2D;

impl Vector2D {
    #[inline]
    fn map_length(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self::from_polar(f(self.length()), self.angle())
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2D::new(-self.x, -self.y)
    }
}

/// Hadamard product. Not a standard vector operation; handy for per-axis scaling.
impl Mul for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: Vector2D) -> Self::Output {
        Vector2D::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Adds `rhs` to the length.
impl Add<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.map_length(|len| len + rhs)
    }
}
impl AddAssign<f64> for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

/// Subtracts `rhs` from the length.
impl Sub<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.map_length(|len| len - rhs)
    }
}
impl SubAssign<f64> for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

/// Multiplies the length by `rhs`.
impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.map_length(|len| len * rhs)
    }
}
impl MulAssign<f64> for Vector2D {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Divides the length by `rhs`.
impl Div<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.map_length(|len| len / rhs)
    }
}
impl DivAssign<f64> for Vector2D {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
