//! The `Vector2D` value type: construction, mutators and metric queries.
//!
//! Model
//! - Cartesian storage only (`x`, `y`). Length and angle are recomputed on
//!   every call and never cached, so the polar view cannot drift from x/y.
//! - Every "keep the angle, change the length" style operation goes through
//!   [`Vector2D::from_polar`] with the angle returned by [`Vector2D::angle`].
//!   For the zero vector that angle is `atan2(0, 0) = 0`, which is why
//!   `set_length` and the scalar operators map (0,0) onto the positive x-axis.
//!
//! References
//! - Code cross-refs: `ops` (operator table), `sum::KahanSum`, `convert`

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

/// Two-component `f64` vector with XNA-style semantics.
///
/// Any pair of reals is a legal value, including NaN and infinities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// The zero vector (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Vector with magnitude `length` pointing at `angle` radians.
    ///
    /// A negative `length` points the opposite way.
    #[inline]
    pub fn from_polar(length: f64, angle: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    /// Overwrite both components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Rescale to `length`, keeping the current angle. The zero vector
    /// becomes `(length, 0)`.
    pub fn set_length(&mut self, length: f64) {
        *self = Self::from_polar(length, self.angle());
    }

    /// Set the absolute angle (radians), keeping the magnitude.
    pub fn set_angle(&mut self, angle: f64) {
        *self = Self::from_polar(self.length(), angle);
    }

    /// Rotate counter-clockwise by `angle` radians, keeping the magnitude.
    pub fn rotate(&mut self, angle: f64) {
        *self = Self::from_polar(self.length(), self.angle() + angle);
    }

    /// Scale to unit length in place. No-op when the length is exactly 0.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
        }
    }

    /// Euclidean norm `sqrt(x² + y²)`.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// `|self.length() - other.length()|`.
    #[inline]
    pub fn length_difference(&self, other: Self) -> f64 {
        (self.length() - other.length()).abs()
    }

    /// Angle from the positive x-axis in (-π, π]; 0 for the zero vector.
    ///
    /// Follows `atan2` on signed zeros: `(-1, -0.0)` yields `-π`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// `angle()` in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.angle() * 180.0 / PI
    }

    /// Euclidean distance between the two endpoints.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Scalar product.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Determinant of `[self other]` (2D cross product, signed area).
    #[inline]
    pub fn det(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle from `self` to `other` in (-π, π], positive for a
    /// counter-clockwise turn.
    #[inline]
    pub fn angle_between(&self, other: Self) -> f64 {
        self.det(other).atan2(self.dot(other))
    }

    /// Normalized copy; the zero vector maps to itself.
    pub fn unit(&self) -> Self {
        let length = self.length();
        if length != 0.0 {
            Self::new(self.x / length, self.y / length)
        } else {
            Self::ZERO
        }
    }

    /// Displacement `other - self`.
    #[inline]
    pub fn to(&self, other: Self) -> Self {
        Self::new(other.x - self.x, other.y - self.y)
    }

    /// Unit vector from `self` towards `other` (zero when they coincide).
    #[inline]
    pub fn direction(&self, other: Self) -> Self {
        self.to(other).unit()
    }

    /// Componentwise `|Δ| <= eps`.
    #[inline]
    pub fn approx_eq(&self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Length comparison (`<`/`>` of the XNA class). `None` if either length is NaN.
    #[inline]
    pub fn cmp_length(&self, other: Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }

    #[inline]
    pub fn shorter_than(&self, other: Self) -> bool {
        self.length() < other.length()
    }

    #[inline]
    pub fn longer_than(&self, other: Self) -> bool {
        self.length() > other.length()
    }

    /// Identity comparison: true only if `self` and `other` are the same
    /// storage location.
    ///
    /// Kept from the XNA-style API, where `Equals` compared object identity
    /// rather than value. Two distinct vectors with identical components are
    /// *not* `equals`; use `==` for value equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Signed angle from `a` to `b`; same as `a.angle_between(b)`.
#[inline]
pub fn angle_between(a: Vector2D, b: Vector2D) -> f64 {
    a.angle_between(b)
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {}, Y = {}, length = {}", self.x, self.y, self.length())
    }
}
