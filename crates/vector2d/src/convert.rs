//! Conversions to and from tuples, arrays and nalgebra types.
//!
//! Integer inputs widen to `f64` (exact for |n| < 2^53, so every `i32`).

use nalgebra::{Point2, Vector2};

use crate::vector::Vector2D;

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Integer pixel/grid coordinates.
impl From<(i32, i32)> for Vector2D {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<Vector2D> for (f64, f64) {
    #[inline]
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2D> for [f64; 2] {
    #[inline]
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

/// Point-like adapter: plain field copy with widening.
impl From<Point2<i32>> for Vector2D {
    #[inline]
    fn from(p: Point2<i32>) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<Point2<f64>> for Vector2D {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}
