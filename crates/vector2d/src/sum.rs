//! Compensated summation of vector sequences.
//!
//! Model
//! - Each channel (x, y) keeps a running sum `s` and a compensation term `c`.
//!   For every addend `v`, `t = s + v` and the rounding error of that addition
//!   is recovered exactly from whichever of `s`, `v` has the larger magnitude
//!   (Neumaier's refinement of Kahan summation). The result is `s + c`.
//! - The error bound is independent of the sequence length to first order,
//!   while plain left-to-right addition grows linearly with it.

use std::fmt;
use std::iter::Sum;

use crate::vector::Vector2D;

/// Errors surfaced by [`Vector2D::sum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SumError {
    /// The input sequence had no elements.
    Empty,
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumError::Empty => write!(f, "cannot sum an empty sequence of vectors"),
        }
    }
}

impl std::error::Error for SumError {}

/// Streaming compensated accumulator.
#[derive(Clone, Copy, Debug, Default)]
pub struct KahanSum {
    sum: Vector2D,
    compensation: Vector2D,
}

#[inline]
fn neumaier_step(sum: &mut f64, compensation: &mut f64, v: f64) {
    let t = *sum + v;
    if sum.abs() >= v.abs() {
        *compensation += (*sum - t) + v;
    } else {
        *compensation += (v - t) + *sum;
    }
    *sum = t;
}

#[inline]
fn compensated(sum: f64, compensation: f64) -> f64 {
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}

impl KahanSum {
    /// Empty accumulator; `total()` is the zero vector until something is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator seeded with `first` (no rounding on the first element).
    pub fn starting_at(first: Vector2D) -> Self {
        Self {
            sum: first,
            compensation: Vector2D::ZERO,
        }
    }

    pub fn add(&mut self, v: Vector2D) {
        neumaier_step(&mut self.sum.x, &mut self.compensation.x, v.x);
        neumaier_step(&mut self.sum.y, &mut self.compensation.y, v.y);
    }

    /// Compensated total so far.
    ///
    /// A channel whose running sum is non-finite reports that sum as is, so
    /// infinities propagate like plain addition instead of turning into NaN.
    pub fn total(&self) -> Vector2D {
        Vector2D::new(
            compensated(self.sum.x, self.compensation.x),
            compensated(self.sum.y, self.compensation.y),
        )
    }
}

impl Extend<Vector2D> for KahanSum {
    fn extend<I: IntoIterator<Item = Vector2D>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl Vector2D {
    /// Compensated sum of a non-empty slice.
    ///
    /// Fails fast with [`SumError::Empty`] instead of indexing past the end.
    /// Infinite or NaN components give the same result as plain addition.
    pub fn sum(vectors: &[Vector2D]) -> Result<Vector2D, SumError> {
        let (first, rest) = vectors.split_first().ok_or(SumError::Empty)?;
        let mut acc = KahanSum::starting_at(*first);
        acc.extend(rest.iter().copied());
        Ok(acc.total())
    }
}

/// Plain left-to-right sum (zero for an empty slice). Reference for error comparisons.
pub fn naive_sum(vectors: &[Vector2D]) -> Vector2D {
    vectors.iter().fold(Vector2D::ZERO, |acc, &v| acc + v)
}

/// Compensated; the empty iterator sums to the zero vector.
impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Self {
        let mut acc = KahanSum::new();
        acc.extend(iter);
        acc.total()
    }
}

impl<'a> Sum<&'a Vector2D> for Vector2D {
    fn sum<I: Iterator<Item = &'a Vector2D>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_is_an_error() {
        assert_eq!(Vector2D::sum(&[]), Err(SumError::Empty));
        assert_eq!(
            SumError::Empty.to_string(),
            "cannot sum an empty sequence of vectors"
        );
    }

    #[test]
    fn empty_iterator_sums_to_zero() {
        let none: Vec<Vector2D> = Vec::new();
        let total: Vector2D = none.iter().sum();
        assert_eq!(total, Vector2D::ZERO);
    }

    #[test]
    fn single_element_is_returned_unchanged() {
        let v = Vector2D::new(0.1, -3.75e200);
        assert_eq!(Vector2D::sum(&[v]), Ok(v));
    }

    #[test]
    fn recovers_small_terms_swallowed_by_large_ones() {
        // Plain addition loses both 1.0 terms against 1e100.
        let vs = [
            Vector2D::new(1.0, 0.0),
            Vector2D::new(1e100, 1.0),
            Vector2D::new(1.0, 0.0),
            Vector2D::new(-1e100, 0.0),
        ];
        assert_eq!(naive_sum(&vs).x, 0.0);
        let total = Vector2D::sum(&vs).unwrap();
        assert_eq!(total, Vector2D::new(2.0, 1.0));
        let via_iter: Vector2D = vs.into_iter().sum();
        assert_eq!(via_iter, total);
    }

    #[test]
    fn many_tiny_terms_beat_naive_error() {
        let vs = vec![Vector2D::new(1e-10, 0.0); 10_000];
        let exact = 1e-6;
        let naive_err = (naive_sum(&vs).x - exact).abs();
        let comp = Vector2D::sum(&vs).unwrap();
        let comp_err = (comp.x - exact).abs();
        assert!(naive_err > 0.0);
        assert!(comp_err < naive_err, "comp={comp_err:e} naive={naive_err:e}");
        assert_eq!(comp.y, 0.0);
    }

    #[test]
    fn infinities_propagate_like_plain_addition() {
        let vs = [
            Vector2D::new(1.0, 0.0),
            Vector2D::new(f64::INFINITY, 0.0),
            Vector2D::new(2.0, f64::NEG_INFINITY),
        ];
        let total = Vector2D::sum(&vs).unwrap();
        assert_eq!(total, naive_sum(&vs));
        assert_eq!(total, Vector2D::new(f64::INFINITY, f64::NEG_INFINITY));
        let via_iter: Vector2D = vs.iter().sum();
        assert_eq!(via_iter, total);

        let opposed = [Vector2D::new(f64::INFINITY, 1.0), Vector2D::new(f64::NEG_INFINITY, 1.0)];
        let total = Vector2D::sum(&opposed).unwrap();
        assert!(total.x.is_nan());
        assert_eq!(total.y, 2.0);
    }

    #[test]
    fn streaming_matches_slice_form() {
        let vs: Vec<Vector2D> = (1..=50)
            .map(|k| Vector2D::new(1.0 / k as f64, -(k as f64).sqrt()))
            .collect();
        let mut acc = KahanSum::new();
        for v in &vs {
            acc.add(*v);
        }
        let total = Vector2D::sum(&vs).unwrap();
        assert!(acc.total().approx_eq(total, 1e-12));
    }
}
