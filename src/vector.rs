//! Operations on plain `f64` slices, plus the random helpers used to seed
//! weights and reorder datasets.
//!
//! The element-wise helpers panic when handed slices of different lengths;
//! callers in this crate check shapes before reaching them.

use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Computes the dot product of `a` and `b`.
///
/// # Panics
///
/// If `a` and `b` have different lengths.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot product of unequal-length vectors");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Computes `a - b` element-wise.
///
/// # Panics
///
/// If `a` and `b` have different lengths.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "subtraction of unequal-length vectors");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Computes `a * b` element-wise.
///
/// # Panics
///
/// If `a` and `b` have different lengths.
pub fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "multiplication of unequal-length vectors");
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

/// Sums the elements of `a`; `0.0` when empty.
pub fn sum(a: &[f64]) -> f64 {
    a.iter().sum()
}

/// Root of the summed squared differences between `actual` and `expected`.
pub fn rms_error(actual: &[f64], expected: &[f64]) -> f64 {
    let diff = subtract(actual, expected);
    sum(&multiply(&diff, &diff)).sqrt()
}

/// Returns `n` values drawn uniformly from `[-1, 1)`.
pub fn random_weights<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    let range = Uniform::new(-1.0, 1.0);
    (0..n).map(|_| range.sample(rng)).collect()
}

/// Returns `n` values drawn uniformly from `[0, limit)`.
///
/// # Panics
///
/// If `limit` is not strictly positive.
pub fn random_uniform<R: Rng + ?Sized>(n: usize, limit: f64, rng: &mut R) -> Vec<f64> {
    let range = Uniform::new(0.0, limit);
    (0..n).map(|_| range.sample(rng)).collect()
}

/// Returns a uniformly random permutation of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Divides every column of `matrix` by that column's maximum, in place.
///
/// Columns whose maximum is not a positive finite number (all zeros, all
/// negative, or holding an infinity) are left unchanged rather than filled
/// with NaN. Fails if the rows are not all the same width.
pub fn normalize_by_column_max(matrix: &mut [Vec<f64>]) -> Result<()> {
    let width = match matrix.first() {
        Some(row) => row.len(),
        None => return Ok(()),
    };
    if let Some(row) = matrix.iter().find(|row| row.len() != width) {
        return Err(Error::shape("matrix row", width, row.len()));
    }

    for col in 0..width {
        let max = matrix
            .iter()
            .map(|row| row[col])
            .fold(f64::NEG_INFINITY, f64::max);
        if !(max > 0.0 && max.is_finite()) {
            continue;
        }
        for row in matrix.iter_mut() {
            row[col] /= max;
        }
    }
    Ok(())
}
