//! Pairwise Euclidean distances between coordinate sets

use crate::io::error::{Result, computation_error};
use crate::spatial::Coordinate;
use ndarray::{Array1, Array2, Axis};

/// Distance matrix between every point of `a` and every point of `b`
///
/// Entry `(p, q)` holds the Euclidean distance from `a[p]` to `b[q]`.
///
/// # Errors
///
/// Returns a computation error if either input is empty
pub fn pairwise_distances(a: &[Coordinate], b: &[Coordinate]) -> Result<Array2<f64>> {
    if a.is_empty() || b.is_empty() {
        return Err(computation_error(
            "pairwise distances",
            &format!("empty input ({} x {})", a.len(), b.len()),
        ));
    }

    Ok(Array2::from_shape_fn((a.len(), b.len()), |(p, q)| {
        a.get(p)
            .zip(b.get(q))
            .map_or(0.0, |(from, to)| euclidean(*from, *to))
    }))
}

/// Sum of distances from each point of `a` to all points of `b`
///
/// # Errors
///
/// Returns a computation error if either input is empty
pub fn distance_sums(a: &[Coordinate], b: &[Coordinate]) -> Result<Array1<f64>> {
    Ok(pairwise_distances(a, b)?.sum_axis(Axis(1)))
}

/// Euclidean distance between two coordinates
pub fn euclidean(from: Coordinate, to: Coordinate) -> f64 {
    let dx = from.x as f64 - to.x as f64;
    let dy = from.y as f64 - to.y as f64;
    dx.hypot(dy)
}
