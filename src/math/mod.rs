//! Mathematical utilities for placement decisions

/// Pairwise Euclidean distance matrices
pub mod distance;
