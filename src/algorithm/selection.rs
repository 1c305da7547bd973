//! Seeded random selection shared by the placement strategies

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Coordinate;
use crate::spatial::grid::panel_coordinates;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Each generation run owns its selector, so independent runs never share
/// a random stream.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`, `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform coordinate within a panel of the given size
    pub fn coordinate(&mut self, size: usize) -> Option<Coordinate> {
        (size > 0).then(|| {
            Coordinate::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            )
        })
    }

    /// Draw `amount` distinct panel coordinates uniformly without replacement
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` exceeds the number of panel positions
    pub fn sample_coordinates(&mut self, size: usize, amount: usize) -> Result<Vec<Coordinate>> {
        let population: Vec<Coordinate> = panel_coordinates(size).collect();
        if amount > population.len() {
            return Err(invalid_parameter(
                "amount",
                &amount,
                &format!("cannot sample more than {} positions", population.len()),
            ));
        }

        Ok(rand::seq::index::sample(&mut self.rng, population.len(), amount)
            .into_iter()
            .filter_map(|i| population.get(i).copied())
            .collect())
    }
}
