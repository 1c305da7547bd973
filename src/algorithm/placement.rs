//! Placement strategies deciding which pixels of a panel are foreground
//!
//! Every strategy maps a panel index and the grid built so far to the list
//! of coordinates that must hold the panel's foreground value. The two
//! progressive strategies carry the predecessor's foreground positions
//! forward and add exactly one more; they differ only in how that position
//! is picked.

use crate::algorithm::selection::RandomSelector;
use crate::io::error::{AlgorithmError, Result};
use crate::math::distance::distance_sums;
use crate::spatial::{Coordinate, PanelIndex, PixelGrid};
use std::fmt;
use std::str::FromStr;

/// Closed set of placement strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementStrategy {
    /// Fresh uniform sample of positions for every panel
    RandomPositions,
    /// Previous positions plus one uniformly random new position
    RandomProgress,
    /// Previous positions plus the empty position with minimal distance sum
    ///
    /// The pick is the position closest on aggregate to the existing
    /// cluster, not the farthest.
    Nearest,
}

impl PlacementStrategy {
    /// Every strategy, in registration order
    pub const ALL: [Self; 3] = [Self::RandomPositions, Self::RandomProgress, Self::Nearest];

    /// Registered name of the strategy
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomPositions => "randomPositions",
            Self::RandomProgress => "randomProgress",
            Self::Nearest => "nearest",
        }
    }

    /// Whether each panel extends its predecessor by exactly one position
    pub const fn is_progressive(self) -> bool {
        !matches!(self, Self::RandomPositions)
    }

    /// Coordinates that must be foreground in `panel`
    ///
    /// The grid is only read; panels before `panel` in raster order must
    /// already be complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the predecessor panel has no empty position left
    /// or the panel cannot hold its required foreground count
    pub fn place(
        self,
        panel: PanelIndex,
        grid: &PixelGrid,
        rng: &mut RandomSelector,
    ) -> Result<Vec<Coordinate>> {
        match self {
            Self::RandomPositions => random_positions(panel, grid, rng),
            Self::RandomProgress => progress(panel, grid, rng, |empty, _, rng| {
                Ok(rng.choose_index(empty.len()))
            }),
            Self::Nearest => progress(panel, grid, rng, |empty, full, _| {
                minimal_distance_index(empty, full)
            }),
        }
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlacementStrategy {
    type Err = AlgorithmError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| AlgorithmError::UnknownStrategy {
                name: name.to_string(),
            })
    }
}

fn random_positions(
    panel: PanelIndex,
    grid: &PixelGrid,
    rng: &mut RandomSelector,
) -> Result<Vec<Coordinate>> {
    let size = grid.size();
    rng.sample_coordinates(size, panel.ordinal(size))
}

// Shared control flow of the progressive strategies; `pick` returns an
// index into the empty positions.
fn progress<F>(
    panel: PanelIndex,
    grid: &PixelGrid,
    rng: &mut RandomSelector,
    pick: F,
) -> Result<Vec<Coordinate>>
where
    F: FnOnce(&[Coordinate], &[Coordinate], &mut RandomSelector) -> Result<Option<usize>>,
{
    let size = grid.size();
    let Some(previous) = panel.predecessor(size) else {
        return Ok(Vec::new());
    };

    if panel == PanelIndex::new(0, 1) {
        return rng
            .coordinate(size)
            .map(|coordinate| vec![coordinate])
            .ok_or(AlgorithmError::EmptyPartition {
                panel: panel.as_array(),
            });
    }

    let partition = grid.partition(previous);
    let chosen = pick(&partition.empty, &partition.full, rng)?
        .and_then(|index| partition.empty.get(index).copied())
        .ok_or(AlgorithmError::EmptyPartition {
            panel: panel.as_array(),
        })?;

    let mut full = partition.full;
    full.push(chosen);
    Ok(full)
}

/// Index of the empty position whose distances to `full` sum lowest
///
/// Ties resolve to the earliest position. An empty `full` set selects the
/// first empty position; an empty `empty` set selects nothing.
///
/// # Errors
///
/// Returns a computation error if the distance matrix cannot be built
pub fn minimal_distance_index(
    empty: &[Coordinate],
    full: &[Coordinate],
) -> Result<Option<usize>> {
    if empty.is_empty() {
        return Ok(None);
    }
    if full.is_empty() {
        return Ok(Some(0));
    }

    let sums = distance_sums(empty, full)?;
    let mut best: Option<(usize, f64)> = None;
    for (index, &sum) in sums.iter().enumerate() {
        match best {
            Some((_, lowest)) if sum >= lowest => {}
            _ => best = Some((index, sum)),
        }
    }
    Ok(best.map(|(index, _)| index))
}
