//! Benchmark profiles for the percolate workspace.
//!
//! A [`ThresholdRun`] fixes a grid size and a seeded opening order; running
//! it opens sites until the grid percolates.
//!
//! - [`reference_profile`]: 200x200 grid (40K sites)
//! - [`stress_profile`]: 1000x1000 grid (1M sites)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use percolate_core::{PercolationError, Site};
use percolate_grid::PercolationGrid;
use percolate_test_utils::shuffled_sites;

/// A grid size plus a deterministic opening order.
#[derive(Clone, Debug)]
pub struct ThresholdRun {
    pub dimension: u32,
    pub order: Vec<Site>,
}

impl ThresholdRun {
    /// Opening order for an `n`×`n` grid derived from `seed`.
    pub fn new(dimension: u32, seed: u64) -> Self {
        Self {
            dimension,
            order: shuffled_sites(dimension, seed),
        }
    }

    /// Open sites in order until the grid percolates.
    ///
    /// Returns the number of sites that were open at that point.
    pub fn run(&self) -> Result<usize, PercolationError> {
        let mut grid = PercolationGrid::new(self.dimension)?;
        for &site in &self.order {
            grid.open(site)?;
            if grid.percolates() {
                break;
            }
        }
        Ok(grid.number_of_open_sites())
    }

    /// Open-site fraction at which this run percolated.
    pub fn threshold(&self) -> Result<f64, PercolationError> {
        let opened = self.run()?;
        let sites = (self.dimension as f64) * (self.dimension as f64);
        Ok(opened as f64 / sites)
    }
}

/// 200x200 grid, the default benchmark size.
pub fn reference_profile(seed: u64) -> ThresholdRun {
    ThresholdRun::new(200, seed)
}

/// 1000x1000 grid for stress testing.
pub fn stress_profile(seed: u64) -> ThresholdRun {
    ThresholdRun::new(1000, seed)
}
