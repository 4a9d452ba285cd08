//! Grid configuration parameters.

use percolate_core::PercolationError;

/// Configuration for a percolation grid.
///
/// Validated when the grid is built; the dimension is fixed for the
/// lifetime of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Side length N of the N×N grid.
    ///
    /// Must be at least 1 and at most [`GridConfig::MAX_DIMENSION`].
    pub dimension: u32,
}

impl GridConfig {
    /// Largest supported side length.
    ///
    /// Union-find elements are stored as `u32`, so `N² + 2` must fit.
    pub const MAX_DIMENSION: u32 = 65_535;

    /// Create a config for an `n`×`n` grid.
    pub fn new(dimension: u32) -> Self {
        Self { dimension }
    }

    /// Check that the dimension is usable.
    pub fn validate(&self) -> Result<(), PercolationError> {
        if self.dimension == 0 {
            return Err(PercolationError::EmptyGrid);
        }
        if self.dimension > Self::MAX_DIMENSION {
            return Err(PercolationError::DimensionTooLarge {
                value: self.dimension,
                max: Self::MAX_DIMENSION,
            });
        }
        Ok(())
    }

    /// Number of real sites, `N²`.
    pub fn site_count(&self) -> usize {
        let n = self.dimension as usize;
        n * n
    }

    /// Elements in the connectivity structure: sites plus virtual top and bottom.
    pub fn connectivity_len(&self) -> usize {
        self.site_count() + 2
    }

    /// Elements in the fullness structure: sites plus virtual top.
    pub fn fullness_len(&self) -> usize {
        self.site_count() + 1
    }
}
