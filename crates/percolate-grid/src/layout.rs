//! Mapping between 1-based sites and flat union-find indices.

use crate::config::GridConfig;
use percolate_core::{PercolationError, Site};
use smallvec::SmallVec;

/// Row-major index arithmetic for an N×N grid.
///
/// Sites occupy indices `0..N²`; the virtual top is `N²` and the virtual
/// bottom is `N² + 1`. Cell identity is just the index, so no per-cell
/// objects exist anywhere in the grid.
///
/// # Examples
///
/// ```
/// use percolate_core::Site;
/// use percolate_grid::{GridConfig, SiteLayout};
///
/// let layout = SiteLayout::new(GridConfig::new(3));
/// assert_eq!(layout.index(Site::new(1, 1)), 0);
/// assert_eq!(layout.index(Site::new(2, 3)), 5);
/// assert_eq!(layout.top(), 9);
/// assert_eq!(layout.bottom(), 10);
/// assert_eq!(layout.neighbours(Site::new(1, 1)).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    dimension: u32,
}

impl SiteLayout {
    /// Layout for the grid described by `config`.
    ///
    /// The config is assumed valid; see [`GridConfig::validate`].
    pub fn new(config: GridConfig) -> Self {
        Self {
            dimension: config.dimension,
        }
    }

    /// Side length N.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Number of real sites, `N²`.
    pub fn site_count(&self) -> usize {
        let n = self.dimension as usize;
        n * n
    }

    /// Index of the virtual top element.
    pub fn top(&self) -> usize {
        self.site_count()
    }

    /// Index of the virtual bottom element (connectivity structure only).
    pub fn bottom(&self) -> usize {
        self.site_count() + 1
    }

    /// Whether `site` lies inside the grid.
    pub fn contains(&self, site: Site) -> bool {
        site.within(self.dimension)
    }

    /// Validate `site` and return its index.
    pub fn check(&self, site: Site) -> Result<usize, PercolationError> {
        if !self.contains(site) {
            return Err(PercolationError::SiteOutOfBounds {
                site,
                dimension: self.dimension,
            });
        }
        Ok(self.index(site))
    }

    /// Index of an in-bounds site: `N·(row-1) + (col-1)`.
    pub fn index(&self, site: Site) -> usize {
        debug_assert!(self.contains(site), "site {site} outside dimension {}", self.dimension);
        (self.dimension as usize) * (site.row as usize - 1) + (site.col as usize - 1)
    }

    /// Inverse of [`index`](Self::index) for `index < N²`.
    pub fn site(&self, index: usize) -> Site {
        debug_assert!(index < self.site_count());
        let n = self.dimension as usize;
        Site::new((index / n) as u32 + 1, (index % n) as u32 + 1)
    }

    /// In-bounds 4-connected neighbours of `site`: up, right, down, left.
    ///
    /// Edges absorb, so corners have 2 neighbours and edge sites 3.
    pub fn neighbours(&self, site: Site) -> SmallVec<[Site; 4]> {
        let n = self.dimension;
        let mut out = SmallVec::new();
        if site.row > 1 {
            out.push(Site::new(site.row - 1, site.col));
        }
        if site.col < n {
            out.push(Site::new(site.row, site.col + 1));
        }
        if site.row < n {
            out.push(Site::new(site.row + 1, site.col));
        }
        if site.col > 1 {
            out.push(Site::new(site.row, site.col - 1));
        }
        out
    }
}
