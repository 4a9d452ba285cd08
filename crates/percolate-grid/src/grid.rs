//! The [`PercolationGrid`] model.

use crate::config::GridConfig;
use crate::layout::SiteLayout;
use percolate_core::{PercolationError, Site};
use percolate_uf::{UnionFind, WeightedQuickUnion};

/// An N×N grid of sites that are opened one at a time.
///
/// `open` is the only mutator. `is_open`, `is_full` and `percolates` are
/// read-only queries over the open-site record and the two union-find
/// structures described in the [crate docs](crate).
///
/// The union-find backend is pluggable through `U`; the default is
/// [`WeightedQuickUnion`].
///
/// # Examples
///
/// ```
/// use percolate_core::Site;
/// use percolate_grid::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(2).unwrap();
/// grid.open(Site::new(1, 1)).unwrap();
/// grid.open(Site::new(2, 1)).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(Site::new(2, 1)).unwrap());
/// assert!(!grid.is_full(Site::new(2, 2)).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PercolationGrid<U = WeightedQuickUnion> {
    layout: SiteLayout,
    open: Vec<bool>,
    open_count: usize,
    /// Sites + virtual top + virtual bottom.
    connectivity: U,
    /// Sites + virtual top. Never sees the bottom.
    fullness: U,
    /// Open-site count at the moment top and bottom first joined.
    percolated_at: Option<usize>,
}

impl PercolationGrid<WeightedQuickUnion> {
    /// Create an `n`×`n` grid with every site closed.
    ///
    /// Returns `Err(PercolationError::EmptyGrid)` if `n` is 0, or
    /// `Err(PercolationError::DimensionTooLarge)` if `n` exceeds
    /// [`GridConfig::MAX_DIMENSION`].
    pub fn new(n: u32) -> Result<Self, PercolationError> {
        Self::from_config(GridConfig::new(n))
    }

    /// Create a grid from an explicit config.
    pub fn from_config(config: GridConfig) -> Result<Self, PercolationError> {
        Self::with_backend(config)
    }
}

impl<U: UnionFind> PercolationGrid<U> {
    /// Create a grid backed by the union-find implementation `U`.
    pub fn with_backend(config: GridConfig) -> Result<Self, PercolationError> {
        config.validate()?;
        let layout = SiteLayout::new(config);
        tracing::debug!(
            dimension = config.dimension,
            sites = config.site_count(),
            "created percolation grid"
        );
        Ok(Self {
            layout,
            open: vec![false; config.site_count()],
            open_count: 0,
            connectivity: U::with_len(config.connectivity_len()),
            fullness: U::with_len(config.fullness_len()),
            percolated_at: None,
        })
    }

    /// Side length N.
    pub fn dimension(&self) -> u32 {
        self.layout.dimension()
    }

    /// Index arithmetic for this grid.
    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Whether `site` lies inside the grid.
    pub fn contains(&self, site: Site) -> bool {
        self.layout.contains(site)
    }

    /// Open `site` and join it to its open neighbours.
    ///
    /// Returns `Ok(true)` if the site was closed and is now open, or
    /// `Ok(false)` if it was already open, in which case nothing changes.
    ///
    /// A top-row site is joined to the virtual top in both structures; a
    /// bottom-row site is joined to the virtual bottom in the connectivity
    /// structure only.
    pub fn open(&mut self, site: Site) -> Result<bool, PercolationError> {
        let idx = self.layout.check(site)?;
        if self.open[idx] {
            return Ok(false);
        }
        self.open[idx] = true;
        self.open_count += 1;

        if site.row == 1 {
            self.join(idx, self.layout.top());
        }
        if site.row == self.layout.dimension() {
            self.connectivity.union(idx, self.layout.bottom());
        }
        for neighbour in self.layout.neighbours(site) {
            let n_idx = self.layout.index(neighbour);
            if self.open[n_idx] {
                self.join(idx, n_idx);
            }
        }

        tracing::trace!(%site, open = self.open_count, "opened site");
        if self.percolated_at.is_none()
            && self
                .connectivity
                .connected(self.layout.top(), self.layout.bottom())
        {
            self.percolated_at = Some(self.open_count);
            tracing::debug!(
                dimension = self.dimension(),
                open = self.open_count,
                "grid percolates"
            );
        }
        Ok(true)
    }

    /// Open the site at 1-based `(row, col)`.
    pub fn open_at(&mut self, row: u32, col: u32) -> Result<bool, PercolationError> {
        self.open(Site::new(row, col))
    }

    /// Whether `site` has been opened.
    pub fn is_open(&self, site: Site) -> Result<bool, PercolationError> {
        let idx = self.layout.check(site)?;
        Ok(self.open[idx])
    }

    /// [`is_open`](Self::is_open) at 1-based `(row, col)`.
    pub fn is_open_at(&self, row: u32, col: u32) -> Result<bool, PercolationError> {
        self.is_open(Site::new(row, col))
    }

    /// Whether `site` is connected to the top row through open sites.
    ///
    /// Answered from the fullness structure, so a site that only reaches
    /// the bottom row is never reported full, even once the grid
    /// percolates. Closed sites are never full.
    pub fn is_full(&self, site: Site) -> Result<bool, PercolationError> {
        let idx = self.layout.check(site)?;
        Ok(self.fullness.same_set(idx, self.layout.top()))
    }

    /// [`is_full`](Self::is_full) at 1-based `(row, col)`.
    pub fn is_full_at(&self, row: u32, col: u32) -> Result<bool, PercolationError> {
        self.is_full(Site::new(row, col))
    }

    /// Whether some path of open sites joins the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.connectivity
            .same_set(self.layout.top(), self.layout.bottom())
    }

    /// Number of sites opened so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Number of open sites when the grid first percolated, if it has.
    ///
    /// Divided by `N²` this is the open-site fraction at which this
    /// particular opening order crossed the percolation threshold.
    pub fn percolated_at(&self) -> Option<usize> {
        self.percolated_at
    }

    /// Open sites in row-major order.
    pub fn open_sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(idx, _)| self.layout.site(idx))
    }

    fn join(&mut self, p: usize, q: usize) {
        self.connectivity.union(p, q);
        self.fullness.union(p, q);
    }
}
