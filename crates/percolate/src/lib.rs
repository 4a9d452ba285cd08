//! Percolate: site percolation on an N×N grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the percolate sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use percolate::prelude::*;
//!
//! let mut grid = PercolationGrid::new(3)?;
//! for row in 1..=3 {
//!     grid.open(Site::new(row, 2))?;
//! }
//! assert!(grid.percolates());
//! assert!(grid.is_full(Site::new(3, 2))?);
//! assert!(!grid.is_open(Site::new(3, 1))?);
//!
//! // Out-of-range coordinates are rejected, never clamped.
//! assert!(grid.open(Site::new(4, 1)).is_err());
//! # Ok::<(), PercolationError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `percolate-core` | `Site`, `PercolationError` |
//! | [`uf`] | `percolate-uf` | `UnionFind` trait, `WeightedQuickUnion` |
//! | [`grid`] | `percolate-grid` | `PercolationGrid`, `GridConfig`, `SiteLayout` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates and errors (`percolate-core`).
pub use percolate_core as types;

/// Disjoint-set union backends (`percolate-uf`).
///
/// Implement [`uf::UnionFind`] to plug a custom backend into
/// [`grid::PercolationGrid::with_backend`].
pub use percolate_uf as uf;

/// The percolation grid model (`percolate-grid`).
pub use percolate_grid as grid;

/// Common imports for typical usage.
///
/// ```rust
/// use percolate::prelude::*;
/// ```
pub mod prelude {
    pub use percolate_core::{PercolationError, Site};
    pub use percolate_grid::{GridConfig, PercolationGrid};
    pub use percolate_uf::{UnionFind, WeightedQuickUnion};
}
