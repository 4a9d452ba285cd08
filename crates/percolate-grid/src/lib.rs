//! Percolation on an N×N grid of sites.
//!
//! Sites start closed and are opened one at a time with
//! [`PercolationGrid::open`]. After each open the grid can answer, in
//! near-constant time, whether a path of open sites spans the top row to
//! the bottom row ([`percolates`](PercolationGrid::percolates)) and whether
//! a given site is reachable from the top row
//! ([`is_full`](PercolationGrid::is_full)).
//!
//! # Virtual nodes and backwash
//!
//! Two union-find structures are kept in lock-step:
//!
//! ```text
//! connectivity: N² sites + virtual top + virtual bottom   -> percolates()
//! fullness:     N² sites + virtual top                    -> is_full()
//! ```
//!
//! Every union is applied to both, except the bottom-row-to-virtual-bottom
//! union, which only `connectivity` receives. With a single structure the
//! virtual bottom would bridge every open bottom-row site to the top as
//! soon as the grid percolates, reporting them full without a real path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod layout;

pub use config::GridConfig;
pub use grid::PercolationGrid;
pub use layout::SiteLayout;
