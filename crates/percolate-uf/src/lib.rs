//! Disjoint-set union (union-find) structures.
//!
//! The [`UnionFind`] trait is the contract a percolation grid relies on:
//! `n` singleton elements labelled `0..n`, an idempotent `union`, and a
//! `connected` query. [`WeightedQuickUnion`] is the default backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod traits;
pub mod weighted;

pub use traits::UnionFind;
pub use weighted::WeightedQuickUnion;
