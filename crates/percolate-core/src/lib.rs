//! Core types for the percolate workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! 1-based [`Site`] coordinate shared by every grid operation and the
//! [`PercolationError`] type returned by construction and site access.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod site;

pub use error::PercolationError;
pub use site::Site;
