//! Error types for grid construction and site access.

use crate::site::Site;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or site queries.
///
/// Every variant is a caller bug: nothing is retried and no partial state
/// is left behind. Re-opening an already-open site is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PercolationError {
    /// Attempted to construct a grid with dimension 0.
    EmptyGrid,
    /// The requested dimension would overflow the linear index space.
    DimensionTooLarge {
        /// The requested dimension.
        value: u32,
        /// The largest supported dimension.
        max: u32,
    },
    /// A site coordinate lies outside `[1, dimension]` on some axis.
    SiteOutOfBounds {
        /// The offending site.
        site: Site,
        /// Dimension of the grid that rejected it.
        dimension: u32,
    },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimension must be greater than zero"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid dimension {value} exceeds maximum {max}")
            }
            Self::SiteOutOfBounds { site, dimension } => {
                write!(
                    f,
                    "site {site} out of bounds: [1, {dimension}] x [1, {dimension}]"
                )
            }
        }
    }
}

impl Error for PercolationError {}
