//! The [`Site`] coordinate type.

use std::fmt;

/// One cell of an N×N percolation grid, addressed by 1-based row and column.
///
/// A `Site` carries no knowledge of the grid it belongs to; bounds are
/// checked by the grid when the site is used. `(1, 1)` is the top-left
/// corner and row 1 is the top row.
///
/// Ordering is row-major: sites compare by row first, then by column.
///
/// # Examples
///
/// ```
/// use percolate_core::Site;
///
/// let s = Site::new(2, 3);
/// assert_eq!(s, Site::from((2, 3)));
/// assert_eq!(s.to_string(), "(2, 3)");
/// assert!(Site::new(1, 9) < Site::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Row, counted from 1 at the top.
    pub row: u32,
    /// Column, counted from 1 at the left.
    pub col: u32,
}

impl Site {
    /// Create a site from a 1-based `(row, col)` pair.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this site lies inside an `n`×`n` grid.
    pub const fn within(&self, n: u32) -> bool {
        self.row >= 1 && self.col >= 1 && self.row <= n && self.col <= n
    }
}

impl From<(u32, u32)> for Site {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
