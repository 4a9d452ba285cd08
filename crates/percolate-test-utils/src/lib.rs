//! Test utilities for percolate development.
//!
//! - [`ReferenceGrid`]: a brute-force model answering fullness and
//!   percolation by flood fill over open flags, with no union-find at all.
//! - [`QuickFind`]: an eager-relabelling [`UnionFind`] backend, used to
//!   exercise grids with a non-default backend.
//! - [`shuffled_sites`]: deterministic opening orders from a seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use percolate_core::Site;
use percolate_uf::UnionFind;

pub use fixtures::{all_sites, shuffled_sites, sites_from_pairs};

/// Flood-fill model of an N×N percolation grid.
///
/// Every query recomputes reachability from scratch with a BFS from the
/// open top-row sites, so it is slow but has no virtual nodes that could
/// introduce backwash.
#[derive(Clone, Debug)]
pub struct ReferenceGrid {
    n: u32,
    open: Vec<bool>,
}

impl ReferenceGrid {
    pub fn new(n: u32) -> Self {
        Self {
            n,
            open: vec![false; (n as usize) * (n as usize)],
        }
    }

    pub fn dimension(&self) -> u32 {
        self.n
    }

    fn idx(&self, site: Site) -> usize {
        (self.n as usize) * (site.row as usize - 1) + (site.col as usize - 1)
    }

    pub fn open(&mut self, site: Site) {
        let i = self.idx(site);
        self.open[i] = true;
    }

    pub fn is_open(&self, site: Site) -> bool {
        self.open[self.idx(site)]
    }

    /// Sites reachable from the top row through open sites.
    pub fn full_mask(&self) -> Vec<bool> {
        let n = self.n as i64;
        let mut full = vec![false; self.open.len()];
        let mut queue = VecDeque::new();
        for col in 1..=self.n {
            let site = Site::new(1, col);
            if self.is_open(site) {
                full[self.idx(site)] = true;
                queue.push_back(site);
            }
        }
        while let Some(site) = queue.pop_front() {
            for (dr, dc) in [(-1i64, 0i64), (0, 1), (1, 0), (0, -1)] {
                let r = site.row as i64 + dr;
                let c = site.col as i64 + dc;
                if r < 1 || c < 1 || r > n || c > n {
                    continue;
                }
                let next = Site::new(r as u32, c as u32);
                let i = self.idx(next);
                if self.open[i] && !full[i] {
                    full[i] = true;
                    queue.push_back(next);
                }
            }
        }
        full
    }

    pub fn is_full(&self, site: Site) -> bool {
        self.full_mask()[self.idx(site)]
    }

    /// Whether any bottom-row site is full.
    pub fn percolates(&self) -> bool {
        let full = self.full_mask();
        (1..=self.n).any(|col| full[self.idx(Site::new(self.n, col))])
    }
}

/// Quick-find union-find: every element stores its set id directly.
///
/// `union` is O(n), `find` is O(1). Only suitable for small tests.
#[derive(Clone, Debug)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn with_len(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> usize {
        self.id[p]
    }

    fn root(&self, p: usize) -> usize {
        self.id[p]
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let (from, to) = (self.id[p], self.id[q]);
        if from == to {
            return false;
        }
        for id in self.id.iter_mut() {
            if *id == from {
                *id = to;
            }
        }
        self.count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bottom_row_only_is_not_full() {
        let mut grid = ReferenceGrid::new(3);
        for col in 1..=3 {
            grid.open(Site::new(3, col));
        }
        assert!(!grid.percolates());
        assert!(!grid.is_full(Site::new(3, 2)));
    }

    #[test]
    fn reference_column_percolates() {
        let mut grid = ReferenceGrid::new(3);
        for row in 1..=3 {
            grid.open(Site::new(row, 2));
        }
        assert!(grid.percolates());
        assert!(grid.is_full(Site::new(3, 2)));
        assert!(!grid.is_full(Site::new(3, 1)));
    }

    #[test]
    fn quick_find_merges() {
        let mut uf = QuickFind::with_len(4);
        assert!(uf.union(0, 3));
        assert!(!uf.union(3, 0));
        assert!(uf.same_set(0, 3));
        assert!(!uf.connected(0, 1));
        assert_eq!(uf.count(), 3);
    }
}
