//! Weighted quick-union with path compression.

use crate::traits::UnionFind;

/// Union by size with path halving.
///
/// The root of the smaller tree is linked under the root of the larger one,
/// keeping trees logarithmic in height; `find` additionally points every
/// other node on the walked path at its grandparent. Together these give
/// amortized near-constant time per operation.
///
/// # Examples
///
/// ```
/// use percolate_uf::{UnionFind, WeightedQuickUnion};
///
/// let mut uf = WeightedQuickUnion::with_len(4);
/// assert!(uf.union(0, 1));
/// assert!(!uf.union(1, 0));
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 3));
/// assert_eq!(uf.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    parent: Vec<u32>,
    size: Vec<u32>,
    count: usize,
}

impl WeightedQuickUnion {
    /// Create a structure with `n` singleton elements.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds `u32::MAX` elements.
    pub fn new(n: usize) -> Self {
        assert!(
            n <= u32::MAX as usize,
            "union-find supports at most u32::MAX elements, got {n}"
        );
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements in the set containing `p`.
    pub fn set_size(&mut self, p: usize) -> usize {
        let root = self.find(p);
        self.size[root] as usize
    }
}

impl UnionFind for WeightedQuickUnion {
    fn with_len(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> usize {
        let mut p = p;
        while self.parent[p] as usize != p {
            let grandparent = self.parent[self.parent[p] as usize];
            self.parent[p] = grandparent;
            p = grandparent as usize;
        }
        p
    }

    fn root(&self, p: usize) -> usize {
        let mut p = p;
        while self.parent[p] as usize != p {
            p = self.parent[p] as usize;
        }
        p
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large as u32;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}
