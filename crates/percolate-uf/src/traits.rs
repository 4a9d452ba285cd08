//! The [`UnionFind`] trait.

/// A partition of the elements `0..len()` into disjoint sets.
///
/// Elements start as singletons. Sets only ever merge; there is no split.
///
/// Queries take `&mut self` because implementations are free to compress
/// paths while answering them. Element indices outside `0..len()` are a
/// caller bug and panic, the same as slice indexing.
pub trait UnionFind {
    /// Create a structure with `n` singleton elements labelled `0..n`.
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the structure has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets.
    fn count(&self) -> usize;

    /// Canonical representative of the set containing `p`.
    ///
    /// May restructure internal trees to speed up later queries.
    fn find(&mut self, p: usize) -> usize;

    /// Representative of the set containing `p`, without restructuring.
    ///
    /// Always agrees with [`find`](Self::find). Lets read-only callers
    /// query through a shared reference.
    fn root(&self, p: usize) -> usize;

    /// Merge the sets containing `p` and `q`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `p` and
    /// `q` were already connected.
    fn union(&mut self, p: usize, q: usize) -> bool;

    /// Whether `p` and `q` belong to the same set.
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Read-only form of [`connected`](Self::connected).
    fn same_set(&self, p: usize, q: usize) -> bool {
        self.root(p) == self.root(q)
    }
}
