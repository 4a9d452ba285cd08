//! Deterministic site sequences for tests and benchmarks.

use percolate_core::Site;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Every site of an `n`×`n` grid in row-major order.
pub fn all_sites(n: u32) -> Vec<Site> {
    let mut out = Vec::with_capacity((n as usize) * (n as usize));
    for row in 1..=n {
        for col in 1..=n {
            out.push(Site::new(row, col));
        }
    }
    out
}

/// Every site of an `n`×`n` grid in an order fixed by `seed`.
///
/// The same `(n, seed)` always yields the same order.
pub fn shuffled_sites(n: u32, seed: u64) -> Vec<Site> {
    let mut sites = all_sites(n);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sites.shuffle(&mut rng);
    sites
}

/// Map raw `(row, col)` pairs onto in-bounds sites of an `n`×`n` grid.
///
/// Useful with proptest strategies that generate unconstrained integers.
pub fn sites_from_pairs(n: u32, pairs: &[(u32, u32)]) -> Vec<Site> {
    pairs
        .iter()
        .map(|&(r, c)| Site::new(r % n + 1, c % n + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut shuffled = shuffled_sites(6, 7);
        shuffled.sort();
        assert_eq!(shuffled, all_sites(6));
    }

    #[test]
    fn shuffle_is_deterministic() {
        assert_eq!(shuffled_sites(8, 42), shuffled_sites(8, 42));
        assert_ne!(shuffled_sites(8, 42), shuffled_sites(8, 43));
    }

    #[test]
    fn pairs_land_in_bounds() {
        let sites = sites_from_pairs(3, &[(0, 0), (5, 2), (100, 7)]);
        assert_eq!(sites, vec![Site::new(1, 1), Site::new(3, 3), Site::new(2, 2)]);
    }
}
