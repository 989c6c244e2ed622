//! Adjacency matrix as an array of `BitSet` rows (spec.md component B).

use crate::bitset::BitSet;

#[derive(Clone, Debug)]
pub struct BitGraph {
    n: usize,
    rows: Vec<BitSet>,
}

impl BitGraph {
    pub fn new(n: usize) -> Self {
        BitGraph {
            n,
            rows: vec![BitSet::with_capacity(n); n],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Sets both `(i, j)` and `(j, i)`; a self-loop (`i == j`) sets one bit.
    pub fn add_edge(&mut self, i: usize, j: usize) {
        self.rows[i].set(j);
        self.rows[j].set(i);
    }

    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.rows[i].test(j)
    }

    #[inline]
    pub fn degree(&self, i: usize) -> u32 {
        self.rows[i].popcount()
    }

    /// A copy of row `v`.
    pub fn neighbourhood(&self, v: usize) -> BitSet {
        self.rows[v].clone()
    }

    /// `out <- out & row(v)`.
    pub fn intersect_with_row(&self, v: usize, out: &mut BitSet) {
        out.intersect_with(&self.rows[v]);
    }
}
