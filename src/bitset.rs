//! Fixed-capacity, word-parallel bitset (spec.md component A), backed by
//! `fixedbitset::FixedBitSet` — the same crate petgraph itself depends on
//! for its bitset/visit-map needs (`acyclic.rs`, `csr.rs`, `dense_graph.rs`,
//! `generate.rs` all build one via `FixedBitSet::with_capacity(n)`). This
//! type is a thin adapter exposing the solver's own operation names
//! (`first_set_bit`, `popcount`, `intersect_with_complement`, ...) over it.

use fixedbitset::FixedBitSet;

/// A bitset with a fixed capacity, supporting the operations the solver's
/// propagation loop needs: set/unset/test, first-set-bit scan, population
/// count, and in-place intersection/union/complement-intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSet {
    bits: FixedBitSet,
}

impl BitSet {
    /// Create a bitset with room for `capacity_bits` bits, all unset.
    pub fn with_capacity(capacity_bits: usize) -> Self {
        BitSet {
            bits: FixedBitSet::with_capacity(capacity_bits),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn set(&mut self, i: usize) {
        self.bits.set(i, true);
    }

    #[inline]
    pub fn unset(&mut self, i: usize) {
        self.bits.set(i, false);
    }

    #[inline]
    pub fn test(&self, i: usize) -> bool {
        self.bits.contains(i)
    }

    pub fn unset_all(&mut self) {
        self.bits.clear();
    }

    /// Index of the least-significant set bit, or -1 if empty.
    pub fn first_set_bit(&self) -> i64 {
        match self.bits.ones().next() {
            Some(b) => b as i64,
            None => -1,
        }
    }

    pub fn popcount(&self) -> u32 {
        self.bits.count_ones(..) as u32
    }

    /// `self <- self & other`. Both sets must share capacity.
    pub fn intersect_with(&mut self, other: &BitSet) {
        self.bits.intersect_with(&other.bits);
    }

    /// `self <- self & !other`.
    pub fn intersect_with_complement(&mut self, other: &BitSet) {
        self.bits.difference_with(&other.bits);
    }

    /// `self <- self | other`.
    pub fn union_with(&mut self, other: &BitSet) {
        self.bits.union_with(&other.bits);
    }

    /// Iterate the set bit indices in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_unset_test() {
        let mut b = BitSet::with_capacity(70);
        assert!(!b.test(5));
        b.set(5);
        assert!(b.test(5));
        b.set(68);
        assert!(b.test(68));
        b.unset(5);
        assert!(!b.test(5));
        assert!(b.test(68));
    }

    #[test]
    fn first_set_bit_and_popcount() {
        let mut b = BitSet::with_capacity(128);
        assert_eq!(b.first_set_bit(), -1);
        assert_eq!(b.popcount(), 0);
        b.set(64);
        b.set(3);
        assert_eq!(b.first_set_bit(), 3);
        assert_eq!(b.popcount(), 2);
    }

    #[test]
    fn intersect_union_complement() {
        let mut a = BitSet::with_capacity(64);
        let mut b = BitSet::with_capacity(64);
        a.set(1);
        a.set(2);
        a.set(3);
        b.set(2);
        b.set(3);
        b.set(4);

        let mut i = a.clone();
        i.intersect_with(&b);
        assert_eq!(i.iter_ones().collect::<Vec<_>>(), vec![2, 3]);

        let mut u = a.clone();
        u.union_with(&b);
        assert_eq!(u.iter_ones().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let mut c = a.clone();
        c.intersect_with_complement(&b);
        assert_eq!(c.iter_ones().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn iter_ones_matches_manual_scan() {
        let mut b = BitSet::with_capacity(200);
        for i in [0, 5, 63, 64, 65, 127, 199] {
            b.set(i);
        }
        let collected: Vec<usize> = b.iter_ones().collect();
        assert_eq!(collected, vec![0, 5, 63, 64, 65, 127, 199]);
    }
}
