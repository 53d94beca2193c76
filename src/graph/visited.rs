//! Dense visited sets for graph algorithms.
//!
//! Every algorithm in this crate owns its visited state per call, so the
//! set is a plain word-packed bitset with no interior mutability. The same
//! structure doubles as Tarjan's on-stack membership flags, which need the
//! O(1) test the algorithm's linear-time bound depends on.

/// A dense, word-packed membership set over vertices `0..len`.
pub(crate) struct VisitedSet {
    bits: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            bits: vec![0u64; (len + 63) / 64],
            len,
        }
    }

    /// Marks `vertex` as a member. Returns `true` iff this call observed it
    /// as not yet a member.
    #[inline(always)]
    pub(crate) fn insert(&mut self, vertex: usize) -> bool {
        debug_assert!(vertex < self.len);
        let word = &mut self.bits[vertex / 64];
        let mask = 1u64 << (vertex % 64);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Clears the membership bit for `vertex`.
    #[inline(always)]
    pub(crate) fn remove(&mut self, vertex: usize) {
        debug_assert!(vertex < self.len);
        self.bits[vertex / 64] &= !(1u64 << (vertex % 64));
    }

    #[inline(always)]
    pub(crate) fn contains(&self, vertex: usize) -> bool {
        debug_assert!(vertex < self.len);
        self.bits[vertex / 64] & (1u64 << (vertex % 64)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_first_membership_only() {
        let mut set = VisitedSet::new(130);
        assert!(set.insert(0));
        assert!(set.insert(129));
        assert!(!set.insert(0));
        assert!(!set.insert(129));
        assert!(set.contains(129));
        assert!(!set.contains(64));
    }

    #[test]
    fn remove_clears_a_single_bit() {
        let mut set = VisitedSet::new(70);
        set.insert(63);
        set.insert(64);
        set.remove(63);
        assert!(!set.contains(63));
        assert!(set.contains(64));
    }

    #[test]
    fn zero_length_set_allocates_no_words() {
        let set = VisitedSet::new(0);
        assert!(set.bits.is_empty());
    }
}
