//! Permutation buffer for pointer-chase walks.
//!
//! A [`HopChain`] owns a contiguous buffer of index-sized slots holding a
//! permutation of `[0, N)`. Walking it (`next = slots[next]`) produces a
//! chain of data-dependent loads: the address of each load is the value of
//! the previous one, so the CPU cannot overlap or prefetch them and every
//! hop pays the full cache/memory round-trip latency for its working set.

use rand::Rng;
use rand::seq::SliceRandom;

/// An owned buffer of `usize` slots forming a permutation of `[0, len)`.
///
/// # Invariants
///
/// - Every index in `[0, len)` appears exactly once.
/// - The slot buffer is private and all constructors establish the
///   invariant, so [`walk`](Self::walk) may read without bounds checks.
///
/// A permutation is not necessarily a single cycle: a plain
/// [`shuffled`](Self::shuffled) chain may decompose into several disjoint
/// cycles, and the walk stays inside the cycle containing index 0. Any
/// permutation still yields a valid latency walk; use
/// [`single_cycle`](Self::single_cycle) when the walk must visit every slot.
///
/// # Example
///
/// ```rust
/// use memlat::HopChain;
///
/// // The identity permutation maps every index to itself, so the
/// // walk never leaves slot 0.
/// let chain = HopChain::identity(8);
/// assert_eq!(chain.walk(3), 0);
/// assert_eq!(chain.size_bytes(), 8 * size_of::<usize>());
/// ```
#[derive(Debug, Clone)]
pub struct HopChain {
    slots: Box<[usize]>,
}

impl HopChain {
    /// The identity permutation: `slots[i] == i`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let slots: Vec<usize> = (0..n).collect();
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// A uniformly random permutation of `[0, n)` (identity, then
    /// Fisher-Yates shuffle).
    ///
    /// This matches the measurement's construction: uniform over all
    /// permutations, with no single-cycle guarantee.
    #[must_use]
    pub fn shuffled(n: usize, rng: &mut impl Rng) -> Self {
        let mut slots: Vec<usize> = (0..n).collect();
        slots.shuffle(rng);

        let chain = Self {
            slots: slots.into_boxed_slice(),
        };
        debug_assert!(chain.is_permutation());
        chain
    }

    /// A uniformly random *cyclic* permutation of `[0, n)` (Sattolo's
    /// algorithm).
    ///
    /// The walk from any start index visits all `n` slots before repeating,
    /// returning to the start after exactly `n` hops.
    #[must_use]
    pub fn single_cycle(n: usize, rng: &mut impl Rng) -> Self {
        let mut slots: Vec<usize> = (0..n).collect();

        // Sattolo: like Fisher-Yates, but j is drawn from 0..i (exclusive),
        // which never closes a cycle early.
        let mut i = n;
        while i > 1 {
            i -= 1;
            let j = rng.random_range(0..i);
            slots.swap(i, j);
        }

        let chain = Self {
            slots: slots.into_boxed_slice(),
        };
        debug_assert!(chain.is_permutation());
        chain
    }

    /// Perform `hops` dependent reads `next = slots[next]` starting from
    /// index 0, returning the final index.
    ///
    /// The reads are unchecked; soundness rests on the constructor invariant
    /// that the buffer is a permutation of `[0, len)`. An empty chain
    /// returns 0 without reading. The caller is expected to consume the
    /// return value, otherwise the whole loop is dead code.
    #[inline(never)]
    #[must_use]
    pub fn walk(&self, hops: usize) -> usize {
        if self.slots.is_empty() {
            return 0;
        }

        let mut next = 0_usize;
        for _ in 0..hops {
            // SAFETY: the buffer is a permutation of [0, len), so every
            // stored value is itself a valid index.
            next = unsafe { *self.slots.get_unchecked(next) };
        }
        next
    }

    /// Number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the chain has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total buffer size in bytes (the working-set size of a walk).
    #[must_use]
    pub const fn size_bytes(&self) -> usize {
        self.slots.len() * size_of::<usize>()
    }

    /// Read-only view of the slot buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// O(n) check that the buffer holds each index in `[0, len)` exactly
    /// once.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        for &slot in &self.slots {
            if slot >= seen.len() || seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}
