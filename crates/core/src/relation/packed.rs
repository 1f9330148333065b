use alloc::vec::Vec;

use super::{edge_extent, CourseId, PrereqRelation};
use crate::bitvec::BitVec;

/// Prerequisite relation backed by one word-packed [`BitVec`] per row.
///
/// Observable semantics are identical to
/// [`DenseRelation`](super::DenseRelation); the difference is that the
/// closure's innermost loop collapses to a word-wise OR of row `k` into row
/// `i`, so a full closure costs `O(n^3 / w)` word operations for word width
/// `w` instead of `O(n^3)` boolean ones.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackedRelation {
    rows: Vec<BitVec>,
}

impl PrereqRelation for PackedRelation {
    fn ensure_size(&mut self, n: usize) {
        if n > self.rows.len() {
            for row in &mut self.rows {
                *row = row.resized(n);
            }
            while self.rows.len() < n {
                self.rows.push(BitVec::new(n));
            }
        }
    }

    fn add_prereq(&mut self, a: CourseId, b: CourseId) {
        self.ensure_size(edge_extent(a, b));
        self.rows[a].set(b);
    }

    fn has_prereq(&self, a: CourseId, b: CourseId) -> bool {
        self.rows.get(a).is_some_and(|row| row.test(b))
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    /// Same `k`/`i` sweep as the dense store, with the row absorption done
    /// as word ORs.
    ///
    /// The pivot row is snapshotted per `k`: within one `k` iteration row
    /// `k` can only change at `i == k`, where the OR is with itself and
    /// therefore idempotent, so the snapshot observes exactly what the
    /// in-place dense sweep observes.
    fn transitive_closure(&self) -> Self {
        let n = self.rows.len();
        tracing::trace!(size = n, "packed closure");
        let mut result = self.clone();
        for k in 0..n {
            let pivot = result.rows[k].clone();
            for i in 0..n {
                if result.rows[i].test(k) {
                    result.rows[i].union_with(&pivot);
                }
            }
        }
        result
    }

    fn dependent_count(&self, course: CourseId) -> usize {
        self.rows.get(course).map_or(0, BitVec::count)
    }
}
