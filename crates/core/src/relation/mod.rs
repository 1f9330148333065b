//! The prerequisite relation and its two backing stores.
//!
//! A curriculum's prerequisite structure is a set of ordered pairs
//! `(a, b)` meaning "course `a` must be taken before course `b`", stored as
//! a square boolean adjacency structure over course indices. The structure
//! only ever grows: its side is the largest index referenced so far plus
//! one.
//!
//! Two stores implement the same [`PrereqRelation`] contract and are
//! interchangeable from the caller's point of view:
//!
//! - [`DenseRelation`] keeps a plain `Vec<Vec<bool>>` matrix.
//! - [`PackedRelation`] keeps one word-packed [`BitVec`](crate::bitvec::BitVec)
//!   per row, which turns the closure's inner loop into a few word ORs.
//!
//! Producing bit-identical closures for the same edge sequence is a
//! correctness property of the pair, enforced by the shared conformance
//! suite in `tests/equivalence.rs`, not an implementation detail.

use alloc::vec::Vec;

pub mod dense;
pub mod packed;

pub use dense::DenseRelation;
pub use packed::PackedRelation;

/// Index identifying a course. Collaborating layers map indices to course
/// codes and names; the engine never sees either.
pub type CourseId = usize;

/// A growable directed relation over course indices.
///
/// All operations are total. Queries with out-of-range indices answer
/// `false` rather than panicking, and self-loop edges are stored rather
/// than rejected -- a self-loop is precisely how an (invalid) cyclic
/// curriculum is represented and later detected.
pub trait PrereqRelation: Default + Clone {
    /// Grows the store so indices `0..n` are valid, preserving every bit
    /// already set. Growing to a smaller-or-equal size is a no-op; the
    /// store never shrinks.
    fn ensure_size(&mut self, n: usize);

    /// Records "`a` is a prerequisite of `b`", growing to `max(a, b) + 1`
    /// first. Re-adding an existing edge is a no-op.
    fn add_prereq(&mut self, a: CourseId, b: CourseId);

    /// Returns `true` if the edge `(a, b)` is stored. Out-of-range indices
    /// answer `false`.
    fn has_prereq(&self, a: CourseId, b: CourseId) -> bool;

    /// Current side length of the adjacency structure.
    fn size(&self) -> usize;

    /// The transitive closure: `(a, b)` holds in the result iff a nonempty
    /// directed path `a -> .. -> b` exists in the stored relation.
    ///
    /// Works on a copy; the store itself is never mutated, and repeated
    /// calls recompute from scratch (reachability queries are expected to
    /// be infrequent relative to edge ingestion).
    fn transitive_closure(&self) -> Self;

    /// Returns `true` if some course transitively requires itself.
    ///
    /// A directly self-referential edge is sufficient: the closure of a
    /// single self-loop still has its diagonal bit set.
    fn has_cycle(&self) -> bool {
        let closure = self.transitive_closure();
        let cyclic = (0..self.size()).any(|course| closure.has_prereq(course, course));
        tracing::debug!(size = self.size(), cyclic, "cycle check");
        cyclic
    }

    /// Dense snapshot of the stored relation, for display layers that want
    /// a plain matrix regardless of the backing store.
    fn to_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|a| (0..self.size()).map(|b| self.has_prereq(a, b)).collect())
            .collect()
    }

    /// Number of courses that list `course` as a direct prerequisite.
    fn dependent_count(&self, course: CourseId) -> usize {
        (0..self.size())
            .filter(|&dependent| self.has_prereq(course, dependent))
            .count()
    }
}

/// Shared growth bookkeeping: the new side length implied by an edge.
pub(crate) const fn edge_extent(a: CourseId, b: CourseId) -> usize {
    if a > b {
        a + 1
    } else {
        b + 1
    }
}
