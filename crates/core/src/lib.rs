//! Static analysis for course prerequisite structures.
//!
//! `curricheck_core` models a curriculum's prerequisite relation as a square
//! boolean adjacency structure over integer course indices and derives every
//! analysis a planner needs from it:
//!
//! 1. **Reachability** -- the transitive closure of the relation, computed by
//!    either of two interchangeable stores: a dense boolean matrix
//!    ([`DenseRelation`]) or word-packed bit rows ([`PackedRelation`]). Both
//!    produce bit-identical closures for the same edge sequence.
//! 2. **Cycle detection** -- a course reaching itself in the closure means the
//!    prerequisite graph cannot be completed.
//! 3. **Classification** -- reflexivity, symmetry, transitivity and
//!    antisymmetry of the raw relation, and the derived equivalence-relation
//!    and partial-order verdicts ([`classify()`]).
//! 4. **Schedule enumeration** -- all course orderings compatible with the
//!    relation, up to a caller-supplied cap ([`schedule::linear_extensions`]).
//! 5. **Conflict coloring** -- a greedy coloring of the enrollment-overlap
//!    graph, estimating how many exam slots a timetable needs
//!    ([`conflict::color_conflicts`]).
//!
//! # Entry point
//!
//! Build a store, feed it edges, then query:
//!
//! ```rust,ignore
//! use curricheck_core::{DenseRelation, PrereqRelation};
//!
//! let mut rel = DenseRelation::default();
//! rel.add_prereq(0, 1); // course 0 must be taken before course 1
//! rel.add_prereq(1, 2);
//!
//! assert!(rel.transitive_closure().has_prereq(0, 2));
//! assert!(!rel.has_cycle());
//! ```
//!
//! # Totality
//!
//! Every operation in this crate is total: out-of-range indices answer with a
//! safe default (`false` for boolean queries) instead of panicking, self-loop
//! edges are stored rather than rejected (they are how cycles are
//! represented), and hitting the enumeration cap is normal termination, not
//! an error. Callers wanting hard bounds reject oversized inputs before
//! invoking the engine.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the relation
//!   stores and on result types (`Classification`, `Coloring`).
//!
//! This crate is `no_std` compatible (requires `alloc`). File formats and the
//! command-line surface live in the separate `curricheck_cli` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod bitvec;
pub mod classify;
pub mod conflict;
pub mod relation;
pub mod schedule;

pub use bitvec::BitVec;
pub use classify::{classify, Classification};
pub use conflict::{color_conflicts, Coloring, MemberId, Roster};
pub use relation::{CourseId, DenseRelation, PackedRelation, PrereqRelation};
