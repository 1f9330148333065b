//! Order-theoretic classification of the stored relation.
//!
//! Every predicate here reads the *raw* relation, not its closure: a
//! curriculum whose direct-edge set happens to be transitive is a different
//! statement from one whose closure is (the latter is always true).
//! All predicates range over the full `size x size` extent.
//!
//! # Vacuous truth
//!
//! An empty relation (`size == 0`) satisfies every predicate: it is
//! reflexive, symmetric, transitive and antisymmetric, hence both an
//! equivalence relation and a partial order. Downstream report code relies
//! on this convention; do not special-case it away.

use crate::relation::PrereqRelation;

/// Every course relates to itself: `(i, i)` for all `i`.
pub fn is_reflexive<R: PrereqRelation>(rel: &R) -> bool {
    (0..rel.size()).all(|i| rel.has_prereq(i, i))
}

/// `(i, j)` and `(j, i)` always agree.
pub fn is_symmetric<R: PrereqRelation>(rel: &R) -> bool {
    let n = rel.size();
    (0..n).all(|i| (0..n).all(|j| rel.has_prereq(i, j) == rel.has_prereq(j, i)))
}

/// `(i, j)` and `(j, k)` together imply `(i, k)`.
pub fn is_transitive<R: PrereqRelation>(rel: &R) -> bool {
    let n = rel.size();
    for i in 0..n {
        for j in 0..n {
            if !rel.has_prereq(i, j) {
                continue;
            }
            for k in 0..n {
                if rel.has_prereq(j, k) && !rel.has_prereq(i, k) {
                    return false;
                }
            }
        }
    }
    true
}

/// No two distinct courses require each other.
pub fn is_antisymmetric<R: PrereqRelation>(rel: &R) -> bool {
    let n = rel.size();
    (0..n).all(|i| (0..n).all(|j| i == j || !(rel.has_prereq(i, j) && rel.has_prereq(j, i))))
}

/// Reflexive, symmetric and transitive.
pub fn is_equivalence<R: PrereqRelation>(rel: &R) -> bool {
    is_reflexive(rel) && is_symmetric(rel) && is_transitive(rel)
}

/// Reflexive, transitive and antisymmetric.
pub fn is_partial_order<R: PrereqRelation>(rel: &R) -> bool {
    is_reflexive(rel) && is_transitive(rel) && is_antisymmetric(rel)
}

/// All six classification flags of a relation, bundled for report surfaces.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
    pub equivalence: bool,
    pub partial_order: bool,
}

/// Evaluates every predicate once and bundles the verdicts.
pub fn classify<R: PrereqRelation>(rel: &R) -> Classification {
    let reflexive = is_reflexive(rel);
    let symmetric = is_symmetric(rel);
    let transitive = is_transitive(rel);
    let antisymmetric = is_antisymmetric(rel);
    Classification {
        reflexive,
        symmetric,
        transitive,
        antisymmetric,
        equivalence: reflexive && symmetric && transitive,
        partial_order: reflexive && transitive && antisymmetric,
    }
}
