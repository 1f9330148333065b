//! Enumeration of valid course orderings and per-course plan queries.
//!
//! A valid ordering is a permutation of `0..n` in which every prerequisite
//! precedes its dependent -- a linear extension of the stored relation. The
//! number of such orderings can be factorial in `n` (an edgeless relation
//! has `n!` of them), so enumeration is always bounded by a caller-supplied
//! cap; reaching the cap is silent, normal termination.
//!
//! # Search
//!
//! Classic ready-set backtracking: at every step any unused course whose
//! unused predecessors are exhausted is a legal next pick. Candidates are
//! tried in increasing index order and undone on return, which makes the
//! output deterministic and lexicographic by construction. Unlike a
//! satisfiability search there is no pruning of previously-seen frontiers:
//! two branches reaching the same frontier by different paths both produce
//! distinct orderings, and both must be emitted.

use alloc::vec;
use alloc::vec::Vec;

use crate::relation::{CourseId, PrereqRelation};

/// Enumerates orderings of courses `0..n` compatible with `rel`, stopping
/// after `limit` results.
///
/// A relation with a cycle among `0..n` yields no complete ordering: the
/// cycle's members never become ready. `n == 0` and `limit == 0` both yield
/// an empty result.
pub fn linear_extensions<R: PrereqRelation>(
    rel: &R,
    n: usize,
    limit: usize,
) -> Vec<Vec<CourseId>> {
    let mut accepted = Vec::new();
    if n == 0 {
        return accepted;
    }
    let mut used = vec![false; n];
    let mut order = Vec::with_capacity(n);
    extend(rel, n, limit, &mut used, &mut order, &mut accepted);
    tracing::debug!(
        n,
        limit,
        found = accepted.len(),
        "linear extension enumeration"
    );
    accepted
}

/// One backtracking step: place every ready candidate in index order,
/// recurse, undo. The cap is checked before each expansion so the search
/// stops producing work immediately once `accepted` is full.
fn extend<R: PrereqRelation>(
    rel: &R,
    n: usize,
    limit: usize,
    used: &mut [bool],
    order: &mut Vec<CourseId>,
    accepted: &mut Vec<Vec<CourseId>>,
) {
    if accepted.len() >= limit {
        return;
    }
    if order.len() == n {
        accepted.push(order.clone());
        return;
    }
    for candidate in 0..n {
        if used[candidate] {
            continue;
        }
        let has_pending_prereq = (0..n).any(|j| !used[j] && rel.has_prereq(j, candidate));
        if has_pending_prereq {
            continue;
        }
        used[candidate] = true;
        order.push(candidate);
        extend(rel, n, limit, used, order, accepted);
        order.pop();
        used[candidate] = false;
    }
}

/// Returns `true` if every transitive prerequisite of `course` is marked in
/// `completed`.
///
/// Courses outside `completed`'s range count as not completed. The closure
/// is recomputed per call; batch callers should reuse
/// [`transitive_prereqs`] output instead.
pub fn can_take<R: PrereqRelation>(rel: &R, course: CourseId, completed: &[bool]) -> bool {
    let closure = rel.transitive_closure();
    (0..closure.size()).all(|prereq| {
        !closure.has_prereq(prereq, course) || completed.get(prereq).copied().unwrap_or(false)
    })
}

/// All direct and indirect prerequisites of `course`, ascending.
pub fn transitive_prereqs<R: PrereqRelation>(rel: &R, course: CourseId) -> Vec<CourseId> {
    let closure = rel.transitive_closure();
    (0..closure.size())
        .filter(|&prereq| closure.has_prereq(prereq, course))
        .collect()
}
