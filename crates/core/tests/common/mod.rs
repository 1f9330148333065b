#![allow(dead_code)] // each integration binary uses a different subset

use curricheck_core::{CourseId, PrereqRelation};

/// A simple chain `0 -> 1 -> .. -> n-1`.
pub fn chain<R: PrereqRelation>(n: usize) -> R {
    let mut rel = R::default();
    rel.ensure_size(n);
    for i in 0..n.saturating_sub(1) {
        rel.add_prereq(i, i + 1);
    }
    rel
}

/// A store holding exactly the given edges.
pub fn with_edges<R: PrereqRelation>(edges: &[(CourseId, CourseId)]) -> R {
    let mut rel = R::default();
    for &(a, b) in edges {
        rel.add_prereq(a, b);
    }
    rel
}

/// Deterministic pseudo-random edge list over `n` courses.
///
/// A fixed-seed LCG keeps the suite reproducible without pulling a
/// randomness dependency into the engine's dev-deps; the randomized
/// (seeded-from-entropy) variants of these properties live in
/// `curricheck_testgen`.
pub fn scrambled_edges(n: usize, count: usize, seed: u64) -> Vec<(CourseId, CourseId)> {
    let mut state = seed | 1;
    let mut next = move || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) as usize
    };
    (0..count).map(|_| (next() % n, next() % n)).collect()
}
