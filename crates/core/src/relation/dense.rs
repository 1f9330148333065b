use alloc::vec;
use alloc::vec::Vec;

use super::{edge_extent, CourseId, PrereqRelation};

/// Prerequisite relation backed by a dense `Vec<Vec<bool>>` matrix.
///
/// Row `a`, column `b` holds the edge "`a` is a prerequisite of `b`".
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DenseRelation {
    rows: Vec<Vec<bool>>,
}

impl PrereqRelation for DenseRelation {
    fn ensure_size(&mut self, n: usize) {
        if n > self.rows.len() {
            for row in &mut self.rows {
                row.resize(n, false);
            }
            while self.rows.len() < n {
                self.rows.push(vec![false; n]);
            }
        }
    }

    fn add_prereq(&mut self, a: CourseId, b: CourseId) {
        self.ensure_size(edge_extent(a, b));
        self.rows[a][b] = true;
    }

    fn has_prereq(&self, a: CourseId, b: CourseId) -> bool {
        self.rows
            .get(a)
            .is_some_and(|row| row.get(b).copied().unwrap_or(false))
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    /// Floyd-Warshall boolean closure: for each intermediate `k`, every row
    /// `i` with `(i, k)` set absorbs row `k`.
    fn transitive_closure(&self) -> Self {
        let n = self.rows.len();
        tracing::trace!(size = n, "dense closure");
        let mut result = self.clone();
        for k in 0..n {
            for i in 0..n {
                if result.rows[i][k] {
                    for j in 0..n {
                        if result.rows[k][j] {
                            result.rows[i][j] = true;
                        }
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_closure() {
        let mut rel = DenseRelation::default();
        rel.add_prereq(0, 1);
        rel.add_prereq(1, 2);
        rel.add_prereq(2, 3);

        let closure = rel.transitive_closure();
        assert!(closure.has_prereq(0, 2));
        assert!(closure.has_prereq(0, 3));
        assert!(closure.has_prereq(1, 3));
        assert!(!closure.has_prereq(3, 0));
        // The store itself is untouched.
        assert!(!rel.has_prereq(0, 2));
    }

    #[test]
    fn growth_preserves_edges() {
        let mut rel = DenseRelation::default();
        rel.add_prereq(0, 1);
        rel.ensure_size(10);
        assert_eq!(rel.size(), 10);
        assert!(rel.has_prereq(0, 1));
        // Growing back down is a no-op.
        rel.ensure_size(3);
        assert_eq!(rel.size(), 10);
    }

    #[test]
    fn out_of_range_queries_are_false() {
        let mut rel = DenseRelation::default();
        rel.add_prereq(1, 2);
        assert!(!rel.has_prereq(5, 1));
        assert!(!rel.has_prereq(1, 5));
        assert!(!rel.has_prereq(7, 9));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut rel = DenseRelation::default();
        rel.add_prereq(2, 2);
        assert!(rel.has_cycle());
    }

    #[test]
    fn chain_has_no_cycle_until_closed() {
        let mut rel = DenseRelation::default();
        for i in 0..4 {
            rel.add_prereq(i, i + 1);
        }
        assert!(!rel.has_cycle());
        rel.add_prereq(4, 0);
        assert!(rel.has_cycle());
    }
}
