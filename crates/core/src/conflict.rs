//! Enrollment-overlap conflict graph and greedy slot coloring.
//!
//! Two courses conflict when at least one person belongs to both, so they
//! cannot share an exam slot. The conflict graph is undirected, derived
//! fresh on every invocation from externally supplied membership sets, and
//! colored greedily in index order: each course takes the smallest
//! non-negative color not already held by a colored neighbor.
//!
//! The reported group count (`max color + 1`) is an upper bound on the
//! chromatic number, not the optimum -- greedy sequential coloring can
//! overshoot, and no degree-based tie-breaking is attempted.

use alloc::vec;
use alloc::vec::Vec;

use derive_more::From;
use hashbrown::HashSet;

use crate::relation::CourseId;

/// Identifier of a person appearing in membership sets. The engine never
/// resolves these to names; collaborating layers do.
pub type MemberId = u64;

/// Per-course membership sets, indexed by course.
///
/// A course with no recorded members conflicts with nothing and will be
/// assigned color 0; missing membership data is a specified outcome, not an
/// error.
#[derive(Debug, Default, Clone, From)]
pub struct Roster {
    memberships: Vec<HashSet<MemberId>>,
}

impl Roster {
    /// Builds a roster by asking `membership_of` for each course in
    /// `0..n`.
    #[must_use]
    pub fn from_fn<F>(n: usize, membership_of: F) -> Self
    where
        F: FnMut(CourseId) -> HashSet<MemberId>,
    {
        Self {
            memberships: (0..n).map(membership_of).collect(),
        }
    }

    /// Number of courses covered by this roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memberships.len()
    }

    /// `true` if the roster covers no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}

/// Undirected adjacency over dense course indices.
#[derive(Debug)]
struct OverlapGraph {
    adj: Vec<HashSet<CourseId>>,
}

impl OverlapGraph {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![HashSet::new(); n],
        }
    }

    fn add_edge(&mut self, a: CourseId, b: CourseId) {
        self.adj[a].insert(b);
        self.adj[b].insert(a);
    }

    fn neighbors(&self, course: CourseId) -> &HashSet<CourseId> {
        &self.adj[course]
    }
}

/// A conflict-free assignment of slot colors to courses.
///
/// Invariant: courses whose membership sets intersect never share a color.
/// `groups` is the number of distinct slots the assignment uses.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// Color of each course, indexed by course.
    pub colors: Vec<usize>,
    /// `max color + 1`, or 0 when the roster is empty.
    pub groups: usize,
}

/// Builds the overlap graph for `roster` and colors it greedily.
#[must_use]
pub fn color_conflicts(roster: &Roster) -> Coloring {
    let n = roster.memberships.len();
    let mut graph = OverlapGraph::new(n);
    let mut edges = 0usize;
    for a in 0..n {
        for b in (a + 1)..n {
            if !roster.memberships[a].is_disjoint(&roster.memberships[b]) {
                graph.add_edge(a, b);
                edges += 1;
            }
        }
    }

    let mut colors = vec![0usize; n];
    let mut groups = 0usize;
    for course in 0..n {
        let taken: HashSet<usize> = graph
            .neighbors(course)
            .iter()
            .filter(|&&neighbor| neighbor < course)
            .map(|&neighbor| colors[neighbor])
            .collect();

        let mut color = 0;
        while taken.contains(&color) {
            color += 1;
        }
        colors[course] = color;
        groups = groups.max(color + 1);
    }

    tracing::debug!(courses = n, edges, groups, "conflict coloring");
    Coloring { colors, groups }
}
