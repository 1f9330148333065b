//! Scenario tests for linear extension enumeration and plan queries,
//! run against both relation stores.

use curricheck_core::schedule::{can_take, linear_extensions, transitive_prereqs};
use curricheck_core::{DenseRelation, PackedRelation, PrereqRelation};

mod common;
use common::{chain, with_edges};

fn chain_of_four_has_one_ordering<R: PrereqRelation>() {
    let rel: R = chain(4);
    let orders = linear_extensions(&rel, 4, 10);
    assert_eq!(orders, vec![vec![0, 1, 2, 3]]);
}

#[test]
fn dense_chain_of_four_has_one_ordering() {
    chain_of_four_has_one_ordering::<DenseRelation>();
}

#[test]
fn packed_chain_of_four_has_one_ordering() {
    chain_of_four_has_one_ordering::<PackedRelation>();
}

fn every_ordering_respects_every_edge<R: PrereqRelation>() {
    // Two independent chains plus a cross edge: 0->1->2, 3->4, 0->4.
    let edges = [(0, 1), (1, 2), (3, 4), (0, 4)];
    let rel: R = with_edges(&edges);
    let orders = linear_extensions(&rel, rel.size(), 1000);
    assert!(!orders.is_empty());

    for order in &orders {
        let mut position = vec![0usize; order.len()];
        for (pos, &course) in order.iter().enumerate() {
            position[course] = pos;
        }
        for &(a, b) in &edges {
            assert!(
                position[a] < position[b],
                "ordering {order:?} places {b} before its prerequisite {a}",
            );
        }
    }
}

#[test]
fn dense_orderings_respect_edges() {
    every_ordering_respects_every_edge::<DenseRelation>();
}

#[test]
fn packed_orderings_respect_edges() {
    every_ordering_respects_every_edge::<PackedRelation>();
}

fn cap_is_respected<R: PrereqRelation>() {
    // Edgeless: 4! = 24 valid orderings, far more than the cap.
    let mut rel = R::default();
    rel.ensure_size(4);
    let orders = linear_extensions(&rel, 4, 5);
    assert_eq!(orders.len(), 5);
    // The cap does not disturb determinism of the prefix.
    assert_eq!(orders[0], vec![0, 1, 2, 3]);
    assert_eq!(orders[1], vec![0, 1, 3, 2]);
}

#[test]
fn dense_cap_is_respected() {
    cap_is_respected::<DenseRelation>();
}

#[test]
fn packed_cap_is_respected() {
    cap_is_respected::<PackedRelation>();
}

#[test]
fn cyclic_relation_yields_nothing() {
    let mut rel: DenseRelation = chain(3);
    rel.add_prereq(2, 0);
    assert!(linear_extensions(&rel, 3, 10).is_empty());
}

#[test]
fn plan_queries_follow_the_closure() {
    let rel: PackedRelation = with_edges(&[(0, 1), (1, 2), (0, 3)]);
    assert_eq!(transitive_prereqs(&rel, 2), vec![0, 1]);
    assert_eq!(transitive_prereqs(&rel, 3), vec![0]);
    assert!(can_take(&rel, 2, &[true, true, false, false]));
    assert!(!can_take(&rel, 2, &[true, false, false, false]));
    assert!(can_take(&rel, 0, &[false; 4]));
}
