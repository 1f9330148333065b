use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use curricheck_core::{DenseRelation, PackedRelation, PrereqRelation};

/// Build a chain relation `0 -> 1 -> .. -> n-1` in the given store.
fn build_chain<R: PrereqRelation>(n: usize) -> R {
    let mut rel = R::default();
    rel.ensure_size(n);
    for i in 0..n - 1 {
        rel.add_prereq(i, i + 1);
    }
    rel
}

fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitive_closure");

    for n in [10usize, 50, 100, 200] {
        let dense: DenseRelation = build_chain(n);
        let packed: PackedRelation = build_chain(n);

        group.bench_function(format!("dense_{n}"), |b| {
            b.iter(|| black_box(&dense).transitive_closure());
        });

        group.bench_function(format!("packed_{n}"), |b| {
            b.iter(|| black_box(&packed).transitive_closure());
        });
    }

    group.finish();
}

fn bench_cycle_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_check");

    // Worst case for the diagonal scan: the cycle closes at the far end.
    let mut dense: DenseRelation = build_chain(100);
    dense.add_prereq(99, 0);
    let mut packed: PackedRelation = build_chain(100);
    packed.add_prereq(99, 0);

    group.bench_function("dense_100", |b| {
        b.iter(|| black_box(&dense).has_cycle());
    });
    group.bench_function("packed_100", |b| {
        b.iter(|| black_box(&packed).has_cycle());
    });

    group.finish();
}

criterion_group!(benches, bench_closure, bench_cycle_check);
criterion_main!(benches);
