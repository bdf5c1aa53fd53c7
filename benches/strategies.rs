use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hampath::search::{backtracking, bitmask, ordered};
use hampath::Graph;

/// Cycle on `n` vertices: Hamiltonian, but with just enough slack that the
/// searches do real work.
fn cycle_graph(n: usize) -> Graph {
    let edges: Vec<(usize, usize)> = (0..n).map(|u| (u, (u + 1) % n)).collect();
    Graph::from_edges(n, &edges).unwrap()
}

/// Two cliques joined nowhere: the absent case, which forces both
/// backtracking variants to exhaust their trees.
fn split_cliques(n: usize) -> Graph {
    let mut g = Graph::with_vertices(n).unwrap();
    let half = n / 2;
    for u in 0..half {
        for v in (u + 1)..half {
            g.add_edge(u, v);
        }
    }
    for u in half..n {
        for v in (u + 1)..n {
            g.add_edge(u, v);
        }
    }
    g
}

fn bench_present(c: &mut Criterion) {
    let g = cycle_graph(16);
    let mut group = c.benchmark_group("hamiltonian_present");
    group.bench_function("backtracking", |b| {
        b.iter(|| backtracking::search(black_box(&g)))
    });
    group.bench_function("ordered", |b| b.iter(|| ordered::search(black_box(&g))));
    group.bench_function("bitmask_dp", |b| b.iter(|| bitmask::search(black_box(&g))));
    group.finish();
}

fn bench_absent(c: &mut Criterion) {
    let g = split_cliques(12);
    let mut group = c.benchmark_group("hamiltonian_absent");
    group.bench_function("backtracking", |b| {
        b.iter(|| backtracking::search(black_box(&g)))
    });
    group.bench_function("ordered", |b| b.iter(|| ordered::search(black_box(&g))));
    group.bench_function("bitmask_dp", |b| b.iter(|| bitmask::search(black_box(&g))));
    group.finish();
}

criterion_group!(benches, bench_present, bench_absent);
criterion_main!(benches);
