use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quiver::DiGraph;

/// Ring of `size` vertices with chords every 7 vertices: one big SCC with
/// enough extra edges to exercise the heaps and stacks.
fn ring_with_chords(size: usize) -> DiGraph<u64> {
    let mut adjacency = vec![Vec::new(); size];
    for v in 0..size {
        adjacency[v].push(((v + 1) % size, 1u64));
        if v % 7 == 0 {
            adjacency[v].push(((v + size / 2) % size, 3));
        }
    }
    DiGraph::from_weighted(adjacency).unwrap()
}

fn bench_traversal(c: &mut Criterion) {
    let graph = ring_with_chords(10_000);

    c.bench_function("dfs_iterative_10k", |b| {
        b.iter(|| black_box(&graph).dfs_iterative().unwrap())
    });

    c.bench_function("bfs_10k", |b| {
        b.iter(|| black_box(&graph).bfs().unwrap())
    });
}

fn bench_scc(c: &mut Criterion) {
    // Chain of 2-cycles: many small components, no deep recursion.
    let size = 10_000;
    let mut adjacency = vec![Vec::new(); size];
    for v in (0..size - 1).step_by(2) {
        adjacency[v].push((v + 1, 1u64));
        adjacency[v + 1].push((v, 1));
        if v + 2 < size {
            adjacency[v + 1].push((v + 2, 1));
        }
    }
    let graph = DiGraph::from_weighted(adjacency).unwrap();

    c.bench_function("tarjan_scc_10k", |b| {
        b.iter(|| black_box(&graph).tarjan_scc().unwrap())
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = ring_with_chords(10_000);

    c.bench_function("dijkstra_10k", |b| {
        b.iter(|| black_box(&graph).dijkstra(black_box(0)).unwrap())
    });
}

criterion_group!(benches, bench_traversal, bench_scc, bench_dijkstra);
criterion_main!(benches);
