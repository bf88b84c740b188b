//! Queue and Shortest-Path Benchmarks
//!
//! Compares the plain binary heap against the adaptable queue on raw queue
//! workloads, and measures Dijkstra on synthetic grid graphs.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_bench
//! ```

use adaptable_heap::decorations::Decorations;
use adaptable_heap::dijkstra::Dijkstra;
use adaptable_heap::graph::{AdjacencyGraph, EdgeId, VertexId};
use adaptable_heap::{AdaptablePriorityQueue, BinaryHeap, HeapAdaptablePriorityQueue, PriorityQueue};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Simple LCG for reproducible inputs
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() % 1_000_000).collect()
}

/// Grid with random edge weights in 1..=100
fn grid_graph(side: usize, seed: u64) -> (AdjacencyGraph<(), ()>, Vec<VertexId>, Decorations<EdgeId, u64>) {
    let mut rng = Lcg::new(seed);
    let mut graph = AdjacencyGraph::with_capacity(side * side, 2 * side * side);
    let cells: Vec<VertexId> = (0..side * side).map(|_| graph.insert_vertex(())).collect();
    let mut weights = Decorations::with_capacity(2 * side * side);
    for y in 0..side {
        for x in 0..side {
            let here = cells[y * side + x];
            if x + 1 < side {
                if let Ok(e) = graph.insert_edge(here, cells[y * side + x + 1], ()) {
                    weights.put(e, 1 + rng.next() % 100);
                }
            }
            if y + 1 < side {
                if let Ok(e) = graph.insert_edge(here, cells[(y + 1) * side + x], ()) {
                    weights.put(e, 1 + rng.next() % 100);
                }
            }
        }
    }
    (graph, cells, weights)
}

fn drain_all<Q: PriorityQueue<u64, usize> + Default>(keys: &[u64]) -> u64 {
    let mut queue = Q::default();
    for (i, &k) in keys.iter().enumerate() {
        let _ = queue.insert(k, i);
    }
    let mut checksum = 0u64;
    while let Some((k, _)) = queue.remove_min() {
        checksum = checksum.wrapping_add(k);
    }
    checksum
}

fn decrease_all(keys: &[u64]) -> u64 {
    let mut queue = HeapAdaptablePriorityQueue::new();
    let handles: Vec<_> = keys
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| queue.insert_with_handle(k + 1_000_000, i).ok())
        .collect();
    for (handle, &k) in handles.iter().zip(keys) {
        let _ = queue.replace_key(handle, k);
    }
    let mut checksum = 0u64;
    while let Some((k, _)) = queue.remove_min() {
        checksum = checksum.wrapping_add(k);
    }
    checksum
}

fn benchmark_insert_remove_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_min");

    for size in [1_000usize, 10_000, 100_000] {
        let keys = random_keys(size, 12345);
        group.bench_with_input(BenchmarkId::new("binary_heap", size), &keys, |b, keys| {
            b.iter(|| black_box(drain_all::<BinaryHeap<u64, usize>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("adaptable", size), &keys, |b, keys| {
            b.iter(|| black_box(drain_all::<HeapAdaptablePriorityQueue<u64, usize>>(keys)))
        });
    }

    group.finish();
}

fn benchmark_replace_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_key");

    for size in [1_000usize, 10_000, 100_000] {
        let keys = random_keys(size, 54321);
        group.bench_with_input(BenchmarkId::new("decrease_then_drain", size), &keys, |b, keys| {
            b.iter(|| black_box(decrease_all(keys)))
        });
    }

    group.finish();
}

fn benchmark_dijkstra_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");
    group.sample_size(20);

    for side in [32usize, 100, 316] {
        let (graph, cells, weights) = grid_graph(side, 777);
        let label = format!("{}x{}", side, side);
        group.bench_with_input(BenchmarkId::new("execute", &label), &cells[0], |b, &source| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new();
                let _ = dijkstra.execute(&graph, source, &weights);
                black_box(dijkstra.distance_of(cells[cells.len() - 1]).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_remove_min,
    benchmark_replace_key,
    benchmark_dijkstra_grid,
);

criterion_main!(benches);
