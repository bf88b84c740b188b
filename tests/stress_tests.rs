//! Stress tests that push the queues and the shortest-path engine under load
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use adaptable_heap::decorations::Decorations;
use adaptable_heap::dijkstra::Dijkstra;
use adaptable_heap::graph::{AdjacencyGraph, EdgeId, VertexId};
use adaptable_heap::{AdaptablePriorityQueue, BinaryHeap, HeapAdaptablePriorityQueue, PriorityQueue};

/// Deterministic linear congruential sequence
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Test massive numbers of inserts and removals
fn test_massive_operations<Q: PriorityQueue<i32, i32> + Default>() {
    let mut queue = Q::default();

    for i in (0..10_000).rev() {
        queue.insert(i, i).unwrap();
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.remove_min(), Some((i, i)));
    }
    assert!(queue.is_empty());
}

/// Test many decreasing replace_key operations
fn test_many_decreases<Q: AdaptablePriorityQueue<i32, i32> + Default>() {
    let mut queue = Q::default();
    let handles: Vec<_> = (0..5_000)
        .map(|i| queue.insert_with_handle(100_000 + i, i).unwrap())
        .collect();

    // Decrease in reverse so every change moves an entry to the root
    for (i, handle) in handles.iter().enumerate().rev() {
        assert_eq!(queue.replace_key(handle, i as i32), Ok(100_000 + i as i32));
    }
    assert_eq!(queue.check_invariants(), Ok(()));

    for i in 0..5_000 {
        assert_eq!(queue.remove_min(), Some((i, i)));
    }
}

/// Test random mixed operations against a sorted reference
fn test_random_mixed<Q: AdaptablePriorityQueue<i32, usize> + Default>() {
    let mut rng = Lcg(42);
    let mut queue = Q::default();
    let mut live: Vec<(Q::Handle, usize)> = Vec::new();
    let mut keys: Vec<Option<i32>> = Vec::new();

    for round in 0..20_000 {
        match rng.next() % 5 {
            0 | 1 => {
                let key = (rng.next() % 10_000) as i32;
                let id = keys.len();
                keys.push(Some(key));
                live.push((queue.insert_with_handle(key, id).unwrap(), id));
            }
            2 if !live.is_empty() => {
                let (key, id) = queue.remove_min().unwrap();
                assert_eq!(keys[id], Some(key));
                keys[id] = None;
                let pos = live.iter().position(|(_, l)| *l == id).unwrap();
                live.swap_remove(pos);
            }
            3 if !live.is_empty() => {
                let (handle, id) = live.swap_remove(rng.next() as usize % live.len());
                assert_eq!(queue.remove(&handle).map(|(k, _)| k), Ok(keys[id].unwrap()));
                keys[id] = None;
            }
            4 if !live.is_empty() => {
                let (handle, id) = live[rng.next() as usize % live.len()];
                let key = (rng.next() % 10_000) as i32;
                queue.replace_key(&handle, key).unwrap();
                keys[id] = Some(key);
            }
            _ => {}
        }

        if round % 1_000 == 0 {
            assert_eq!(queue.check_invariants(), Ok(()));
        }
        assert_eq!(queue.len(), live.len());
    }

    let mut expected: Vec<i32> = keys.into_iter().flatten().collect();
    expected.sort();
    let mut drained = Vec::with_capacity(expected.len());
    while let Some((k, _)) = queue.remove_min() {
        drained.push(k);
    }
    assert_eq!(drained, expected);
}

#[test]
fn test_binary_massive_operations() {
    test_massive_operations::<BinaryHeap<i32, i32>>();
}

#[test]
fn test_adaptable_massive_operations() {
    test_massive_operations::<HeapAdaptablePriorityQueue<i32, i32>>();
}

#[test]
fn test_adaptable_many_decreases() {
    test_many_decreases::<HeapAdaptablePriorityQueue<i32, i32>>();
}

#[test]
fn test_adaptable_random_mixed() {
    test_random_mixed::<HeapAdaptablePriorityQueue<i32, usize>>();
}

#[test]
fn test_dijkstra_large_grid() {
    // 100x100 grid with unit horizontal and weight-2 vertical edges
    let (width, height) = (100usize, 100usize);
    let mut graph: AdjacencyGraph<(usize, usize), ()> = AdjacencyGraph::with_capacity(width * height, 2 * width * height);
    let cells: Vec<VertexId> = (0..width * height)
        .map(|i| graph.insert_vertex((i % width, i / width)))
        .collect();
    let mut weights: Decorations<EdgeId, u32> = Decorations::new();
    for y in 0..height {
        for x in 0..width {
            let here = cells[y * width + x];
            if x + 1 < width {
                let e = graph.insert_edge(here, cells[y * width + x + 1], ()).unwrap();
                weights.put(e, 1);
            }
            if y + 1 < height {
                let e = graph.insert_edge(here, cells[(y + 1) * width + x], ()).unwrap();
                weights.put(e, 2);
            }
        }
    }

    let mut dijkstra = Dijkstra::new();
    dijkstra.execute(&graph, cells[0], &weights).unwrap();
    for (i, &cell) in cells.iter().enumerate() {
        let (x, y) = (i % width, i / width);
        assert_eq!(dijkstra.distance_of(cell), Ok((x + 2 * y) as u32));
    }
    let path = dijkstra.path_to(&graph, cells[width * height - 1]).unwrap();
    assert_eq!(path.len(), width + height - 1);
}
