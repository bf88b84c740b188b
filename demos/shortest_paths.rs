//! Shortest Paths on a Small Road Map
//!
//! Builds the four-town graph below, runs Dijkstra from `A`, and prints each
//! town's distance and route.
//!
//! ```text
//!   A --1-- B
//!   |       |
//!   5       2
//!   |       |
//!   +------ C --1-- D
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --example shortest_paths
//! ```

use adaptable_heap::decorations::Decorations;
use adaptable_heap::dijkstra::Dijkstra;
use adaptable_heap::graph::{AdjacencyGraph, EdgeId};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");
    let c = graph.insert_vertex("C");
    let d = graph.insert_vertex("D");

    let mut weights: Decorations<EdgeId, u32> = Decorations::new();
    for (u, v, w) in [(a, b, 1), (b, c, 2), (a, c, 5), (c, d, 1)] {
        let e = graph.insert_edge(u, v, ())?;
        weights.put(e, w);
    }

    let mut dijkstra = Dijkstra::new();
    dijkstra.execute(&graph, a, &weights)?;

    for town in [a, b, c, d] {
        let route = dijkstra
            .path_to(&graph, town)?
            .into_iter()
            .map(|v| graph.vertex(v).map(|name| *name))
            .collect::<Result<Vec<_>, _>>()?;
        println!(
            "{:>2}: distance {:>2}  via {}",
            graph.vertex(town)?,
            dijkstra.distance_of(town)?,
            route.join(" -> ")
        );
    }

    Ok(())
}
