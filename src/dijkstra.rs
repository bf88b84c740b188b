//! Dijkstra's single-source shortest paths over an adaptable priority queue
//!
//! The engine seeds the queue with one entry per vertex (the source at zero,
//! every other vertex at [`Weight::INFINITY`]), then repeatedly extracts the
//! minimum, settles that vertex, and relaxes the keys of its unsettled
//! neighbors in place through
//! [`replace_key`](crate::AdaptablePriorityQueue::replace_key).
//!
//! # Design
//!
//! Per-vertex bookkeeping lives in typed [`Decorations`] tables keyed by the
//! graph's own vertex identifiers: the queue handle of every unsettled vertex,
//! the permanent distance of every settled vertex, and the edge each vertex
//! was last relaxed through.  A vertex is settled exactly when its handle
//! decoration is gone.
//!
//! Edge weights must be non-negative.  By default every incident edge is
//! checked before the run starts, so a bad weight fails the run without
//! touching any state.
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::decorations::Decorations;
//! use adaptable_heap::dijkstra::Dijkstra;
//! use adaptable_heap::graph::AdjacencyGraph;
//!
//! let mut graph = AdjacencyGraph::new();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let c = graph.insert_vertex("C");
//!
//! let mut weights = Decorations::new();
//! weights.put(graph.insert_edge(a, b, ()).unwrap(), 1u32);
//! weights.put(graph.insert_edge(b, c, ()).unwrap(), 2);
//! weights.put(graph.insert_edge(a, c, ()).unwrap(), 5);
//!
//! let mut dijkstra = Dijkstra::new();
//! dijkstra.execute(&graph, a, &weights).unwrap();
//! assert_eq!(dijkstra.distance_of(c), Ok(3));
//! assert_eq!(dijkstra.path_to(&graph, c), Ok(vec![a, b, c]));
//! ```

use crate::adaptable::HeapAdaptablePriorityQueue;
use crate::decorations::Decorations;
use crate::graph::{Graph, GraphError};
use crate::traits::{AdaptablePriorityQueue, QueueError};
use log::{debug, trace};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Errors raised by the shortest-path engine
///
/// The `String` payloads hold the `Debug` rendering of the offending edge
/// and weight.  They exist for the error message only and are not meant to
/// be parsed; match on the variant instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DijkstraError {
    /// No run has produced a distance for the vertex
    #[error("no distance has been computed for this vertex")]
    NotComputed,
    /// The source vertex does not belong to the graph
    #[error("source vertex is not part of the graph")]
    UnknownSource,
    /// An edge carries a negative weight
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// `Debug` form of the edge
        edge: String,
        /// `Debug` form of its weight
        weight: String,
    },
    /// An edge has no weight; the payload is the `Debug` form of the edge
    #[error("edge {0} has no weight")]
    MissingWeight(String),
    /// The vertex cannot be reached from the source
    #[error("vertex is unreachable from the source")]
    Unreachable,
    /// A graph lookup failed
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The priority queue rejected an operation
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Edge weight and path distance type
///
/// `INFINITY` marks unreachable vertices.  Sums saturate at `INFINITY`, so
/// a finite distance never wraps around.
pub trait Weight: Ord + Copy + fmt::Debug {
    /// Distance of the source to itself
    const ZERO: Self;
    /// Distance of an unreachable vertex
    const INFINITY: Self;

    /// Returns true for weights below zero
    fn is_negative(&self) -> bool;

    /// Adds without overflowing past `INFINITY`
    fn saturating_add(self, other: Self) -> Self;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                #[allow(unused_comparisons)]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }
            }
        )*
    };
}

impl_weight!(i32, i64, u32, u64, usize);

/// Source of edge weights
pub trait EdgeWeights<E, W> {
    /// Returns the weight of `edge`, if it has one
    fn weight(&self, edge: E) -> Option<W>;
}

impl<E: Copy + Eq + Hash, W: Copy> EdgeWeights<E, W> for Decorations<E, W> {
    fn weight(&self, edge: E) -> Option<W> {
        self.get(&edge).copied()
    }
}

/// Adapts a closure into an [`EdgeWeights`] source
///
/// ```rust
/// use adaptable_heap::dijkstra::{EdgeWeights, WeightFn};
///
/// let weights = WeightFn(|edge: usize| Some(edge as u64 * 10));
/// assert_eq!(weights.weight(3), Some(30));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeightFn<F>(pub F);

impl<E, W, F: Fn(E) -> Option<W>> EdgeWeights<E, W> for WeightFn<F> {
    fn weight(&self, edge: E) -> Option<W> {
        (self.0)(edge)
    }
}

/// Runtime options for [`Dijkstra`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraConfig {
    /// Check every weight before the run starts
    pub validate_weights: bool,
    /// Verify the queue invariants after every relaxation
    pub check_invariants: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        DijkstraConfig {
            validate_weights: true,
            check_invariants: false,
        }
    }
}

/// Builder for a configured [`Dijkstra`] engine.
///
/// ```rust
/// use adaptable_heap::dijkstra::{Dijkstra, DijkstraBuilder};
/// use adaptable_heap::graph::AdjacencyGraph;
///
/// let dijkstra: Dijkstra<AdjacencyGraph<(), ()>, u32> = DijkstraBuilder::new()
///     .check_invariants(true)
///     .build();
/// assert!(dijkstra.config().check_invariants);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraBuilder {
    config: DijkstraConfig,
}

impl DijkstraBuilder {
    /// Starts from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether weights are checked before the run starts.
    ///
    /// With validation off, a negative weight silently yields wrong
    /// distances and a missing weight is only reported when it is reached.
    pub fn validate_weights(mut self, enabled: bool) -> Self {
        self.config.validate_weights = enabled;
        self
    }

    /// Sets whether the queue invariants are verified after every relaxation.
    ///
    /// This costs O(V) per relaxation and is meant for debugging.
    pub fn check_invariants(mut self, enabled: bool) -> Self {
        self.config.check_invariants = enabled;
        self
    }

    /// Creates the engine
    pub fn build<G: Graph, W: Weight>(self) -> Dijkstra<G, W> {
        Dijkstra::with_config(self.config)
    }
}

/// Single-source shortest-path engine
///
/// Results of the last successful [`execute`](Self::execute) stay available
/// until the next run.
pub struct Dijkstra<G: Graph, W: Weight> {
    config: DijkstraConfig,
    source: Option<G::Vertex>,
    distances: Decorations<G::Vertex, W>,
    predecessors: Decorations<G::Vertex, G::Edge>,
}

impl<G: Graph, W: Weight> Dijkstra<G, W> {
    /// Creates an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(DijkstraConfig::default())
    }

    /// Creates an engine with the given configuration
    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra {
            config,
            source: None,
            distances: Decorations::new(),
            predecessors: Decorations::new(),
        }
    }

    /// Returns the engine's configuration
    pub fn config(&self) -> &DijkstraConfig {
        &self.config
    }

    /// Computes shortest distances from `source` to every vertex of `graph`.
    ///
    /// Uses a [`HeapAdaptablePriorityQueue`]; see [`execute_with`](Self::execute_with)
    /// to run on another adaptable queue.
    ///
    /// # Errors
    /// - [`DijkstraError::UnknownSource`] if `source` is not in the graph
    /// - [`DijkstraError::MissingWeight`] / [`DijkstraError::NegativeWeight`]
    ///   for an edge without a usable weight
    ///
    /// On error all results are cleared.
    ///
    /// # Time Complexity
    /// O((V + E) log V)
    pub fn execute<P>(&mut self, graph: &G, source: G::Vertex, weights: &P) -> Result<(), DijkstraError>
    where
        P: EdgeWeights<G::Edge, W>,
    {
        self.execute_with::<HeapAdaptablePriorityQueue<W, G::Vertex>, P>(graph, source, weights)
    }

    /// Like [`execute`](Self::execute), on the adaptable queue type `Q`.
    pub fn execute_with<Q, P>(
        &mut self,
        graph: &G,
        source: G::Vertex,
        weights: &P,
    ) -> Result<(), DijkstraError>
    where
        Q: AdaptablePriorityQueue<W, G::Vertex> + Default,
        P: EdgeWeights<G::Edge, W>,
    {
        self.reset();
        if !graph.contains_vertex(source) {
            return Err(DijkstraError::UnknownSource);
        }
        if self.config.validate_weights {
            validate_weights::<G, W, P>(graph, weights)?;
        }

        debug!(
            "dijkstra: {} vertices from source {:?}",
            graph.num_vertices(),
            source
        );
        self.source = Some(source);
        let result = self.visit::<Q, P>(graph, source, weights);
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn visit<Q, P>(&mut self, graph: &G, source: G::Vertex, weights: &P) -> Result<(), DijkstraError>
    where
        Q: AdaptablePriorityQueue<W, G::Vertex> + Default,
        P: EdgeWeights<G::Edge, W>,
    {
        let mut queue = Q::default();
        let mut handles: Decorations<G::Vertex, Q::Handle> =
            Decorations::with_capacity(graph.num_vertices());

        for u in graph.vertices() {
            let dist = if u == source { W::ZERO } else { W::INFINITY };
            let handle = queue.insert_with_handle(dist, u)?;
            handles.put(u, handle);
        }

        while let Some(u_handle) = queue.min_handle() {
            let (u_dist, u) = queue.remove(&u_handle)?;
            self.distances.put(u, u_dist);
            handles.remove(&u);
            trace!("settled {:?} at {:?}", u, u_dist);

            if u_dist == W::INFINITY {
                // Unreachable; nothing left in the queue can be reached either
                continue;
            }

            for e in graph.incident_edges(u)? {
                let z = graph.opposite(u, e)?;
                let Some(z_handle) = handles.get(&z).copied() else {
                    continue;
                };
                let weight = weights
                    .weight(e)
                    .ok_or_else(|| DijkstraError::MissingWeight(format!("{:?}", e)))?;
                let candidate = u_dist.saturating_add(weight);
                let z_dist = *queue.get(&z_handle)?.key();
                if candidate < z_dist {
                    trace!("relaxed {:?} via {:?}: {:?} -> {:?}", z, e, z_dist, candidate);
                    queue.replace_key(&z_handle, candidate)?;
                    self.predecessors.put(z, e);
                    if self.config.check_invariants {
                        queue.check_invariants()?;
                    }
                }
            }
        }

        debug!(
            "dijkstra: settled {} vertices, {} reachable",
            self.distances.len(),
            self.predecessors.len() + 1
        );
        Ok(())
    }

    /// Forgets the results of the last run
    pub fn reset(&mut self) {
        self.source = None;
        self.distances.clear();
        self.predecessors.clear();
    }

    /// Returns the source of the last successful run
    pub fn source(&self) -> Option<G::Vertex> {
        self.source
    }

    /// Returns the shortest distance from the source to `v`
    ///
    /// Unreachable vertices have distance [`Weight::INFINITY`].
    ///
    /// # Errors
    /// [`DijkstraError::NotComputed`] if no run covered `v`.
    pub fn distance_of(&self, v: G::Vertex) -> Result<W, DijkstraError> {
        self.distances
            .get(&v)
            .copied()
            .ok_or(DijkstraError::NotComputed)
    }

    /// Returns true if `v` has a finite distance from the source
    pub fn is_reachable(&self, v: G::Vertex) -> Result<bool, DijkstraError> {
        self.distance_of(v).map(|d| d != W::INFINITY)
    }

    /// Returns the last edge on the shortest path to `v`
    ///
    /// `None` for the source, unreachable vertices, and vertices no run covered.
    pub fn predecessor(&self, v: G::Vertex) -> Option<G::Edge> {
        self.predecessors.get(&v).copied()
    }

    /// Reconstructs a shortest path from the source to `v`, both inclusive
    ///
    /// # Errors
    /// [`DijkstraError::NotComputed`] if no run covered `v`,
    /// [`DijkstraError::Unreachable`] if `v` has infinite distance.
    pub fn path_to(&self, graph: &G, v: G::Vertex) -> Result<Vec<G::Vertex>, DijkstraError> {
        if self.distance_of(v)? == W::INFINITY {
            return Err(DijkstraError::Unreachable);
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(e) = self.predecessor(current) {
            current = graph.opposite(current, e)?;
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    /// Iterates over every settled vertex and its distance, in no particular order
    pub fn distances(&self) -> impl Iterator<Item = (G::Vertex, W)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }
}

impl<G: Graph, W: Weight> Default for Dijkstra<G, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fails on the first incident edge without a non-negative weight.
fn validate_weights<G, W, P>(graph: &G, weights: &P) -> Result<(), DijkstraError>
where
    G: Graph,
    W: Weight,
    P: EdgeWeights<G::Edge, W>,
{
    for v in graph.vertices() {
        for e in graph.incident_edges(v)? {
            match weights.weight(e) {
                None => return Err(DijkstraError::MissingWeight(format!("{:?}", e))),
                Some(w) if w.is_negative() => {
                    return Err(DijkstraError::NegativeWeight {
                        edge: format!("{:?}", e),
                        weight: format!("{:?}", w),
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
