//! Graph abstraction consumed by the shortest-path engine
//!
//! [`Graph`] is the surface [`Dijkstra`](crate::dijkstra::Dijkstra) needs:
//! vertex enumeration, incidence and `opposite`.  Vertices and edges are
//! opaque, copyable identifiers; anything an algorithm attaches to them lives
//! in a [`Decorations`](crate::decorations::Decorations) side-table keyed by
//! those identifiers.
//!
//! [`AdjacencyGraph`] is an undirected adjacency-list implementation storing
//! one element per vertex and per edge.

use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Errors raised by graph lookups
///
/// Payloads are the `Display` form of the offending identifiers and are meant
/// for messages only; match on the variant, not on the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex does not belong to the graph
    #[error("unknown vertex {0}")]
    UnknownVertex(String),
    /// The edge does not belong to the graph
    #[error("unknown edge {0}")]
    UnknownEdge(String),
    /// The edge is not incident to the given vertex
    #[error("edge {edge} is not incident to vertex {vertex}")]
    NotIncident {
        /// The vertex the edge was expected to touch
        vertex: String,
        /// The edge that does not touch it
        edge: String,
    },
}

/// Undirected graph surface used by the shortest-path engine
pub trait Graph {
    /// Vertex identifier
    type Vertex: Copy + Eq + Hash + fmt::Debug;
    /// Edge identifier
    type Edge: Copy + Eq + Hash + fmt::Debug;

    /// Returns the number of vertices
    fn num_vertices(&self) -> usize;

    /// Enumerates every vertex
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Returns true if `v` belongs to the graph
    fn contains_vertex(&self, v: Self::Vertex) -> bool;

    /// Enumerates the edges incident to `v`
    fn incident_edges(
        &self,
        v: Self::Vertex,
    ) -> Result<Box<dyn Iterator<Item = Self::Edge> + '_>, GraphError>;

    /// Returns the endpoint of `e` that is not `v`
    fn opposite(&self, v: Self::Vertex, e: Self::Edge) -> Result<Self::Vertex, GraphError>;
}

/// Identifier of a vertex in an [`AdjacencyGraph`]
///
/// Carries the id of the graph that issued it, so a vertex of one graph is
/// never mistaken for a vertex of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    graph: u64,
    index: usize,
}

/// Identifier of an edge in an [`AdjacencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    graph: u64,
    index: usize,
}

impl VertexId {
    /// Returns the dense index of the vertex within its graph
    pub fn index(self) -> usize {
        self.index
    }
}

impl EdgeId {
    /// Returns the dense index of the edge within its graph
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}.v{}", self.graph, self.index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}.e{}", self.graph, self.index)
    }
}

#[derive(Debug, Clone)]
struct VertexRecord<V> {
    element: V,
    incidence: SmallVec<[EdgeId; 4]>,
}

#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    element: E,
    endpoints: (VertexId, VertexId),
}

/// Undirected graph with adjacency lists
///
/// Vertices and edges are numbered densely in insertion order.  Parallel
/// edges and self-loops are allowed; a self-loop appears once in its
/// vertex's incidence list.
///
/// Every graph draws a process-unique id that is folded into the
/// identifiers it hands out; identifiers from another graph are rejected.
/// A clone keeps the id of its original.
///
/// # Example
///
/// ```rust
/// use adaptable_heap::graph::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::new();
/// let a = graph.insert_vertex("A");
/// let b = graph.insert_vertex("B");
/// let ab = graph.insert_edge(a, b, 7).unwrap();
///
/// assert_eq!(graph.opposite(a, ab), Ok(b));
/// assert_eq!(graph.edge(ab), Ok(&7));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    id: u64,
    vertices: Vec<VertexRecord<V>>,
    edges: Vec<EdgeRecord<E>>,
}

impl<V, E> AdjacencyGraph<V, E> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with room for the given numbers of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        AdjacencyGraph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Adds a vertex holding `element`
    pub fn insert_vertex(&mut self, element: V) -> VertexId {
        let id = self.vertex_id(self.vertices.len());
        self.vertices.push(VertexRecord {
            element,
            incidence: SmallVec::new(),
        });
        id
    }

    /// Adds an undirected edge between `u` and `v` holding `element`
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId, element: E) -> Result<EdgeId, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let id = self.edge_id(self.edges.len());
        self.edges.push(EdgeRecord {
            element,
            endpoints: (u, v),
        });
        self.vertices[u.index].incidence.push(id);
        if u != v {
            self.vertices[v.index].incidence.push(id);
        }
        Ok(id)
    }

    /// Returns the element stored at a vertex
    pub fn vertex(&self, v: VertexId) -> Result<&V, GraphError> {
        self.check_vertex(v)?;
        Ok(&self.vertices[v.index].element)
    }

    /// Returns the element stored at an edge
    pub fn edge(&self, e: EdgeId) -> Result<&E, GraphError> {
        self.edge_record(e).map(|record| &record.element)
    }

    /// Returns the two endpoints of an edge, in insertion order
    pub fn endpoints(&self, e: EdgeId) -> Result<(VertexId, VertexId), GraphError> {
        self.edge_record(e).map(|record| record.endpoints)
    }

    /// Returns the number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Enumerates every edge
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(move |index| self.edge_id(index))
    }

    /// Returns the number of edges incident to `v`
    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.vertices[v.index].incidence.len())
    }

    /// Finds the first vertex whose element satisfies `predicate`
    pub fn find_vertex(&self, mut predicate: impl FnMut(&V) -> bool) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|record| predicate(&record.element))
            .map(|index| self.vertex_id(index))
    }

    fn vertex_id(&self, index: usize) -> VertexId {
        VertexId {
            graph: self.id,
            index,
        }
    }

    fn edge_id(&self, index: usize) -> EdgeId {
        EdgeId {
            graph: self.id,
            index,
        }
    }

    fn owns_vertex(&self, v: VertexId) -> bool {
        v.graph == self.id && v.index < self.vertices.len()
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.owns_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v.to_string()))
        }
    }

    fn edge_record(&self, e: EdgeId) -> Result<&EdgeRecord<E>, GraphError> {
        if e.graph != self.id {
            return Err(GraphError::UnknownEdge(e.to_string()));
        }
        self.edges
            .get(e.index)
            .ok_or_else(|| GraphError::UnknownEdge(e.to_string()))
    }
}

impl<V, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph for AdjacencyGraph<V, E> {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertices.len()).map(move |index| self.vertex_id(index)))
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.owns_vertex(v)
    }

    fn incident_edges(&self, v: VertexId) -> Result<Box<dyn Iterator<Item = EdgeId> + '_>, GraphError> {
        self.check_vertex(v)?;
        Ok(Box::new(self.vertices[v.index].incidence.iter().copied()))
    }

    fn opposite(&self, v: VertexId, e: EdgeId) -> Result<VertexId, GraphError> {
        let (a, b) = self.endpoints(e)?;
        if v == a {
            Ok(b)
        } else if v == b {
            Ok(a)
        } else {
            Err(GraphError::NotIncident {
                vertex: v.to_string(),
                edge: e.to_string(),
            })
        }
    }
}
