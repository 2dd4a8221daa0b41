//! Vertex/edge graphs: [`Edge`], [`Graph`] and [`GraphBuilder`].
//!
//! Vertices live in an arena indexed by [`VertexId::index`]; edges live in a
//! global insertion-ordered set, and every vertex keeps the set of indices of
//! its incident edges. Nothing holds a pointer to anything else.

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use log::debug;

use crate::error::BuildError;
use crate::vertex::{OwnerId, Vertex, VertexId};

/// Weight of an edge when none is given.
pub const DEFAULT_WEIGHT: i32 = 1;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A connection between two vertices.
///
/// Undirected edges compare and hash symmetrically in their endpoints, so
/// `Edge::undirected(a, b) == Edge::undirected(b, a)`. Weight and
/// directedness take part in equality.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    source: VertexId,
    destination: VertexId,
    directed: bool,
    weight: i32,
}

impl Edge {
    /// An undirected edge of [`DEFAULT_WEIGHT`].
    pub const fn undirected(a: VertexId, b: VertexId) -> Self {
        Self {
            source: a,
            destination: b,
            directed: false,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// A directed edge `source -> destination` of [`DEFAULT_WEIGHT`].
    pub const fn directed(source: VertexId, destination: VertexId) -> Self {
        Self {
            source,
            destination,
            directed: true,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Whether this edge can be followed from `from` to `to`.
    pub fn connects(&self, from: VertexId, to: VertexId) -> bool {
        (self.source == from && self.destination == to)
            || (!self.directed && self.source == to && self.destination == from)
    }

    /// The endpoint opposite `v`, regardless of direction.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.source == v {
            Some(self.destination)
        } else if self.destination == v {
            Some(self.source)
        } else {
            None
        }
    }

    /// Endpoints in the order that defines identity.
    fn key(&self) -> (VertexId, VertexId) {
        if self.directed || self.source <= self.destination {
            (self.source, self.destination)
        } else {
            (self.destination, self.source)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.weight == other.weight && self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.directed.hash(state);
        self.weight.hash(state);
    }
}

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Edge storage shared by [`Graph`] and the square-lattice graph.
///
/// Callers validate endpoints before inserting; lookups assume `v.index()` is
/// in range.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    edges: IndexSet<Edge>,
    incidence: Vec<IndexSet<usize>>,
}

impl Adjacency {
    pub(crate) fn with_vertices(n: usize) -> Self {
        Self {
            edges: IndexSet::new(),
            incidence: vec![IndexSet::new(); n],
        }
    }

    pub(crate) fn add_vertex(&mut self) {
        self.incidence.push(IndexSet::new());
    }

    /// Insert `edge`, returning `false` if an equal edge already exists.
    pub(crate) fn insert(&mut self, edge: Edge) -> bool {
        let (i, fresh) = self.edges.insert_full(edge);
        self.incidence[edge.source.index()].insert(i);
        self.incidence[edge.destination.index()].insert(i);
        fresh
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edges(&self) -> indexmap::set::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub(crate) fn incident(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence[v.index()].iter().map(|&i| &self.edges[i])
    }

    /// First edge, in insertion order, that leads from `from` to `to`.
    pub(crate) fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.incident(from).find(|e| e.connects(from, to))
    }

    /// Distinct vertices on the other side of any incident edge, in edge
    /// insertion order. Edge direction is ignored.
    pub(crate) fn neighbors(&self, v: VertexId) -> IndexSet<VertexId> {
        self.incident(v).filter_map(|e| e.other(v)).collect()
    }

    /// Cheapest weight for stepping from `from` to `to`.
    ///
    /// Edges that lead `from -> to` win; otherwise reverse-direction edges
    /// are used, since neighbor discovery ignores direction.
    pub(crate) fn weight(&self, from: VertexId, to: VertexId) -> Option<i32> {
        let forward = self
            .incident(from)
            .filter(|e| e.connects(from, to))
            .map(Edge::weight)
            .min();
        forward.or_else(|| {
            self.incident(from)
                .filter(|e| e.connects(to, from))
                .map(Edge::weight)
                .min()
        })
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable vertex/edge container built by [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct Graph<T> {
    owner: OwnerId,
    vertices: Vec<Vertex<T>>,
    adjacency: Adjacency,
}

impl<T> Graph<T> {
    pub fn builder() -> GraphBuilder<T> {
        GraphBuilder::new()
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Whether `id` names a vertex of this graph.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.owner() == self.owner && id.index() < self.vertices.len()
    }

    /// The vertex with identity `id`.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        if id.owner() != self.owner {
            return None;
        }
        self.vertices.get(id.index())
    }

    /// The first vertex inserted.
    pub fn root(&self) -> Option<&Vertex<T>> {
        self.vertices.first()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.adjacency.edges()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Whether some edge leads from `a` to `b`.
    pub fn adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.edge(a, b).is_some()
    }

    /// The edge leading from `from` to `to`, if any.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.adjacency.edge(from, to)
    }

    /// Edges touching `v`, in insertion order.
    pub fn incident(&self, v: VertexId) -> Vec<&Edge> {
        if !self.contains(v) {
            return Vec::new();
        }
        self.adjacency.incident(v).collect()
    }

    /// Vertices one edge away from `v`, ignoring edge direction.
    pub fn neighbors(&self, v: VertexId) -> Vec<&Vertex<T>> {
        self.neighbor_ids(v)
            .into_iter()
            .map(|id| &self.vertices[id.index()])
            .collect()
    }

    /// Identities of the vertices one edge away from `v`.
    pub fn neighbor_ids(&self, v: VertexId) -> Vec<VertexId> {
        if !self.contains(v) {
            return Vec::new();
        }
        self.adjacency.neighbors(v).into_iter().collect()
    }

    /// Weight of the cheapest edge between `from` and `to`, preferring edges
    /// that point from `from` to `to`.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<i32> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.adjacency.weight(from, to)
    }

    /// First vertex, in insertion order, whose value satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|v| pred(v.value()))
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Accumulates vertices and edges and produces an immutable [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder<T> {
    owner: OwnerId,
    vertices: Vec<Vertex<T>>,
    adjacency: Adjacency,
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GraphBuilder<T> {
    pub fn new() -> Self {
        Self {
            owner: OwnerId::next(),
            vertices: Vec::new(),
            adjacency: Adjacency::default(),
        }
    }

    /// Append a vertex and return its identity.
    pub fn vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.owner, self.vertices.len());
        self.vertices.push(Vertex::new(id, value));
        self.adjacency.add_vertex();
        id
    }

    /// Add an undirected edge of [`DEFAULT_WEIGHT`].
    pub fn edge(&mut self, a: VertexId, b: VertexId) -> Result<&mut Self, BuildError> {
        self.add_edge(Edge::undirected(a, b))
    }

    /// Add an undirected edge of the given weight.
    pub fn weighted_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: i32,
    ) -> Result<&mut Self, BuildError> {
        self.add_edge(Edge::undirected(a, b).with_weight(weight))
    }

    /// Add a directed edge `source -> destination` of the given weight.
    pub fn directed_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: i32,
    ) -> Result<&mut Self, BuildError> {
        self.add_edge(Edge::directed(source, destination).with_weight(weight))
    }

    /// Add `edge`. Both endpoints must come from this builder and the weight
    /// must be non-negative. Adding an equal edge twice is a no-op.
    pub fn add_edge(&mut self, edge: Edge) -> Result<&mut Self, BuildError> {
        for id in [edge.source(), edge.destination()] {
            if id.owner() != self.owner || id.index() >= self.vertices.len() {
                return Err(BuildError::UnknownVertex { id });
            }
        }
        if edge.weight() < 0 {
            return Err(BuildError::NegativeWeight {
                weight: edge.weight(),
            });
        }
        self.adjacency.insert(edge);
        Ok(self)
    }

    pub fn build(self) -> Graph<T> {
        debug!(
            "built graph with {} vertices and {} edges (owner {})",
            self.vertices.len(),
            self.adjacency.edge_count(),
            self.owner
        );
        Graph {
            owner: self.owner,
            vertices: self.vertices,
            adjacency: self.adjacency,
        }
    }
}
