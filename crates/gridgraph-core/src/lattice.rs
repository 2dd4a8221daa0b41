//! Square-lattice graphs: a [`Grid`] whose edges are generated from spatial
//! adjacency.
//!
//! The lattice owns the grid and an edge store over the same vertex
//! identities, so coordinate queries and graph queries can be mixed freely.

use std::fmt;

use log::debug;

use crate::error::BuildError;
use crate::geom::{Direction, Point};
use crate::graph::{Adjacency, Edge};
use crate::grid::{Grid, GridBuilder};
use crate::vertex::{Vertex, VertexId};

/// A graph whose vertices sit on a grid and whose edges join grid neighbors.
#[derive(Debug, Clone)]
pub struct SquareLatticeGraph<T> {
    grid: Grid<T>,
    adjacency: Adjacency,
    diagonals: bool,
}

impl<T> SquareLatticeGraph<T> {
    pub fn builder() -> LatticeBuilder<T> {
        LatticeBuilder::new()
    }

    /// Join every vertex of `grid` to its 4 (or 8) neighbors with undirected
    /// edges of weight 1.
    pub fn from_grid(grid: Grid<T>, diagonals: bool) -> Self {
        let mut adjacency = Adjacency::with_vertices(grid.len());
        for v in grid.iter() {
            for n in grid.neighbors(v.id(), diagonals) {
                adjacency.insert(Edge::undirected(v.id(), n.id()));
            }
        }
        debug!(
            "built lattice {}x{} with {} edges (diagonals: {diagonals})",
            grid.width(),
            grid.height(),
            adjacency.edge_count()
        );
        Self {
            grid,
            adjacency,
            diagonals,
        }
    }

    /// Join every ordered neighbor pair `(a, b)` of `grid` with a directed
    /// edge weighted `weight(a, b)`.
    pub fn from_grid_weighted<F>(
        grid: Grid<T>,
        diagonals: bool,
        mut weight: F,
    ) -> Result<Self, BuildError>
    where
        F: FnMut(&Vertex<T>, &Vertex<T>) -> i32,
    {
        let mut adjacency = Adjacency::with_vertices(grid.len());
        for v in grid.iter() {
            for n in grid.neighbors(v.id(), diagonals) {
                let w = weight(v, n);
                if w < 0 {
                    return Err(BuildError::NegativeWeight { weight: w });
                }
                adjacency.insert(Edge::directed(v.id(), n.id()).with_weight(w));
            }
        }
        debug!(
            "built weighted lattice {}x{} with {} edges (diagonals: {diagonals})",
            grid.width(),
            grid.height(),
            adjacency.edge_count()
        );
        Ok(Self {
            grid,
            adjacency,
            diagonals,
        })
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Whether diagonal neighbors are joined.
    #[inline]
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    // -----------------------------------------------------------------------
    // Graph contract
    // -----------------------------------------------------------------------

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.grid.contains(id)
    }

    /// The vertex with identity `id`.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.grid.get(id)
    }

    /// The top-left vertex.
    pub fn root(&self) -> Option<&Vertex<T>> {
        self.grid.root()
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.adjacency.edges()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.edge(a, b).is_some()
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.adjacency.edge(from, to)
    }

    /// Grid neighbors of `v` in canonical direction order.
    pub fn neighbors(&self, v: VertexId) -> Vec<&Vertex<T>> {
        self.grid.neighbors(v, self.diagonals)
    }

    pub fn neighbor_ids(&self, v: VertexId) -> Vec<VertexId> {
        self.neighbors(v).into_iter().map(Vertex::id).collect()
    }

    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<i32> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.adjacency.weight(from, to)
    }

    pub fn find(&self, pred: impl FnMut(&T) -> bool) -> Option<&Vertex<T>> {
        self.grid.find(pred)
    }

    // -----------------------------------------------------------------------
    // Grid contract
    // -----------------------------------------------------------------------

    pub fn coordinates(&self, id: VertexId) -> Option<Point> {
        self.grid.coordinates(id)
    }

    /// The vertex at `p`.
    pub fn at(&self, p: Point) -> Option<&Vertex<T>> {
        self.grid.vertex(p)
    }

    pub fn direction(&self, source: VertexId, destination: VertexId) -> Direction {
        self.grid.direction(source, destination)
    }

    pub fn distance(&self, a: VertexId, b: VertexId) -> i32 {
        self.grid.distance(a, b)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Vertex<T>]> + '_ {
        self.grid.rows()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = Vec<&Vertex<T>>> + '_ {
        self.grid.columns()
    }
}

impl<T: fmt::Display> fmt::Display for SquareLatticeGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

// ---------------------------------------------------------------------------
// LatticeBuilder
// ---------------------------------------------------------------------------

/// Accumulates grid rows, then generates the lattice edges on build.
#[derive(Debug)]
pub struct LatticeBuilder<T> {
    grid: GridBuilder<T>,
    diagonals: bool,
}

impl<T> Default for LatticeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatticeBuilder<T> {
    pub fn new() -> Self {
        Self {
            grid: GridBuilder::new(),
            diagonals: false,
        }
    }

    /// Also join diagonal neighbors (8-connectivity). Consumes the builder
    /// so it chains straight into [`build`](Self::build).
    pub fn diagonals(mut self, yes: bool) -> Self {
        self.diagonals = yes;
        self
    }

    /// Append a row of values. See [`GridBuilder::row`].
    pub fn row<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<&mut Self, BuildError> {
        self.grid.row(values)?;
        Ok(self)
    }

    /// See [`GridBuilder::swap_rows`].
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<&mut Self, BuildError> {
        self.grid.swap_rows(a, b)?;
        Ok(self)
    }

    /// Build with undirected weight-1 edges.
    pub fn build(self) -> SquareLatticeGraph<T> {
        SquareLatticeGraph::from_grid(self.grid.build(), self.diagonals)
    }

    /// Build with one directed edge per ordered neighbor pair, weighted by
    /// `weight(from, to)`.
    pub fn build_weighted<F>(self, weight: F) -> Result<SquareLatticeGraph<T>, BuildError>
    where
        F: FnMut(&Vertex<T>, &Vertex<T>) -> i32,
    {
        SquareLatticeGraph::from_grid_weighted(self.grid.build(), self.diagonals, weight)
    }
}
