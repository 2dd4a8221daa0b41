use gridgraph_core::{DEFAULT_WEIGHT, Graph, Grid, SquareLatticeGraph, Vertex, VertexId};

/// Minimal traversal interface: membership and neighbor enumeration.
pub trait Pather {
    /// Number of vertices. Vertex indices are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// The vertex with insertion index `index`.
    fn vertex_at(&self, index: usize) -> Option<VertexId>;

    /// Whether `v` belongs to this structure.
    fn contains(&self, v: VertexId) -> bool;

    /// Default start vertex for traversals.
    fn root(&self) -> Option<VertexId> {
        self.vertex_at(0)
    }

    /// Append neighbors of `v` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: VertexId, to: VertexId) -> i32;
}

// ---------------------------------------------------------------------------
// Grid: 4-connected, unit cost
// ---------------------------------------------------------------------------

impl<T> Pather for Grid<T> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_at(&self, index: usize) -> Option<VertexId> {
        self.iter().nth(index).map(Vertex::id)
    }

    fn contains(&self, v: VertexId) -> bool {
        Grid::contains(self, v)
    }

    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>) {
        buf.extend(Grid::neighbors(self, v, false).into_iter().map(Vertex::id));
    }
}

impl<T> WeightedPather for Grid<T> {
    fn cost(&self, _from: VertexId, _to: VertexId) -> i32 {
        DEFAULT_WEIGHT
    }
}

// ---------------------------------------------------------------------------
// Graph: incident edges in either direction
// ---------------------------------------------------------------------------

impl<T> Pather for Graph<T> {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn vertex_at(&self, index: usize) -> Option<VertexId> {
        self.vertices().nth(index).map(Vertex::id)
    }

    fn contains(&self, v: VertexId) -> bool {
        Graph::contains(self, v)
    }

    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>) {
        buf.extend(self.neighbor_ids(v));
    }
}

impl<T> WeightedPather for Graph<T> {
    fn cost(&self, from: VertexId, to: VertexId) -> i32 {
        self.weight(from, to).unwrap_or(DEFAULT_WEIGHT)
    }
}

// ---------------------------------------------------------------------------
// SquareLatticeGraph: generated edges
// ---------------------------------------------------------------------------

impl<T> Pather for SquareLatticeGraph<T> {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn vertex_at(&self, index: usize) -> Option<VertexId> {
        self.grid().iter().nth(index).map(Vertex::id)
    }

    fn contains(&self, v: VertexId) -> bool {
        SquareLatticeGraph::contains(self, v)
    }

    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>) {
        buf.extend(self.neighbor_ids(v));
    }
}

impl<T> WeightedPather for SquareLatticeGraph<T> {
    fn cost(&self, from: VertexId, to: VertexId) -> i32 {
        self.weight(from, to).unwrap_or(DEFAULT_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridgraph_core::{GraphBuilder, parse_grid, parse_lattice};

    fn collect<P: Pather>(p: &P, v: VertexId) -> Vec<VertexId> {
        let mut buf = Vec::new();
        p.neighbors(v, &mut buf);
        buf
    }

    #[test]
    fn grid_is_four_connected() {
        let g = parse_grid("123\n456\n789", |c| c).unwrap();
        let five = g.find(|c| *c == '5').unwrap().id();
        let vals: String = collect(&g, five)
            .into_iter()
            .filter_map(|id| g.get(id).map(|v| *v.value()))
            .collect();
        assert_eq!(vals, "4286");
        assert_eq!(Pather::root(&g), Some(g.iter().next().unwrap().id()));
        assert_eq!(g.vertex_count(), 9);
        assert_eq!(g.vertex_at(8).map(VertexId::index), Some(8));
        assert!(g.vertex_at(9).is_none());
        assert_eq!(g.cost(five, five), 1);
    }

    #[test]
    fn lattice_follows_diagonal_setting() {
        let g = parse_lattice("123\n456\n789", true, |c| c).unwrap();
        let five = g.find(|c| *c == '5').unwrap().id();
        assert_eq!(collect(&g, five).len(), 8);
        assert_eq!(Pather::root(&g), g.root().map(Vertex::id));
    }

    #[test]
    fn graph_cost_uses_weights() {
        let mut b = GraphBuilder::new();
        let x = b.vertex(());
        let y = b.vertex(());
        let z = b.vertex(());
        b.weighted_edge(x, y, 4).unwrap().directed_edge(y, z, 0).unwrap();
        let g = b.build();
        assert_eq!(g.cost(x, y), 4);
        assert_eq!(g.cost(z, y), 0);
        assert_eq!(g.cost(x, z), DEFAULT_WEIGHT);
        assert_eq!(collect(&g, y), [x, z]);
    }

    #[test]
    fn empty_structures_have_no_root() {
        let g: Graph<u8> = GraphBuilder::new().build();
        assert!(Pather::root(&g).is_none());
        let grid = parse_grid("", |c| c).unwrap();
        assert!(Pather::root(&grid).is_none());
    }
}
