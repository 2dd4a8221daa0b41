use std::collections::VecDeque;

use gridgraph_core::VertexId;
use log::trace;

use crate::search::{PathNode, SearchCache};
use crate::traits::Pather;

/// Breadth-first traversal.
///
/// Neighbors are explored in the order the pather yields them, and each
/// vertex keeps the predecessor that discovered it first, so returned paths
/// have the fewest possible edges.
pub struct BreadthFirst<'a, P> {
    pather: &'a P,
    start: Option<VertexId>,
    cache: SearchCache,
    queue: VecDeque<VertexId>,
}

impl<'a, P: Pather> BreadthFirst<'a, P> {
    /// Traverse from the pather's root.
    pub fn new(pather: &'a P) -> Self {
        Self::with_start(pather, pather.root())
    }

    /// Traverse from `start`. A `None` or foreign start yields empty paths.
    pub fn with_start(pather: &'a P, start: impl Into<Option<VertexId>>) -> Self {
        Self {
            pather,
            start: start.into(),
            cache: SearchCache::default(),
            queue: VecDeque::new(),
        }
    }

    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Shortest (fewest edges) path from the start vertex to `destination`,
    /// both inclusive. Empty if unreachable.
    pub fn path(&mut self, destination: VertexId) -> Vec<VertexId> {
        match self.start {
            Some(start) => self.path_between(start, destination),
            None => Vec::new(),
        }
    }

    /// Shortest (fewest edges) path from `start` to `destination`.
    pub fn path_between(&mut self, start: VertexId, destination: VertexId) -> Vec<VertexId> {
        if !self.pather.contains(start) || !self.pather.contains(destination) {
            return Vec::new();
        }
        if self.search(start, Some(destination), crate::UNREACHABLE) {
            self.cache.unwind(destination)
        } else {
            Vec::new()
        }
    }

    /// Visit everything within `max_dist` edges of the start vertex.
    ///
    /// Returns the vertices in visitation order with their edge counts. A
    /// negative limit yields nothing.
    pub fn map(&mut self, max_dist: i64) -> &[PathNode] {
        match self.start {
            Some(start) if max_dist >= 0 && self.pather.contains(start) => {
                self.search(start, None, max_dist);
            }
            _ => self.cache.reset(self.pather.vertex_count()),
        }
        &self.cache.results
    }

    /// Edge count from the start to `v` found by the last search, or
    /// [`UNREACHABLE`](crate::UNREACHABLE).
    pub fn distance_at(&self, v: VertexId) -> i64 {
        if !self.pather.contains(v) {
            return crate::UNREACHABLE;
        }
        self.cache.cost_at(v)
    }

    /// Returns `true` once `target` is discovered.
    fn search(&mut self, start: VertexId, target: Option<VertexId>, max_dist: i64) -> bool {
        trace!("bfs from {start} to {target:?}");
        self.cache.reset(self.pather.vertex_count());
        self.queue.clear();

        self.cache.discover(start, 0, None);
        self.cache.close(start);
        if target == Some(start) {
            return true;
        }
        self.queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.cache.nbuf);
        let mut found = false;

        'search: while let Some(cv) = self.queue.pop_front() {
            let current_dist = self.cache.node(cv).cost;

            nbuf.clear();
            self.pather.neighbors(cv, &mut nbuf);

            for &nv in nbuf.iter() {
                if !self.pather.contains(nv) || self.cache.seen(nv) {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.cache.discover(nv, nd, Some(cv));
                self.cache.close(nv);
                if target == Some(nv) {
                    found = true;
                    break 'search;
                }
                self.queue.push_back(nv);
            }
        }

        self.cache.nbuf = nbuf;
        trace!("bfs visited {} vertices (found: {found})", self.cache.results.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNREACHABLE;
    use gridgraph_core::{Graph, GraphBuilder, parse_grid, parse_lattice};

    /// 1-2, 1-4, 2-3, 2-4, 3-5, 4-5, 5-6
    fn small() -> (Graph<u32>, Vec<VertexId>) {
        let mut b = GraphBuilder::new();
        let ids: Vec<VertexId> = (1..=6).map(|n| b.vertex(n)).collect();
        for (x, y) in [(1, 2), (1, 4), (2, 3), (2, 4), (3, 5), (4, 5), (5, 6)] {
            b.edge(ids[x - 1], ids[y - 1]).unwrap();
        }
        (b.build(), ids)
    }

    fn values(g: &Graph<u32>, path: &[VertexId]) -> Vec<u32> {
        path.iter().map(|&id| *g.vertex(id).unwrap().value()).collect()
    }

    #[test]
    fn fewest_edges() {
        let (g, ids) = small();
        let mut bfs = BreadthFirst::new(&g);
        let path = bfs.path(ids[5]);
        assert_eq!(path.len(), 4);
        assert_eq!(values(&g, &path), [1, 4, 5, 6]);
        assert_eq!(bfs.distance_at(ids[5]), 3);
    }

    #[test]
    fn path_to_self() {
        let (g, ids) = small();
        let mut bfs = BreadthFirst::new(&g);
        assert_eq!(bfs.path(ids[0]), [ids[0]]);
    }

    #[test]
    fn explicit_start() {
        let (g, ids) = small();
        let mut bfs = BreadthFirst::with_start(&g, ids[2]);
        assert_eq!(bfs.start(), Some(ids[2]));
        assert_eq!(values(&g, &bfs.path(ids[0])), [3, 2, 1]);
        assert_eq!(values(&g, &bfs.path_between(ids[5], ids[1])), [6, 5, 3, 2]);
    }

    #[test]
    fn reused_across_queries() {
        let (g, ids) = small();
        let mut bfs = BreadthFirst::new(&g);
        assert_eq!(bfs.path(ids[5]).len(), 4);
        assert_eq!(bfs.path(ids[2]).len(), 3);
        assert_eq!(bfs.path(ids[5]).len(), 4);
    }

    #[test]
    fn unreachable_and_foreign() {
        let mut b = GraphBuilder::new();
        let x = b.vertex(0);
        let y = b.vertex(1);
        let island = b.vertex(2);
        b.edge(x, y).unwrap();
        let g = b.build();
        let (other, other_ids) = small();

        let mut bfs = BreadthFirst::new(&g);
        assert!(bfs.path(island).is_empty());
        assert_eq!(bfs.distance_at(island), UNREACHABLE);
        assert!(bfs.path(other_ids[1]).is_empty());
        assert!(bfs.path_between(other_ids[0], y).is_empty());

        let mut foreign_start = BreadthFirst::with_start(&other, y);
        assert!(foreign_start.path(other_ids[1]).is_empty());
        assert!(foreign_start.map(10).is_empty());
    }

    #[test]
    fn empty_graph() {
        let g: Graph<u8> = GraphBuilder::new().build();
        let (_, foreign) = small();
        let mut bfs = BreadthFirst::new(&g);
        assert_eq!(bfs.start(), None);
        assert!(bfs.path(foreign[0]).is_empty());
        assert!(bfs.map(5).is_empty());
    }

    #[test]
    fn map_is_level_order() {
        let (g, ids) = small();
        let mut bfs = BreadthFirst::new(&g);
        let costs: Vec<(u32, i64)> = bfs
            .map(UNREACHABLE)
            .iter()
            .map(|n| (*g.vertex(n.vertex).unwrap().value(), n.cost))
            .collect();
        assert_eq!(costs, [(1, 0), (2, 1), (4, 1), (3, 2), (5, 2), (6, 3)]);
        assert_eq!(bfs.distance_at(ids[4]), 2);

        let near: Vec<i64> = bfs.map(1).iter().map(|n| n.cost).collect();
        assert_eq!(near, [0, 1, 1]);
        assert_eq!(bfs.map(0).len(), 1);
        assert!(bfs.map(-1).is_empty());
        assert_eq!(bfs.distance_at(ids[0]), UNREACHABLE);
    }

    #[test]
    fn grid_walls_are_just_values() {
        // On a plain grid every cell is passable; the path hugs the top row.
        let g = parse_grid("S.#\n..#\n..E", |c| c).unwrap();
        let end = g.find(|c| *c == 'E').unwrap().id();
        let mut bfs = BreadthFirst::new(&g);
        assert_eq!(bfs.path(end).len(), 5);
    }

    #[test]
    fn lattice_diagonals_shorten_paths() {
        let text = "abc\ndef\nghi";
        let four = parse_lattice(text, false, |c| c).unwrap();
        let eight = parse_lattice(text, true, |c| c).unwrap();
        let i4 = four.find(|c| *c == 'i').unwrap().id();
        let i8 = eight.find(|c| *c == 'i').unwrap().id();
        assert_eq!(BreadthFirst::new(&four).path(i4).len(), 5);
        assert_eq!(BreadthFirst::new(&eight).path(i8).len(), 3);
    }
}
