use std::collections::BinaryHeap;

use gridgraph_core::VertexId;
use log::trace;

use crate::search::{NodeRef, PathNode, SearchCache, UNREACHABLE};
use crate::traits::WeightedPather;

/// Shortest paths over non-negative edge weights.
///
/// The unprocessed vertex with the lowest tentative cost is finalized next;
/// ties go to the lowest vertex index. A path search stops as soon as its
/// destination is finalized.
pub struct Dijkstra<'a, P> {
    pather: &'a P,
    start: Option<VertexId>,
    cache: SearchCache,
    open: BinaryHeap<NodeRef>,
}

impl<'a, P: WeightedPather> Dijkstra<'a, P> {
    /// Search from the pather's root.
    pub fn new(pather: &'a P) -> Self {
        Self::with_start(pather, pather.root())
    }

    /// Search from `start`. A `None` or foreign start yields empty paths.
    pub fn with_start(pather: &'a P, start: impl Into<Option<VertexId>>) -> Self {
        Self {
            pather,
            start: start.into(),
            cache: SearchCache::default(),
            open: BinaryHeap::new(),
        }
    }

    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Cheapest path from the start vertex to `destination`, both inclusive.
    /// Empty if unreachable.
    pub fn path(&mut self, destination: VertexId) -> Vec<VertexId> {
        match self.start {
            Some(start) => self.path_between(start, destination),
            None => Vec::new(),
        }
    }

    /// Cheapest path from `start` to `destination`.
    pub fn path_between(&mut self, start: VertexId, destination: VertexId) -> Vec<VertexId> {
        if !self.pather.contains(start) || !self.pather.contains(destination) {
            return Vec::new();
        }
        if self.search(start, Some(destination), UNREACHABLE) {
            self.cache.unwind(destination)
        } else {
            Vec::new()
        }
    }

    /// Finalize every vertex whose cost from the start is at most
    /// `max_cost`.
    ///
    /// Returns the vertices in the order they were finalized, with their
    /// costs. This is the destination-free mode of the search; it yields no
    /// path. A negative limit yields nothing.
    pub fn map(&mut self, max_cost: i64) -> &[PathNode] {
        match self.start {
            Some(start) if max_cost >= 0 && self.pather.contains(start) => {
                self.search(start, None, max_cost);
            }
            _ => self.cache.reset(self.pather.vertex_count()),
        }
        &self.cache.results
    }

    /// Cost from the start to `v` recorded by the last search, or
    /// [`UNREACHABLE`]. Only vertices the search finalized carry their
    /// final cost.
    pub fn cost_at(&self, v: VertexId) -> i64 {
        if !self.pather.contains(v) {
            return UNREACHABLE;
        }
        self.cache.cost_at(v)
    }

    /// Returns `true` once `target` is finalized.
    fn search(&mut self, start: VertexId, target: Option<VertexId>, max_cost: i64) -> bool {
        trace!("dijkstra from {start} to {target:?} (max cost {max_cost})");
        self.cache.reset(self.pather.vertex_count());
        self.open.clear();

        self.cache.discover(start, 0, None);
        self.open.push(NodeRef {
            vertex: start,
            cost: 0,
        });

        let mut nbuf = std::mem::take(&mut self.cache.nbuf);
        let mut found = false;

        while let Some(current) = self.open.pop() {
            let cv = current.vertex;

            // Skip stale entries.
            if !self.cache.node(cv).open || self.cache.node(cv).cost != current.cost {
                continue;
            }
            self.cache.close(cv);
            if target == Some(cv) {
                found = true;
                break;
            }
            let current_cost = current.cost;

            nbuf.clear();
            self.pather.neighbors(cv, &mut nbuf);

            for &nv in nbuf.iter() {
                if !self.pather.contains(nv) || self.cache.closed(nv) {
                    continue;
                }
                let tentative = current_cost.saturating_add(i64::from(self.pather.cost(cv, nv)));
                if tentative > max_cost {
                    continue;
                }
                if self.cache.seen(nv) && tentative >= self.cache.node(nv).cost {
                    continue;
                }
                self.cache.discover(nv, tentative, Some(cv));
                self.open.push(NodeRef {
                    vertex: nv,
                    cost: tentative,
                });
            }
        }

        self.cache.nbuf = nbuf;
        trace!(
            "dijkstra finalized {} vertices (found: {found})",
            self.cache.results.len()
        );
        found
    }
}

/// Sum of step costs along `path`. Zero for paths of fewer than two
/// vertices.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[VertexId]) -> i64 {
    path.windows(2)
        .map(|w| i64::from(pather.cost(w[0], w[1])))
        .fold(0, i64::saturating_add)
}
