use gridgraph_core::VertexId;
use log::trace;

use crate::search::{PathNode, SearchCache};
use crate::traits::Pather;

/// Depth-first traversal.
///
/// The frontier is a stack. Neighbors are pushed in reverse so the first one
/// the pather yields is expanded first. A vertex is marked discovered when it
/// is pushed and is never pushed again, so every predecessor chain is a
/// simple path. Paths are *a* path, not necessarily the shortest.
///
/// Because marking happens on push, a vertex keeps the first parent that
/// pushed it even if a deeper branch reaches it before it is popped. The
/// visit order is therefore stack discovery order, which can differ from a
/// recursive pre-order.
pub struct DepthFirst<'a, P> {
    pub(crate) pather: &'a P,
    start: Option<VertexId>,
    pub(crate) cache: SearchCache,
    pub(crate) stack: Vec<VertexId>,
}

impl<'a, P: Pather> DepthFirst<'a, P> {
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
            stack: Vec::new(),
        }
    }

    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// A path from the start vertex to `destination`, both inclusive. Empty
    /// if unreachable.
    pub fn path(&mut self, destination: VertexId) -> Vec<VertexId> {
        match self.start {
            Some(start) => self.path_between(start, destination),
            None => Vec::new(),
        }
    }

    /// A path from `start` to `destination`.
    pub fn path_between(&mut self, start: VertexId, destination: VertexId) -> Vec<VertexId> {
        if !self.pather.contains(start) || !self.pather.contains(destination) {
            return Vec::new();
        }
        if self.search(start, Some(destination)) {
            self.cache.unwind(destination)
        } else {
            Vec::new()
        }
    }

    /// Every vertex reachable from the start, in stack discovery order.
    pub fn reachable(&mut self) -> Vec<VertexId> {
        match self.start {
            Some(start) if self.pather.contains(start) => {
                self.search(start, None);
                self.cache.results.iter().map(|n| n.vertex).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Vertices popped by the last search, in stack discovery order, with
    /// their depth in the discovery tree.
    pub fn visited(&self) -> &[PathNode] {
        &self.cache.results
    }

    /// Returns `true` once `target` is popped.
    fn search(&mut self, start: VertexId, target: Option<VertexId>) -> bool {
        trace!("dfs from {start} to {target:?}");
        self.cache.reset(self.pather.vertex_count());
        self.stack.clear();

        self.cache.discover(start, 0, None);
        self.stack.push(start);

        let mut nbuf = std::mem::take(&mut self.cache.nbuf);
        let mut found = false;

        while let Some(cv) = self.stack.pop() {
            self.cache.close(cv);
            if target == Some(cv) {
                found = true;
                break;
            }
            let depth = self.cache.node(cv).cost;

            nbuf.clear();
            self.pather.neighbors(cv, &mut nbuf);

            for &nv in nbuf.iter().rev() {
                if !self.pather.contains(nv) || self.cache.seen(nv) {
                    continue;
                }
                self.cache.discover(nv, depth + 1, Some(cv));
                self.stack.push(nv);
            }
        }

        self.cache.nbuf = nbuf;
        trace!("dfs visited {} vertices (found: {found})", self.cache.results.len());
        found
    }
}
