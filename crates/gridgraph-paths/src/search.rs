use gridgraph_core::VertexId;

/// A vertex with an associated cost, returned from map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub vertex: VertexId,
    pub cost: i64,
}

/// Sentinel value meaning "unreachable" in distance queries.
pub const UNREACHABLE: i64 = i64::MAX;

// ---------------------------------------------------------------------------
// Internal per-vertex bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub(crate) struct Node {
    pub(crate) cost: i64,
    pub(crate) parent: Option<VertexId>,
    pub(crate) generation: u32,
    /// Discovered but not yet finalized.
    pub(crate) open: bool,
}

/// Priority-queue entry, popped lowest cost first and, among equal costs,
/// lowest vertex index first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) vertex: VertexId,
    pub(crate) cost: i64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.index().cmp(&self.vertex.index()))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchCache
// ---------------------------------------------------------------------------

/// Node array reused across searches of one traversal object.
///
/// Bumping the generation invalidates every node at once, so a new search
/// costs nothing beyond what it touches.
#[derive(Default)]
pub(crate) struct SearchCache {
    nodes: Vec<Node>,
    generation: u32,
    pub(crate) results: Vec<PathNode>,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<VertexId>,
}

impl SearchCache {
    /// Start a new search over `len` vertices.
    pub(crate) fn reset(&mut self, len: usize) {
        self.generation = self.generation.wrapping_add(1);
        if self.nodes.len() != len || self.generation == 0 {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 1;
        }
        self.results.clear();
    }

    /// Whether `v` has been touched by the current search.
    #[inline]
    pub(crate) fn seen(&self, v: VertexId) -> bool {
        self.nodes[v.index()].generation == self.generation
    }

    /// Whether `v` has been finalized by the current search.
    #[inline]
    pub(crate) fn closed(&self, v: VertexId) -> bool {
        self.seen(v) && !self.nodes[v.index()].open
    }

    #[inline]
    pub(crate) fn node(&self, v: VertexId) -> &Node {
        &self.nodes[v.index()]
    }

    /// Record `v` as discovered with `cost`, reached from `parent`.
    pub(crate) fn discover(&mut self, v: VertexId, cost: i64, parent: Option<VertexId>) {
        let n = &mut self.nodes[v.index()];
        n.generation = self.generation;
        n.cost = cost;
        n.parent = parent;
        n.open = true;
    }

    /// Mark `v` as finalized and append it to the results.
    pub(crate) fn close(&mut self, v: VertexId) {
        let n = &mut self.nodes[v.index()];
        n.open = false;
        let cost = n.cost;
        self.results.push(PathNode { vertex: v, cost });
    }

    /// Cost recorded for `v` by the current search, or [`UNREACHABLE`].
    pub(crate) fn cost_at(&self, v: VertexId) -> i64 {
        if v.index() < self.nodes.len() && self.seen(v) {
            self.nodes[v.index()].cost
        } else {
            UNREACHABLE
        }
    }

    /// Follow parent links from `goal` back to the start.
    pub(crate) fn unwind(&self, goal: VertexId) -> Vec<VertexId> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(v) = cur {
            path.push(v);
            cur = self.nodes[v.index()].parent;
        }
        path.reverse();
        path
    }
}
