//! Connected-component labelling.

use gridgraph_core::VertexId;

use crate::DepthFirst;
use crate::traits::Pather;

impl<P: Pather> DepthFirst<'_, P> {
    /// Partition every vertex into connected components.
    ///
    /// Components are ordered by their lowest vertex index; vertices within a
    /// component are listed in discovery order.
    pub fn components(&mut self) -> Vec<Vec<VertexId>> {
        let pather = self.pather;
        let len = pather.vertex_count();
        self.cache.reset(len);

        let mut components = Vec::new();
        let mut nbuf = std::mem::take(&mut self.cache.nbuf);

        for start in (0..len).filter_map(|i| pather.vertex_at(i)) {
            if self.cache.seen(start) {
                continue;
            }

            // Iterative flood fill from `start`.
            let label = components.len() as i64;
            let mut members = vec![start];
            self.stack.clear();
            self.stack.push(start);
            self.cache.discover(start, label, None);

            while let Some(cv) = self.stack.pop() {
                nbuf.clear();
                pather.neighbors(cv, &mut nbuf);

                for &nv in nbuf.iter() {
                    if pather.contains(nv) && !self.cache.seen(nv) {
                        self.cache.discover(nv, label, Some(cv));
                        self.stack.push(nv);
                        members.push(nv);
                    }
                }
            }

            components.push(members);
        }

        self.cache.nbuf = nbuf;
        components
    }

    /// The connected component containing `v`, in discovery order. Empty if
    /// `v` is foreign.
    pub fn component_of(&mut self, v: VertexId) -> Vec<VertexId> {
        let mut result = Vec::new();
        if !self.pather.contains(v) {
            return result;
        }
        self.cache.reset(self.pather.vertex_count());

        let mut nbuf = std::mem::take(&mut self.cache.nbuf);

        self.stack.clear();
        self.stack.push(v);
        self.cache.discover(v, 0, None);
        result.push(v);

        while let Some(cv) = self.stack.pop() {
            nbuf.clear();
            self.pather.neighbors(cv, &mut nbuf);

            for &nv in nbuf.iter() {
                if self.pather.contains(nv) && !self.cache.seen(nv) {
                    self.cache.discover(nv, 0, Some(cv));
                    self.stack.push(nv);
                    result.push(nv);
                }
            }
        }

        self.cache.nbuf = nbuf;
        result
    }
}
