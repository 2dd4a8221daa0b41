//! Traversals over the containers of `gridgraph-core`.
//!
//! - **Breadth-first** search for fewest-edge paths and level-order maps
//!   ([`BreadthFirst`])
//! - **Depth-first** search for simple paths and reachability
//!   ([`DepthFirst`]), plus connected components
//!   ([`DepthFirst::components`])
//! - **Dijkstra** cheapest paths and cost maps over non-negative weights
//!   ([`Dijkstra`])
//!
//! Each traversal object borrows its structure, remembers a start vertex and
//! reuses its internal buffers across queries. Queries involving vertices of
//! another structure return empty results rather than failing.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//!
//! ```
//! use gridgraph_core::GraphBuilder;
//! use gridgraph_paths::{Dijkstra, path_cost};
//!
//! let mut b = GraphBuilder::new();
//! let a = b.vertex("a");
//! let m = b.vertex("m");
//! let z = b.vertex("z");
//! b.weighted_edge(a, z, 10).unwrap();
//! b.weighted_edge(a, m, 3).unwrap();
//! b.weighted_edge(m, z, 4).unwrap();
//! let g = b.build();
//!
//! let mut dj = Dijkstra::new(&g);
//! let path = dj.path(z);
//! assert_eq!(path, [a, m, z]);
//! assert_eq!(path_cost(&g, &path), 7);
//! ```

mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod search;
mod traits;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::{Dijkstra, path_cost};
pub use search::{PathNode, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
