//! **gridgraph-core**: coordinate grids, vertex/edge graphs and
//! square-lattice graphs.
//!
//! All containers are assembled once through a builder and are immutable
//! afterwards. Vertices live in an arena and are referred to by
//! [`VertexId`]; grids map coordinates to arena indices arithmetically and
//! graphs keep per-vertex sets of incident edge indices.
//!
//! ```
//! use gridgraph_core::{parse_grid, Direction};
//!
//! let grid = parse_grid("123\n456\n789", |c| c).unwrap();
//! let five = grid.find(|c| *c == '5').unwrap().id();
//! let up = grid.neighbor(five, Direction::Up).unwrap();
//! assert_eq!(*up.value(), '2');
//! assert_eq!(grid.direction(five, up.id()), Direction::Up);
//! ```

pub mod error;
pub mod geom;
pub mod graph;
pub mod grid;
pub mod lattice;
pub mod parse;
pub mod vertex;

pub use error::BuildError;
pub use geom::{Direction, Point, polygon_area};
pub use graph::{DEFAULT_WEIGHT, Edge, Graph, GraphBuilder};
pub use grid::{Grid, GridBuilder};
pub use lattice::{LatticeBuilder, SquareLatticeGraph};
pub use parse::{parse_grid, parse_grids, parse_lattice};
pub use vertex::{OwnerId, Vertex, VertexId};
