//! Traits and implementations of undirected weighted graphs.
//!
//! ```plain
//! Queryable <--- Growable
//!     ^
//!     |
//! EdgeShrinkable <--- VertexShrinkable
//! ```
//!
//! [Graph] is the union of all of them.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod adjacency_matrix;
pub use self::adjacency_matrix::*;
mod edge_list;
pub use self::edge_list::*;

#[cfg(test)]
pub use self::tests::*;
