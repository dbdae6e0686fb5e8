//! Undirected weighted graphs and their algorithms.
//!
//! # Graphs
//!
//! A graph is anything implementing the capability traits in [graph]:
//! [graph::QueryableGraph] to inspect it, [graph::GrowableGraph] to add vertices and edges,
//! [graph::EdgeShrinkableGraph] and [graph::VertexShrinkableGraph] to remove them.
//! Vertices are user-supplied identities, such as integers or strings.
//! Edges are undirected and carry a non-negative weight.
//!
//! Two representations are provided.
//!
//! *   [graph::MatrixGraph] keeps a fixed-capacity adjacency matrix.
//!     Adjacency tests are constant-time, but slots of removed vertices are never reclaimed.
//! *   [graph::EdgeListGraph] keeps a flat list of edges.
//!     It grows without bound, but every adjacency query scans all edges.
//!
//! # Algorithms
//!
//! Everything in [algorithm] is written against [graph::QueryableGraph] only,
//! so it works on either representation, and on any other one implementing the trait.
//!
//! ```
//! use ungraph::{algorithm::*, graph::*};
//!
//! let mut g = EdgeListGraph::new();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v).unwrap();
//! }
//! g.add_edge(&"a", &"b", 3).unwrap();
//! g.add_edge(&"b", &"c", 4).unwrap();
//! g.add_edge(&"a", &"c", 9).unwrap();
//!
//! let paths = g.shortest_paths(&"a").unwrap();
//! assert_eq!(paths.distance(&"c"), Some(Distance::Finite(7)));
//! assert_eq!(g.minimum_spanning_tree().unwrap().total_weight(), 7);
//! ```

pub mod algorithm;
mod error;
pub mod graph;

pub use self::error::*;
