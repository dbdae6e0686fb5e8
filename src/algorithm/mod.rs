//! Graph algorithms
//!
//! Each algorithm is a free function over [QueryableGraph](crate::graph::QueryableGraph),
//! and also a method of an extension trait implemented for every queryable graph.
mod traversal;
pub use self::traversal::*;
mod connectivity;
pub use self::connectivity::*;
mod union_find;
pub use self::union_find::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod shortest_path;
pub use self::shortest_path::*;

#[cfg(test)]
pub use self::tests::*;
