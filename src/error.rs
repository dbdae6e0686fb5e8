use crate::graph::Weight;
use std::fmt::Debug;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Violations of graph preconditions.
///
/// Vertices are carried by their `Debug` rendering,
/// so that the error type does not depend on the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(String, String),

    #[error("invalid weight {0}, weights must be non-negative")]
    InvalidWeight(Weight),

    #[error("vertex {vertex} has {degree} incident edges and cannot be removed")]
    VertexNotRemovable { vertex: String, degree: usize },

    #[error("no edge between {0} and {1}")]
    EdgeNotFound(String, String),

    #[error("all {capacity} vertex slots are exhausted")]
    CapacityExhausted { capacity: usize },

    #[error("a matrix of {capacity} by {capacity} cells does not fit in memory")]
    CapacityTooLarge { capacity: usize },

    #[error("self loop on {0}")]
    SelfLoop(String),

    #[error("empty graph")]
    EmptyGraph,

    #[error("graph is not connected, it has {components} components")]
    NotConnected { components: usize },
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: Debug>(v: &V) -> Self {
        Self::VertexNotFound(format!("{:?}", v))
    }

    pub(crate) fn duplicate_vertex<V: Debug>(v: &V) -> Self {
        Self::DuplicateVertex(format!("{:?}", v))
    }

    pub(crate) fn duplicate_edge<V: Debug>(u: &V, v: &V) -> Self {
        Self::DuplicateEdge(format!("{:?}", u), format!("{:?}", v))
    }

    pub(crate) fn vertex_not_removable<V: Debug>(v: &V, degree: usize) -> Self {
        Self::VertexNotRemovable {
            vertex: format!("{:?}", v),
            degree,
        }
    }

    pub(crate) fn edge_not_found<V: Debug>(u: &V, v: &V) -> Self {
        Self::EdgeNotFound(format!("{:?}", u), format!("{:?}", v))
    }

    pub(crate) fn self_loop<V: Debug>(v: &V) -> Self {
        Self::SelfLoop(format!("{:?}", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::vertex_not_found(&15).to_string(),
            "vertex not found: 15"
        );
        assert_eq!(
            GraphError::vertex_not_removable(&"a", 2).to_string(),
            "vertex \"a\" has 2 incident edges and cannot be removed"
        );
        assert_eq!(
            GraphError::CapacityExhausted { capacity: 4 }.to_string(),
            "all 4 vertex slots are exhausted"
        );
    }
}
