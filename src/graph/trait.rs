use crate::graph::*;
use crate::Result;

/// Interfaces to inspect a graph.
///
/// Every algorithm in this crate is written against this trait only.
pub trait QueryableGraph {
    type Vertex: Vertex;

    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in a representation-specific order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    /// The copy of `v` owned by the graph, if `v` is in the graph.
    fn find_vertex(&self, v: &Self::Vertex) -> Option<&Self::Vertex>;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.find_vertex(v).is_some()
    }

    /// Total number of edges.
    fn edge_size(&self) -> usize;
    /// Iterates over edges, each exactly once.
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<Self::Vertex>> + '_>;
    /// Iterates over edges touching `v`.
    fn incident_edges(
        &self,
        v: &Self::Vertex,
    ) -> Result<Box<dyn Iterator<Item = &Edge<Self::Vertex>> + '_>>;
    /// The edge between `u` and `v`, if there is one.
    fn find_edge(&self, u: &Self::Vertex, v: &Self::Vertex)
        -> Result<Option<&Edge<Self::Vertex>>>;

    /// Iterates over vertices adjacent to `v`, in the order of [QueryableGraph::incident_edges].
    fn neighbors(&self, v: &Self::Vertex) -> Result<Box<dyn Iterator<Item = &Self::Vertex> + '_>> {
        let center = v.clone();
        let it = self
            .incident_edges(v)?
            .filter_map(move |e| e.opposite(&center));
        Ok(Box::new(it))
    }

    fn degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.incident_edges(v)?.count())
    }

    fn are_adjacent(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool> {
        Ok(self.find_edge(u, v)?.is_some())
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Interfaces to add vertices and edges.
pub trait GrowableGraph: QueryableGraph {
    /// Registers a vertex which must not be in the graph yet.
    fn add_vertex(&mut self, v: Self::Vertex) -> Result<()>;
    /// Adds an edge between two distinct vertices of the graph and returns it.
    ///
    /// Preconditions are checked in this order:
    /// both endpoints are present, they are distinct,
    /// the weight is non-negative and they are not adjacent yet.
    fn add_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
        weight: Weight,
    ) -> Result<Edge<Self::Vertex>>;

    fn add_unweighted_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
    ) -> Result<Edge<Self::Vertex>> {
        self.add_edge(u, v, 0)
    }
}

/// Interfaces to remove edges.
pub trait EdgeShrinkableGraph: QueryableGraph {
    /// Removes the edge between `u` and `v` and returns it.
    ///
    /// Removing an edge will not remove its endpoints.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<Edge<Self::Vertex>>;
}

/// Interfaces to remove vertices.
pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes an isolated vertex and returns it.
    ///
    /// Incident edges are never removed implicitly;
    /// a vertex with any of them is rejected.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<Self::Vertex>;
}

/// Graphs supporting every operation.
pub trait Graph: GrowableGraph + VertexShrinkableGraph {}

impl<G> Graph for G where G: GrowableGraph + VertexShrinkableGraph {}
