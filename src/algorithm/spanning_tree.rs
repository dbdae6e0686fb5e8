use super::DisjointSets;
use crate::graph::*;
use crate::{GraphError, Result};
use tracing::debug;

pub trait SpanningTrees
where
    Self: QueryableGraph + Sized,
{
    /// See [minimum_spanning_tree].
    fn minimum_spanning_tree(&self) -> Result<SpanningTree<Self::Vertex>> {
        minimum_spanning_tree(self)
    }

    /// See [minimum_spanning_forest].
    fn minimum_spanning_forest(&self) -> SpanningTree<Self::Vertex> {
        minimum_spanning_forest(self)
    }
}

impl<G: QueryableGraph> SpanningTrees for G {}

/// Edges chosen by Kruskal's algorithm, in the order they were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<V>
where
    V: Vertex,
{
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> SpanningTree<V> {
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of edge weights, saturating at [Weight::MAX] like path distances do.
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .map(|e| e.weight())
            .fold(0, Weight::saturating_add)
    }
}

/// A minimum spanning tree of a connected graph.
///
/// Fails with [GraphError::NotConnected] if the graph is not connected.
/// Empty and single-vertex graphs have empty spanning trees.
pub fn minimum_spanning_tree<G>(graph: &G) -> Result<SpanningTree<G::Vertex>>
where
    G: QueryableGraph,
{
    let forest = minimum_spanning_forest(graph);
    let components = graph.vertex_size() - forest.len();
    if components > 1 {
        return Err(GraphError::NotConnected { components });
    }
    Ok(forest)
}

/// A minimum spanning tree for each connected component, all together.
///
/// Edges are considered in non-decreasing weight.
/// Ties keep the order of [QueryableGraph::edges], so results are deterministic.
pub fn minimum_spanning_forest<G>(graph: &G) -> SpanningTree<G::Vertex>
where
    G: QueryableGraph,
{
    let mut candidates: Vec<_> = graph.edges().collect();
    candidates.sort_by_key(|e| e.weight());
    let mut sets = DisjointSets::new(graph.vertices());
    let target = graph.vertex_size().saturating_sub(1);
    let mut edges = Vec::with_capacity(target);
    for e in candidates {
        if edges.len() == target {
            break;
        }
        let (a, b) = e.endpoints();
        if sets.union(&a, &b) {
            edges.push(e.clone());
        }
    }
    let res = SpanningTree { edges };
    debug!(
        edges = res.len(),
        total_weight = res.total_weight(),
        "kruskal"
    );
    res
}
