use super::{depth_first, DisjointSets};
use crate::graph::*;
use crate::{GraphError, Result};
use std::collections::BTreeMap;
use tracing::debug;

pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// See [is_connected].
    fn is_connected(&self) -> Result<bool> {
        is_connected(self)
    }

    /// See [has_path].
    fn has_path(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool> {
        has_path(self, u, v)
    }

    /// See [connected_components].
    fn connected_components(&self) -> Vec<Vec<Self::Vertex>> {
        connected_components(self)
    }
}

impl<G: QueryableGraph> Connectivity for G {}

/// Whether a traversal from any vertex reaches every vertex.
///
/// Connectivity is undefined for an empty graph, which is reported as [GraphError::EmptyGraph].
pub fn is_connected<G>(graph: &G) -> Result<bool>
where
    G: QueryableGraph,
{
    let start = graph.vertices().next().ok_or(GraphError::EmptyGraph)?;
    let reached = depth_first(graph, start)?.count();
    debug!(reached, vertices = graph.vertex_size(), "connectivity");
    Ok(reached == graph.vertex_size())
}

/// Whether `v` is reachable from `u`.
///
/// Both must be vertices of the graph.
pub fn has_path<G>(graph: &G, u: &G::Vertex, v: &G::Vertex) -> Result<bool>
where
    G: QueryableGraph,
{
    if !graph.contains_vertex(u) {
        return Err(GraphError::vertex_not_found(u));
    }
    if !graph.contains_vertex(v) {
        return Err(GraphError::vertex_not_found(v));
    }
    Ok(depth_first(graph, u)?.any(|x| x == v))
}

/// Partitions vertices into connected components.
///
/// Components are listed in the order of their first vertex in [QueryableGraph::vertices],
/// and so are vertices inside each component.
pub fn connected_components<G>(graph: &G) -> Vec<Vec<G::Vertex>>
where
    G: QueryableGraph,
{
    let mut sets = DisjointSets::new(graph.vertices());
    for e in graph.edges() {
        let (a, b) = e.endpoints();
        sets.union(&a, &b);
    }
    let mut slots: BTreeMap<usize, usize> = BTreeMap::new();
    let mut res: Vec<Vec<G::Vertex>> = Vec::with_capacity(sets.sets());
    for v in graph.vertices() {
        if let Some(root) = sets.find(&v) {
            let idx = *slots.entry(root).or_insert_with(|| {
                res.push(vec![]);
                res.len() - 1
            });
            res[idx].push(v.clone());
        }
    }
    debug!(components = res.len(), "connected components");
    res
}
