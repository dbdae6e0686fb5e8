use crate::graph::*;
use crate::{GraphError, Result};
use std::collections::BTreeSet;
use tracing::trace;

/// An undirected graph keeping a vertex set and a flat list of edges.
///
/// There is no capacity and removed vertices may come back freely.
/// The price is that every query about adjacency scans all edges.
/// This is a good fit for small or sparse graphs.
#[derive(Clone)]
pub struct EdgeListGraph<V>
where
    V: Vertex,
{
    vertices: BTreeSet<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> EdgeListGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    fn check_vertex(&self, v: &V) -> Result<()> {
        if self.vertices.contains(v) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(v))
        }
    }

    fn position(&self, u: &V, v: &V) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(u, v))
    }
}

impl<V: Vertex> std::fmt::Debug for EdgeListGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "EdgeListGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<V: Vertex> QueryableGraph for EdgeListGraph<V> {
    type Vertex = V;

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn find_vertex(&self, v: &V) -> Option<&V> {
        self.vertices.get(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        Box::new(self.edges.iter())
    }

    fn incident_edges(&self, v: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>> {
        self.check_vertex(v)?;
        let v = v.clone();
        let it = self.edges.iter().filter(move |e| e.is_incident(&v));
        Ok(Box::new(it))
    }

    fn find_edge(&self, u: &V, v: &V) -> Result<Option<&Edge<V>>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.edges.iter().find(|e| e.connects(u, v)))
    }
}

impl<V: Vertex> GrowableGraph for EdgeListGraph<V> {
    fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.vertices.contains(&v) {
            return Err(GraphError::duplicate_vertex(&v));
        }
        trace!(vertex = ?v, "add vertex");
        self.vertices.insert(v);
        Ok(())
    }

    fn add_edge(&mut self, u: &V, v: &V, weight: Weight) -> Result<Edge<V>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Edge::validate(u, v, weight)?;
        if self.position(u, v).is_some() {
            return Err(GraphError::duplicate_edge(u, v));
        }
        let edge = Edge::new(u.clone(), v.clone(), weight);
        trace!(u = ?u, v = ?v, weight, "add edge");
        self.edges.push(edge.clone());
        Ok(edge)
    }
}

impl<V: Vertex> EdgeShrinkableGraph for EdgeListGraph<V> {
    fn remove_edge(&mut self, u: &V, v: &V) -> Result<Edge<V>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let pos = self
            .position(u, v)
            .ok_or_else(|| GraphError::edge_not_found(u, v))?;
        trace!(u = ?u, v = ?v, "remove edge");
        Ok(self.edges.remove(pos))
    }
}

impl<V: Vertex> VertexShrinkableGraph for EdgeListGraph<V> {
    fn remove_vertex(&mut self, v: &V) -> Result<V> {
        self.check_vertex(v)?;
        let degree = self.edges.iter().filter(|e| e.is_incident(v)).count();
        if degree > 0 {
            return Err(GraphError::vertex_not_removable(v, degree));
        }
        let vertex = self
            .vertices
            .take(v)
            .ok_or_else(|| GraphError::vertex_not_found(v))?;
        trace!(vertex = ?vertex, "remove vertex");
        Ok(vertex)
    }
}
