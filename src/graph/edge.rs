use super::Vertex;
use crate::{GraphError, Result};
use std::hash::{Hash, Hasher};

/// Weights of edges.
///
/// Signed so that negative weights can be rejected instead of being unrepresentable.
pub type Weight = i64;

/// An undirected weighted edge.
///
/// `{u, v}` and `{v, u}` are the same edge:
/// equality and hashing ignore the order of endpoints.
/// Edges are created by graphs only and never change afterwards.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    u: V,
    v: V,
    weight: Weight,
}

impl<V: Vertex> Edge<V> {
    pub(crate) fn new(u: V, v: V, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Checks everything about a new edge that does not depend on a graph.
    pub(crate) fn validate(u: &V, v: &V, weight: Weight) -> Result<()> {
        if u == v {
            return Err(GraphError::self_loop(u));
        }
        if weight < 0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        Ok(())
    }

    /// Endpoints in the order they were given when the edge was added.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.u, &self.v)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The other endpoint, or `None` if `x` is not an endpoint at all.
    pub fn opposite(&self, x: &V) -> Option<&V> {
        if *x == self.u {
            Some(&self.v)
        } else if *x == self.v {
            Some(&self.u)
        } else {
            None
        }
    }

    pub fn is_incident(&self, x: &V) -> bool {
        *x == self.u || *x == self.v
    }

    /// Whether this edge links `a` and `b`, in either direction.
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (*a == self.u && *b == self.v) || (*a == self.v && *b == self.u)
    }

    fn key(&self) -> (&V, &V) {
        if self.u <= self.v {
            (&self.u, &self.v)
        } else {
            (&self.v, &self.u)
        }
    }
}

impl<V: Vertex> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.weight == other.weight
    }
}

impl<V: Vertex> Eq for Edge<V> {}

impl<V: Vertex> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.weight.hash(state);
    }
}

/// ID for edge records in a [super::MatrixGraph], which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone)]
pub struct EdgeIdFactory(usize);

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn to_raw(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn undirected_equality() {
        let a = Edge::new(15, 38, 10);
        let b = Edge::new(38, 15, 10);
        assert_eq!(a, b);
        let set: HashSet<_> = vec![a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(Edge::new(15, 38, 10), Edge::new(15, 38, 11));
    }

    #[test]
    fn opposite() {
        let e = Edge::new("a", "b", 0);
        assert_eq!(e.opposite(&"a"), Some(&"b"));
        assert_eq!(e.opposite(&"b"), Some(&"a"));
        assert_eq!(e.opposite(&"c"), None);
        assert!(e.connects(&"b", &"a"));
        assert!(!e.connects(&"a", &"c"));
    }

    #[test]
    fn validate() {
        assert_eq!(Edge::validate(&1, &2, 0), Ok(()));
        assert_eq!(
            Edge::validate(&1, &1, 0),
            Err(GraphError::SelfLoop("1".to_string()))
        );
        assert_eq!(
            Edge::validate(&1, &2, -3),
            Err(GraphError::InvalidWeight(-3))
        );
    }
}
