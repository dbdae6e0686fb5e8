use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::BTreeMap;
use tracing::trace;

/// An undirected graph backed by a fixed-capacity adjacency matrix.
///
/// Every vertex occupies a row (and the same column) of a `capacity` by `capacity` table,
/// assigned in insertion order.
/// Looking up or changing the edge between two given vertices is $O(1)$;
/// anything about all edges of a vertex scans its row, which is $O(capacity)$.
///
/// # Known limitation
///
/// Rows are never reused.
/// Removing a vertex does not give its row back,
/// so after `capacity` insertions every further [GrowableGraph::add_vertex] fails with
/// [GraphError::CapacityExhausted], no matter how many vertices were removed in between.
/// The matrix neither grows nor compacts.
#[derive(Clone)]
pub struct MatrixGraph<V>
where
    V: Vertex,
{
    slot_factory: SlotIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BiHashMap<SlotId, V, RandomState, RandomState>,
    cells: Vec<Option<EdgeId>>,
    edges: BTreeMap<EdgeId, Edge<V>>,
}

impl<V: Vertex> MatrixGraph<V> {
    /// Creates an empty graph able to take `capacity` vertex insertions over its lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `capacity * capacity` overflows `usize`.
    /// Use [MatrixGraph::try_new] to get an error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(g) => g,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [MatrixGraph::new], but fails with [GraphError::CapacityTooLarge]
    /// if the table size overflows `usize`.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let cells = capacity
            .checked_mul(capacity)
            .ok_or(GraphError::CapacityTooLarge { capacity })?;
        Ok(Self {
            slot_factory: SlotIdFactory::new(capacity),
            eid_factory: EdgeIdFactory::new(),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            cells: vec![None; cells],
            edges: BTreeMap::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slot_factory.capacity()
    }

    /// How many more vertices can ever be inserted.
    pub fn remaining_slots(&self) -> usize {
        self.slot_factory.remaining()
    }

    fn slot_of(&self, v: &V) -> Result<SlotId> {
        self.vertices
            .get_by_right(v)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    fn cell(&self, row: SlotId, col: SlotId) -> usize {
        row.to_raw() * self.capacity() + col.to_raw()
    }

    /// Edge ids in a row. Rows beyond the issued slots are always empty.
    fn row(&self, row: SlotId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.cell(row, SlotId::new(0));
        let end = start + self.slot_factory.issued();
        self.cells[start..end].iter().filter_map(|x| *x)
    }
}

impl<V: Vertex> std::fmt::Debug for MatrixGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "MatrixGraph({}/{} slots) {{",
            self.slot_factory.issued(),
            self.capacity()
        )?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<V: Vertex> QueryableGraph for MatrixGraph<V> {
    type Vertex = V;

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        let it = (0..self.slot_factory.issued())
            .filter_map(move |i| self.vertices.get_by_left(&SlotId::new(i)));
        Box::new(it)
    }

    fn find_vertex(&self, v: &V) -> Option<&V> {
        let slot = self.vertices.get_by_right(v)?;
        self.vertices.get_by_left(slot)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        Box::new(self.edges.values())
    }

    fn incident_edges(&self, v: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>> {
        let slot = self.slot_of(v)?;
        let it = self.row(slot).filter_map(move |eid| self.edges.get(&eid));
        Ok(Box::new(it))
    }

    fn find_edge(&self, u: &V, v: &V) -> Result<Option<&Edge<V>>> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        Ok(self.cells[self.cell(a, b)].and_then(|eid| self.edges.get(&eid)))
    }

    fn degree(&self, v: &V) -> Result<usize> {
        let slot = self.slot_of(v)?;
        Ok(self.row(slot).count())
    }
}

impl<V: Vertex> GrowableGraph for MatrixGraph<V> {
    fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.vertices.contains_right(&v) {
            return Err(GraphError::duplicate_vertex(&v));
        }
        let slot = self
            .slot_factory
            .one_more()
            .ok_or(GraphError::CapacityExhausted {
                capacity: self.capacity(),
            })?;
        trace!(vertex = ?v, slot = slot.to_raw(), "add vertex");
        self.vertices.insert(slot, v);
        Ok(())
    }

    fn add_edge(&mut self, u: &V, v: &V, weight: Weight) -> Result<Edge<V>> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        Edge::validate(u, v, weight)?;
        let ab = self.cell(a, b);
        let ba = self.cell(b, a);
        if self.cells[ab].is_some() {
            return Err(GraphError::duplicate_edge(u, v));
        }
        let eid = self.eid_factory.one_more();
        let edge = Edge::new(u.clone(), v.clone(), weight);
        trace!(
            u = ?u,
            v = ?v,
            weight,
            edge = eid.to_raw(),
            "add edge"
        );
        self.cells[ab] = Some(eid);
        self.cells[ba] = Some(eid);
        self.edges.insert(eid, edge.clone());
        Ok(edge)
    }
}

impl<V: Vertex> EdgeShrinkableGraph for MatrixGraph<V> {
    fn remove_edge(&mut self, u: &V, v: &V) -> Result<Edge<V>> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        let ab = self.cell(a, b);
        let ba = self.cell(b, a);
        let eid = self.cells[ab].ok_or_else(|| GraphError::edge_not_found(u, v))?;
        let edge = self
            .edges
            .remove(&eid)
            .ok_or_else(|| GraphError::edge_not_found(u, v))?;
        self.cells[ab] = None;
        self.cells[ba] = None;
        trace!(u = ?u, v = ?v, edge = eid.to_raw(), "remove edge");
        Ok(edge)
    }
}

impl<V: Vertex> VertexShrinkableGraph for MatrixGraph<V> {
    fn remove_vertex(&mut self, v: &V) -> Result<V> {
        let slot = self.slot_of(v)?;
        let degree = self.row(slot).count();
        if degree > 0 {
            return Err(GraphError::vertex_not_removable(v, degree));
        }
        let (_, vertex) = self
            .vertices
            .remove_by_left(&slot)
            .ok_or_else(|| GraphError::vertex_not_found(v))?;
        trace!(vertex = ?vertex, slot = slot.to_raw(), "remove vertex");
        Ok(vertex)
    }
}
