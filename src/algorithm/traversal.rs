use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Depth-first traversal with an explicit stack. See [depth_first].
    fn dfs(&self, start: &Self::Vertex) -> Result<DepthFirst<'_, Self>> {
        depth_first(self, start)
    }

    /// Depth-first traversal by recursion. See [depth_first_recursive].
    fn dfs_recursive(&self, start: &Self::Vertex) -> Result<Vec<&Self::Vertex>> {
        depth_first_recursive(self, start)
    }

    /// Breadth-first traversal. See [breadth_first].
    fn bfs(&self, start: &Self::Vertex) -> Result<BreadthFirst<'_, Self>> {
        breadth_first(self, start)
    }
}

impl<G: QueryableGraph> Traversal for G {}

/// Visits every vertex reachable from `start` exactly once, depth first.
///
/// After visiting a vertex, each of its unvisited neighbors is explored completely,
/// in the order of [QueryableGraph::neighbors],
/// before the traversal backtracks to the next sibling.
pub fn depth_first<'a, G>(graph: &'a G, start: &G::Vertex) -> Result<DepthFirst<'a, G>>
where
    G: QueryableGraph,
{
    let start = graph
        .find_vertex(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;
    Ok(DepthFirst {
        graph,
        stack: vec![start],
        visited: HashSet::with_hasher(RandomState::new()),
    })
}

/// The same order as [depth_first], collected by a backtracking recursion.
///
/// Recursion goes as deep as the longest simple path explored,
/// so long paths can overflow the stack. Prefer [depth_first] for large graphs.
pub fn depth_first_recursive<'a, G>(graph: &'a G, start: &G::Vertex) -> Result<Vec<&'a G::Vertex>>
where
    G: QueryableGraph,
{
    let start = graph
        .find_vertex(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;
    let mut visited = HashSet::with_hasher(RandomState::new());
    let mut order = Vec::with_capacity(graph.vertex_size());
    visit(graph, start, &mut visited, &mut order)?;
    debug!(start = ?start, visited = order.len(), "recursive depth-first traversal");
    Ok(order)
}

fn visit<'a, G>(
    graph: &'a G,
    v: &'a G::Vertex,
    visited: &mut HashSet<&'a G::Vertex, RandomState>,
    order: &mut Vec<&'a G::Vertex>,
) -> Result<()>
where
    G: QueryableGraph,
{
    visited.insert(v);
    order.push(v);
    for n in graph.neighbors(v)? {
        if !visited.contains(n) {
            visit(graph, n, visited, order)?;
        }
    }
    Ok(())
}

/// Visits every vertex reachable from `start` exactly once,
/// in non-decreasing number of hops from `start`.
pub fn breadth_first<'a, G>(graph: &'a G, start: &G::Vertex) -> Result<BreadthFirst<'a, G>>
where
    G: QueryableGraph,
{
    let start = graph
        .find_vertex(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;
    let mut visited = HashSet::with_hasher(RandomState::new());
    visited.insert(start);
    Ok(BreadthFirst {
        graph,
        frontier: VecDeque::from(vec![start]),
        visited,
    })
}

/// Iterator returned by [depth_first].
pub struct DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    stack: Vec<&'a G::Vertex>,
    visited: HashSet<&'a G::Vertex, RandomState>,
}

impl<'a, G> Iterator for DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(v) = self.stack.pop() {
            if !self.visited.insert(v) {
                continue;
            }
            // `v` came from the graph itself, so it is always found.
            let neighbors = graph.neighbors(v);
            debug_assert!(neighbors.is_ok(), "{:?} vanished from the graph", v);
            // Pushed in reverse, so that the first neighbor is the next to explore.
            let fresh: Vec<_> = neighbors
                .into_iter()
                .flatten()
                .filter(|n| !self.visited.contains(n))
                .collect();
            self.stack.extend(fresh.into_iter().rev());
            return Some(v);
        }
        None
    }
}

/// Iterator returned by [breadth_first].
pub struct BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    frontier: VecDeque<&'a G::Vertex>,
    visited: HashSet<&'a G::Vertex, RandomState>,
}

impl<'a, G> Iterator for BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let v = self.frontier.pop_front()?;
        // `v` came from the graph itself, so it is always found.
        let neighbors = graph.neighbors(v);
        debug_assert!(neighbors.is_ok(), "{:?} vanished from the graph", v);
        for n in neighbors.into_iter().flatten() {
            if self.visited.insert(n) {
                self.frontier.push_back(n);
            }
        }
        Some(v)
    }
}
