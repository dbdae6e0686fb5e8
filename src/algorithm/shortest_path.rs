use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// See [shortest_paths].
    fn shortest_paths(&self, source: &Self::Vertex) -> Result<ShortestPaths<Self::Vertex>> {
        shortest_paths(self, source)
    }
}

impl<G: QueryableGraph> ShortestPath for G {}

/// Length of a shortest path.
///
/// [Distance::Unreachable] is greater than every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Unreachable => None,
        }
    }
}

/// Shortest paths from a single source to every vertex of a graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V>
where
    V: Vertex,
{
    source: V,
    distances: BTreeMap<V, Distance>,
    predecessors: BTreeMap<V, V>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// `None` if `target` was not a vertex of the graph.
    pub fn distance(&self, target: &V) -> Option<Distance> {
        self.distances.get(target).copied()
    }

    /// Distances of all vertices of the graph, unreachable ones included.
    pub fn distances(&self) -> &BTreeMap<V, Distance> {
        &self.distances
    }

    pub fn into_distances(self) -> BTreeMap<V, Distance> {
        self.distances
    }

    /// Vertices along a shortest path, both the source and `target` included.
    ///
    /// `None` if `target` is unreachable or unknown.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }
        let mut res = vec![target.clone()];
        let mut cur = target;
        while let Some(prev) = self.predecessors.get(cur) {
            res.push(prev.clone());
            cur = prev;
        }
        res.reverse();
        Some(res)
    }
}

/// Dijkstra's algorithm.
///
/// Tentative distances are kept in a priority queue with decrease-key,
/// so every vertex is settled once.
/// Weights are non-negative by construction of edges.
pub fn shortest_paths<G>(graph: &G, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>>
where
    G: QueryableGraph,
{
    let source = graph
        .find_vertex(source)
        .ok_or_else(|| GraphError::vertex_not_found(source))?;
    let n = graph.vertex_size();
    let mut tentative: HashMap<&G::Vertex, Weight, RandomState> =
        HashMap::with_capacity_and_hasher(n, RandomState::new());
    let mut predecessors: HashMap<&G::Vertex, &G::Vertex, RandomState> =
        HashMap::with_capacity_and_hasher(n, RandomState::new());
    let mut settled: HashSet<&G::Vertex, RandomState> =
        HashSet::with_capacity_and_hasher(n, RandomState::new());
    let mut queue: KeyedPriorityQueue<&G::Vertex, Reverse<Weight>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());

    tentative.insert(source, 0);
    queue.push(source, Reverse(0));
    while let Some((u, Reverse(du))) = queue.pop() {
        settled.insert(u);
        for e in graph.incident_edges(u)? {
            let v = match e.opposite(u) {
                Some(v) => v,
                None => continue,
            };
            if settled.contains(v) {
                continue;
            }
            let candidate = du.saturating_add(e.weight());
            let improved = match tentative.get(v) {
                Some(dv) => candidate < *dv,
                None => true,
            };
            if improved {
                tentative.insert(v, candidate);
                predecessors.insert(v, u);
                queue.push(v, Reverse(candidate));
            }
        }
    }
    debug!(source = ?source, settled = settled.len(), vertices = n, "dijkstra");

    let distances = graph
        .vertices()
        .map(|v| {
            let d = tentative
                .get(v)
                .map_or(Distance::Unreachable, |w| Distance::Finite(*w));
            (v.clone(), d)
        })
        .collect();
    let predecessors = predecessors
        .into_iter()
        .map(|(v, u)| (v.clone(), u.clone()))
        .collect();
    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::tests::*;
    use crate::graph::Ops;
    use quickcheck_macros::quickcheck;

    fn check_scenario<G: Graph<Vertex = i32>>(g: G) {
        let g = scenario(g);
        let paths = g.shortest_paths(&123).unwrap();
        assert_eq!(paths.source(), &123);
        let trial: Vec<_> = paths
            .distances()
            .iter()
            .map(|(v, d)| (*v, *d))
            .collect();
        let oracle = vec![
            (6, Distance::Finite(7)),
            (15, Distance::Finite(27)),
            (38, Distance::Finite(17)),
            (66, Distance::Finite(15)),
            (123, Distance::Finite(0)),
        ];
        assert_eq!(trial, oracle);
        assert_eq!(paths.path_to(&15), Some(vec![123, 6, 66, 38, 15]));
        assert_eq!(paths.path_to(&123), Some(vec![123]));
        assert_eq!(paths.path_to(&7), None);
    }

    #[test]
    fn edge_list_scenario() {
        check_scenario(EdgeListGraph::new());
    }

    #[test]
    fn matrix_scenario() {
        check_scenario(MatrixGraph::new(5));
    }

    #[test]
    fn unreachable_vertices() {
        let mut g = MatrixGraph::new(3);
        for v in ["a", "b", "c"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&"a", &"b", 0).unwrap();
        let paths = g.shortest_paths(&"a").unwrap();
        assert_eq!(paths.distance(&"b"), Some(Distance::Finite(0)));
        assert_eq!(paths.distance(&"c"), Some(Distance::Unreachable));
        assert_eq!(paths.distance(&"d"), None);
        assert_eq!(paths.path_to(&"c"), None);
        assert!(Distance::Finite(Weight::MAX) < Distance::Unreachable);
        assert_eq!(Distance::Unreachable.finite(), None);
        assert_eq!(
            g.shortest_paths(&"d").err(),
            Some(GraphError::VertexNotFound("\"d\"".to_string()))
        );
    }

    #[test]
    fn relaxation_prefers_cheaper_detour() {
        let mut g = EdgeListGraph::new();
        for v in 0..4 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&0, &3, 10).unwrap();
        g.add_edge(&0, &1, 1).unwrap();
        g.add_edge(&1, &2, 1).unwrap();
        g.add_edge(&2, &3, 1).unwrap();
        let paths = g.shortest_paths(&0).unwrap();
        assert_eq!(paths.distance(&3), Some(Distance::Finite(3)));
        assert_eq!(paths.path_to(&3), Some(vec![0, 1, 2, 3]));
    }

    fn check_heavy_edges<G: Graph<Vertex = u8>>(mut g: G) {
        for v in 0..4 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&0, &1, Weight::MAX).unwrap();
        g.add_edge(&1, &2, Weight::MAX).unwrap();
        g.add_edge(&2, &3, 1).unwrap();
        let paths = g.shortest_paths(&0).unwrap();
        assert_eq!(paths.distance(&1), Some(Distance::Finite(Weight::MAX)));
        assert_eq!(paths.distance(&2), Some(Distance::Finite(Weight::MAX)));
        assert_eq!(paths.distance(&3), Some(Distance::Finite(Weight::MAX)));
        assert_eq!(paths.path_to(&3), Some(vec![0, 1, 2, 3]));
        let paths = g.shortest_paths(&3).unwrap();
        assert_eq!(paths.distance(&2), Some(Distance::Finite(1)));
        assert_eq!(paths.distance(&0), Some(Distance::Finite(Weight::MAX)));
    }

    #[test]
    fn edge_list_heavy_edges() {
        check_heavy_edges(EdgeListGraph::new());
    }

    #[test]
    fn matrix_heavy_edges() {
        check_heavy_edges(MatrixGraph::new(4));
    }

    fn check_dijkstra<G>(g: &G)
    where
        G: QueryableGraph<Vertex = u8>,
    {
        for source in g.vertices() {
            let paths = g.shortest_paths(source).unwrap();
            let oracle = dijkstra_oracle(g, source);
            assert_eq!(paths.distances().len(), g.vertex_size());
            for (v, d) in paths.distances() {
                assert_eq!(d.finite(), oracle.get(v).copied());
                if let Some(path) = paths.path_to(v) {
                    assert_eq!(path.first(), Some(source));
                    assert_eq!(path.last(), Some(v));
                    let length: Weight = path
                        .windows(2)
                        .map(|w| g.find_edge(&w[0], &w[1]).unwrap().unwrap().weight())
                        .sum();
                    assert_eq!(Distance::Finite(length), *d);
                }
            }
        }
    }

    #[quickcheck]
    fn dijkstra_matches_oracle(ops: Ops) {
        check_dijkstra(&ops.edge_list());
        check_dijkstra(&ops.matrix());
    }
}
