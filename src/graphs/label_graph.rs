use std::collections::hash_map::Entry::{Occupied, Vacant};

use ahash::{HashMap, HashMapExt, HashSet};
use itertools::Itertools;
use tracing::{debug, trace};

use super::{edge::Edge, Distance, Vertex, NO_EDGE};
use crate::{
    error::{GraphError, Result},
    search::{
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataHashMap, Path},
            vertex_distance_queue::VertexDistanceQueueBinaryHeap,
            vertex_expanded_data::VertexExpandedDataHashSet,
        },
        dijkstra::dijkstra_one_to_one,
    },
};

/// An immutable directed graph over label-keyed vertices.
///
/// A single out-edge index backs the whole query surface: one entry per
/// vertex (isolated vertices included), mapping each neighbor to the edge
/// weight. Construction validates; queries never re-check the invariants.
pub struct LabelGraph {
    out_edges: HashMap<Vertex, HashMap<Vertex, Distance>>,
}

impl LabelGraph {
    /// Builds a graph from a vertex collection and an edge collection.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if an edge has a negative
    /// weight, references a vertex outside the collection, or repeats a
    /// (tail, head) pair with a different weight. Identical duplicate edges
    /// and duplicate vertices collapse silently.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<LabelGraph> {
        let mut out_edges: HashMap<Vertex, HashMap<Vertex, Distance>> = vertices
            .into_iter()
            .map(|vertex| (vertex, HashMap::new()))
            .collect();

        for edge in edges {
            if edge.weight < 0 {
                return Err(GraphError::InvalidArgument(format!(
                    "edge {} must have a non-negative weight",
                    edge
                )));
            }

            if !out_edges.contains_key(&edge.head) {
                return Err(GraphError::InvalidArgument(format!(
                    "edge {} leads to a vertex outside the graph",
                    edge
                )));
            }

            let Some(tail_edges) = out_edges.get_mut(&edge.tail) else {
                return Err(GraphError::InvalidArgument(format!(
                    "edge {} starts at a vertex outside the graph",
                    edge
                )));
            };

            match tail_edges.entry(edge.head.clone()) {
                Occupied(entry) => {
                    let recorded_weight = *entry.get();
                    if recorded_weight != edge.weight {
                        return Err(GraphError::InvalidArgument(format!(
                            "edge {} conflicts with an already recorded weight of {}",
                            edge, recorded_weight
                        )));
                    }
                }
                Vacant(entry) => {
                    entry.insert(edge.weight);
                }
            }
        }

        let graph = LabelGraph { out_edges };
        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "constructed label graph"
        );

        Ok(graph)
    }

    pub fn number_of_vertices(&self) -> usize {
        self.out_edges.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum()
    }

    /// All vertex identities, as fresh caller-owned clones.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.out_edges.keys().cloned().collect()
    }

    /// All edges, rebuilt fresh from the out-edge index.
    pub fn edges(&self) -> Vec<Edge> {
        self.out_edges
            .iter()
            .flat_map(|(tail, tail_edges)| {
                tail_edges.iter().map(|(head, weight)| Edge {
                    tail: tail.clone(),
                    head: head.clone(),
                    weight: *weight,
                })
            })
            .collect()
    }

    /// The set of vertices reachable from `vertex` via one outgoing edge.
    ///
    /// Fails if `vertex` is not part of the graph; an isolated vertex yields
    /// an empty set.
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<HashSet<Vertex>> {
        let tail_edges = self
            .out_edges
            .get(vertex)
            .ok_or_else(|| unknown_vertex(vertex))?;

        Ok(tail_edges.keys().cloned().collect())
    }

    /// The weight of the directed edge `tail -> head`, or [`NO_EDGE`] when
    /// no such edge exists. Callers branch on the -1 sentinel; stored
    /// weights are non-negative so the two never collide.
    pub fn edge_cost(&self, tail: &Vertex, head: &Vertex) -> Result<Distance> {
        let tail_edges = self
            .out_edges
            .get(tail)
            .ok_or_else(|| unknown_vertex(tail))?;
        self.check_vertex(head)?;

        Ok(tail_edges.get(head).copied().unwrap_or(NO_EDGE))
    }

    /// Iterates the outgoing edges of `tail` as (head, weight) pairs.
    pub fn out_edges<'a>(
        &'a self,
        tail: &Vertex,
    ) -> impl Iterator<Item = (&'a Vertex, Distance)> + 'a {
        self.out_edges
            .get(tail)
            .into_iter()
            .flatten()
            .map(|(head, weight)| (head, *weight))
    }

    /// Sums the edge weights along consecutive vertices, or `None` if some
    /// hop has no edge. A single vertex is a valid path of distance 0.
    pub fn path_distance(&self, vertices: &[Vertex]) -> Option<Distance> {
        if vertices.is_empty() {
            return None;
        }

        let mut distance = 0;
        for (tail, head) in vertices.iter().tuple_windows() {
            distance += *self.out_edges.get(tail)?.get(head)?;
        }

        Some(distance)
    }

    /// Runs Dijkstra's algorithm from `source` to `target`.
    ///
    /// Returns `Ok(None)` when `target` is unreachable. Every call allocates
    /// its own search collections, so a shared `&LabelGraph` supports
    /// concurrent queries.
    pub fn shortest_path(&self, source: &Vertex, target: &Vertex) -> Result<Option<Path>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        trace!(%source, %target, "shortest path query");

        if source == target {
            return Ok(Some(Path {
                vertices: vec![source.clone()],
                distance: 0,
            }));
        }

        let mut data = DijkstraDataHashMap::new();
        let mut expanded = VertexExpandedDataHashSet::new();
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        dijkstra_one_to_one(self, &mut data, &mut expanded, &mut queue, source, target);

        Ok(data.get_path(target))
    }

    fn check_vertex(&self, vertex: &Vertex) -> Result<()> {
        if !self.out_edges.contains_key(vertex) {
            return Err(unknown_vertex(vertex));
        }

        Ok(())
    }
}

fn unknown_vertex(vertex: &Vertex) -> GraphError {
    GraphError::InvalidArgument(format!("vertex {} is not part of the graph", vertex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn vertex(label: &str) -> Vertex {
        Vertex::new(label).unwrap()
    }

    fn triangle_vertices() -> Vec<Vertex> {
        vec![vertex("a"), vertex("b"), vertex("c")]
    }

    #[test]
    fn vertices_and_edges_collapse_to_sets() {
        let vertices = vec![vertex("a"), vertex("b"), vertex("a")];
        let edges = vec![
            Edge::new(vertex("a"), vertex("b"), 3).unwrap(),
            Edge::new(vertex("a"), vertex("b"), 3).unwrap(),
        ];
        let graph = LabelGraph::new(vertices, edges).unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges(), vec![Edge::new(vertex("a"), vertex("b"), 3).unwrap()]);
    }

    #[test]
    fn isolated_vertex_is_indexed() {
        let graph = LabelGraph::new(vec![vertex("a")], Vec::new()).unwrap();

        assert!(graph.adjacent_vertices(&vertex("a")).unwrap().is_empty());
        assert_eq!(graph.edge_cost(&vertex("a"), &vertex("a")).unwrap(), NO_EDGE);
    }

    #[test]
    fn edge_with_unknown_endpoint_is_rejected() {
        let edges = vec![Edge::new(vertex("a"), vertex("d"), 1).unwrap()];

        assert!(matches!(
            LabelGraph::new(triangle_vertices(), edges),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(Edge::new(vertex("a"), vertex("b"), -1).is_err());

        // Fields are public, so the constructor re-checks.
        let edges = vec![Edge {
            tail: vertex("a"),
            head: vertex("b"),
            weight: -1,
        }];
        assert!(LabelGraph::new(triangle_vertices(), edges).is_err());
    }

    #[test]
    fn conflicting_parallel_weights_are_rejected() {
        let edges = vec![
            Edge::new(vertex("a"), vertex("b"), 3).unwrap(),
            Edge::new(vertex("a"), vertex("b"), 4).unwrap(),
        ];

        assert!(matches!(
            LabelGraph::new(triangle_vertices(), edges),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn edge_cost_returns_weight_or_sentinel() {
        let edges = vec![Edge::new(vertex("a"), vertex("b"), 3).unwrap()];
        let graph = LabelGraph::new(triangle_vertices(), edges).unwrap();

        assert_eq!(graph.edge_cost(&vertex("a"), &vertex("b")).unwrap(), 3);
        // Directed: the reverse edge does not exist.
        assert_eq!(graph.edge_cost(&vertex("b"), &vertex("a")).unwrap(), NO_EDGE);
        assert!(graph.edge_cost(&vertex("a"), &vertex("x")).is_err());
    }

    #[test]
    fn adjacent_vertices_requires_known_vertex() {
        let graph = LabelGraph::new(triangle_vertices(), Vec::new()).unwrap();

        assert!(graph.adjacent_vertices(&vertex("x")).is_err());
    }

    #[test]
    fn path_distance_follows_directed_hops() {
        let edges = vec![
            Edge::new(vertex("a"), vertex("b"), 1).unwrap(),
            Edge::new(vertex("b"), vertex("c"), 2).unwrap(),
        ];
        let graph = LabelGraph::new(triangle_vertices(), edges).unwrap();

        let walk = [vertex("a"), vertex("b"), vertex("c")];
        assert_eq!(graph.path_distance(&walk), Some(3));
        assert_eq!(graph.path_distance(&[vertex("a")]), Some(0));
        assert_eq!(graph.path_distance(&[vertex("c"), vertex("a")]), None);
        assert_eq!(graph.path_distance(&[]), None);
    }
}
