use std::fmt;

use crate::error::{GraphError, Result};

pub mod edge;
pub mod label_graph;

use edge::Edge;
use label_graph::LabelGraph;

/// Accumulated cost along a path, and the weight of a single edge.
///
/// Stored edge weights are validated non-negative; the type stays signed so
/// `edge_cost` can return the [`NO_EDGE`] sentinel. `Distance::MAX` marks a
/// vertex a search has not reached yet.
pub type Distance = i64;

/// Sentinel returned by `edge_cost` when no directed edge exists.
pub const NO_EDGE: Distance = -1;

/// A label-keyed vertex identity.
///
/// Equality, hashing, and ordering are label-only. Per-search scratch state
/// (distance, predecessor, expanded flag) never lives on this type; it is
/// kept in collections private to each query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Result<Vertex> {
        let label = label.into();

        if label.is_empty() {
            return Err(GraphError::InvalidArgument(
                "vertex label must not be empty".to_string(),
            ));
        }

        Ok(Vertex { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A small bidirectional test graph shared by unit and integration tests.
///
/// Topology taken from
/// <https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png>,
/// vertices labeled `v0` through `v10`.
pub fn test_graph() -> LabelGraph {
    let vertices: Vec<Vertex> = (0..11)
        .map(|number| Vertex::new(format!("v{}", number)).unwrap())
        .collect();

    let edge_list: [(usize, usize, Distance); 20] = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ];

    let mut edges = Vec::new();
    for (tail, head, weight) in edge_list {
        edges.push(Edge::new(vertices[tail].clone(), vertices[head].clone(), weight).unwrap());
        edges.push(Edge::new(vertices[head].clone(), vertices[tail].clone(), weight).unwrap());
    }

    LabelGraph::new(vertices, edges).unwrap()
}
