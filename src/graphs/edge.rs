use std::fmt;

use super::{Distance, Vertex};
use crate::error::{GraphError, Result};

/// A directed weighted edge between two label-keyed vertices.
///
/// Equality and hashing are structural over all three fields, so identical
/// duplicates collapse under set semantics. Fields are public; the graph
/// constructor re-validates the weight on ingestion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl Edge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> Result<Edge> {
        if weight < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "edge {} -> {} must have a non-negative weight, got {}",
                tail, head, weight
            )));
        }

        Ok(Edge { tail, head, weight })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.tail, self.head, self.weight)
    }
}
