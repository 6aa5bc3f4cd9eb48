use ahash::{HashSet, HashSetExt};

use crate::graphs::Vertex;

/// Tracks which vertices a search has finalized.
///
/// `expand` reports whether the vertex was already finalized; the search
/// relies on this to skip stale priority queue entries.
pub trait VertexExpandedData {
    fn expand(&mut self, vertex: &Vertex) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataHashSet {
    expanded: HashSet<Vertex>,
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl Default for VertexExpandedDataHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, vertex: &Vertex) -> bool {
        !self.expanded.insert(vertex.clone())
    }

    fn clear(&mut self) {
        self.expanded.clear()
    }
}
