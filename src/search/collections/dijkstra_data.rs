use ahash::{HashMap, HashMapExt};

use crate::graphs::{Distance, Vertex};

/// An ordered walk from source to target plus its total distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the distance to a given vertex, `Distance::MAX` if unset.
    fn get_distance(&self, vertex: &Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// Traces back from the target using predecessor data, then reverses
    /// into source-to-target order. Returns `None` if the target was never
    /// reached.
    fn get_path(&self, target: &Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target.clone()];

        let mut predecessor = target.clone();
        while let Some(new_predecessor) = self.get_predecessor(&predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor.clone());
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Distances and predecessors in hash maps keyed by vertex label.
pub struct DijkstraDataHashMap {
    predecessors: HashMap<Vertex, Vertex>,
    distances: HashMap<Vertex, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl Default for DijkstraDataHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: &Vertex) -> Option<Vertex> {
        self.predecessors.get(vertex).cloned()
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: &Vertex) -> Distance {
        *self.distances.get(vertex).unwrap_or(&Distance::MAX)
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}
