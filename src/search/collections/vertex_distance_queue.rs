use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, Vertex};

/// A trait for a priority queue that manages vertices and their distances.
/// Useful for graph algorithms that need to repeatedly retrieve the vertex
/// with the smallest distance, such as Dijkstra's algorithm.
///
/// Implementations need not support a decrease key operation; the search
/// absorbs stale entries by skipping already expanded vertices.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<Vertex>;
}

/// A priority queue implementation using a Binary Heap.
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, Vertex)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl Default for VertexDistanceQueueBinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<Vertex> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Vertex;

    #[test]
    fn pops_in_ascending_distance_order() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(Vertex::new("far").unwrap(), 7);
        queue.insert(Vertex::new("near").unwrap(), 1);
        queue.insert(Vertex::new("middle").unwrap(), 4);

        assert_eq!(queue.pop(), Some(Vertex::new("near").unwrap()));
        assert_eq!(queue.pop(), Some(Vertex::new("middle").unwrap()));
        assert_eq!(queue.pop(), Some(Vertex::new("far").unwrap()));
        assert_eq!(queue.pop(), None);
    }
}
