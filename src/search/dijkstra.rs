use super::collections::{
    dijkstra_data::DijkstraData, vertex_distance_queue::VertexDistanceQueue,
    vertex_expanded_data::VertexExpandedData,
};
use crate::graphs::{label_graph::LabelGraph, Vertex};

/// Dijkstra's algorithm from `source` towards `target`.
///
/// Decrease-key-by-reinsertion: relaxing a vertex pushes a fresh queue entry
/// instead of updating the old one, and the expanded check discards the
/// superseded entries on pop. Popping the target terminates the search
/// early; with non-negative weights its distance is final at that point.
pub fn dijkstra_one_to_one(
    graph: &LabelGraph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: &Vertex,
    target: &Vertex,
) {
    data.set_distance(source.clone(), 0);
    queue.insert(source.clone(), 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(&tail) {
            continue;
        }
        if &tail == target {
            break;
        }

        let distance_tail = data.get_distance(&tail);

        for (head, weight) in graph.out_edges(&tail) {
            let current_distance_head = data.get_distance(head);
            let alternative_distance_head = distance_tail + weight;
            if alternative_distance_head < current_distance_head {
                data.set_distance(head.clone(), alternative_distance_head);
                data.set_predecessor(head.clone(), tail.clone());
                queue.insert(head.clone(), alternative_distance_head);
            }
        }
    }
}
