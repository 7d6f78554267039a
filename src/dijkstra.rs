use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::graph::{Graph, NodeId, Weight};
use crate::paths::ShortestPaths;

#[derive(Copy, Clone, PartialEq, Eq)]
struct State<W> {
    cost: W,
    node_id: NodeId,
}

// Min-heap by cost
impl<W: Ord> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

impl<W: Ord> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `start` to all nodes using a binary heap with lazy deletion.
///
/// # Panics
///
/// If `start` is not a node of `graph`.
pub fn dijkstra_all<W: Weight>(graph: &Graph<W>, start: NodeId) -> ShortestPaths<W> {
    assert!(graph.contains(start), "source {} is not a node of the graph", start);

    let n = graph.node_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    dist[start - 1] = Some(W::default());
    heap.push(State {
        cost: W::default(),
        node_id: start,
    });

    while let Some(State { cost, node_id }) = heap.pop() {
        // Stale entry, a cheaper one was already settled.
        if dist[node_id - 1].is_some_and(|d| cost > d) {
            continue;
        }
        settled += 1;
        for &(next, w) in graph.neighbors(node_id) {
            let next_cost = cost + w;
            if dist[next - 1].map_or(true, |d| next_cost < d) {
                dist[next - 1] = Some(next_cost);
                pred[next - 1] = Some(node_id);
                heap.push(State {
                    cost: next_cost,
                    node_id: next,
                });
            }
        }
    }

    debug!(source = start, nodes = n, settled, "heap dijkstra finished");
    ShortestPaths::new(start, dist, pred)
}
