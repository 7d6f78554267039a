/*
Dijkstra over an addressable priority queue.

Each node sits in the frontier at most once. A cheaper tentative distance raises the
node's priority in place (decrease-key on the distance) instead of pushing a duplicate,
so no stale entries are ever popped.
*/

use std::cmp::Reverse;

use priority_queue::PriorityQueue;
use tracing::debug;

use crate::graph::{Graph, NodeId, Weight};
use crate::paths::ShortestPaths;

/// # Panics
///
/// If `start` is not a node of `graph`.
pub fn indexed_dijkstra_all<W: Weight>(graph: &Graph<W>, start: NodeId) -> ShortestPaths<W> {
    assert!(graph.contains(start), "source {} is not a node of the graph", start);

    let n = graph.node_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut frontier: PriorityQueue<NodeId, Reverse<W>> = PriorityQueue::with_capacity(n);
    let mut settled = 0usize;
    let mut decreased = 0usize;

    dist[start - 1] = Some(W::default());
    frontier.push(start, Reverse(W::default()));

    while let Some((node_id, Reverse(cost))) = frontier.pop() {
        settled += 1;
        for &(next, w) in graph.neighbors(node_id) {
            let next_cost = cost + w;
            if dist[next - 1].map_or(true, |d| next_cost < d) {
                dist[next - 1] = Some(next_cost);
                pred[next - 1] = Some(node_id);
                if frontier.push_increase(next, Reverse(next_cost)).is_some() {
                    decreased += 1;
                }
            }
        }
    }

    debug!(source = start, nodes = n, settled, decreased, "indexed dijkstra finished");
    ShortestPaths::new(start, dist, pred)
}
