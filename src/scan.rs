use tracing::debug;

use crate::graph::{Graph, NodeId, Weight};
use crate::paths::ShortestPaths;

/// Dijkstra that picks the next node by scanning every unfinalized node. O(N^2), but
/// needs no frontier structure at all; fine for the handful of ninjas a request has.
///
/// # Panics
///
/// If `start` is not a node of `graph`.
pub fn scan_dijkstra_all<W: Weight>(graph: &Graph<W>, start: NodeId) -> ShortestPaths<W> {
    assert!(graph.contains(start), "source {} is not a node of the graph", start);

    let n = graph.node_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut rounds = 0usize;

    dist[start - 1] = Some(W::default());

    loop {
        let next = (0..n)
            .filter(|&idx| !finalized[idx])
            .filter_map(|idx| dist[idx].map(|d| (d, idx)))
            .min();
        let Some((cost, idx)) = next else {
            break;
        };
        finalized[idx] = true;
        rounds += 1;

        let node_id = idx + 1;
        for &(next, w) in graph.neighbors(node_id) {
            if finalized[next - 1] {
                continue;
            }
            let next_cost = cost + w;
            if dist[next - 1].map_or(true, |d| next_cost < d) {
                dist[next - 1] = Some(next_cost);
                pred[next - 1] = Some(node_id);
            }
        }
    }

    debug!(source = start, nodes = n, rounds, "scan dijkstra finished");
    ShortestPaths::new(start, dist, pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Distance;

    #[test]
    fn picks_cheaper_of_two_routes() {
        let graph: Graph<u64> =
            Graph::from_edges(4, [(1, 2, 2), (2, 3, 4), (3, 4, 1), (1, 4, 10)]).unwrap();
        let paths = scan_dijkstra_all(&graph, 2);
        assert_eq!(paths.distance(4), Some(Distance::Reached(5)));
        assert_eq!(paths.path_to(4), Some(vec![2, 3, 4]));
        assert_eq!(paths.path_to(1), Some(vec![2, 1]));
    }

    #[test]
    fn stops_when_frontier_is_empty() {
        let graph: Graph<u64> = Graph::from_edges(5, [(1, 2, 1)]).unwrap();
        let paths = scan_dijkstra_all(&graph, 1);
        assert_eq!(paths.reachable_count(), 2);
        assert_eq!(paths.distance(5), Some(Distance::Unreachable));
    }
}
