use std::fmt;

use crate::graph::{NodeId, Weight};

/// Minimum cumulative weight from the source, or the unreachable sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Reached(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reached(_))
    }

    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Reached(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(d: Option<W>) -> Self {
        match d {
            Some(d) => Distance::Reached(d),
            None => Distance::Unreachable,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Distance table plus the shortest-path tree that produced it.
///
/// Slot `node - 1` describes `node`. A `None` distance means no path from the source
/// exists; the predecessor is `None` for the source and for unreachable nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    source: NodeId,
    dist: Vec<Option<W>>,
    pred: Vec<Option<NodeId>>,
}

impl<W: Weight> ShortestPaths<W> {
    pub(crate) fn new(source: NodeId, dist: Vec<Option<W>>, pred: Vec<Option<NodeId>>) -> Self {
        debug_assert_eq!(dist.len(), pred.len());
        Self { source, dist, pred }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.dist.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node >= 1 && node <= self.dist.len()
    }

    /// `None` when `node` is outside `1..=N`.
    pub fn distance(&self, node: NodeId) -> Option<Distance<W>> {
        if !self.contains(node) {
            return None;
        }
        Some(self.dist[node - 1].into())
    }

    pub fn distances(&self) -> impl Iterator<Item = (NodeId, Distance<W>)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .map(|(idx, d)| (idx + 1, (*d).into()))
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        if !self.contains(node) {
            return None;
        }
        self.pred[node - 1]
    }

    /// Nodes from the source to `node` along the shortest-path tree.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(node) || self.dist[node - 1].is_none() {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while let Some(prev) = self.pred[current - 1] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// `(parent, child)` links of the shortest-path tree.
    pub fn tree_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pred
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|parent| (parent, idx + 1)))
    }

    /// Reached nodes in the order the chakra arrives: by distance, then by id.
    pub fn arrival_order(&self) -> Vec<(NodeId, W)> {
        let mut order: Vec<(NodeId, W)> = self
            .dist
            .iter()
            .enumerate()
            .filter_map(|(idx, d)| d.map(|d| (idx + 1, d)))
            .collect();
        order.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        order
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ShortestPaths<u64> {
        // 1 -5- 2 -3- 3, node 4 isolated
        ShortestPaths::new(
            1,
            vec![Some(0), Some(5), Some(8), None],
            vec![None, Some(1), Some(2), None],
        )
    }

    #[test]
    fn distance_lookup() {
        let paths = chain();
        assert_eq!(paths.distance(1), Some(Distance::Reached(0)));
        assert_eq!(paths.distance(3), Some(Distance::Reached(8)));
        assert_eq!(paths.distance(4), Some(Distance::Unreachable));
        assert_eq!(paths.distance(0), None);
        assert_eq!(paths.distance(5), None);
    }

    #[test]
    fn path_reconstruction() {
        let paths = chain();
        assert_eq!(paths.path_to(1), Some(vec![1]));
        assert_eq!(paths.path_to(3), Some(vec![1, 2, 3]));
        assert_eq!(paths.path_to(4), None);
        assert_eq!(paths.path_to(9), None);
    }

    #[test]
    fn tree_and_arrival_order() {
        let paths = chain();
        assert_eq!(paths.tree_edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
        assert_eq!(paths.arrival_order(), vec![(1, 0), (2, 5), (3, 8)]);
        assert_eq!(paths.reachable_count(), 3);
    }

    #[test]
    fn display_uses_inf_for_unreachable() {
        assert_eq!(Distance::Reached(7u64).to_string(), "7");
        assert_eq!(Distance::<u64>::Unreachable.to_string(), "inf");
    }
}
