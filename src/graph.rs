use std::fmt::Debug;
use std::ops::Add;

use thiserror::Error;

pub type NodeId = usize;

/// Anything that can be summed along a path and compared. `Default` is the zero weight.
pub trait Weight: Copy + Ord + Add<Output = Self> + Default + Debug {}

impl<T> Weight for T where T: Copy + Ord + Add<Output = T> + Default + Debug {}

/// Undirected weighted connection between two ninjas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge<W> {
    pub u: NodeId,
    pub v: NodeId,
    pub t: W,
}

impl<W> Edge<W> {
    pub fn new(u: NodeId, v: NodeId, t: W) -> Self {
        Self { u, v, t }
    }
}

impl<W> From<(NodeId, NodeId, W)> for Edge<W> {
    fn from((u, v, t): (NodeId, NodeId, W)) -> Self {
        Self { u, v, t }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph must contain at least one node")]
    Empty,
    #[error("edge {index} references node {node}, expected a node in 1..={nodes}")]
    NodeOutOfRange {
        index: usize,
        node: NodeId,
        nodes: usize,
    },
    #[error("edge {index} ({u}, {v}) has a negative weight")]
    NegativeWeight { index: usize, u: NodeId, v: NodeId },
}

/// Adjacency lists over nodes `1..=N`. Slot `node - 1` holds the neighbors of `node`.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    adj: Vec<Vec<(NodeId, W)>>,
    edge_count: usize,
}

impl<W: Weight> Graph<W> {
    /// Builds the undirected graph, checking node ranges and weight signs.
    pub fn from_edges<I>(nodes: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        if nodes == 0 {
            return Err(GraphError::Empty);
        }

        let mut adj: Vec<Vec<(NodeId, W)>> = vec![Vec::new(); nodes];
        let mut edge_count = 0;
        for (index, (u, v, t)) in edges.into_iter().enumerate() {
            for node in [u, v] {
                if node < 1 || node > nodes {
                    return Err(GraphError::NodeOutOfRange { index, node, nodes });
                }
            }
            if t < W::default() {
                return Err(GraphError::NegativeWeight { index, u, v });
            }
            adj[u - 1].push((v, t));
            adj[v - 1].push((u, t));
            edge_count += 1;
        }

        Ok(Self { adj, edge_count })
    }

    pub fn from_edge_list(nodes: usize, edges: &[Edge<W>]) -> Result<Self, GraphError> {
        Self::from_edges(nodes, edges.iter().map(|e| (e.u, e.v, e.t)))
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node >= 1 && node <= self.adj.len()
    }

    /// Neighbors of `node` with the traversal cost. Panics if `node` is not in the graph.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, W)] {
        &self.adj[node - 1]
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        1..=self.adj.len()
    }
}
