use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

use crate::dijkstra;
use crate::graph::{Graph, GraphError, NodeId, Weight};
use crate::indexed;
use crate::paths::ShortestPaths;
use crate::scan;

/// How the next node to finalize is chosen. All variants produce the same distances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Binary heap with lazy deletion.
    #[default]
    Heap,
    /// Addressable priority queue with decrease-key.
    Indexed,
    /// Linear scan over all pending nodes.
    Scan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Heap, Algorithm::Indexed, Algorithm::Scan];

    pub fn run<W: Weight>(&self, graph: &Graph<W>, start: NodeId) -> ShortestPaths<W> {
        match self {
            Algorithm::Heap => dijkstra::dijkstra_all(graph, start),
            Algorithm::Indexed => indexed::indexed_dijkstra_all(graph, start),
            Algorithm::Scan => scan::scan_dijkstra_all(graph, start),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Heap => "heap",
            Algorithm::Indexed => "indexed",
            Algorithm::Scan => "scan",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("algorithm not found for input string: {0}, possible options are: (\"heap\", \"indexed\", \"scan\")")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Shortest distances from `source` over the undirected graph on `nodes` nodes.
///
/// Graph construction checks endpoints and weights; the source itself is not checked and
/// must lie in `1..=nodes`.
pub fn solve<W, I>(nodes: usize, source: NodeId, edges: I) -> Result<ShortestPaths<W>, GraphError>
where
    W: Weight,
    I: IntoIterator<Item = (NodeId, NodeId, W)>,
{
    let graph = Graph::from_edges(nodes, edges)?;
    Ok(Algorithm::default().run(&graph, source))
}
