//! Shortest chakra paths between ninjas.
//!
//! A request names `N` ninjas, a source ninja and undirected weighted connections. The
//! solver computes the minimum chakra cost from the source to every ninja together with
//! the shortest-path tree the chakra travels along; queries are then classified as a
//! distance, unreachable, or invalid.

pub mod dijkstra;
pub mod graph;
pub mod indexed;
pub mod input;
pub mod logging;
pub mod names;
pub mod paths;
pub mod query;
pub mod report;
pub mod scan;
pub mod solver;

pub use graph::{Edge, Graph, GraphError, NodeId, Weight};
pub use input::{InputError, Request};
pub use paths::{Distance, ShortestPaths};
pub use query::{answer_queries, classify, QueryOutcome, QueryResult};
pub use solver::{solve, Algorithm};
