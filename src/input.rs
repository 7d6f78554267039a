//! Parsing and validation of a visualization request.
//!
//! Connections come one per line as `u v t`, queries one id per line. Everything is
//! checked here so the solver only ever sees well-formed graphs.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;

use ordered_float::OrderedFloat;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::graph::{Edge, Graph, GraphError, NodeId};

pub type Cost = OrderedFloat<f64>;

/// Largest path sum an `f64` still represents exactly for integer costs.
pub const MAX_EXACT_SUM: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: unexpected trailing field {found:?}")]
    ExtraField { line: usize, found: String },
    #[error("line {line}: {field} {value:?} is not an integer")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: chakra cost {value:?} is not a number")]
    InvalidCost {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: chakra cost {weight} is negative")]
    NegativeWeight { line: usize, weight: f64 },
    #[error("line {line}: chakra cost {weight} must be finite and non-negative")]
    InvalidWeight { line: usize, weight: f64 },
    #[error("line {line}: chakra cost {weight} exceeds {limit}, path sums could lose precision")]
    WeightTooLarge { line: usize, weight: f64, limit: f64 },
    #[error("number of ninjas must be at least 1, got {0}")]
    NodeCount(i64),
    #[error("source ninja {node} is outside 1..={nodes}")]
    SourceOutOfRange { node: i64, nodes: usize },
    #[error("line {line}: ninja {node} is outside 1..={nodes}")]
    EndpointOutOfRange { line: usize, node: i64, nodes: usize },
    #[error("edge list is empty, cannot infer the number of ninjas")]
    NoEdges,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// One parsed but not yet range-checked connection line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub line: usize,
    pub u: i64,
    pub v: i64,
    pub t: f64,
}

fn parse_int(line: usize, field: &'static str, value: &str) -> Result<i64, InputError> {
    value.parse::<i64>().map_err(|source| InputError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_cost(line: usize, value: &str) -> Result<f64, InputError> {
    let weight = value.parse::<f64>().map_err(|source| InputError::InvalidCost {
        line,
        value: value.to_string(),
        source,
    })?;
    if !weight.is_finite() {
        return Err(InputError::InvalidWeight { line, weight });
    }
    if weight < 0.0 {
        return Err(InputError::NegativeWeight { line, weight });
    }
    Ok(weight)
}

/// Lines that are blank or start with `#` are skipped. Line numbers are 1-based.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub fn parse_connections(text: &str) -> Result<Vec<Connection>, InputError> {
    let mut connections = Vec::new();
    for (line, content) in content_lines(text) {
        let mut fields = content.split_whitespace();
        let mut next = |field: &'static str| {
            fields.next().ok_or(InputError::MissingField { line, field })
        };
        let u = parse_int(line, "first ninja", next("first ninja")?)?;
        let v = parse_int(line, "second ninja", next("second ninja")?)?;
        let t = parse_cost(line, next("chakra cost")?)?;
        if let Some(extra) = fields.next() {
            return Err(InputError::ExtraField {
                line,
                found: extra.to_string(),
            });
        }
        connections.push(Connection { line, u, v, t });
    }
    Ok(connections)
}

/// Query ids, one per line. Out-of-range ids are kept; they classify as invalid later.
pub fn parse_queries(text: &str) -> Result<Vec<i64>, InputError> {
    content_lines(text)
        .map(|(line, content)| parse_int(line, "query", content))
        .collect()
}

/// A fully validated request: every endpoint is in range and every cost is non-negative
/// and small enough that no path sum leaves the exactly representable range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    nodes: usize,
    source: NodeId,
    edges: Vec<Edge<Cost>>,
    queries: Vec<i64>,
}

impl Request {
    pub fn new(
        nodes: i64,
        source: i64,
        connections: &[Connection],
        queries: Vec<i64>,
    ) -> Result<Self, InputError> {
        let nodes = usize::try_from(nodes)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(InputError::NodeCount(nodes))?;
        let source = node_in_range(source, nodes)
            .ok_or(InputError::SourceOutOfRange { node: source, nodes })?;

        // A shortest path uses each connection at most once.
        let limit = MAX_EXACT_SUM / connections.len().max(1) as f64;
        let mut edges = Vec::with_capacity(connections.len());
        for c in connections {
            let endpoint = |node: i64| {
                node_in_range(node, nodes).ok_or(InputError::EndpointOutOfRange {
                    line: c.line,
                    node,
                    nodes,
                })
            };
            let u = endpoint(c.u)?;
            let v = endpoint(c.v)?;
            if !c.t.is_finite() {
                return Err(InputError::InvalidWeight { line: c.line, weight: c.t });
            }
            if c.t < 0.0 {
                return Err(InputError::NegativeWeight { line: c.line, weight: c.t });
            }
            if c.t > limit {
                return Err(InputError::WeightTooLarge {
                    line: c.line,
                    weight: c.t,
                    limit,
                });
            }
            edges.push(Edge::new(u, v, OrderedFloat(c.t)));
        }

        info!(
            ninjas = nodes,
            source,
            connections = edges.len(),
            queries = queries.len(),
            "request validated"
        );
        Ok(Self {
            nodes,
            source,
            edges,
            queries,
        })
    }

    /// Parses and validates the raw text fields of a request.
    pub fn parse(
        nodes: i64,
        source: i64,
        connections: &str,
        queries: &str,
    ) -> Result<Self, InputError> {
        let connections = parse_connections(connections)?;
        let queries = parse_queries(queries)?;
        Self::new(nodes, source, &connections, queries)
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn edges(&self) -> &[Edge<Cost>] {
        &self.edges
    }

    pub fn queries(&self) -> &[i64] {
        &self.queries
    }

    pub fn graph(&self) -> Result<Graph<Cost>, GraphError> {
        Graph::from_edge_list(self.nodes, &self.edges)
    }
}

fn node_in_range(node: i64, nodes: usize) -> Option<NodeId> {
    usize::try_from(node)
        .ok()
        .filter(|&n| n >= 1 && n <= nodes)
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    u: NodeId,
    v: NodeId,
    weight: f64,
}

/// Edge list with fractional costs, as read from a `u,v,weight` CSV.
#[derive(Clone, Debug)]
pub struct CsvEdges {
    pub nodes: usize,
    pub edges: Vec<Edge<Cost>>,
}

impl CsvEdges {
    pub fn graph(&self) -> Result<Graph<Cost>, GraphError> {
        Graph::from_edge_list(self.nodes, &self.edges)
    }
}

/// Reads a headed `u,v,weight` CSV. Without `nodes`, the largest endpoint is the count.
pub fn read_csv_edges<R: io::Read>(reader: R, nodes: Option<usize>) -> Result<CsvEdges, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for (idx, result) in rdr.deserialize::<EdgeRecord>().enumerate() {
        let record = result?;
        // header is line 1
        let line = idx + 2;
        if !record.weight.is_finite() || record.weight < 0.0 {
            return Err(InputError::InvalidWeight {
                line,
                weight: record.weight,
            });
        }
        edges.push(Edge::new(record.u, record.v, OrderedFloat(record.weight)));
    }

    let nodes = match nodes {
        Some(n) => n,
        None => edges
            .iter()
            .map(|e| e.u.max(e.v))
            .max()
            .ok_or(InputError::NoEdges)?,
    };
    debug!(nodes, edges = edges.len(), "csv edges loaded");
    Ok(CsvEdges { nodes, edges })
}

pub fn load_csv_edges<P: AsRef<Path>>(path: P, nodes: Option<usize>) -> Result<CsvEdges, InputError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_csv_edges(file, nodes)
}
