use std::fmt::Display;
use std::io;

use csv::Writer;

use crate::graph::Weight;
use crate::names::Names;
use crate::paths::{Distance, ShortestPaths};
use crate::query::{QueryOutcome, QueryResult};

pub fn format_outcome<W: Display>(outcome: &QueryOutcome<W>) -> String {
    match outcome {
        QueryOutcome::Reached(d) => format!("{} ms", d),
        QueryOutcome::Unreachable => String::from("UNREACHABLE"),
        QueryOutcome::Invalid => String::from("INVALID"),
    }
}

/// One `name: outcome` line per query.
pub fn result_lines<W: Display>(results: &[QueryResult<W>], names: &Names) -> Vec<String> {
    results
        .iter()
        .map(|r| format!("{}: {}", names.name(r.target), format_outcome(&r.outcome)))
        .collect()
}

/// Writes `node_id,name,distance` rows in arrival order, then unreachable nodes if asked.
/// Returns the number of rows written.
pub fn write_distances_csv<W, O>(
    out: O,
    paths: &ShortestPaths<W>,
    names: &Names,
    include_unreachable: bool,
) -> Result<usize, csv::Error>
where
    W: Weight + Display,
    O: io::Write,
{
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["node_id", "name", "distance"])?;

    let mut rows = 0;
    for (node, d) in paths.arrival_order() {
        wtr.write_record(&[node.to_string(), names.name(node as i64), d.to_string()])?;
        rows += 1;
    }
    if include_unreachable {
        for (node, d) in paths.distances() {
            if d == Distance::Unreachable {
                wtr.write_record(&[node.to_string(), names.name(node as i64), d.to_string()])?;
                rows += 1;
            }
        }
    }
    wtr.flush()?;
    Ok(rows)
}
