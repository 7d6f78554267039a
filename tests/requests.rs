use std::io::Write;

use chakra::input::{load_csv_edges, InputError};
use chakra::names::Names;
use chakra::report::result_lines;
use chakra::input::Cost;
use chakra::{answer_queries, Algorithm, Distance, QueryOutcome, Request};
use ordered_float::OrderedFloat;

fn reached(d: f64) -> QueryOutcome<Cost> {
    QueryOutcome::Reached(OrderedFloat(d))
}

fn outcomes(nodes: i64, source: i64, connections: &str, queries: &str) -> Vec<QueryOutcome<Cost>> {
    let request = Request::parse(nodes, source, connections, queries).unwrap();
    let graph = request.graph().unwrap();
    let paths = Algorithm::default().run(&graph, request.source());
    answer_queries(&paths, request.queries())
        .into_iter()
        .map(|r| r.outcome)
        .collect()
}

#[test]
fn chain_request() {
    assert_eq!(
        outcomes(3, 1, "1 2 5\n2 3 3\n", "1\n2\n3\n"),
        vec![
            reached(0.0),
            reached(5.0),
            reached(8.0),
        ]
    );
}

#[test]
fn unreachable_request() {
    assert_eq!(
        outcomes(3, 1, "1 2 5\n", "3\n2\n"),
        vec![QueryOutcome::Unreachable, reached(5.0)]
    );
}

#[test]
fn detour_request() {
    assert_eq!(
        outcomes(4, 2, "1 2 2\n2 3 4\n3 4 1\n1 4 10\n", "1\n2\n3\n4\n"),
        vec![
            reached(2.0),
            reached(0.0),
            reached(4.0),
            reached(5.0),
        ]
    );
}

#[test]
fn out_of_range_queries_are_invalid() {
    assert_eq!(
        outcomes(4, 2, "1 2 2\n", "0\n5\n"),
        vec![QueryOutcome::Invalid, QueryOutcome::Invalid]
    );
}

#[test]
fn malformed_requests_never_reach_the_solver() {
    assert!(matches!(
        Request::parse(3, 1, "1 2 five\n", ""),
        Err(InputError::InvalidNumber { line: 1, .. })
    ));
    assert!(matches!(
        Request::parse(3, 0, "1 2 5\n", ""),
        Err(InputError::SourceOutOfRange { node: 0, .. })
    ));
    assert!(matches!(
        Request::parse(-1, 1, "", ""),
        Err(InputError::NodeCount(-1))
    ));
    assert!(matches!(
        Request::parse(3, 1, "1 2 -5\n", ""),
        Err(InputError::NegativeWeight { line: 1, .. })
    ));
    let max = i64::MAX;
    assert!(matches!(
        Request::parse(4, 1, &format!("1 2 {max}\n2 3 {max}\n3 4 {max}\n"), "4\n"),
        Err(InputError::WeightTooLarge { line: 1, .. })
    ));
}

#[test]
fn fractional_costs_are_accepted() {
    assert_eq!(
        outcomes(3, 1, "1 2 2.5\n2 3 1\n", "3\n2\n"),
        vec![reached(3.5), reached(2.5)]
    );

    let request = Request::parse(3, 1, "1 2 2.5\n2 3 1\n", "3\n").unwrap();
    let paths = Algorithm::Scan.run(&request.graph().unwrap(), request.source());
    let names = Names::in_order(request.nodes());
    assert_eq!(
        result_lines(&answer_queries(&paths, request.queries()), &names),
        vec!["Kakashi: 3.5 ms"]
    );
}

#[test]
fn report_lines_for_a_request() {
    let request = Request::parse(3, 1, "1 2 5\n", "2\n3\n4\n").unwrap();
    let paths = Algorithm::Scan.run(&request.graph().unwrap(), request.source());
    let names = Names::in_order(request.nodes());
    assert_eq!(
        result_lines(&answer_queries(&paths, request.queries()), &names),
        vec!["Sakura: 5 ms", "Kakashi: UNREACHABLE", "Ninja 4: INVALID"]
    );
}

#[test]
fn csv_file_shortest_paths() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "u,v,weight").unwrap();
    writeln!(file, "1,2,1.5").unwrap();
    writeln!(file, "2,3,2.25").unwrap();
    writeln!(file, "1,3,4.0").unwrap();
    file.flush().unwrap();

    let loaded = load_csv_edges(file.path(), None).unwrap();
    let graph = loaded.graph().unwrap();
    let paths = Algorithm::Indexed.run(&graph, 1);
    assert_eq!(
        paths.distance(3).and_then(|d| d.finite()).map(|d| d.into_inner()),
        Some(3.75)
    );
    assert_eq!(paths.distance(1).map(|d| d.is_reachable()), Some(true));
    assert!(!matches!(paths.distance(2), Some(Distance::Unreachable)));
}

#[test]
fn missing_csv_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv_edges(dir.path().join("absent.csv"), None).unwrap_err();
    assert!(matches!(err, InputError::Csv(_)));
}
