use crate::graph::Weight;
use crate::paths::{Distance, ShortestPaths};

/// What a query about one ninja resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome<W> {
    Reached(W),
    /// The ninja exists but no path leads there.
    Unreachable,
    /// The id is outside `1..=N`.
    Invalid,
}

impl<W> QueryOutcome<W> {
    pub fn is_error(&self) -> bool {
        !matches!(self, QueryOutcome::Reached(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryResult<W> {
    pub target: i64,
    pub outcome: QueryOutcome<W>,
}

/// Targets are signed so that `0` and negative ids classify as invalid instead of failing
/// to parse.
pub fn classify<W: Weight>(paths: &ShortestPaths<W>, target: i64) -> QueryOutcome<W> {
    let Ok(node) = usize::try_from(target) else {
        return QueryOutcome::Invalid;
    };
    match paths.distance(node) {
        None => QueryOutcome::Invalid,
        Some(Distance::Unreachable) => QueryOutcome::Unreachable,
        Some(Distance::Reached(d)) => QueryOutcome::Reached(d),
    }
}

/// Answers in query order, duplicates included.
pub fn answer_queries<W: Weight>(paths: &ShortestPaths<W>, targets: &[i64]) -> Vec<QueryResult<W>> {
    targets
        .iter()
        .map(|&target| QueryResult {
            target,
            outcome: classify(paths, target),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn out_of_range_targets_are_invalid() {
        let paths = solve(3, 1, [(1, 2, 5u64), (2, 3, 3)]).unwrap();
        assert_eq!(classify(&paths, 0), QueryOutcome::Invalid);
        assert_eq!(classify(&paths, 4), QueryOutcome::Invalid);
        assert_eq!(classify(&paths, -2), QueryOutcome::Invalid);
        assert_eq!(classify(&paths, 3), QueryOutcome::Reached(8));
    }

    #[test]
    fn answers_keep_query_order() {
        let paths = solve(3, 1, [(1, 2, 5u64)]).unwrap();
        let answers = answer_queries(&paths, &[3, 2, 9, 2]);
        let outcomes: Vec<_> = answers.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                QueryOutcome::Unreachable,
                QueryOutcome::Reached(5),
                QueryOutcome::Invalid,
                QueryOutcome::Reached(5),
            ]
        );
        assert_eq!(answers[2].target, 9);
        assert!(answers[0].outcome.is_error());
        assert!(!answers[1].outcome.is_error());
    }
}
