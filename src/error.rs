//! Errors raised while building shortest-path results.
//!
//! Only construction can fail. Queries against a finished
//! [`ShortestPaths`](crate::ShortestPaths) never error: a missing or
//! unreachable end vertex is reported as an empty path, a zero path count or
//! an infinite distance.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No graph source was supplied.
    #[error("graph source was absent")]
    InvalidInput,

    /// An edge names a vertex outside `0..n`.
    #[error("bond at index {index} ({v}, {w}) contained an atom not present in a graph of {n} atoms")]
    InvalidEdge {
        index: usize,
        v: usize,
        w: usize,
        n: usize,
    },

    /// The start vertex could not be resolved in a non-empty graph.
    #[error("invalid start vertex {}: atom not found in a graph of {n} atoms", describe(.start))]
    InvalidStart { start: Option<usize>, n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

fn describe(start: &Option<usize>) -> String {
    match start {
        Some(s) => s.to_string(),
        None => "(unresolved)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = Error::InvalidEdge { index: 3, v: 1, w: 9, n: 4 };
        assert_eq!(
            e.to_string(),
            "bond at index 3 (1, 9) contained an atom not present in a graph of 4 atoms"
        );
        let e = Error::InvalidStart { start: None, n: 4 };
        assert!(e.to_string().contains("(unresolved)"));
        let e = Error::InvalidStart { start: Some(7), n: 4 };
        assert!(e.to_string().starts_with("invalid start vertex 7"));
    }
}
