use std::collections::HashSet;

use molpaths::{AdjacencyList, ShortestPaths, INFINITY};
use proptest::prelude::*;

/// A random simple graph: vertex count, edge list and a start vertex.
fn graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize)> {
    (1usize..14).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..(2 * n)),
            0..n,
        )
            .prop_map(|(n, edges, start)| {
                let mut seen = HashSet::new();
                let edges: Vec<(usize, usize)> = edges
                    .into_iter()
                    .filter(|&(v, w)| v != w && seen.insert((v.min(w), v.max(w))))
                    .collect();
                (n, edges, start)
            })
    })
}

proptest! {
    #[test]
    fn first_path_is_a_shortest_path((n, edges, start) in graph()) {
        let adj = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
        let sp = ShortestPaths::new(&adj, start).unwrap();

        for v in 0..n {
            let path = sp.path_to(v);
            if sp.distance_to(v) == INFINITY {
                prop_assert!(path.is_empty());
                prop_assert_eq!(sp.n_paths_to(v), 0);
                continue;
            }
            prop_assert_eq!(path.len(), sp.distance_to(v) as usize + 1);
            prop_assert_eq!(path[0], start);
            prop_assert_eq!(*path.last().unwrap(), v);
            for pair in path.windows(2) {
                prop_assert!(adj.is_adjacent(pair[0], pair[1]));
            }
            let distinct: HashSet<_> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());
        }
    }

    #[test]
    fn all_paths_match_count((n, edges, start) in graph()) {
        let adj = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
        let sp = ShortestPaths::new(&adj, start).unwrap();

        for v in 0..n {
            let paths = sp.paths_to(v);
            prop_assert_eq!(paths.len() as u64, sp.n_paths_to(v));
            if let Some(first) = paths.first() {
                prop_assert_eq!(first, &sp.path_to(v));
            }
            let distinct: HashSet<_> = paths.iter().collect();
            prop_assert_eq!(distinct.len(), paths.len());
            for path in &paths {
                prop_assert_eq!(path.len(), sp.distance_to(v) as usize + 1);
                prop_assert_eq!(path[0], start);
                prop_assert_eq!(*path.last().unwrap(), v);
                for pair in path.windows(2) {
                    prop_assert!(adj.is_adjacent(pair[0], pair[1]));
                }
            }
        }
    }

    #[test]
    fn queries_are_repeatable((n, edges, start) in graph()) {
        let adj = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
        let sp = ShortestPaths::new(&adj, start).unwrap();

        for v in 0..n + 2 {
            prop_assert_eq!(sp.path_to(v), sp.path_to(v));
            prop_assert_eq!(sp.paths_to(v), sp.paths_to(v));
        }
        prop_assert!(sp.path_to(n).is_empty());
        prop_assert_eq!(sp.distance_to(n), INFINITY);
    }

    #[test]
    fn distances_are_symmetric((n, edges, start) in graph(), other in 0usize..14) {
        let other = other % n;
        let adj = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
        let from_start = ShortestPaths::new(&adj, start).unwrap();
        let from_other = ShortestPaths::new(&adj, other).unwrap();

        prop_assert_eq!(from_start.distance_to(other), from_other.distance_to(start));
        prop_assert_eq!(from_start.n_paths_to(other), from_other.n_paths_to(start));
    }
}
