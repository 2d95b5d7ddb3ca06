//! Small hand-built graphs with known shortest paths.

use molpaths::{AdjacencyList, Error, ShortestPaths, INFINITY};

fn search(n: usize, edges: &[(usize, usize)], start: usize) -> ShortestPaths {
    let adj = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
    ShortestPaths::new(&adj, start).unwrap()
}

#[test]
fn triangle() {
    let sp = search(3, &[(0, 1), (1, 2), (0, 2)], 0);
    assert_eq!(sp.distance_to(2), 1);
    // The direct bond is found before the two-bond detour.
    assert_eq!(sp.n_paths_to(2), 1);
    assert_eq!(sp.path_to(2), vec![0, 2]);
}

#[test]
fn four_cycle() {
    let sp = search(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], 0);
    assert_eq!(sp.distance_to(2), 2);
    assert_eq!(sp.n_paths_to(2), 2);
    assert_eq!(sp.paths_to(2), vec![vec![0, 1, 2], vec![0, 3, 2]]);
}

#[test]
fn four_cycle_reversed_bond_order() {
    // Listing the 0-3 bond first makes the path through 3 the first one.
    let sp = search(4, &[(3, 0), (2, 3), (1, 2), (0, 1)], 0);
    assert_eq!(sp.paths_to(2), vec![vec![0, 3, 2], vec![0, 1, 2]]);
    assert_eq!(sp.path_to(2), vec![0, 3, 2]);
}

#[test]
fn disconnected() {
    let sp = search(4, &[(0, 1), (2, 3)], 0);
    assert_eq!(sp.distance_to(2), INFINITY);
    assert!(sp.path_to(2).is_empty());
    assert!(sp.paths_to(2).is_empty());
    assert_eq!(sp.n_paths_to(2), 0);
    assert_eq!(sp.path_to(1), vec![0, 1]);
}

#[test]
fn single_atom() {
    let sp = search(1, &[], 0);
    assert_eq!(sp.distance_to(0), 0);
    assert_eq!(sp.path_to(0), vec![0]);
    assert_eq!(sp.n_paths_to(0), 1);
}

#[test]
fn no_atoms() {
    let adj = AdjacencyList::from_edges(0, []).unwrap();
    let sp = ShortestPaths::new(&adj, 0).unwrap();
    for end in [0, 1, usize::MAX] {
        assert_eq!(sp.distance_to(end), INFINITY);
        assert_eq!(sp.n_paths_to(end), 0);
        assert!(sp.path_to(end).is_empty());
        assert!(sp.paths_to(end).is_empty());
    }
}

#[test]
fn connectivity_by_distance() {
    let n = 5;
    let sp = search(n, &[(0, 1), (1, 2), (3, 4)], 0);
    let connected: Vec<usize> = (0..n).filter(|&v| (sp.distance_to(v) as usize) < n).collect();
    assert_eq!(connected, vec![0, 1, 2]);
}

#[test]
fn distance_indexes_end_of_path() {
    let sp = search(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], 0);
    for end in 0..5 {
        let path = sp.path_to(end);
        assert_eq!(path[sp.distance_to(end) as usize], end);
    }
}

#[test]
fn construction_errors() {
    assert_eq!(
        AdjacencyList::from_edges(2, [(0, 5)]).unwrap_err(),
        Error::InvalidEdge { index: 0, v: 0, w: 5, n: 2 }
    );
    let adj = AdjacencyList::from_edges(2, [(0, 1)]).unwrap();
    assert!(matches!(
        ShortestPaths::new(&adj, 9),
        Err(Error::InvalidStart { start: Some(9), n: 2 })
    ));
}
