//! Single-source shortest paths by breadth-first search.
//!
//! Alongside the distance to every vertex, the search counts how many
//! distinct shortest paths reach it and records them as a DAG of shared
//! routes. Paths are only built when asked for, so counting is cheap even when
//! materializing every path would not be.
//!
//! ```
//! use molpaths::{AdjacencyList, ShortestPaths};
//!
//! // A 4-cycle: 0 - 1 - 2 - 3 - 0.
//! let adj = AdjacencyList::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let sp = ShortestPaths::new(&adj, 0).unwrap();
//!
//! assert_eq!(sp.distance_to(2), 2);
//! assert_eq!(sp.n_paths_to(2), 2);
//! assert_eq!(sp.path_to(2), vec![0, 1, 2]);
//! assert_eq!(sp.paths_to(2), vec![vec![0, 1, 2], vec![0, 3, 2]]);
//! ```

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::{
    adjacency::AdjacencyList,
    error::{Error, Result},
    keys::{KeyedPaths, VertexKeys},
    molecule::{Index, Molecule},
    route::{RouteId, Routes},
};

/// Distance reported for vertices that are unreachable or out of range.
///
/// Any reachable vertex is closer than the vertex count, so
/// `distance_to(v) < n` tests connectivity.
pub const INFINITY: u32 = u32::MAX;

/// Shortest paths from one start vertex to every other vertex of a graph.
///
/// Immutable once built; every query takes `&self`.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: Option<usize>,
    routes: Routes,
    route_to: Vec<Option<RouteId>>,
    dist_to: Vec<u32>,
    n_paths_to: Vec<u64>,
}

impl ShortestPaths {
    /// Search `adj` from vertex `start`.
    ///
    /// A graph with no vertices yields an empty result whatever `start` is.
    /// Otherwise `start` must be a vertex of the graph.
    pub fn new(adj: &AdjacencyList, start: usize) -> Result<Self> {
        Self::search(adj, Some(start))
    }

    /// Search `adj` from the vertex `keys` resolves `start` to.
    pub fn with_keys<R: VertexKeys>(adj: &AdjacencyList, keys: &R, start: R::Key) -> Result<Self> {
        Self::search(adj, keys.vertex_of(start))
    }

    /// Search a molecule's bond graph from atom `start`.
    ///
    /// Fails with [`Error::InvalidInput`] if no molecule is given and with
    /// [`Error::InvalidStart`] if `start` is not one of its atoms. If
    /// shortest paths from several atoms are needed, build the
    /// [`AdjacencyList`] once and call [`ShortestPaths::new`] per atom.
    pub fn from_molecule(mol: Option<&Molecule>, start: NodeIndex<Index>) -> Result<Self> {
        let mol = mol.ok_or(Error::InvalidInput)?;
        let adj = AdjacencyList::from_molecule(Some(mol))?;
        Self::with_keys(&adj, mol, start)
    }

    fn search(adj: &AdjacencyList, start: Option<usize>) -> Result<Self> {
        let n = adj.len();

        // skip computation for empty graphs
        if n == 0 {
            return Ok(Self {
                start: None,
                routes: Routes::new(),
                route_to: Vec::new(),
                dist_to: Vec::new(),
                n_paths_to: Vec::new(),
            });
        }

        let start = match start {
            Some(s) if s < n => s,
            _ => return Err(Error::InvalidStart { start, n }),
        };

        let mut routes = Routes::with_capacity(n);
        let mut route_to = vec![None; n];
        let mut dist_to = vec![INFINITY; n];
        let mut n_paths_to = vec![0u64; n];

        dist_to[start] = 0;
        route_to[start] = Some(routes.source(start));
        n_paths_to[start] = 1;

        let mut queue = VecDeque::with_capacity(n);
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            let dist = dist_to[v] + 1;
            let Some(route_v) = route_to[v] else {
                continue;
            };

            for &w in adj.neighbors(v) {
                if dist < dist_to[w] {
                    dist_to[w] = dist;
                    route_to[w] = Some(routes.append(route_v, w));
                    n_paths_to[w] = n_paths_to[v];
                    queue.push_back(w);
                } else if dist == dist_to[w] {
                    // equal length: the route found first stays primary
                    if let Some(primary) = route_to[w] {
                        let alternative = routes.append(route_v, w);
                        route_to[w] = Some(routes.branch(primary, alternative));
                        n_paths_to[w] = n_paths_to[w].saturating_add(n_paths_to[v]);
                        trace!(vertex = w, via = v, paths = n_paths_to[w], "equal-length path");
                    }
                }
            }
        }

        debug!(
            start,
            vertices = n,
            reached = dist_to.iter().filter(|&&d| d != INFINITY).count(),
            routes = routes.len(),
            "shortest paths computed"
        );

        Ok(Self {
            start: Some(start),
            routes,
            route_to,
            dist_to,
            n_paths_to,
        })
    }

    /// The start vertex, or `None` for an empty graph.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Number of vertices in the searched graph.
    pub fn len(&self) -> usize {
        self.dist_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist_to.is_empty()
    }

    /// Distance to `end`, or [`INFINITY`] if `end` is unreachable or not a
    /// vertex. The distance is also the index of `end` in [`Self::path_to`].
    pub fn distance_to(&self, end: usize) -> u32 {
        self.dist_to.get(end).copied().unwrap_or(INFINITY)
    }

    /// Distance to `end`, or `None` if `end` is unreachable or not a vertex.
    pub fn distance(&self, end: usize) -> Option<u32> {
        Some(self.distance_to(end)).filter(|&d| d != INFINITY)
    }

    pub fn is_reachable(&self, end: usize) -> bool {
        self.route(end).is_some()
    }

    /// Number of shortest paths to `end`, saturating at `u64::MAX`; 0 if
    /// there is no path.
    pub fn n_paths_to(&self, end: usize) -> u64 {
        self.n_paths_to.get(end).copied().unwrap_or(0)
    }

    /// One shortest path from the start to `end`, both inclusive.
    ///
    /// When there are several, the first is the one the search discovered
    /// first, which follows vertex and bond storage order. Empty if there is
    /// no path.
    pub fn path_to(&self, end: usize) -> Vec<usize> {
        match self.route(end) {
            Some(route) => self
                .routes
                .to_path(route, self.dist_to[end] as usize + 1, &self.dist_to),
            None => Vec::new(),
        }
    }

    /// Every shortest path from the start to `end`, starting with
    /// [`Self::path_to`]. Empty if there is no path.
    ///
    /// There are [`Self::n_paths_to`] of them, which doubles with every
    /// branch; check it first on large symmetric graphs.
    pub fn paths_to(&self, end: usize) -> Vec<Vec<usize>> {
        match self.route(end) {
            Some(route) => self
                .routes
                .to_paths(route, self.dist_to[end] as usize + 1, &self.dist_to),
            None => Vec::new(),
        }
    }

    /// View these paths through an external key resolver.
    pub fn keyed<'a, R: VertexKeys>(&'a self, keys: &'a R) -> KeyedPaths<'a, R> {
        KeyedPaths::new(self, keys)
    }

    fn route(&self, end: usize) -> Option<RouteId> {
        self.route_to.get(end).copied().flatten()
    }
}
