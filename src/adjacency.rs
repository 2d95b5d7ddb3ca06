//! Compact adjacency-list representation of an undirected graph.
//!
//! Neighbors are stored in the order edges were supplied. That order decides
//! which of several equal-length shortest paths is discovered first, so it is
//! preserved exactly and never sorted.

use tracing::debug;

use crate::{
    error::{Error, Result},
    molecule::Molecule,
};

/// Initial per-vertex capacity; buffers double as needed and are trimmed to
/// the exact degree once all edges are in.
const INITIAL_DEGREE: usize = 4;

/// Neighbor lists indexed by dense vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyList {
    adjacent: Vec<Box<[usize]>>,
}

impl AdjacencyList {
    /// Build the adjacency list of a graph on `n` vertices from its edges.
    ///
    /// Each edge `(v, w)` appends `w` to `v`'s neighbors and `v` to `w`'s.
    /// Fails with [`Error::InvalidEdge`] on the first edge naming a vertex
    /// outside `0..n`.
    ///
    /// Repeated edges are kept. Shortest paths are counted as edge sequences,
    /// so paths are only distinct as vertex sequences on a simple graph; a
    /// doubled edge yields the same vertex sequence twice.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph: Vec<Vec<usize>> = (0..n)
            .map(|_| Vec::with_capacity(INITIAL_DEGREE))
            .collect();
        let mut n_edges = 0;

        for (index, (v, w)) in edges.into_iter().enumerate() {
            if v >= n || w >= n {
                return Err(Error::InvalidEdge { index, v, w, n });
            }
            graph[v].push(w);
            graph[w].push(v);
            n_edges += 1;
        }

        debug!(vertices = n, edges = n_edges, "built adjacency list");

        Ok(Self {
            adjacent: graph.into_iter().map(Vec::into_boxed_slice).collect(),
        })
    }

    /// Build the adjacency list of a molecule's bond graph.
    ///
    /// Fails with [`Error::InvalidInput`] if no molecule is given.
    pub fn from_molecule(mol: Option<&Molecule>) -> Result<Self> {
        let mol = mol.ok_or(Error::InvalidInput)?;
        Self::from_edges(mol.atom_count(), mol.bonds())
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Neighbors of `v` in edge order; empty if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacent.get(v).map(|ws| &ws[..]).unwrap_or(&[])
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Return `true` iff `v` and `w` share an edge.
    pub fn is_adjacent(&self, v: usize, w: usize) -> bool {
        self.neighbors(v).contains(&w)
    }
}
