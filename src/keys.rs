//! Query shortest paths by external keys instead of dense vertex ids.
//!
//! A graph source owns the mapping between its own handles (for a
//! [`Molecule`], petgraph node indices) and the dense ids the search works on.
//! [`VertexKeys`] exposes that mapping; [`KeyedPaths`] answers the usual
//! queries through it. A key that does not resolve behaves exactly like an
//! out-of-range id: no path, zero paths, infinite distance.

use petgraph::graph::NodeIndex;

use crate::{
    molecule::{Atom, Index, Molecule},
    shortest_paths::ShortestPaths,
};

/// Two-way mapping between external keys and dense vertex ids.
pub trait VertexKeys {
    type Key: Copy;

    /// Dense id of `key`, or `None` if the key is not in the graph.
    fn vertex_of(&self, key: Self::Key) -> Option<usize>;

    /// Key of the vertex with dense id `v`, or `None` if there is none.
    fn key_of(&self, v: usize) -> Option<Self::Key>;
}

impl VertexKeys for Molecule {
    type Key = NodeIndex<Index>;

    fn vertex_of(&self, key: Self::Key) -> Option<usize> {
        self.atom_id(key)
    }

    fn key_of(&self, v: usize) -> Option<Self::Key> {
        (v < self.atom_count()).then(|| NodeIndex::new(v))
    }
}

/// [`ShortestPaths`] queried through a [`VertexKeys`] resolver.
pub struct KeyedPaths<'a, R> {
    paths: &'a ShortestPaths,
    keys: &'a R,
}

impl<'a, R: VertexKeys> KeyedPaths<'a, R> {
    pub fn new(paths: &'a ShortestPaths, keys: &'a R) -> Self {
        Self { paths, keys }
    }

    // usize::MAX is never a vertex, so misses fall through to the
    // out-of-range handling of the id-keyed queries.
    fn id(&self, key: R::Key) -> usize {
        self.keys.vertex_of(key).unwrap_or(usize::MAX)
    }

    pub fn distance_to(&self, end: R::Key) -> u32 {
        self.paths.distance_to(self.id(end))
    }

    pub fn n_paths_to(&self, end: R::Key) -> u64 {
        self.paths.n_paths_to(self.id(end))
    }

    pub fn path_to(&self, end: R::Key) -> Vec<usize> {
        self.paths.path_to(self.id(end))
    }

    pub fn paths_to(&self, end: R::Key) -> Vec<Vec<usize>> {
        self.paths.paths_to(self.id(end))
    }

    /// The first shortest path to `end`, as keys.
    pub fn keys_to(&self, end: R::Key) -> Vec<R::Key> {
        self.keys_to_id(self.id(end))
    }

    /// The first shortest path to vertex `end`, as keys.
    ///
    /// Empty if any vertex on the path has no key.
    pub fn keys_to_id(&self, end: usize) -> Vec<R::Key> {
        self.paths
            .path_to(end)
            .into_iter()
            .map(|v| self.keys.key_of(v))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}

impl KeyedPaths<'_, Molecule> {
    /// The atoms along the first shortest path to `end`.
    pub fn atoms_to(&self, end: NodeIndex<Index>) -> Vec<Atom> {
        self.paths
            .path_to(self.id(end))
            .into_iter()
            .map(|v| self.keys.atom(v).copied())
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}
