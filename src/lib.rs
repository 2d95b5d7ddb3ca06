//! Shortest paths between atoms of a molecular graph.
//!
//! [`ShortestPaths`] runs one breadth-first search from a start atom and then
//! answers distance, path-count and path queries for every other atom. All
//! equal-length shortest paths are kept implicitly and only built on request.
//!
//! The route arena behind the search is internal; paths are only reachable
//! through the query methods.
//!
//! ```compile_fail
//! use molpaths::route::Routes;
//! ```

// Molecule definition
pub mod molecule;

// Data IO
pub mod loader;

// Edge list to neighbor lists
pub mod adjacency;

// The hard bit: lazy route DAG and the search that builds it
mod route;
pub mod shortest_paths;

// Queries by atom handle
pub mod keys;

mod error;

// Python library
#[cfg(feature = "python")]
pub mod python;

pub use adjacency::AdjacencyList;
pub use error::{Error, Result};
pub use keys::{KeyedPaths, VertexKeys};
pub use shortest_paths::{ShortestPaths, INFINITY};
