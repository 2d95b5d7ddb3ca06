//! Lazy, shareable representation of every shortest path to a vertex.
//!
//! A route is a node in an append-only arena. `Source` marks the start vertex,
//! `Sequential` extends its parent by one vertex, and `Branch` joins two
//! equal-length routes to the same vertex. Routes to different vertices share
//! their common prefixes, so the arena is a DAG rather than one tree per
//! vertex. Nothing is materialized until [`Routes::to_path`] or
//! [`Routes::to_paths`] is called.
//!
//! Both materializers take `dist`, the BFS distance of every vertex, and write
//! each vertex into slot `dist[vertex]` of a path of length `len`. Distances
//! strictly increase along a route, so every slot is written exactly once.

/// Handle to a node in a [`Routes`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(usize);

/// One node of the route DAG.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    /// The start vertex.
    Source(usize),
    /// `vertex` appended to every path of `parent`.
    Sequential { parent: RouteId, vertex: usize },
    /// Two equal-length routes to the same vertex. `primary` was found first.
    Branch {
        primary: RouteId,
        alternative: RouteId,
    },
}

/// Arena owning every [`Route`] created by one search.
#[derive(Debug, Clone, Default)]
pub struct Routes {
    nodes: Vec<Route>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, route: Route) -> RouteId {
        self.nodes.push(route);
        RouteId(self.nodes.len() - 1)
    }

    /// Start a route at `vertex`.
    pub fn source(&mut self, vertex: usize) -> RouteId {
        self.push(Route::Source(vertex))
    }

    /// Extend `parent` by `vertex`.
    pub fn append(&mut self, parent: RouteId, vertex: usize) -> RouteId {
        self.push(Route::Sequential { parent, vertex })
    }

    /// Join an existing route with a newly found one of equal length.
    pub fn branch(&mut self, primary: RouteId, alternative: RouteId) -> RouteId {
        self.push(Route::Branch {
            primary,
            alternative,
        })
    }

    /// Panics if `id` was not created by this arena.
    pub fn get(&self, id: RouteId) -> Route {
        self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Materialize the first path of `id`, following `primary` at every
    /// branch. The result has `len` vertices.
    ///
    /// Panics if `id` belongs to another arena, or if `len` or `dist` do not
    /// come from the search that built this arena.
    pub fn to_path(&self, id: RouteId, len: usize, dist: &[u32]) -> Vec<usize> {
        let mut path = vec![0; len];
        let mut cur = id;
        loop {
            match self.get(cur) {
                Route::Source(v) => {
                    path[0] = v;
                    return path;
                }
                Route::Sequential { parent, vertex } => {
                    path[dist[vertex] as usize] = vertex;
                    cur = parent;
                }
                Route::Branch { primary, .. } => cur = primary,
            }
        }
    }

    /// Materialize every path of `id`, primary paths before alternatives.
    ///
    /// The number of paths doubles with every branch, so check the path count
    /// before calling this on highly symmetric graphs.
    pub fn to_paths(&self, id: RouteId, len: usize, dist: &[u32]) -> Vec<Vec<usize>> {
        // Work is kept on the heap: a chain of sequential routes is stamped in
        // one pass, and branches push their two sides as separate frames.
        let mut frames = vec![Frame::Visit(id)];
        let mut done: Vec<Vec<Vec<usize>>> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit(id) => {
                    let mut stamps = Vec::new();
                    let mut cur = id;
                    while let Route::Sequential { parent, vertex } = self.get(cur) {
                        stamps.push((dist[vertex] as usize, vertex));
                        cur = parent;
                    }
                    if !stamps.is_empty() {
                        frames.push(Frame::Stamp(stamps));
                    }
                    match self.get(cur) {
                        Route::Branch {
                            primary,
                            alternative,
                        } => {
                            frames.push(Frame::Concat);
                            frames.push(Frame::Visit(alternative));
                            frames.push(Frame::Visit(primary));
                        }
                        _ => done.push(vec![self.to_path(cur, len, dist)]),
                    }
                }
                Frame::Stamp(stamps) => {
                    if let Some(paths) = done.last_mut() {
                        for path in paths.iter_mut() {
                            for &(i, vertex) in &stamps {
                                path[i] = vertex;
                            }
                        }
                    }
                }
                Frame::Concat => {
                    let alternative = done.pop().unwrap_or_default();
                    if let Some(primary) = done.last_mut() {
                        primary.extend(alternative);
                    }
                }
            }
        }

        done.pop().unwrap_or_default()
    }
}

/// Pending step of [`Routes::to_paths`].
enum Frame {
    /// Materialize the paths of a route.
    Visit(RouteId),
    /// Write `(slot, vertex)` pairs into every path of the latest result.
    Stamp(Vec<(usize, usize)>),
    /// Append the latest result to the one before it.
    Concat,
}
