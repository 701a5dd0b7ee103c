//! Adjacency-list storage for directed weighted graphs.
//!
//! [`AdjacencyGraph`] owns the vertex → outgoing-edge-list mapping that every
//! query algorithm in this crate reads from. Insertion order is significant
//! throughout: it fixes edge iteration order, the first/next-neighbor
//! contract, and the scan order (and therefore tie-breaks) of
//! [`shortest_path`](crate::shortest_path) and
//! [`count_walks`](crate::count_walks).

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::types::{Edge, WeightedEdge};

/// Read access to a directed graph's adjacency structure.
///
/// The query algorithms ([`depth_first`](crate::depth_first),
/// [`count_walks`](crate::count_walks), [`shortest_path`](crate::shortest_path),
/// [`path_cost`](crate::path_cost)) are generic over this trait, so any store
/// exposing ordered outgoing-edge lists can serve them.
///
/// Implementations must yield vertices from [`vertex_order`](Self::vertex_order)
/// in a stable, documented order: minimum-distance scans break ties in favor
/// of the first vertex encountered in that order.
pub trait Adjacency<V> {
    /// Edge representation exposed by this store.
    type Edge: WeightedEdge<V>;

    /// Returns the outgoing edges of `vertex` in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if `vertex` is absent.
    fn outgoing(&self, vertex: &V) -> Result<&[Self::Edge]>;

    /// Returns true if `vertex` is present in the graph.
    fn contains(&self, vertex: &V) -> bool;

    /// Returns every vertex key in the store's documented iteration order.
    fn vertex_order(&self) -> Vec<&V>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;
}

/// A directed, weighted graph backed by insertion-ordered adjacency lists.
///
/// Vertices are identified by an arbitrary `Eq + Hash + Clone` key type.
/// Edges are any [`WeightedEdge`] implementation; the plain [`Edge`] pair is
/// the default.
///
/// A companion mark set is kept for external bookkeeping via
/// [`set_mark`](Self::set_mark) / [`is_marked`](Self::is_marked); the query
/// algorithms never touch it.
///
/// # Example
///
/// ```rust
/// use routegraph_core::AdjacencyGraph;
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.set_edge(&"A", &"B", 5).unwrap();
///
/// assert!(graph.has_edge(&"A", &"B").unwrap());
/// assert_eq!(graph.weight(&"A", &"B").unwrap(), 5);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E = Edge<V>> {
    /// Vertex → outgoing edges, iterated in vertex insertion order.
    vertices: IndexMap<V, Vec<E>>,
    /// Externally managed mark set.
    marks: HashSet<V>,
}

impl<V, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            marks: HashSet::new(),
        }
    }
}

impl<V, E> AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: WeightedEdge<V>,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity for `vertices` keys.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertices),
            marks: HashSet::with_capacity(vertices),
        }
    }

    // ── Structural mutation ────────────────────────────────────────────

    /// Inserts `vertex` with an empty outgoing-edge list.
    ///
    /// Caveat: inserting a key that is already present **overwrites its edge
    /// list**, silently discarding every edge previously recorded from that
    /// vertex. Check [`contains`](Self::contains) first if that is not what
    /// you want.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex, Vec::new());
    }

    /// Appends a directed edge from `start` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if either endpoint is absent, or
    /// [`Error::DuplicateEdge`] if an edge between the pair already exists.
    pub fn set_edge(&mut self, start: &V, destination: &V, weight: i64) -> Result<()> {
        if !self.vertices.contains_key(destination) {
            return Err(Error::NoSuchVertex);
        }
        let edges = self.vertices.get_mut(start).ok_or(Error::NoSuchVertex)?;
        if edges.iter().any(|edge| edge.terminal() == destination) {
            return Err(Error::DuplicateEdge);
        }
        edges.push(E::new(destination.clone(), weight));
        Ok(())
    }

    /// Removes the edge from `start` to `destination`, preserving the
    /// relative order of the remaining edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if either endpoint is absent, or
    /// [`Error::NoSuchEdge`] if no matching edge exists.
    pub fn delete_edge(&mut self, start: &V, destination: &V) -> Result<()> {
        if !self.vertices.contains_key(destination) {
            return Err(Error::NoSuchVertex);
        }
        let edges = self.vertices.get_mut(start).ok_or(Error::NoSuchVertex)?;
        let position = edges
            .iter()
            .position(|edge| edge.terminal() == destination)
            .ok_or(Error::NoSuchEdge)?;
        edges.remove(position);
        Ok(())
    }

    // ── Structural queries ─────────────────────────────────────────────

    /// Returns true if `vertex` is present in the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns the outgoing edges of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if `vertex` is absent.
    pub fn edges(&self, vertex: &V) -> Result<&[E]> {
        self.vertices
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::NoSuchVertex)
    }

    /// Returns true if an edge from `v` to `w` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if either endpoint is absent.
    pub fn has_edge(&self, v: &V, w: &V) -> Result<bool> {
        if !self.vertices.contains_key(w) {
            return Err(Error::NoSuchVertex);
        }
        let edges = self.vertices.get(v).ok_or(Error::NoSuchVertex)?;
        Ok(edges.iter().any(|edge| edge.terminal() == w))
    }

    /// Returns the weight of the edge from `v` to `w`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if either endpoint is absent, or
    /// [`Error::NoSuchEdge`] if the pair is not connected.
    pub fn weight(&self, v: &V, w: &V) -> Result<i64> {
        if !self.vertices.contains_key(w) {
            return Err(Error::NoSuchVertex);
        }
        let edges = self.vertices.get(v).ok_or(Error::NoSuchVertex)?;
        edges
            .iter()
            .find(|edge| edge.terminal() == w)
            .map(WeightedEdge::weight)
            .ok_or(Error::NoSuchEdge)
    }

    /// Returns all vertex keys in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, summed over every outgoing list.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    // ── Neighbor iteration ─────────────────────────────────────────────

    /// Returns the first outgoing edge of `vertex`, or `None` if it has no
    /// edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if `vertex` is absent.
    pub fn first_neighbor(&self, vertex: &V) -> Result<Option<&E>> {
        let edges = self.vertices.get(vertex).ok_or(Error::NoSuchVertex)?;
        Ok(edges.first())
    }

    /// Returns the edge immediately following the edge terminating at `w`
    /// within `v`'s sequence, or `None` if `w` is not a neighbor of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchVertex`] if `v` or `w` is absent from the
    /// graph, or [`Error::NoMoreNeighbors`] if the edge terminating at `w`
    /// is the last one in the sequence (there is no well-defined successor).
    pub fn next_neighbor(&self, v: &V, w: &V) -> Result<Option<&E>> {
        if !self.vertices.contains_key(w) {
            return Err(Error::NoSuchVertex);
        }
        let edges = self.vertices.get(v).ok_or(Error::NoSuchVertex)?;
        match edges.iter().position(|edge| edge.terminal() == w) {
            None => Ok(None),
            Some(i) => match edges.get(i + 1) {
                Some(next) => Ok(Some(next)),
                None => Err(Error::NoMoreNeighbors),
            },
        }
    }

    // ── Marks ──────────────────────────────────────────────────────────

    /// Adds `vertex` to the mark set.
    ///
    /// Marks are external bookkeeping only; no query algorithm reads or
    /// writes them.
    pub fn set_mark(&mut self, vertex: &V) {
        self.marks.insert(vertex.clone());
    }

    /// Returns true if `vertex` is in the mark set.
    #[must_use]
    pub fn is_marked(&self, vertex: &V) -> bool {
        self.marks.contains(vertex)
    }
}

impl<V, E> Adjacency<V> for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: WeightedEdge<V>,
{
    type Edge = E;

    fn outgoing(&self, vertex: &V) -> Result<&[E]> {
        self.edges(vertex)
    }

    fn contains(&self, vertex: &V) -> bool {
        AdjacencyGraph::contains(self, vertex)
    }

    /// Vertex insertion order.
    fn vertex_order(&self) -> Vec<&V> {
        self.vertices.keys().collect()
    }

    fn vertex_count(&self) -> usize {
        AdjacencyGraph::vertex_count(self)
    }
}
