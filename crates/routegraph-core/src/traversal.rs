//! Depth-first reachability over the adjacency structure.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::store::Adjacency;
use crate::types::WeightedEdge;

/// Visits the graph depth-first from `start` and returns the set of
/// reachable vertices, including `start` itself.
///
/// Visitation is pre-order: a vertex is recorded before any of its
/// neighbors is explored, in the neighbors' stored order. Marked-before-
/// recurse makes cycles safe. Each call owns a fresh visited set; the
/// graph is not mutated.
///
/// # Errors
///
/// Returns [`Error::NoSuchVertex`] if `start` is absent from the graph.
pub fn depth_first<V, G>(graph: &G, start: &V) -> Result<HashSet<V>>
where
    V: Eq + Hash + Clone,
    G: Adjacency<V>,
{
    if !graph.contains(start) {
        return Err(Error::NoSuchVertex);
    }
    tracing::trace!(vertices = graph.vertex_count(), "depth-first visit");

    let mut visited = HashSet::new();
    visit(graph, start, &mut visited)?;
    Ok(visited)
}

fn visit<V, G>(graph: &G, current: &V, visited: &mut HashSet<V>) -> Result<()>
where
    V: Eq + Hash + Clone,
    G: Adjacency<V>,
{
    visited.insert(current.clone());

    for edge in graph.outgoing(current)? {
        if !visited.contains(edge.terminal()) {
            visit(graph, edge.terminal(), visited)?;
        }
    }
    Ok(())
}
