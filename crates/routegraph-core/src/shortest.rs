//! Single-pair shortest-path distance via Dijkstra's algorithm.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::store::Adjacency;
use crate::types::WeightedEdge;

/// Sentinel recorded for a vertex no route has reached yet.
const UNREACHED: i64 = i64::MAX;

/// Returns the minimum cost of any route from `start` to `destination`.
///
/// Classic scan-and-relax Dijkstra over the vertex mapping: every distance
/// starts at an "unreached" sentinel, `start`'s direct edges seed the map,
/// and exactly `vertex_count()` rounds each pick the unvisited vertex with
/// the smallest recorded distance and relax its outgoing edges. The
/// minimum scan walks vertices in insertion order, so ties go to the vertex
/// inserted first. Results are undefined for negative edge weights.
///
/// `shortest_path(graph, v, v)` is deliberately not zero: the start's own
/// distance stays unreached unless some cycle returns to it, so the result
/// is the minimum-weight cycle through `v` — or `NoSuchPath` if none
/// exists.
///
/// # Errors
///
/// Returns [`Error::NoSuchVertex`] if `start` or `destination` is absent,
/// or [`Error::NoSuchPath`] if `destination`'s distance is still unreached
/// after the scan.
///
/// # Example
///
/// ```rust
/// use routegraph_core::{shortest_path, AdjacencyGraph};
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v);
/// }
/// graph.set_edge(&"A", &"B", 5).unwrap();
/// graph.set_edge(&"A", &"C", 10).unwrap();
/// graph.set_edge(&"B", &"C", 4).unwrap();
///
/// assert_eq!(shortest_path(&graph, &"A", &"C").unwrap(), 9);
/// ```
pub fn shortest_path<V, G>(graph: &G, start: &V, destination: &V) -> Result<i64>
where
    V: Eq + Hash,
    G: Adjacency<V>,
{
    if !graph.contains(start) || !graph.contains(destination) {
        return Err(Error::NoSuchVertex);
    }
    tracing::debug!(vertices = graph.vertex_count(), "shortest-path scan");

    let order = graph.vertex_order();

    // Every vertex starts unreached, then start's direct edges seed the map.
    // The start itself stays unreached unless a cycle comes back to it.
    let mut distances: HashMap<&V, i64> =
        order.iter().map(|vertex| (*vertex, UNREACHED)).collect();
    for edge in graph.outgoing(start)? {
        distances.insert(edge.terminal(), edge.weight());
    }

    let mut visited: HashSet<&V> = HashSet::with_capacity(order.len());
    visited.insert(start);
    let mut current = start;

    for _ in 0..graph.vertex_count() {
        // Pick the unvisited vertex closest to start; first minimum in
        // insertion order wins ties. When nothing reachable remains,
        // `current` keeps its previous value and relaxation is a no-op.
        let mut min = UNREACHED;
        for &vertex in &order {
            let recorded = distances.get(vertex).copied().unwrap_or(UNREACHED);
            if !visited.contains(vertex) && recorded < min {
                current = vertex;
                min = recorded;
            }
        }

        visited.insert(current);

        // Relax: saturating keeps the sentinel in place of the unbounded
        // arithmetic overflow the textbook form would hit here.
        for edge in graph.outgoing(current)? {
            let through = min.saturating_add(edge.weight());
            if through < distances.get(edge.terminal()).copied().unwrap_or(UNREACHED) {
                distances.insert(edge.terminal(), through);
            }
        }
    }

    match distances.get(destination).copied().unwrap_or(UNREACHED) {
        UNREACHED => Err(Error::NoSuchPath),
        distance => Ok(distance),
    }
}
