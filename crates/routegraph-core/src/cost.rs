//! Path cost evaluation over explicit vertex sequences.

use crate::error::{Error, Result};
use crate::store::Adjacency;
use crate::types::WeightedEdge;

/// Returns the cost of the unique direct edge from `start` to `destination`.
///
/// # Errors
///
/// Returns [`Error::NoSuchVertex`] if `start` is absent from the graph, or
/// [`Error::NoSuchEdge`] if `destination` is not a direct neighbor of
/// `start`.
pub fn neighbor_cost<V, G>(graph: &G, start: &V, destination: &V) -> Result<i64>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    graph
        .outgoing(start)?
        .iter()
        .find(|edge| edge.terminal() == destination)
        .map(WeightedEdge::weight)
        .ok_or(Error::NoSuchEdge)
}

/// Returns the accumulated cost of following `path` edge by edge.
///
/// # Errors
///
/// Returns [`Error::PathTooShort`] if `path` has fewer than two vertices,
/// or propagates [`Error::NoSuchEdge`] if any consecutive pair is not
/// directly connected (there is no such path).
///
/// # Example
///
/// ```rust
/// use routegraph_core::{path_cost, AdjacencyGraph};
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v);
/// }
/// graph.set_edge(&"A", &"B", 5).unwrap();
/// graph.set_edge(&"B", &"C", 4).unwrap();
///
/// assert_eq!(path_cost(&graph, &["A", "B", "C"]).unwrap(), 9);
/// ```
pub fn path_cost<V, G>(graph: &G, path: &[V]) -> Result<i64>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    if path.len() < 2 {
        return Err(Error::PathTooShort);
    }

    let mut total = 0i64;
    for pair in path.windows(2) {
        total += neighbor_cost(graph, &pair[0], &pair[1])?;
    }
    Ok(total)
}
