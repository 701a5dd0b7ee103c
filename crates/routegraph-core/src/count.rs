//! Bounded counting of walks between two vertices.
//!
//! All three bounds count distinct edge sequences (walks, not simple paths —
//! vertices and edges may repeat, so cycles contribute). The recursion
//! budget is the caller's limit minus one; exploration stops at any vertex
//! once the budget goes negative.

use crate::cost::neighbor_cost;
use crate::error::{Error, Result};
use crate::store::Adjacency;
use crate::types::WeightedEdge;

/// Bounding condition for [`count_walks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkBound {
    /// Walks taking at most this many hops.
    AtMostHops(i64),
    /// Walks taking exactly this many hops.
    ExactHops(i64),
    /// Walks whose accumulated edge cost stays within this budget.
    WithinCost(i64),
}

/// Counts the walks from `start` to `destination` satisfying `bound`.
///
/// Destination checks use value equality on the vertex key. The hop-bounded
/// variants never continue a walk past the destination; the cost-bounded
/// variant does (a walk may both end at and pass through the destination),
/// so its counts are not a superset of the exact-hop counts.
///
/// # Errors
///
/// Returns [`Error::NoSuchVertex`] if `start` or `destination` is absent
/// from the graph before recursion begins. The cost-bounded variant returns
/// [`Error::ConcurrentMutation`] if an edge vanishes from the structure
/// while the count is in progress.
///
/// # Example
///
/// ```rust
/// use routegraph_core::{count_walks, AdjacencyGraph, WalkBound};
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v);
/// }
/// graph.set_edge(&"A", &"B", 5).unwrap();
/// graph.set_edge(&"B", &"C", 4).unwrap();
///
/// let walks = count_walks(&graph, &"A", &"C", WalkBound::AtMostHops(2)).unwrap();
/// assert_eq!(walks, 1);
/// ```
pub fn count_walks<V, G>(graph: &G, start: &V, destination: &V, bound: WalkBound) -> Result<usize>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    if !graph.contains(start) || !graph.contains(destination) {
        return Err(Error::NoSuchVertex);
    }

    // The effective recursion budget is one less than the caller's limit.
    match bound {
        WalkBound::AtMostHops(limit) => walks_at_most(graph, start, destination, limit - 1),
        WalkBound::ExactHops(limit) => walks_exact(graph, start, destination, limit - 1),
        WalkBound::WithinCost(limit) => walks_within_cost(graph, start, destination, limit - 1),
    }
}

/// Walks reaching `destination` while the hop budget stays non-negative.
///
/// A terminal that is the destination counts once and is not recursed into,
/// even if it has further outgoing edges.
fn walks_at_most<V, G>(graph: &G, start: &V, destination: &V, budget: i64) -> Result<usize>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    let mut walks = 0;

    for edge in graph.outgoing(start)? {
        if budget < 0 {
            break;
        }

        if edge.terminal() == destination {
            walks += 1;
        } else if !graph.outgoing(edge.terminal())?.is_empty() {
            walks += walks_at_most(graph, edge.terminal(), destination, budget - 1)?;
        }
    }

    Ok(walks)
}

/// Walks reaching `destination` with the hop budget exactly spent.
///
/// A destination terminal reached with budget remaining is still recursed
/// into like any other vertex, so longer walks through it are found.
fn walks_exact<V, G>(graph: &G, start: &V, destination: &V, budget: i64) -> Result<usize>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    let mut walks = 0;

    for edge in graph.outgoing(start)? {
        if budget < 0 {
            break;
        }

        if budget == 0 && edge.terminal() == destination {
            walks += 1;
        } else if !graph.outgoing(edge.terminal())?.is_empty() {
            walks += walks_exact(graph, edge.terminal(), destination, budget - 1)?;
        }
    }

    Ok(walks)
}

/// Walks reaching `destination` within the cost budget.
///
/// Unlike the hop-bounded variants, a destination hit does not stop the
/// walk: recursion into any terminal with outgoing edges always runs, so
/// a single edge can both close a counted walk and extend the search.
fn walks_within_cost<V, G>(graph: &G, start: &V, destination: &V, budget: i64) -> Result<usize>
where
    V: PartialEq,
    G: Adjacency<V>,
{
    let mut walks = 0;

    for edge in graph.outgoing(start)? {
        if budget < 0 {
            break;
        }

        // Re-read the edge weight through the adjacency lookup; a miss here
        // means the edge vanished mid-count.
        let step = match neighbor_cost(graph, start, edge.terminal()) {
            Ok(step) => step,
            Err(_) => {
                tracing::warn!("edge vanished during cost-bounded walk count");
                return Err(Error::ConcurrentMutation);
            }
        };

        if edge.terminal() == destination {
            if budget - step < 0 {
                // Too costly to count; the walk is not extended either.
                continue;
            }
            walks += 1;
        }

        if !graph.outgoing(edge.terminal())?.is_empty() {
            walks += walks_within_cost(graph, edge.terminal(), destination, budget - step)?;
        }
    }

    Ok(walks)
}
