//! # RouteGraph Core
//!
//! Directed, weighted graph queries over insertion-ordered adjacency lists.
//!
//! The graph is generic over the vertex key (any `Eq + Hash + Clone` type)
//! and over the edge representation (anything implementing [`WeightedEdge`]).
//! On top of the [`AdjacencyGraph`] store, four query algorithms are
//! provided:
//!
//! - **Shortest path**: [`shortest_path`] — Dijkstra's algorithm, with
//!   documented insertion-order tie-breaking.
//! - **Path cost**: [`path_cost`] / [`neighbor_cost`] — cost of an explicit
//!   vertex sequence.
//! - **Walk counting**: [`count_walks`] — walks between two vertices under
//!   a hop limit, an exact hop count, or a cost budget.
//! - **Reachability**: [`depth_first`] — pre-order depth-first visitation.
//!
//! Queries read the graph without mutating it; every fallible operation
//! reports a typed [`Error`]. The design is single-threaded — callers that
//! share a graph across threads must add their own synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use routegraph_core::{count_walks, path_cost, shortest_path};
//! use routegraph_core::{AdjacencyGraph, WalkBound};
//!
//! fn main() -> routegraph_core::Result<()> {
//!     let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
//!     for v in ["A", "B", "C", "D", "E"] {
//!         graph.add_vertex(v);
//!     }
//!     graph.set_edge(&"A", &"B", 5)?;
//!     graph.set_edge(&"B", &"C", 4)?;
//!     graph.set_edge(&"C", &"D", 7)?;
//!     graph.set_edge(&"D", &"C", 8)?;
//!     graph.set_edge(&"D", &"E", 6)?;
//!     graph.set_edge(&"A", &"D", 5)?;
//!     graph.set_edge(&"C", &"E", 2)?;
//!     graph.set_edge(&"E", &"B", 3)?;
//!     graph.set_edge(&"A", &"E", 7)?;
//!
//!     assert_eq!(path_cost(&graph, &["A", "B", "C"])?, 9);
//!     assert_eq!(shortest_path(&graph, &"A", &"C")?, 9);
//!     // Cycles count: a walk may return to where it started.
//!     assert_eq!(shortest_path(&graph, &"B", &"B")?, 9);
//!     assert_eq!(count_walks(&graph, &"C", &"C", WalkBound::AtMostHops(3))?, 2);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod cost;
pub mod count;
pub mod error;
pub mod shortest;
pub mod store;
pub mod traversal;
#[cfg(test)]
mod traversal_tests;
pub mod types;
#[cfg(test)]
mod types_tests;

pub use cost::{neighbor_cost, path_cost};
pub use count::{count_walks, WalkBound};
pub use error::{Error, Result};
pub use shortest::shortest_path;
pub use store::{Adjacency, AdjacencyGraph};
pub use traversal::depth_first;
pub use types::{Edge, WeightedEdge};
