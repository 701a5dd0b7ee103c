//! Error types for graph construction and query operations.

use thiserror::Error;

/// Failure kinds surfaced by graph operations.
///
/// Every fallible operation in this crate reports one of these variants.
/// All of them are ordinary, expected results the caller handles per the
/// operation's contract; none are retried or recovered internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation referenced a vertex key absent from the graph.
    #[error("vertex not in graph")]
    NoSuchVertex,

    /// A direct-adjacency lookup or edge deletion found no matching edge.
    #[error("no such edge")]
    NoSuchEdge,

    /// An edge insertion targeted an already connected (start, destination) pair.
    #[error("edge already exists between vertices")]
    DuplicateEdge,

    /// A path-cost evaluation was given fewer than two vertices.
    #[error("path too short")]
    PathTooShort,

    /// No route exists between the queried endpoints.
    #[error("no such path")]
    NoSuchPath,

    /// A neighbor-successor query asked for the edge after the last one in a
    /// vertex's sequence.
    #[error("no more neighbors accessible after the given vertex")]
    NoMoreNeighbors,

    /// An edge vanished between the start and completion of a single query.
    #[error("edge deleted during graph state read")]
    ConcurrentMutation,
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
