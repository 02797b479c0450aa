//! Error types shared across the crate. Structural problems with the road
//! network (edges pointing at nodes which were never added, negative lengths)
//! are surfaced to the caller rather than skipped, as they indicate that the
//! upstream data feed has broken its contract

use thiserror::Error;

/// Convenient result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An edge or critical edge referenced a node which is not in the graph
    #[error("node {id} is not present in the graph")]
    UnknownNode { id: i64 },

    /// A node was added twice, or a sentinel id was reused
    #[error("node {id} has already been added to the graph")]
    DuplicateNode { id: i64 },

    /// Edge lengths are physical distances, so must be finite and >= 0
    #[error("edge {from} -> {to} has an invalid length of {length}")]
    InvalidEdgeLength { from: i64, to: i64, length: f64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
