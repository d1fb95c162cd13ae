//! Travel times between terminal locations.
//!
//! An [`AdjacencyMatrix`] holds the validated direct walking times between
//! locations, in minutes, with `None` marking pairs that have no direct
//! connection. [`compute_shortest_paths`] derives the all-pairs
//! [`ShortestPathMatrix`] once per terminal; the result is read-only and may
//! be shared across planning requests through [`SharedPathMatrix`].

mod adjacency;
mod error;
mod shared;
mod shortest;

pub use adjacency::AdjacencyMatrix;
pub use error::MatrixError;
pub use shared::SharedPathMatrix;
pub use shortest::{ShortestPathMatrix, compute_shortest_paths};

/// Offset of `(from, to)` in a row-major square table of side `size`.
const fn cell(size: usize, from: usize, to: usize) -> Option<usize> {
    if from < size && to < size {
        Some(from * size + to)
    } else {
        None
    }
}
