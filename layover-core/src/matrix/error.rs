use thiserror::Error;

/// Errors returned when validating an [`AdjacencyMatrix`](super::AdjacencyMatrix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("adjacency matrix must cover at least one location")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Required number of entries.
        expected: usize,
    },
    /// A location's self-distance is not zero.
    #[error("travel time from location {index} to itself must be 0, found {found:?}")]
    NonZeroDiagonal {
        /// Location index.
        index: usize,
        /// The diagonal entry as supplied.
        found: Option<i64>,
    },
    /// A direct edge carries a negative travel time.
    #[error("travel time from {from} to {to} is negative ({minutes})")]
    NegativeEdge {
        /// Source location index.
        from: usize,
        /// Target location index.
        to: usize,
        /// The offending cost in minutes.
        minutes: i64,
    },
}
