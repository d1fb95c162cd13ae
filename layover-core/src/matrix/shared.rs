//! Publish a shortest-path matrix to many concurrent readers.

use std::sync::{Arc, RwLock};

use super::{AdjacencyMatrix, ShortestPathMatrix, compute_shortest_paths};

/// Holder for the current [`ShortestPathMatrix`] of a terminal.
///
/// Readers take an [`Arc`] snapshot and keep using it for the lifetime of a
/// planning request. When the terminal changes, [`SharedPathMatrix::rebuild`]
/// computes the replacement completely before swapping it in, so a reader
/// only ever sees a finished matrix.
///
/// # Examples
/// ```
/// use layover_core::{AdjacencyMatrix, SharedPathMatrix};
///
/// # fn main() -> Result<(), layover_core::MatrixError> {
/// let slow = AdjacencyMatrix::from_rows(&[vec![Some(0), Some(9)], vec![Some(9), Some(0)]])?;
/// let fast = AdjacencyMatrix::from_rows(&[vec![Some(0), Some(2)], vec![Some(2), Some(0)]])?;
///
/// let shared = SharedPathMatrix::from_adjacency(&slow);
/// let before = shared.snapshot();
/// shared.rebuild(&fast);
///
/// assert_eq!(before.get(0, 1), Some(9));
/// assert_eq!(shared.snapshot().get(0, 1), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SharedPathMatrix {
    current: RwLock<Arc<ShortestPathMatrix>>,
}

impl SharedPathMatrix {
    /// Publish an already computed matrix.
    #[must_use]
    pub fn new(matrix: ShortestPathMatrix) -> Self {
        Self {
            current: RwLock::new(Arc::new(matrix)),
        }
    }

    /// Compute and publish the matrix for `adjacency`.
    #[must_use]
    pub fn from_adjacency(adjacency: &AdjacencyMatrix) -> Self {
        Self::new(compute_shortest_paths(adjacency))
    }

    /// Return the matrix currently published.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ShortestPathMatrix> {
        // The slot only ever holds a complete `Arc`, so a poisoned lock still
        // guards a valid matrix.
        let guard = self
            .current
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Recompute the matrix for `adjacency` and swap it in.
    ///
    /// Returns the newly published matrix. Snapshots taken earlier keep the
    /// previous matrix.
    pub fn rebuild(&self, adjacency: &AdjacencyMatrix) -> Arc<ShortestPathMatrix> {
        let fresh = Arc::new(compute_shortest_paths(adjacency));
        log::info!(
            "publishing shortest-path matrix for {} locations",
            fresh.len()
        );
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        fresh
    }
}
