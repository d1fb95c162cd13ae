//! Validated direct travel times between locations.

use super::{MatrixError, cell};

/// Square table of direct walking times in minutes.
///
/// `get(from, to)` is the time to walk straight from `from` to `to`, or `None`
/// when there is no direct connection. Costs may be asymmetric. The diagonal
/// is always zero and no entry is negative; construction rejects anything
/// else.
///
/// # Examples
/// ```
/// use layover_core::AdjacencyMatrix;
///
/// # fn main() -> Result<(), layover_core::MatrixError> {
/// let matrix = AdjacencyMatrix::from_rows(&[
///     vec![Some(0), Some(4)],
///     vec![None, Some(0)],
/// ])?;
/// assert_eq!(matrix.get(0, 1), Some(4));
/// assert_eq!(matrix.get(1, 0), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    minutes: Vec<Option<u64>>,
}

impl AdjacencyMatrix {
    /// Validate raw signed rows and build a matrix.
    ///
    /// Rows are checked in order; the first problem found is reported.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Empty`] when `rows` is empty.
    /// - [`MatrixError::NotSquare`] when a row length differs from the row
    ///   count.
    /// - [`MatrixError::NonZeroDiagonal`] when a self-distance is not `0`.
    /// - [`MatrixError::NegativeEdge`] when a direct edge is negative.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[Option<i64>]>,
    {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let mut minutes = Vec::with_capacity(size * size);
        for (from, raw) in rows.iter().enumerate() {
            let row = raw.as_ref();
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: size,
                });
            }
            for (to, entry) in row.iter().copied().enumerate() {
                minutes.push(validate_entry(from, to, entry)?);
            }
        }

        Ok(Self { size, minutes })
    }

    /// Number of locations covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no locations. Always `false` for a
    /// validated matrix.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Direct travel time from `from` to `to`.
    ///
    /// Returns `None` when there is no direct edge or either index is out of
    /// range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        cell(self.size, from, to)
            .and_then(|offset| self.minutes.get(offset))
            .copied()
            .flatten()
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u64>]> {
        self.minutes.chunks(self.size)
    }
}

impl TryFrom<Vec<Vec<Option<i64>>>> for AdjacencyMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Option<i64>>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

fn validate_entry(from: usize, to: usize, entry: Option<i64>) -> Result<Option<u64>, MatrixError> {
    if from == to {
        return match entry {
            Some(0) => Ok(Some(0)),
            found => Err(MatrixError::NonZeroDiagonal { index: from, found }),
        };
    }
    entry
        .map(|minutes| {
            u64::try_from(minutes).map_err(|_| MatrixError::NegativeEdge { from, to, minutes })
        })
        .transpose()
}
