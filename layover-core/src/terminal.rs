//! A terminal: its locations plus the direct walking times between them.
//!
//! The terminal is configuration supplied by the caller. The core never
//! carries built-in terminal data.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AdjacencyMatrix, Location, MatrixError, ShortestPathMatrix, compute_shortest_paths};

/// Errors returned by [`Terminal::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// The travel time matrix failed validation.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// The number of locations differs from the matrix dimension.
    #[error("terminal lists {locations} locations but the travel time matrix covers {matrix}")]
    LocationCount {
        /// Number of locations supplied.
        locations: usize,
        /// Matrix dimension.
        matrix: usize,
    },
    /// A location's id does not match its position in the list.
    #[error("location at position {position} has id {id}; ids must equal matrix indices")]
    LocationId {
        /// Position in the location list.
        position: usize,
        /// Id found at that position.
        id: usize,
    },
}

/// Locations of a terminal with their direct walking times.
///
/// Location ids are exactly `0..n`, in order, where `n` is the matrix
/// dimension.
///
/// # Examples
/// ```
/// use layover_core::{AdjacencyMatrix, Category, Location, Terminal};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let terminal = Terminal::new(
///     vec![
///         Location::new(0, "Gate A1", Category::Gate, ["gate"]),
///         Location::new(1, "Cafe", Category::Food, ["coffee"]),
///     ],
///     AdjacencyMatrix::from_rows(&[vec![Some(0), Some(3)], vec![Some(3), Some(0)]])?,
/// )?;
/// assert_eq!(terminal.location(1).map(|l| l.name.as_str()), Some("Cafe"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    locations: Vec<Location>,
    adjacency: AdjacencyMatrix,
}

impl Terminal {
    /// Validate and construct a terminal.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::LocationCount`] when the location list and the
    /// matrix disagree in size, and [`TerminalError::LocationId`] when a
    /// location id does not equal its position.
    pub fn new(locations: Vec<Location>, adjacency: AdjacencyMatrix) -> Result<Self, TerminalError> {
        check_locations(&locations, adjacency.len())?;
        Ok(Self {
            locations,
            adjacency,
        })
    }

    /// Locations ordered by id.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location with the given id.
    #[must_use]
    pub fn location(&self, id: usize) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Direct walking times.
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Compute the all-pairs shortest walking times for this terminal.
    #[must_use]
    pub fn shortest_paths(&self) -> ShortestPathMatrix {
        compute_shortest_paths(&self.adjacency)
    }

    /// Split the terminal into its locations and matrix.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Location>, AdjacencyMatrix) {
        (self.locations, self.adjacency)
    }
}

/// Check that `locations` holds one entry per matrix row and that each id
/// equals its position.
pub(crate) fn check_locations(
    locations: &[Location],
    matrix: usize,
) -> Result<(), TerminalError> {
    if locations.len() != matrix {
        return Err(TerminalError::LocationCount {
            locations: locations.len(),
            matrix,
        });
    }
    match locations
        .iter()
        .enumerate()
        .find(|(position, location)| location.id != *position)
    {
        Some((position, location)) => Err(TerminalError::LocationId {
            position,
            id: location.id,
        }),
        None => Ok(()),
    }
}

/// Serialised form of a [`Terminal`], as stored in terminal documents.
///
/// `adjacency[i][j]` is the direct walking time in minutes from location `i`
/// to location `j`, or `null` when there is no direct connection.
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSpec {
    /// Locations ordered by id.
    pub locations: Vec<Location>,
    /// Direct walking times in minutes.
    pub adjacency: Vec<Vec<Option<i64>>>,
}

#[cfg(feature = "serde")]
impl TryFrom<TerminalSpec> for Terminal {
    type Error = TerminalError;

    fn try_from(spec: TerminalSpec) -> Result<Self, Self::Error> {
        let adjacency = AdjacencyMatrix::from_rows(&spec.adjacency)?;
        Self::new(spec.locations, adjacency)
    }
}
