//! Plan a layover: filter candidates, then sequence them greedily.
//!
//! [`build_itinerary`] is the sequencing step on its own. [`ItineraryPlanner`]
//! combines it with the interest filter over a shared
//! [`ShortestPathMatrix`] and implements [`Planner`].

mod greedy;

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terminal::check_locations;
use crate::{
    Itinerary, Location, MatrixError, ShortestPathMatrix, Tags, Terminal, TerminalError,
    find_candidates,
};

pub use greedy::build_itinerary;

/// Minutes spent at each visited location unless the request says otherwise.
pub const DEFAULT_VISIT_MINUTES: u64 = 45;

/// Minutes reserved for security and boarding unless the request says
/// otherwise.
pub const DEFAULT_SAFETY_BUFFER_MINUTES: u64 = 40;

/// Parameters of a single planning request.
///
/// # Examples
/// ```rust
/// use layover_core::PlanRequest;
///
/// let request = PlanRequest::new(0, 1, 360).with_interests(["food", "lounge"]);
/// assert_eq!(request.visit_minutes, 45);
/// assert_eq!(request.safety_buffer_minutes, 40);
/// assert!(request.interests.contains("food"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Location the traveller arrives at.
    pub arrival: usize,
    /// Location the traveller departs from.
    pub departure: usize,
    /// Total minutes between arrival and departure.
    pub layover_minutes: u64,
    /// Interest tags used to pick candidate locations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Tags,
    /// Minutes spent at each visited location.
    #[cfg_attr(feature = "serde", serde(default = "default_visit_minutes"))]
    pub visit_minutes: u64,
    /// Minutes reserved for security and boarding.
    #[cfg_attr(feature = "serde", serde(default = "default_safety_buffer_minutes"))]
    pub safety_buffer_minutes: u64,
}

#[cfg(feature = "serde")]
const fn default_visit_minutes() -> u64 {
    DEFAULT_VISIT_MINUTES
}

#[cfg(feature = "serde")]
const fn default_safety_buffer_minutes() -> u64 {
    DEFAULT_SAFETY_BUFFER_MINUTES
}

impl PlanRequest {
    /// Build a request with no interests and default visit and buffer times.
    #[must_use]
    pub const fn new(arrival: usize, departure: usize, layover_minutes: u64) -> Self {
        Self {
            arrival,
            departure,
            layover_minutes,
            interests: Tags::new(),
            visit_minutes: DEFAULT_VISIT_MINUTES,
            safety_buffer_minutes: DEFAULT_SAFETY_BUFFER_MINUTES,
        }
    }

    /// Replace the requested interests.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the time spent at each visit.
    #[must_use]
    pub const fn with_visit_minutes(mut self, minutes: u64) -> Self {
        self.visit_minutes = minutes;
        self
    }

    /// Replace the boarding safety buffer.
    #[must_use]
    pub const fn with_safety_buffer_minutes(mut self, minutes: u64) -> Self {
        self.safety_buffer_minutes = minutes;
        self
    }
}

/// Errors returned while planning.
///
/// Every variant is fatal to the request; no partial itinerary is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The terminal data handed to the planner is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] TerminalError),
    /// A location id is not covered by the travel time matrix.
    #[error("location {id} is not part of the terminal")]
    UnknownLocation {
        /// The offending id.
        id: usize,
    },
    /// The departure cannot be reached from the arrival at all.
    #[error("departure {departure} cannot be reached from arrival {arrival}")]
    UnreachableDestination {
        /// Arrival location id.
        arrival: usize,
        /// Departure location id.
        departure: usize,
    },
}

impl From<MatrixError> for PlanError {
    fn from(err: MatrixError) -> Self {
        Self::InvalidInput(TerminalError::Matrix(err))
    }
}

/// Produce an itinerary for a planning request.
///
/// Implementations must be `Send + Sync` so one planner can serve requests
/// from several threads.
pub trait Planner: Send + Sync {
    /// Plan a request.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] when the request cannot be planned.
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError>;
}

/// Greedy nearest-first planner over a terminal's shortest-path matrix.
///
/// The matrix is held behind an [`Arc`] so several planners, or a
/// [`SharedPathMatrix`](crate::SharedPathMatrix) snapshot, can share it.
///
/// # Examples
/// ```rust
/// use layover_core::{AdjacencyMatrix, Category, ItineraryPlanner, Location, PlanRequest,
///     Planner, Terminal};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let terminal = Terminal::new(
///     vec![
///         Location::new(0, "Gate A1", Category::Gate, ["gate"]),
///         Location::new(1, "Cafe", Category::Food, ["coffee"]),
///         Location::new(2, "Gate B7", Category::Gate, ["gate"]),
///     ],
///     AdjacencyMatrix::from_rows(&[
///         vec![Some(0), Some(5), Some(20)],
///         vec![Some(5), Some(0), Some(10)],
///         vec![Some(20), Some(10), Some(0)],
///     ])?,
/// )?;
/// let planner = ItineraryPlanner::new(&terminal);
/// let itinerary = planner.plan(&PlanRequest::new(0, 2, 120).with_interests(["coffee"]))?;
///
/// let stops: Vec<usize> = itinerary.stops().map(|stop| stop.location).collect();
/// assert_eq!(stops, vec![0, 1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    locations: Arc<[Location]>,
    paths: Arc<ShortestPathMatrix>,
}

impl ItineraryPlanner {
    /// Compute the shortest-path matrix for `terminal` and build a planner.
    #[must_use]
    pub fn new(terminal: &Terminal) -> Self {
        Self {
            locations: terminal.locations().into(),
            paths: Arc::new(terminal.shortest_paths()),
        }
    }

    /// Build a planner around an already computed matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidInput`] when `locations` does not have one
    /// entry per matrix row or an id differs from its position.
    pub fn with_paths(
        locations: Vec<Location>,
        paths: Arc<ShortestPathMatrix>,
    ) -> Result<Self, PlanError> {
        check_locations(&locations, paths.len())?;
        Ok(Self {
            locations: locations.into(),
            paths,
        })
    }

    /// Locations known to the planner.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The shortest-path matrix used for planning.
    #[must_use]
    pub const fn paths(&self) -> &Arc<ShortestPathMatrix> {
        &self.paths
    }
}

impl Planner for ItineraryPlanner {
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        let candidates = find_candidates(&self.locations, &request.interests);
        build_itinerary(
            request.arrival,
            request.departure,
            request.layover_minutes,
            &candidates,
            &self.paths,
            request.visit_minutes,
            request.safety_buffer_minutes,
        )
    }
}

#[cfg(test)]
mod tests;
