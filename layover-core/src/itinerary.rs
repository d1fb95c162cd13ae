//! Ordered walking plans from arrival to departure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when rebuilding an [`Itinerary`] from a list of stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// An itinerary needs both an arrival and a departure stop.
    #[error("itinerary has {count} stops; at least arrival and departure are required")]
    TooFewStops {
        /// Number of stops supplied.
        count: usize,
    },
    /// The first stop is the arrival, which is not walked to.
    #[error("arrival stop records {minutes} travel minutes; expected 0")]
    ArrivalTravel {
        /// Travel minutes found on the first stop.
        minutes: u64,
    },
}

/// One stop of an [`Itinerary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stop {
    /// Location id of the stop.
    pub location: usize,
    /// Minutes walked from the previous stop. Zero for the arrival.
    pub travel_minutes: u64,
}

/// A plan starting at the arrival location and ending at the departure
/// location, with zero or more visits in between.
///
/// The planner always records both ends. A stop list read back from JSON is
/// checked for the same shape through `TryFrom<Vec<Stop>>`.
///
/// # Examples
/// ```
/// use layover_core::{AdjacencyMatrix, build_itinerary, compute_shortest_paths};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let adjacency = AdjacencyMatrix::from_rows(&[vec![Some(0), Some(6)], vec![Some(6), Some(0)]])?;
/// let paths = compute_shortest_paths(&adjacency);
/// let itinerary = build_itinerary(0, 1, 60, &Default::default(), &paths, 45, 40)?;
///
/// assert_eq!(itinerary.len(), 2);
/// assert_eq!(itinerary.arrival().location, 0);
/// assert_eq!(itinerary.departure().travel_minutes, 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<Stop>", try_from = "Vec<Stop>")
)]
pub struct Itinerary {
    arrival: usize,
    visits: Vec<Stop>,
    departure: Stop,
}

impl Itinerary {
    /// Begin an itinerary at `arrival`.
    pub(crate) const fn start(arrival: usize) -> Draft {
        Draft {
            arrival,
            visits: Vec::new(),
        }
    }

    /// The arrival stop. Its travel time is always zero.
    #[must_use]
    pub const fn arrival(&self) -> Stop {
        Stop {
            location: self.arrival,
            travel_minutes: 0,
        }
    }

    /// The intermediate visits in order.
    #[must_use]
    pub fn visits(&self) -> &[Stop] {
        &self.visits
    }

    /// The final stop at the departure location.
    #[must_use]
    pub const fn departure(&self) -> Stop {
        self.departure
    }

    /// All stops in order, arrival and departure included.
    pub fn stops(&self) -> impl Iterator<Item = Stop> + '_ {
        std::iter::once(self.arrival())
            .chain(self.visits.iter().copied())
            .chain(std::iter::once(self.departure))
    }

    /// Number of stops, arrival and departure included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len() + 2
    }

    /// Always `false`; an itinerary holds at least its two ends.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Total walking time across every leg.
    #[must_use]
    pub fn travel_minutes(&self) -> u64 {
        self.stops().map(|stop| stop.travel_minutes).sum()
    }

    /// Walking time plus `visit_minutes` spent at each intermediate stop.
    #[must_use]
    pub fn total_minutes(&self, visit_minutes: u64) -> u64 {
        let visits = u64::try_from(self.visits.len()).unwrap_or(u64::MAX);
        self.travel_minutes()
            .saturating_add(visits.saturating_mul(visit_minutes))
    }
}

impl From<Itinerary> for Vec<Stop> {
    fn from(itinerary: Itinerary) -> Self {
        itinerary.stops().collect()
    }
}

impl TryFrom<Vec<Stop>> for Itinerary {
    type Error = ItineraryError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        let count = stops.len();
        let mut remaining = stops.into_iter();
        let (Some(arrival), Some(departure)) = (remaining.next(), remaining.next_back()) else {
            return Err(ItineraryError::TooFewStops { count });
        };
        if arrival.travel_minutes != 0 {
            return Err(ItineraryError::ArrivalTravel {
                minutes: arrival.travel_minutes,
            });
        }
        Ok(Self {
            arrival: arrival.location,
            visits: remaining.collect(),
            departure,
        })
    }
}

/// An itinerary that has not reached its departure yet.
#[derive(Debug)]
pub(crate) struct Draft {
    arrival: usize,
    visits: Vec<Stop>,
}

impl Draft {
    pub(crate) fn visit(&mut self, location: usize, travel_minutes: u64) {
        self.visits.push(Stop {
            location,
            travel_minutes,
        });
    }

    pub(crate) fn finish(self, departure: usize, travel_minutes: u64) -> Itinerary {
        Itinerary {
            arrival: self.arrival,
            visits: self.visits,
            departure: Stop {
                location: departure,
                travel_minutes,
            },
        }
    }
}
