//! Facade crate for the layover itinerary engine.
//!
//! This crate re-exports the core domain types: terminal data, the
//! shortest-path matrix, the interest filter and the greedy planner.

#![forbid(unsafe_code)]

pub use layover_core::{
    AdjacencyMatrix, CandidateSet, Category, DEFAULT_SAFETY_BUFFER_MINUTES, DEFAULT_VISIT_MINUTES,
    InterestFilter, Itinerary, ItineraryError, ItineraryPlanner, Location, MatrixError, PlanError,
    PlanRequest, Planner, SharedPathMatrix, ShortestPathMatrix, Stop, Tags, Terminal,
    TerminalError, build_itinerary, compute_shortest_paths, find_candidates,
};

#[cfg(feature = "serde")]
pub use layover_core::TerminalSpec;

#[cfg(feature = "test-support")]
pub use layover_core::test_support;
