//! Core domain types and algorithms for the layover engine.
//!
//! The crate plans a walk through an airport terminal during a layover:
//!
//! - [`compute_shortest_paths`] turns a validated [`AdjacencyMatrix`] into an
//!   all-pairs [`ShortestPathMatrix`].
//! - [`find_candidates`] selects the non-gate [`Location`]s whose tags match
//!   the traveller's interests.
//! - [`build_itinerary`] greedily sequences candidates into an [`Itinerary`]
//!   that always ends at the departure gate in time.
//!
//! [`ItineraryPlanner`] wires the three steps together behind the
//! [`Planner`] trait. Loading terminals from disk and rendering plans are
//! left to callers such as the `layover` CLI.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod interest;
mod itinerary;
mod location;
pub mod matrix;
pub mod planner;
mod terminal;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use interest::{CandidateSet, InterestFilter, find_candidates};
pub use itinerary::{Itinerary, ItineraryError, Stop};
pub use location::{Category, Location, Tags};
pub use matrix::{
    AdjacencyMatrix, MatrixError, SharedPathMatrix, ShortestPathMatrix, compute_shortest_paths,
};
pub use planner::{
    DEFAULT_SAFETY_BUFFER_MINUTES, DEFAULT_VISIT_MINUTES, ItineraryPlanner, PlanError,
    PlanRequest, Planner, build_itinerary,
};
#[cfg(feature = "serde")]
pub use terminal::TerminalSpec;
pub use terminal::{Terminal, TerminalError};
