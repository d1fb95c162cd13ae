//! Test-only terminal fixtures shared by unit, behaviour and CLI tests.
//!
//! Available under `cfg(test)` and behind the `test-support` feature.

use crate::{AdjacencyMatrix, Category, Location, Terminal};

/// Arrival gate of the sample terminal.
pub const ARRIVAL_GATE: usize = 0;
/// Departure gate of the sample terminal.
pub const DEPARTURE_GATE: usize = 1;
/// Premium lounge of the sample terminal.
pub const LOUNGE: usize = 2;
/// Coffee shop of the sample terminal.
pub const STARBUCKS: usize = 3;
/// Luxury boutique of the sample terminal.
pub const GUCCI: usize = 4;
/// Skytrain stop of the sample terminal.
pub const SKYTRAIN: usize = 5;
/// Food court of the sample terminal.
pub const FOOD_COURT: usize = 6;

/// Locations of a seven-node sample terminal.
#[must_use]
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new(ARRIVAL_GATE, "Arrival Gate C25", Category::Gate, ["gate"]),
        Location::new(DEPARTURE_GATE, "Departure Gate D12", Category::Gate, ["gate"]),
        Location::new(
            LOUNGE,
            "SATS Premier Lounge",
            Category::Lounge,
            ["quiet", "lounge", "food"],
        ),
        Location::new(STARBUCKS, "Starbucks", Category::Food, ["coffee", "food", "quick"]),
        Location::new(GUCCI, "Gucci", Category::Shopping, ["luxury", "shopping"]),
        Location::new(
            SKYTRAIN,
            "Terminal Skytrain Stop",
            Category::Transport,
            ["transport"],
        ),
        Location::new(FOOD_COURT, "Food Court", Category::Food, ["food", "cheap", "quick"]),
    ]
}

/// Direct walking times, in minutes, of the sample terminal.
#[must_use]
pub fn sample_rows() -> Vec<Vec<Option<i64>>> {
    const X: Option<i64> = None;
    vec![
        vec![Some(0), X, Some(8), Some(5), X, Some(3), X],
        vec![X, Some(0), X, X, Some(4), Some(2), X],
        vec![Some(8), X, Some(0), Some(7), Some(15), X, Some(3)],
        vec![Some(5), X, Some(7), Some(0), Some(12), Some(4), Some(2)],
        vec![X, Some(4), Some(15), Some(12), Some(0), Some(6), X],
        vec![Some(3), Some(2), X, Some(4), Some(6), Some(0), X],
        vec![X, X, Some(3), Some(2), X, X, Some(0)],
    ]
}

/// Validated adjacency matrix of the sample terminal.
///
/// # Panics
///
/// Panics if the fixture rows are malformed.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture data is static and covered by tests"
)]
pub fn sample_adjacency() -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(&sample_rows()).expect("sample rows are valid")
}

/// The seven-node sample terminal.
///
/// # Panics
///
/// Panics if the fixture locations disagree with the matrix.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture data is static and covered by tests"
)]
pub fn sample_terminal() -> Terminal {
    Terminal::new(sample_locations(), sample_adjacency()).expect("sample terminal is valid")
}

/// Build a matrix from rows, panicking on invalid input.
///
/// # Panics
///
/// Panics if `rows` fail validation.
#[must_use]
#[expect(clippy::expect_used, reason = "test helper surfaces invalid fixtures")]
pub fn adjacency(rows: &[Vec<Option<i64>>]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows).expect("fixture rows are valid")
}
