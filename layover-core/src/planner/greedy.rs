//! Nearest-first sequencing of candidates under a hard deadline.

use crate::{CandidateSet, Itinerary, ShortestPathMatrix};

use super::PlanError;

/// Greedily sequence `candidates` into an itinerary from `arrival` to
/// `departure`.
///
/// The time budget is `layover_minutes - safety_buffer_minutes`. While budget
/// remains, the planner picks the nearest unvisited reachable candidate
/// (lowest id on ties) and visits it only if it can still walk there, spend
/// `visit_minutes`, and reach the departure within the budget. The first
/// candidate that does not fit ends the search, even if a farther one
/// would; this is a heuristic, not an optimiser. The walk to the departure
/// is always appended last.
///
/// # Errors
///
/// - [`PlanError::UnknownLocation`] when `arrival`, `departure` or a
///   candidate id lies outside `paths`.
/// - [`PlanError::UnreachableDestination`] when `departure` cannot be
///   reached from `arrival`.
///
/// # Examples
/// ```rust
/// use layover_core::{AdjacencyMatrix, CandidateSet, build_itinerary, compute_shortest_paths};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let paths = compute_shortest_paths(&AdjacencyMatrix::from_rows(&[
///     vec![Some(0), Some(4), Some(9)],
///     vec![Some(4), Some(0), Some(3)],
///     vec![Some(9), Some(3), Some(0)],
/// ])?);
/// let candidates = CandidateSet::from([1]);
///
/// let itinerary = build_itinerary(0, 2, 90, &candidates, &paths, 30, 20)?;
/// let stops: Vec<(usize, u64)> = itinerary
///     .stops()
///     .map(|stop| (stop.location, stop.travel_minutes))
///     .collect();
/// assert_eq!(stops, vec![(0, 0), (1, 4), (2, 3)]);
/// # Ok(())
/// # }
/// ```
pub fn build_itinerary(
    arrival: usize,
    departure: usize,
    layover_minutes: u64,
    candidates: &CandidateSet,
    paths: &ShortestPathMatrix,
    visit_minutes: u64,
    safety_buffer_minutes: u64,
) -> Result<Itinerary, PlanError> {
    if let Some(id) = [arrival, departure]
        .into_iter()
        .chain(candidates.iter().copied())
        .find(|id| !paths.contains(*id))
    {
        return Err(PlanError::UnknownLocation { id });
    }
    if paths.get(arrival, departure).is_none() {
        return Err(PlanError::UnreachableDestination { arrival, departure });
    }

    let mut budget = layover_minutes.saturating_sub(safety_buffer_minutes);
    let mut remaining = candidates.clone();
    let mut current = arrival;
    let mut draft = Itinerary::start(arrival);

    while budget > 0 {
        let Some((next, travel)) = nearest(paths, current, &remaining) else {
            log::debug!("no reachable candidate left from {current}");
            break;
        };
        let required = paths
            .get(next, departure)
            .and_then(|onward| travel.checked_add(visit_minutes)?.checked_add(onward));
        match required {
            Some(minutes) if minutes <= budget => {
                log::debug!(
                    "visiting {next}: {travel} min walk, {minutes} of {budget} min needed"
                );
                draft.visit(next, travel);
                budget -= travel + visit_minutes;
                current = next;
                remaining.remove(&next);
            }
            Some(minutes) => {
                log::debug!("stopping: {next} needs {minutes} min, {budget} min left");
                break;
            }
            None => {
                log::debug!("stopping: departure {departure} unreachable from {next}");
                break;
            }
        }
    }

    let final_leg = paths
        .get(current, departure)
        .ok_or(PlanError::UnreachableDestination { arrival, departure })?;
    Ok(draft.finish(departure, final_leg))
}

/// Nearest reachable id in `remaining`, with its travel time from `current`.
///
/// `remaining` iterates in ascending order and `min_by_key` keeps the first
/// minimum, so ties go to the lowest id.
fn nearest(
    paths: &ShortestPathMatrix,
    current: usize,
    remaining: &CandidateSet,
) -> Option<(usize, u64)> {
    remaining
        .iter()
        .filter_map(|&id| paths.get(current, id).map(|travel| (id, travel)))
        .min_by_key(|&(_, travel)| travel)
}
