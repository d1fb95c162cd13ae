//! Unit and property tests for the greedy itinerary planner.

use super::*;
use crate::test_support::{
    ARRIVAL_GATE, DEPARTURE_GATE, FOOD_COURT, LOUNGE, STARBUCKS, adjacency, sample_locations,
    sample_terminal,
};
use crate::{CandidateSet, compute_shortest_paths};
use proptest::prelude::*;
use rstest::{fixture, rstest};


#[fixture]
fn sample_paths() -> ShortestPathMatrix {
    sample_terminal().shortest_paths()
}

fn trace(itinerary: &Itinerary) -> Vec<(usize, u64)> {
    itinerary
        .stops()
        .map(|stop| (stop.location, stop.travel_minutes))
        .collect()
}

fn lounge_food_quick() -> CandidateSet {
    CandidateSet::from([LOUNGE, STARBUCKS, FOOD_COURT])
}

#[rstest]
fn visits_nearest_candidates_first(sample_paths: ShortestPathMatrix) {
    let itinerary = build_itinerary(
        ARRIVAL_GATE,
        DEPARTURE_GATE,
        360,
        &lounge_food_quick(),
        &sample_paths,
        45,
        40,
    )
    .expect("plan succeeds");

    assert_eq!(
        trace(&itinerary),
        vec![
            (ARRIVAL_GATE, 0),
            (STARBUCKS, 5),
            (FOOD_COURT, 2),
            (LOUNGE, 3),
            (DEPARTURE_GATE, 11),
        ]
    );
    assert_eq!(itinerary.total_minutes(45), 156);
}

#[rstest]
fn short_layover_allows_only_some_stops(sample_paths: ShortestPathMatrix) {
    // 110 minutes of budget: Starbucks needs 56, Food Court then needs 55 of
    // the remaining 60, and the Lounge would need 59 of the remaining 13.
    let itinerary = build_itinerary(
        ARRIVAL_GATE,
        DEPARTURE_GATE,
        150,
        &lounge_food_quick(),
        &sample_paths,
        45,
        40,
    )
    .expect("plan succeeds");

    assert_eq!(
        trace(&itinerary),
        vec![
            (ARRIVAL_GATE, 0),
            (STARBUCKS, 5),
            (FOOD_COURT, 2),
            (DEPARTURE_GATE, 8),
        ]
    );
}

#[rstest]
#[case(40, 40)]
#[case(30, 40)]
#[case(0, 0)]
fn exhausted_budget_goes_straight_to_departure(
    sample_paths: ShortestPathMatrix,
    #[case] layover: u64,
    #[case] buffer: u64,
) {
    let itinerary = build_itinerary(
        ARRIVAL_GATE,
        DEPARTURE_GATE,
        layover,
        &lounge_food_quick(),
        &sample_paths,
        45,
        buffer,
    )
    .expect("plan succeeds");

    assert_eq!(
        trace(&itinerary),
        vec![(ARRIVAL_GATE, 0), (DEPARTURE_GATE, 5)]
    );
}

#[rstest]
fn same_arrival_and_departure_without_candidates(sample_paths: ShortestPathMatrix) {
    let itinerary = build_itinerary(
        ARRIVAL_GATE,
        ARRIVAL_GATE,
        360,
        &CandidateSet::new(),
        &sample_paths,
        45,
        40,
    )
    .expect("plan succeeds");

    assert_eq!(trace(&itinerary), vec![(ARRIVAL_GATE, 0), (ARRIVAL_GATE, 0)]);
}

#[rstest]
fn unreachable_departure_is_an_error() {
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), None, Some(2)],
        vec![None, Some(0), None],
        vec![Some(2), None, Some(0)],
    ]));
    let err = build_itinerary(0, 1, 360, &CandidateSet::from([2]), &paths, 45, 40)
        .expect_err("departure unreachable");
    assert_eq!(
        err,
        PlanError::UnreachableDestination {
            arrival: 0,
            departure: 1,
        }
    );
}

#[rstest]
#[case(9, DEPARTURE_GATE, CandidateSet::new(), 9)]
#[case(ARRIVAL_GATE, 7, CandidateSet::new(), 7)]
#[case(ARRIVAL_GATE, DEPARTURE_GATE, CandidateSet::from([STARBUCKS, 12]), 12)]
fn unknown_locations_are_rejected(
    sample_paths: ShortestPathMatrix,
    #[case] arrival: usize,
    #[case] departure: usize,
    #[case] candidates: CandidateSet,
    #[case] expected: usize,
) {
    let err = build_itinerary(arrival, departure, 360, &candidates, &sample_paths, 45, 40)
        .expect_err("unknown location");
    assert_eq!(err, PlanError::UnknownLocation { id: expected });
}

#[rstest]
fn ties_go_to_the_lowest_id() {
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), Some(5), Some(5), Some(1)],
        vec![Some(5), Some(0), Some(9), Some(1)],
        vec![Some(5), Some(9), Some(0), Some(1)],
        vec![Some(1), Some(1), Some(1), Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 3, 20, &CandidateSet::from([2, 1]), &paths, 10, 0).expect("plan");
    // Via the hub (3) both candidates are two minutes away; 1 wins the tie and
    // leaves too little time for 2.
    assert_eq!(trace(&itinerary), vec![(0, 0), (1, 2), (3, 1)]);
}

#[rstest]
fn stops_at_first_infeasible_candidate() {
    // Candidate 1 is nearest but strands the traveller far from the
    // departure; candidate 2 would fit but is never considered.
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), Some(1), Some(5), None],
        vec![None, Some(0), None, Some(100)],
        vec![Some(5), None, Some(0), Some(1)],
        vec![None, None, Some(1), Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 3, 60, &CandidateSet::from([1, 2]), &paths, 10, 0).expect("plan");
    assert_eq!(trace(&itinerary), vec![(0, 0), (3, 6)]);
}

#[rstest]
#[case::exact_fit(20, vec![(0, 0), (1, 5), (2, 5)])]
#[case::one_minute_short(19, vec![(0, 0), (2, 10)])]
fn candidate_fitting_the_budget_exactly_is_visited(
    #[case] layover: u64,
    #[case] expected: Vec<(usize, u64)>,
) {
    // Five minutes out, ten on site, five onward: twenty in all.
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), Some(5), Some(10)],
        vec![Some(5), Some(0), Some(5)],
        vec![Some(10), Some(5), Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 2, layover, &CandidateSet::from([1]), &paths, 10, 0).expect("plan");
    assert_eq!(trace(&itinerary), expected);
}

#[rstest]
fn zero_budget_skips_even_free_candidates() {
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), Some(0), Some(0)],
        vec![Some(0), Some(0), Some(0)],
        vec![Some(0), Some(0), Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 2, 40, &CandidateSet::from([1]), &paths, 0, 40).expect("plan");
    assert_eq!(trace(&itinerary), vec![(0, 0), (2, 0)]);
}

#[rstest]
fn candidate_without_way_out_ends_the_search() {
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), Some(2), Some(4)],
        vec![None, Some(0), None],
        vec![Some(4), None, Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 2, 500, &CandidateSet::from([1]), &paths, 10, 0).expect("plan");
    assert_eq!(trace(&itinerary), vec![(0, 0), (2, 4)]);
}

#[rstest]
fn unreachable_candidates_are_skipped() {
    let paths = compute_shortest_paths(&adjacency(&[
        vec![Some(0), None, Some(3), Some(2)],
        vec![None, Some(0), None, None],
        vec![Some(3), None, Some(0), Some(2)],
        vec![Some(2), None, Some(2), Some(0)],
    ]));
    let itinerary =
        build_itinerary(0, 3, 100, &CandidateSet::from([1, 2]), &paths, 10, 0).expect("plan");
    assert_eq!(trace(&itinerary), vec![(0, 0), (2, 3), (3, 2)]);
}

#[rstest]
fn planner_filters_then_sequences() {
    let planner = ItineraryPlanner::new(&sample_terminal());
    let request = PlanRequest::new(ARRIVAL_GATE, DEPARTURE_GATE, 360)
        .with_interests(["lounge", "food", "quick"]);

    let itinerary = planner.plan(&request).expect("plan succeeds");

    let stops: Vec<usize> = itinerary.stops().map(|stop| stop.location).collect();
    assert_eq!(
        stops,
        vec![ARRIVAL_GATE, STARBUCKS, FOOD_COURT, LOUNGE, DEPARTURE_GATE]
    );
}

#[rstest]
fn planner_without_interests_visits_nothing() {
    let planner = ItineraryPlanner::new(&sample_terminal());
    let itinerary = planner
        .plan(&PlanRequest::new(ARRIVAL_GATE, DEPARTURE_GATE, 360))
        .expect("plan succeeds");
    assert!(itinerary.visits().is_empty());
}

#[rstest]
fn planner_rejects_mismatched_locations(sample_paths: ShortestPathMatrix) {
    let mut locations = sample_locations();
    locations.truncate(3);
    let err = ItineraryPlanner::with_paths(locations, Arc::new(sample_paths))
        .expect_err("mismatched locations");
    assert!(matches!(
        err,
        PlanError::InvalidInput(TerminalError::LocationCount {
            locations: 3,
            matrix: 7,
        })
    ));
}

#[rstest]
fn planner_rejects_misnumbered_locations(sample_paths: ShortestPathMatrix) {
    let mut locations = sample_locations();
    locations.swap(1, 3);
    let err = ItineraryPlanner::with_paths(locations, Arc::new(sample_paths))
        .expect_err("misnumbered locations");
    assert_eq!(
        err,
        PlanError::InvalidInput(TerminalError::LocationId { position: 1, id: 3 })
    );
}

#[rstest]
fn planner_shares_matrices(sample_paths: ShortestPathMatrix) {
    let shared = Arc::new(sample_paths);
    let planner =
        ItineraryPlanner::with_paths(sample_locations(), Arc::clone(&shared)).expect("planner");
    assert!(Arc::ptr_eq(planner.paths(), &shared));
}

#[cfg(feature = "serde")]
#[rstest]
fn request_defaults_visit_and_buffer_times() {
    let request: PlanRequest =
        serde_json::from_str(r#"{"arrival":0,"departure":1,"layover_minutes":90}"#)
            .expect("valid request");
    assert_eq!(request, PlanRequest::new(0, 1, 90));
}

fn scenario_strategy() -> impl Strategy<Value = (ShortestPathMatrix, CandidateSet, u64, u64, u64)>
{
    (2_usize..=7).prop_flat_map(|size| {
        (
            proptest::collection::vec(proptest::option::weighted(0.7, 0_i64..40), size * size),
            proptest::collection::btree_set(0..size, 0..size),
            0_u64..400,
            0_u64..60,
            0_u64..80,
        )
            .prop_map(move |(cells, candidates, layover, visit, buffer)| {
                let rows: Vec<Vec<Option<i64>>> = cells
                    .chunks(size)
                    .enumerate()
                    .map(|(from, row)| {
                        row.iter()
                            .enumerate()
                            .map(|(to, cost)| if from == to { Some(0) } else { *cost })
                            .collect()
                    })
                    .collect();
                (
                    compute_shortest_paths(&adjacency(&rows)),
                    candidates,
                    layover,
                    visit,
                    buffer,
                )
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: successful plans start at the arrival, end at the departure,
    /// and every leg matches the shortest travel time.
    #[test]
    fn itineraries_are_well_formed(
        (paths, candidates, layover, visit, buffer) in scenario_strategy(),
    ) {
        let departure = paths.len() - 1;
        match build_itinerary(0, departure, layover, &candidates, &paths, visit, buffer) {
            Ok(itinerary) => {
                let stops: Vec<_> = itinerary.stops().collect();
                prop_assert_eq!(stops.first().map(|stop| stop.location), Some(0));
                prop_assert_eq!(stops.first().map(|stop| stop.travel_minutes), Some(0));
                prop_assert_eq!(stops.last().map(|stop| stop.location), Some(departure));
                for leg in stops.windows(2) {
                    if let [previous, next] = leg {
                        prop_assert_eq!(
                            Some(next.travel_minutes),
                            paths.get(previous.location, next.location)
                        );
                    }
                }
            }
            Err(err) => {
                prop_assert_eq!(err, PlanError::UnreachableDestination { arrival: 0, departure });
                prop_assert!(paths.get(0, departure).is_none());
            }
        }
    }

    /// Property: visits are distinct candidates and, when any were made, the
    /// whole plan fits inside the budget.
    #[test]
    fn visits_fit_the_budget(
        (paths, candidates, layover, visit, buffer) in scenario_strategy(),
    ) {
        let departure = paths.len() - 1;
        if let Ok(itinerary) =
            build_itinerary(0, departure, layover, &candidates, &paths, visit, buffer)
        {
            let visited: Vec<usize> = itinerary.visits().iter().map(|stop| stop.location).collect();
            let distinct: CandidateSet = visited.iter().copied().collect();
            prop_assert_eq!(distinct.len(), visited.len());
            prop_assert!(distinct.is_subset(&candidates));

            let budget = layover.saturating_sub(buffer);
            if budget == 0 {
                prop_assert!(visited.is_empty());
            }
            if !visited.is_empty() {
                prop_assert!(itinerary.total_minutes(visit) <= budget);
            }
        }
    }
}
