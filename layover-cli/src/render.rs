//! Text and JSON renderings of a planned itinerary.

use std::fmt;

use layover_core::{Category, Itinerary, Location, PlanRequest, ShortestPathMatrix};
use serde::Serialize;

const RULE: &str = "--------------------------------------";

/// An itinerary joined with location names, ready for output.
#[derive(Debug, Serialize)]
pub(crate) struct PlanReport<'a> {
    stops: Vec<ReportStop<'a>>,
    travel_minutes: u64,
    visit_minutes: u64,
    total_minutes: u64,
    safety_buffer_minutes: u64,
}

/// One stop of a [`PlanReport`].
#[derive(Debug, Serialize)]
struct ReportStop<'a> {
    location: usize,
    name: &'a str,
    category: Option<&'a Category>,
    travel_minutes: u64,
    /// Locations walked through from the previous stop, both ends included.
    route: Vec<usize>,
}

impl<'a> PlanReport<'a> {
    pub(crate) fn new(
        locations: &'a [Location],
        paths: &ShortestPathMatrix,
        itinerary: &Itinerary,
        request: &PlanRequest,
    ) -> Self {
        let mut previous = itinerary.arrival().location;
        let stops = itinerary
            .stops()
            .map(|stop| {
                let location = locations.get(stop.location);
                let route = paths.path(previous, stop.location).unwrap_or_default();
                previous = stop.location;
                ReportStop {
                    location: stop.location,
                    name: location.map_or("unknown location", |found| found.name.as_str()),
                    category: location.map(|found| &found.category),
                    travel_minutes: stop.travel_minutes,
                    route,
                }
            })
            .collect();
        Self {
            stops,
            travel_minutes: itinerary.travel_minutes(),
            visit_minutes: request.visit_minutes,
            total_minutes: itinerary.total_minutes(request.visit_minutes),
            safety_buffer_minutes: request.safety_buffer_minutes,
        }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Personalised Layover Plan")?;
        writeln!(f, "{RULE}")?;
        let last = self.stops.len().saturating_sub(1);
        for (index, stop) in self.stops.iter().enumerate() {
            let step = index + 1;
            if index == 0 {
                writeln!(f, "{step}. Arrive at: {}", stop.name)?;
            } else if index == last {
                writeln!(
                    f,
                    "{step}. Walk to {} ({} mins) for departure.",
                    stop.name, stop.travel_minutes
                )?;
            } else {
                writeln!(
                    f,
                    "{step}. Walk to {} ({} mins).",
                    stop.name, stop.travel_minutes
                )?;
                let kind = stop.category.map_or("unknown", Category::as_str);
                writeln!(
                    f,
                    "   - Spend {} mins here (type: {kind}).",
                    self.visit_minutes
                )?;
            }
        }
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Total activity and travel time: {} minutes.",
            self.total_minutes
        )?;
        writeln!(
            f,
            "Safety buffer for boarding: {} minutes.",
            self.safety_buffer_minutes
        )?;
        write!(f, "Enjoy your layover!")
    }
}
