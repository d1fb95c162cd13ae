//! Select the locations a traveller may want to visit.
//!
//! Matching is exact set intersection on tags. Gates are never candidates,
//! and an empty interest set matches nothing.

use std::collections::BTreeSet;

use crate::{Location, Tags};

/// Ids of the locations matching a traveller's interests.
///
/// Only membership matters; the ordered set makes iteration deterministic.
pub type CandidateSet = BTreeSet<usize>;

/// Interest tags requested by a traveller.
///
/// # Examples
/// ```
/// use layover_core::{Category, InterestFilter, Location};
///
/// let filter = InterestFilter::new(["coffee"]);
/// let cafe = Location::new(3, "Starbucks", Category::Food, ["coffee", "quick"]);
/// let gate = Location::new(0, "Gate C25", Category::Gate, ["coffee"]);
///
/// assert!(filter.matches(&cafe));
/// assert!(!filter.matches(&gate));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestFilter {
    interests: Tags,
}

impl InterestFilter {
    /// Build a filter from the requested tags.
    #[must_use]
    pub fn new<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }

    /// Requested tags.
    #[must_use]
    pub const fn interests(&self) -> &Tags {
        &self.interests
    }

    /// Whether no tags were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
    }

    /// Whether `location` is a non-gate place sharing at least one tag with
    /// the request.
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        !location.is_gate() && location.shares_tag_with(&self.interests)
    }

    /// Ids of the matching locations.
    #[must_use]
    pub fn candidates<'a, I>(&self, locations: I) -> CandidateSet
    where
        I: IntoIterator<Item = &'a Location>,
    {
        if self.is_empty() {
            return CandidateSet::new();
        }
        locations
            .into_iter()
            .filter(|location| self.matches(location))
            .map(|location| location.id)
            .collect()
    }
}

impl From<Tags> for InterestFilter {
    fn from(interests: Tags) -> Self {
        Self { interests }
    }
}

/// Ids of the non-gate `locations` whose tags intersect
/// `requested_interests`.
///
/// # Examples
/// ```
/// use layover_core::{Category, Location, Tags, find_candidates};
///
/// let locations = vec![
///     Location::new(0, "Gate C25", Category::Gate, ["gate"]),
///     Location::new(2, "Lounge", Category::Lounge, ["quiet", "food"]),
///     Location::new(4, "Gucci", Category::Shopping, ["luxury"]),
/// ];
/// let interests: Tags = ["food".to_owned()].into();
///
/// let candidates = find_candidates(&locations, &interests);
/// assert_eq!(candidates.into_iter().collect::<Vec<_>>(), vec![2]);
/// ```
#[must_use]
pub fn find_candidates(locations: &[Location], requested_interests: &Tags) -> CandidateSet {
    let filter = InterestFilter::from(requested_interests.clone());
    let candidates = filter.candidates(locations);
    log::debug!(
        "{} of {} locations match interests {:?}",
        candidates.len(),
        locations.len(),
        requested_interests
    );
    candidates
}
