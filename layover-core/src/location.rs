//! Places inside a terminal and the categories they belong to.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free-form interest tags attached to a location or requested by a
/// traveller.
pub type Tags = BTreeSet<String>;

/// Broad kind of place inside a terminal.
///
/// Parsing is case-insensitive. Unrecognised names are kept verbatim as
/// [`Category::Other`] so terminal data can introduce new kinds of places
/// without a code change.
///
/// # Examples
/// ```
/// use layover_core::Category;
///
/// assert_eq!("GATE".parse::<Category>(), Ok(Category::Gate));
/// assert_eq!(Category::Food.to_string(), "food");
/// assert_eq!(
///     "spa".parse::<Category>(),
///     Ok(Category::Other("spa".to_owned()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Category {
    /// Boarding or arrival gate. Never offered as a point of interest.
    Gate,
    /// Airline or premium lounge.
    Lounge,
    /// Restaurants, cafes and food courts.
    Food,
    /// Retail outlets.
    Shopping,
    /// Skytrain stops, shuttles and similar connectors.
    Transport,
    /// Any other kind of place, stored in lowercase.
    Other(String),
}

impl Category {
    /// Return the category name as a lowercase `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gate => "gate",
            Self::Lounge => "lounge",
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" => Err("category name must not be empty".to_owned()),
            "gate" => Ok(Self::Gate),
            "lounge" => Ok(Self::Lounge),
            "food" => Ok(Self::Food),
            "shopping" => Ok(Self::Shopping),
            "transport" => Ok(Self::Transport),
            _ => Ok(Self::Other(name)),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A place inside a terminal.
///
/// `id` is the zero-based index of the location in the terminal's travel
/// time matrix. Two locations are equal when their ids are equal; names,
/// categories and tags are descriptive only.
///
/// # Examples
/// ```
/// use layover_core::{Category, Location};
///
/// let cafe = Location::new(3, "Starbucks", Category::Food, ["coffee", "quick"]);
/// assert!(cafe.tags.contains("coffee"));
/// assert!(!cafe.is_gate());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Index of the location in the travel time matrix.
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Kind of place.
    pub category: Category,
    /// Interest tags matched against a traveller's request.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
}

impl Location {
    /// Construct a location from any iterable of tags.
    #[must_use]
    pub fn new<N, I, S>(id: usize, name: N, category: Category, tags: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the location is a gate.
    #[must_use]
    pub const fn is_gate(&self) -> bool {
        matches!(self.category, Category::Gate)
    }

    /// Whether the location carries at least one of `interests`.
    #[must_use]
    pub fn shares_tag_with(&self, interests: &Tags) -> bool {
        // Iterate the smaller set; both are ordered so lookups stay logarithmic.
        if self.tags.len() <= interests.len() {
            self.tags.iter().any(|tag| interests.contains(tag))
        } else {
            interests.iter().any(|tag| self.tags.contains(tag))
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
