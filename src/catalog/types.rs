//! Closed enumerations and the immutable city record.

use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Academic year of the travelling cohort.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AcademicYear {
    First,
    Second,
    Third,
}

impl AcademicYear {
    /// All years in ascending order.
    pub const ALL: [AcademicYear; 3] = [Self::First, Self::Second, Self::Third];

    /// Returns the year as 1, 2 or 3.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Returns the spelled ordinal ("first", "second", "third").
    pub fn ordinal(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl TryFrom<u8> for AcademicYear {
    type Error = RequestError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(RequestError::UnknownAcademicYear(other)),
        }
    }
}

impl From<AcademicYear> for u8 {
    fn from(year: AcademicYear) -> u8 {
        year.number()
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.number())
    }
}

/// Semester in which the tour runs.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    First,
    Second,
}

impl TryFrom<u8> for Semester {
    type Error = RequestError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(RequestError::UnknownSemester(other)),
        }
    }
}

impl From<Semester> for u8 {
    fn from(s: Semester) -> u8 {
        match s {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }
}

/// Geographic region of a city.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    North,
    South,
    East,
    West,
    Northeast,
    Islands,
}

impl Region {
    /// All regions.
    pub const ALL: [Region; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Islands,
    ];

    /// Regions searched for single-region circuits when the request does
    /// not restrict regions.
    pub const MAINLAND: [Region; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Regions considered close enough to combine with this one on a
    /// circuit anchored at a starting city.
    pub fn nearby(self) -> &'static [Region] {
        match self {
            Self::North => &[Self::West, Self::East],
            Self::South => &[Self::West, Self::East, Self::Islands],
            Self::East => &[Self::North, Self::South, Self::Northeast],
            Self::West => &[Self::North, Self::South],
            Self::Northeast => &[Self::East],
            Self::Islands => &[Self::South],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Islands => "Islands",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RequestError::UnknownRegion(s.to_string()))
    }
}

/// Way of reaching a city.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Train,
    Road,
    Flight,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [Self::Train, Self::Road, Self::Flight];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Road => "Road",
            Self::Flight => "Flight",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RequestError::UnknownTravelMode(s.to_string()))
    }
}

/// Pedagogical theme a city supports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LearningFocus {
    #[cfg_attr(feature = "serde", serde(rename = "Architectural Principles"))]
    ArchitecturalPrinciples,
    #[cfg_attr(feature = "serde", serde(rename = "Spatial Organization"))]
    SpatialOrganization,
    #[cfg_attr(feature = "serde", serde(rename = "Climate Responsiveness"))]
    ClimateResponsiveness,
    #[cfg_attr(feature = "serde", serde(rename = "Building Services"))]
    BuildingServices,
    #[cfg_attr(feature = "serde", serde(rename = "Bye-laws & Regulations"))]
    ByeLawsRegulations,
    #[cfg_attr(feature = "serde", serde(rename = "Construction Practices"))]
    ConstructionPractices,
    #[cfg_attr(feature = "serde", serde(rename = "Heritage & Conservation"))]
    HeritageConservation,
}

impl LearningFocus {
    pub const ALL: [LearningFocus; 7] = [
        Self::ArchitecturalPrinciples,
        Self::SpatialOrganization,
        Self::ClimateResponsiveness,
        Self::BuildingServices,
        Self::ByeLawsRegulations,
        Self::ConstructionPractices,
        Self::HeritageConservation,
    ];

    /// Display label, e.g. `"Bye-laws & Regulations"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::ArchitecturalPrinciples => "Architectural Principles",
            Self::SpatialOrganization => "Spatial Organization",
            Self::ClimateResponsiveness => "Climate Responsiveness",
            Self::BuildingServices => "Building Services",
            Self::ByeLawsRegulations => "Bye-laws & Regulations",
            Self::ConstructionPractices => "Construction Practices",
            Self::HeritageConservation => "Heritage & Conservation",
        }
    }
}

impl fmt::Display for LearningFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LearningFocus {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RequestError::UnknownLearningFocus(s.to_string()))
    }
}

/// A city in the catalog.
///
/// Cities are immutable once placed in a [`CityCatalog`](super::CityCatalog);
/// the planner only ever reads them. Tag collections keep insertion order,
/// which matters for per-day focus labels in the itinerary.
///
/// # Examples
///
/// ```
/// use archcircuit::catalog::{AcademicYear, City, LearningFocus, Region, TravelMode};
///
/// let city = City::new("jaipur", "Jaipur", Region::North)
///     .with_ideal_years(&[AcademicYear::First, AcademicYear::Second])
///     .with_learning_focus(&[LearningFocus::ArchitecturalPrinciples])
///     .with_suggested_days(2)
///     .with_indices(4, 2)
///     .with_travel_modes(&[TravelMode::Train, TravelMode::Road]);
/// assert!(city.is_ideal_for(AcademicYear::First));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Stable identifier (slug).
    pub id: String,
    /// Display name.
    pub name: String,
    pub region: Region,
    /// Free-form category tags ("Planned City", "Vernacular", ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    /// Academic years this city suits.
    pub ideal_years: Vec<AcademicYear>,
    pub learning_focus: Vec<LearningFocus>,
    /// Suggested visit length in days.
    pub suggested_days: u32,
    /// 1 = rural, 5 = urban.
    pub urban_rural_index: u8,
    /// 1 = heritage, 5 = contemporary.
    pub heritage_contemporary_index: u8,
    pub travel_modes: Vec<TravelMode>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub risk_note: Option<String>,
}

impl City {
    /// Creates a city with neutral indices (3, 3), one suggested day and
    /// no tags.
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: Region) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region,
            categories: Vec::new(),
            ideal_years: Vec::new(),
            learning_focus: Vec::new(),
            suggested_days: 1,
            urban_rural_index: 3,
            heritage_contemporary_index: 3,
            travel_modes: Vec::new(),
            risk_note: None,
        }
    }

    /// Sets the category tags.
    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Sets the ideal academic years (duplicates dropped).
    pub fn with_ideal_years(mut self, years: &[AcademicYear]) -> Self {
        self.ideal_years = dedup(years);
        self
    }

    /// Sets the learning-focus tags (duplicates dropped, order kept).
    pub fn with_learning_focus(mut self, focus: &[LearningFocus]) -> Self {
        self.learning_focus = dedup(focus);
        self
    }

    /// Sets the suggested number of days.
    pub fn with_suggested_days(mut self, days: u32) -> Self {
        self.suggested_days = days;
        self
    }

    /// Sets the urban-rural and heritage-contemporary indices.
    pub fn with_indices(mut self, urban_rural: u8, heritage_contemporary: u8) -> Self {
        self.urban_rural_index = urban_rural;
        self.heritage_contemporary_index = heritage_contemporary;
        self
    }

    /// Sets the supported travel modes (duplicates dropped).
    pub fn with_travel_modes(mut self, modes: &[TravelMode]) -> Self {
        self.travel_modes = dedup(modes);
        self
    }

    /// Attaches a risk note.
    pub fn with_risk_note(mut self, note: impl Into<String>) -> Self {
        self.risk_note = Some(note.into());
        self
    }

    pub fn is_ideal_for(&self, year: AcademicYear) -> bool {
        self.ideal_years.contains(&year)
    }

    pub fn has_focus(&self, focus: LearningFocus) -> bool {
        self.learning_focus.contains(&focus)
    }

    /// Focus tags of this city that appear in `goals`, in the city's order.
    pub fn focus_within(&self, goals: &[LearningFocus]) -> Vec<LearningFocus> {
        self.learning_focus
            .iter()
            .copied()
            .filter(|f| goals.contains(f))
            .collect()
    }

    /// Whether the city can be reached by at least one of `modes`.
    pub fn reachable_by_any(&self, modes: &[TravelMode]) -> bool {
        self.travel_modes.iter().any(|m| modes.contains(m))
    }

    pub fn is_heritage_leaning(&self) -> bool {
        self.heritage_contemporary_index <= 2
    }

    pub fn is_contemporary_leaning(&self) -> bool {
        self.heritage_contemporary_index >= 4
    }
}

fn dedup<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for &item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
