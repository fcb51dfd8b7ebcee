//! Pipeline records: candidates, scores, day plans, and circuits.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::{AcademicYear, City, LearningFocus, Region, Semester};
use crate::error::{CircuitError, Result};

use super::request::Constraints;

/// An ordered sequence of distinct cities under consideration.
///
/// Candidates borrow from the catalog and are never persisted; every
/// construction step produces a fresh sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    cities: Vec<&'a City>,
}

impl<'a> Candidate<'a> {
    /// Wraps a city sequence. Later duplicates of an id are dropped.
    pub fn new(cities: Vec<&'a City>) -> Self {
        let mut unique: Vec<&'a City> = Vec::with_capacity(cities.len());
        for city in cities {
            if !unique.iter().any(|c| c.id == city.id) {
                unique.push(city);
            }
        }
        Self { cities: unique }
    }

    pub fn cities(&self) -> &[&'a City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City ids in sequence order.
    pub fn ids(&self) -> Vec<String> {
        self.cities.iter().map(|c| c.id.clone()).collect()
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        for city in &self.cities {
            if !regions.contains(&city.region) {
                regions.push(city.region);
            }
        }
        regions
    }

    /// Distinct focus tags across all cities, in order of first appearance.
    pub fn focus_coverage(&self) -> Vec<LearningFocus> {
        let mut tags = Vec::new();
        for city in &self.cities {
            for &focus in &city.learning_focus {
                if !tags.contains(&focus) {
                    tags.push(focus);
                }
            }
        }
        tags
    }

    /// Same cities in the same order.
    pub fn same_sequence(&self, other: &Candidate<'_>) -> bool {
        self.cities.len() == other.cities.len()
            && self
                .cities
                .iter()
                .zip(&other.cities)
                .all(|(a, b)| a.id == b.id)
    }
}

/// Weight of the academic-match component in the total.
pub const ACADEMIC_WEIGHT: f64 = 0.4;
/// Weight of the travel-efficiency component in the total.
pub const TRAVEL_WEIGHT: f64 = 0.3;
/// Weight of the pedagogical-progression component in the total.
pub const PROGRESSION_WEIGHT: f64 = 0.2;
/// Weight of the user-preference component in the total.
pub const PREFERENCE_WEIGHT: f64 = 0.1;

/// Four sub-scores and their weighted total, each in [0, 100].
///
/// Components are clamped and rounded to two decimals on construction.
/// The total is always derived from the rounded components; there is no
/// way to set it directly.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ScoreParts")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    academic_match: f64,
    travel_efficiency: f64,
    pedagogical_progression: f64,
    user_preference: f64,
    total: f64,
}

impl Score {
    /// Builds a score from raw component values.
    pub fn new(
        academic_match: f64,
        travel_efficiency: f64,
        pedagogical_progression: f64,
        user_preference: f64,
    ) -> Self {
        let academic_match = normalize(academic_match);
        let travel_efficiency = normalize(travel_efficiency);
        let pedagogical_progression = normalize(pedagogical_progression);
        let user_preference = normalize(user_preference);
        let total = round2(
            ACADEMIC_WEIGHT * academic_match
                + TRAVEL_WEIGHT * travel_efficiency
                + PROGRESSION_WEIGHT * pedagogical_progression
                + PREFERENCE_WEIGHT * user_preference,
        );
        Self {
            academic_match,
            travel_efficiency,
            pedagogical_progression,
            user_preference,
            total,
        }
    }

    pub fn academic_match(&self) -> f64 {
        self.academic_match
    }

    pub fn travel_efficiency(&self) -> f64 {
        self.travel_efficiency
    }

    pub fn pedagogical_progression(&self) -> f64 {
        self.pedagogical_progression
    }

    pub fn user_preference(&self) -> f64 {
        self.user_preference
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ScoreParts {
    academic_match: f64,
    travel_efficiency: f64,
    pedagogical_progression: f64,
    user_preference: f64,
}

#[cfg(feature = "serde")]
impl From<ScoreParts> for Score {
    fn from(p: ScoreParts) -> Self {
        Score::new(
            p.academic_match,
            p.travel_efficiency,
            p.pedagogical_progression,
            p.user_preference,
        )
    }
}

/// Clamps to [0, 100] and rounds to two decimals. NaN maps to 0.
fn normalize(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    round2(v.clamp(0.0, 100.0))
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One day of the itinerary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlanEntry {
    /// 1-based, contiguous across the whole circuit.
    pub day: u32,
    pub city: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    /// At most two requested goals this day works on.
    pub learning_focus: Vec<LearningFocus>,
}

/// Lifecycle of a saved circuit. Moves forward only.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CircuitStatus {
    #[default]
    Draft,
    Approved,
    Exported,
}

impl fmt::Display for CircuitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draft => "Draft",
            Self::Approved => "Approved",
            Self::Exported => "Exported",
        })
    }
}

/// A scored, day-planned circuit recommendation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    pub academic_year: AcademicYear,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub semester: Option<Semester>,
    /// Requested duration in days.
    pub duration: u32,
    pub learning_goals: Vec<LearningFocus>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub starting_city: Option<String>,
    /// City ids in visiting order.
    pub cities: Vec<String>,
    pub day_plan: Vec<DayPlanEntry>,
    pub justification: String,
    pub(crate) status: CircuitStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub constraints: Constraints,
    pub score: Score,
}

impl Circuit {
    pub fn status(&self) -> CircuitStatus {
        self.status
    }

    /// Moves the circuit to `next`, refreshing `updated_at`.
    ///
    /// Only forward moves are accepted; re-applying the current status
    /// returns the circuit unchanged.
    pub fn advance(mut self, next: CircuitStatus) -> Result<Self> {
        if next == self.status {
            return Ok(self);
        }
        if next < self.status {
            return Err(CircuitError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(self)
    }

    /// Copy with a fresh id, "(Copy)" name suffix, Draft status and new
    /// timestamps.
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: new_circuit_id(),
            name: format!("{} (Copy)", self.name),
            status: CircuitStatus::Draft,
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

pub(crate) fn new_circuit_id() -> String {
    format!("circuit-{}", Uuid::new_v4())
}

/// Circuit name from the first one to three city names.
pub(crate) fn circuit_name(city_names: &[&str]) -> String {
    match city_names {
        [] => "Study Circuit".to_string(),
        [only] => format!("{only} Study Circuit"),
        [first, second] => format!("{first} & {second} Circuit"),
        [first, second, third] => format!("{first}, {second} & {third} Circuit"),
        [first, second, third, ..] => format!("{first}, {second}, {third} & More Circuit"),
    }
}
