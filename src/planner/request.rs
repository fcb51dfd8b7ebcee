//! Request and constraint records supplied by the caller.

use crate::catalog::{AcademicYear, LearningFocus, Region, Semester, TravelMode};
use crate::error::{CircuitError, RequestError};

/// Geographic and travel-style constraints.
///
/// # Examples
///
/// ```
/// use archcircuit::catalog::{Region, TravelMode};
/// use archcircuit::planner::Constraints;
///
/// let constraints = Constraints::default()
///     .with_regions(&[Region::North, Region::West])
///     .with_preferred_modes(&[TravelMode::Train])
///     .with_urban_rural_preference(4);
/// assert_eq!(constraints.heritage_contemporary_preference, 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    /// Permitted regions. Empty means no restriction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<Region>,
    pub max_daily_travel_hours: f64,
    /// Preferred travel modes. Empty means no preference.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_modes: Vec<TravelMode>,
    /// 1 = rural, 5 = urban.
    pub urban_rural_preference: u8,
    /// 1 = heritage, 5 = contemporary.
    pub heritage_contemporary_preference: u8,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            max_daily_travel_hours: 6.0,
            preferred_modes: Vec::new(),
            urban_rural_preference: 3,
            heritage_contemporary_preference: 3,
        }
    }
}

impl Constraints {
    /// Restricts the circuit to the given regions.
    pub fn with_regions(mut self, regions: &[Region]) -> Self {
        self.regions = unique(regions);
        self
    }

    /// Sets the maximum daily travel time in hours.
    pub fn with_max_daily_travel_hours(mut self, hours: f64) -> Self {
        self.max_daily_travel_hours = hours;
        self
    }

    /// Sets the preferred travel modes.
    pub fn with_preferred_modes(mut self, modes: &[TravelMode]) -> Self {
        self.preferred_modes = unique(modes);
        self
    }

    /// Sets the urban-rural preference (1 = rural, 5 = urban).
    pub fn with_urban_rural_preference(mut self, pref: u8) -> Self {
        self.urban_rural_preference = pref;
        self
    }

    /// Sets the heritage-contemporary preference (1 = heritage, 5 = contemporary).
    pub fn with_heritage_contemporary_preference(mut self, pref: u8) -> Self {
        self.heritage_contemporary_preference = pref;
        self
    }

    fn validate(&self) -> Result<(), RequestError> {
        for (field, value) in [
            ("urban_rural_preference", self.urban_rural_preference),
            (
                "heritage_contemporary_preference",
                self.heritage_contemporary_preference,
            ),
        ] {
            if !(1..=5).contains(&value) {
                return Err(RequestError::PreferenceOutOfRange { field, value });
            }
        }
        if !self.max_daily_travel_hours.is_finite() || self.max_daily_travel_hours < 0.0 {
            return Err(RequestError::InvalidTravelHours(self.max_daily_travel_hours));
        }
        Ok(())
    }
}

/// A circuit generation request.
///
/// The academic year is optional here so that a form submitted without one
/// can be represented and rejected by [`validate`](Self::validate), rather
/// than silently producing no circuits.
///
/// # Examples
///
/// ```
/// use archcircuit::catalog::{AcademicYear, LearningFocus};
/// use archcircuit::planner::CircuitRequest;
///
/// let request = CircuitRequest::new(AcademicYear::First, 5)
///     .with_learning_goals(&[LearningFocus::ArchitecturalPrinciples])
///     .with_starting_city("Jaipur");
/// assert!(request.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitRequest {
    pub academic_year: Option<AcademicYear>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub semester: Option<Semester>,
    /// Tour length in days.
    pub duration: u32,
    /// Free-text city name, matched case-insensitively.
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_city: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub learning_goals: Vec<LearningFocus>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Constraints,
}

impl CircuitRequest {
    /// Creates a request with no goals and default constraints.
    pub fn new(academic_year: AcademicYear, duration: u32) -> Self {
        Self {
            academic_year: Some(academic_year),
            semester: None,
            duration,
            starting_city: None,
            learning_goals: Vec::new(),
            constraints: Constraints::default(),
        }
    }

    /// Sets the learning goals (duplicates dropped, order kept).
    pub fn with_learning_goals(mut self, goals: &[LearningFocus]) -> Self {
        self.learning_goals = unique(goals);
        self
    }

    /// Parses goal labels such as `"Heritage & Conservation"`.
    pub fn with_goal_labels(self, labels: &[&str]) -> Result<Self, RequestError> {
        let goals = labels
            .iter()
            .map(|l| l.parse::<LearningFocus>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_learning_goals(&goals))
    }

    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn with_starting_city(mut self, name: impl Into<String>) -> Self {
        self.starting_city = Some(name.into());
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// The starting city name, if one was given and is not blank.
    pub fn starting_city_name(&self) -> Option<&str> {
        self.starting_city
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Validates required fields and value ranges.
    ///
    /// An empty goal list is valid; it simply matches no city.
    pub fn validate(&self) -> Result<(), CircuitError> {
        self.validate_detailed().map_err(CircuitError::from)
    }

    /// Same as [`validate`](Self::validate) but returns the precise reason.
    pub fn validate_detailed(&self) -> Result<(), RequestError> {
        if self.academic_year.is_none() {
            return Err(RequestError::MissingAcademicYear);
        }
        if self.duration == 0 {
            return Err(RequestError::ZeroDuration);
        }
        self.constraints.validate()
    }
}

fn unique<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for &item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
