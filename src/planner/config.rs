//! Planner configuration.
//!
//! [`PlannerConfig`] holds the limits and seed that control a planning run.

use crate::error::CircuitError;

/// Most circuits a planning run may return.
pub const MAX_RESULTS: usize = 5;

/// Most candidates a planning run may generate.
pub const MAX_CANDIDATES: usize = 10;

/// Configuration for [`CircuitPlanner`](super::CircuitPlanner).
///
/// # Defaults
///
/// ```
/// use archcircuit::planner::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.max_results, 5);
/// assert_eq!(config.max_candidates, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use archcircuit::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_max_results(3)
///     .with_seed(7)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Number of ranked circuits returned. At most [`MAX_RESULTS`].
    pub max_results: usize,

    /// Upper bound on candidates generated before scoring. At most
    /// [`MAX_CANDIDATES`].
    pub max_candidates: usize,

    /// Fewest cities a candidate may contain. At least 2.
    pub min_cities: usize,

    /// Most cities a candidate may contain. At most 6.
    pub max_cities: usize,

    /// Largest allowed gap between a city's urban-rural or
    /// heritage-contemporary index and the requested preference.
    pub preference_tolerance: u8,

    /// Seed for activity template selection.
    ///
    /// The same seed and request always yield the same itineraries.
    pub seed: u64,

    /// Whether to score candidates in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Output
    /// order is identical either way.
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            max_candidates: MAX_CANDIDATES,
            min_cities: 2,
            max_cities: 6,
            preference_tolerance: 2,
            seed: 42,
            parallel: true,
        }
    }
}

impl PlannerConfig {
    /// Sets the number of circuits returned.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Sets the candidate cap.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    /// Sets the city-count bounds for candidates.
    pub fn with_city_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_cities = min;
        self.max_cities = max;
        self
    }

    /// Sets the preference tolerance.
    pub fn with_preference_tolerance(mut self, tolerance: u8) -> Self {
        self.preference_tolerance = tolerance;
        self
    }

    /// Sets the template selection seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset returning a short list: 3 results from at most 6 candidates.
    pub fn compact() -> Self {
        Self {
            max_results: 3,
            max_candidates: 6,
            ..Self::default()
        }
    }

    /// Preset for a wider search: the full 5 results from at most 10
    /// candidates, with the preference tolerance loosened to 3.
    pub fn exploratory() -> Self {
        Self {
            max_results: MAX_RESULTS,
            max_candidates: MAX_CANDIDATES,
            preference_tolerance: 3,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CircuitError> {
        if self.max_results == 0 {
            return Err(CircuitError::InvalidConfig(
                "max_results must be at least 1".into(),
            ));
        }
        if self.max_results > MAX_RESULTS {
            return Err(CircuitError::InvalidConfig(format!(
                "max_results must not exceed {MAX_RESULTS}"
            )));
        }
        if self.max_candidates == 0 {
            return Err(CircuitError::InvalidConfig(
                "max_candidates must be at least 1".into(),
            ));
        }
        if self.max_candidates > MAX_CANDIDATES {
            return Err(CircuitError::InvalidConfig(format!(
                "max_candidates must not exceed {MAX_CANDIDATES}"
            )));
        }
        if self.min_cities < 2 {
            return Err(CircuitError::InvalidConfig(
                "min_cities must be at least 2".into(),
            ));
        }
        if self.max_cities > 6 {
            return Err(CircuitError::InvalidConfig(
                "max_cities must not exceed 6".into(),
            ));
        }
        if self.max_cities < self.min_cities {
            return Err(CircuitError::InvalidConfig(
                "max_cities must not be below min_cities".into(),
            ));
        }
        Ok(())
    }
}
