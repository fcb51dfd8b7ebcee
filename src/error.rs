//! Error types.
//!
//! Finding no matching circuit is not an error: the planner returns an
//! empty list. Errors are reserved for malformed input at the boundary,
//! invalid configuration, bad catalog data, and persistence lookups.

use thiserror::Error;

use crate::planner::CircuitStatus;

/// Top-level error for planner, catalog, and store operations.
#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("circuit not found: {0}")]
    NotFound(String),

    #[error("cannot move circuit status from {from} to {to}")]
    InvalidTransition {
        from: CircuitStatus,
        to: CircuitStatus,
    },

    #[error("customization rejected: {0}")]
    Customization(String),
}

/// Result type alias using [`CircuitError`].
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Precise reasons a circuit request is rejected before planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("academic_year is required")]
    MissingAcademicYear,

    #[error("academic year must be 1, 2 or 3 (got {0})")]
    UnknownAcademicYear(u8),

    #[error("semester must be 1 or 2 (got {0})")]
    UnknownSemester(u8),

    #[error("duration must be at least one day")]
    ZeroDuration,

    #[error("{field} must be between 1 and 5 (got {value})")]
    PreferenceOutOfRange { field: &'static str, value: u8 },

    #[error("max_daily_travel_hours must be finite and non-negative (got {0})")]
    InvalidTravelHours(f64),

    #[error("unknown learning focus: {0}")]
    UnknownLearningFocus(String),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown travel mode: {0}")]
    UnknownTravelMode(String),
}

/// Problems found while building a [`CityCatalog`](crate::catalog::CityCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate city id: {0}")]
    DuplicateId(String),

    #[error("city {city}: {field} must be between 1 and 5 (got {value})")]
    IndexOutOfRange {
        city: String,
        field: &'static str,
        value: u8,
    },

    #[error("city {0}: suggested_days must be positive")]
    ZeroSuggestedDays(String),

    #[error("city {0}: ideal_years must not be empty")]
    NoIdealYears(String),

    #[error("city {0}: learning_focus must not be empty")]
    NoLearningFocus(String),

    #[cfg(feature = "serde")]
    #[error("catalog JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_converts() {
        let err: CircuitError = RequestError::MissingAcademicYear.into();
        assert!(matches!(
            err,
            CircuitError::InvalidRequest(RequestError::MissingAcademicYear)
        ));
        assert_eq!(err.to_string(), "invalid request: academic_year is required");
    }

    #[test]
    fn test_transition_message() {
        let err = CircuitError::InvalidTransition {
            from: CircuitStatus::Exported,
            to: CircuitStatus::Draft,
        };
        assert_eq!(
            err.to_string(),
            "cannot move circuit status from Exported to Draft"
        );
    }

    #[test]
    fn test_preference_message() {
        let err = RequestError::PreferenceOutOfRange {
            field: "urban_rural_preference",
            value: 9,
        };
        assert_eq!(
            err.to_string(),
            "urban_rural_preference must be between 1 and 5 (got 9)"
        );
    }
}
