//! City catalog.
//!
//! The catalog is a fixed, totally ordered, read-only collection of
//! [`City`] records. It is passed into the planner rather than read from a
//! global, so tests can run the pipeline against small fixture catalogs.
//!
//! - [`CityCatalog::new`] validates caller-supplied records.
//! - [`CityCatalog::builtin`] ships a reference dataset covering all six
//!   regions.
//!
//! Catalog order is significant: it is the deterministic tie-breaker used
//! throughout candidate generation.

mod data;
mod types;

pub use types::{AcademicYear, City, LearningFocus, Region, Semester, TravelMode};

use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;

/// Read-only repository of cities.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<City>,
    by_id: HashMap<String, usize>,
}

impl CityCatalog {
    /// Builds a catalog, validating every record.
    ///
    /// Rejects duplicate ids, indices outside 1–5, zero suggested days, and
    /// cities with no ideal years or no learning focus.
    pub fn new(cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id.as_str()) {
                return Err(CatalogError::DuplicateId(city.id.clone()));
            }
            validate_city(city)?;
        }
        Ok(Self::from_trusted(cities))
    }

    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        Self::from_trusted(data::builtin_cities())
    }

    /// Parses a JSON array of cities and validates it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Self::new(cities)
    }

    fn from_trusted(cities: Vec<City>) -> Self {
        let by_id = cities
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { cities, by_id }
    }

    /// Looks a city up by id.
    pub fn get(&self, id: &str) -> Option<&City> {
        self.by_id.get(id).map(|&i| &self.cities[i])
    }

    /// Finds a city by display name, ignoring case and surrounding spaces.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        let needle = name.trim();
        if needle.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
    }

    /// Position of a city in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn validate_city(city: &City) -> Result<(), CatalogError> {
    for (field, value) in [
        ("urban_rural_index", city.urban_rural_index),
        ("heritage_contemporary_index", city.heritage_contemporary_index),
    ] {
        if !(1..=5).contains(&value) {
            return Err(CatalogError::IndexOutOfRange {
                city: city.id.clone(),
                field,
                value,
            });
        }
    }
    if city.suggested_days == 0 {
        return Err(CatalogError::ZeroSuggestedDays(city.id.clone()));
    }
    if city.ideal_years.is_empty() {
        return Err(CatalogError::NoIdealYears(city.id.clone()));
    }
    if city.learning_focus.is_empty() {
        return Err(CatalogError::NoLearningFocus(city.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: &str) -> City {
        City::new(id, id.to_uppercase(), Region::North)
            .with_ideal_years(&[AcademicYear::First])
            .with_learning_focus(&[LearningFocus::ArchitecturalPrinciples])
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = CityCatalog::builtin();
        let revalidated = CityCatalog::new(builtin.cities().to_vec());
        assert!(revalidated.is_ok());
        assert!(builtin.len() >= 25);
    }

    #[test]
    fn test_builtin_covers_every_region() {
        let builtin = CityCatalog::builtin();
        for region in Region::ALL {
            assert!(
                builtin.iter().any(|c| c.region == region),
                "no city in {region}"
            );
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CityCatalog::new(vec![city("a"), city("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let bad = city("a").with_indices(0, 3);
        assert!(matches!(
            CityCatalog::new(vec![bad]),
            Err(CatalogError::IndexOutOfRange { field: "urban_rural_index", .. })
        ));
        let bad = city("b").with_indices(3, 6);
        assert!(CityCatalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_incomplete_records_rejected() {
        let mut no_days = city("a");
        no_days.suggested_days = 0;
        assert!(matches!(
            CityCatalog::new(vec![no_days]),
            Err(CatalogError::ZeroSuggestedDays(_))
        ));

        let no_years = City::new("b", "B", Region::East)
            .with_learning_focus(&[LearningFocus::BuildingServices]);
        assert!(matches!(
            CityCatalog::new(vec![no_years]),
            Err(CatalogError::NoIdealYears(_))
        ));

        let no_focus =
            City::new("c", "C", Region::East).with_ideal_years(&[AcademicYear::Third]);
        assert!(matches!(
            CityCatalog::new(vec![no_focus]),
            Err(CatalogError::NoLearningFocus(_))
        ));
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = CityCatalog::new(vec![city("a"), city("b")]).unwrap();
        assert_eq!(catalog.get("b").map(|c| c.name.as_str()), Some("B"));
        assert!(catalog.get("z").is_none());
        assert_eq!(catalog.find_by_name(" a ").map(|c| c.id.as_str()), Some("a"));
        assert!(catalog.find_by_name("").is_none());
        assert_eq!(catalog.position("b"), Some(1));
    }

    #[test]
    fn test_builtin_find_by_name_case_insensitive() {
        let builtin = CityCatalog::builtin();
        let jaipur = builtin.find_by_name("JAIPUR").unwrap();
        assert_eq!(jaipur.id, "jaipur");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "x", "name": "X", "region": "West",
            "ideal_years": [1, 3],
            "learning_focus": ["Bye-laws & Regulations"],
            "suggested_days": 2,
            "urban_rural_index": 5,
            "heritage_contemporary_index": 4,
            "travel_modes": ["Train"]
        }]"#;
        let catalog = CityCatalog::from_json(json).unwrap();
        let x = catalog.get("x").unwrap();
        assert_eq!(x.ideal_years, vec![AcademicYear::First, AcademicYear::Third]);
        assert_eq!(x.learning_focus, vec![LearningFocus::ByeLawsRegulations]);
        assert!(x.categories.is_empty());

        assert!(CityCatalog::from_json("not json").is_err());
    }
}
