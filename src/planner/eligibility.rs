//! Eligibility filter: narrows the catalog to cities that fit a request.

use crate::catalog::{AcademicYear, City, CityCatalog, LearningFocus};

use super::request::Constraints;

/// Returns the cities eligible for the request, in catalog order.
///
/// A city is eligible when all of the following hold:
///
/// - it is ideal for `year`;
/// - it offers at least one of `goals`;
/// - its region is permitted (an empty region list permits all);
/// - both of its indices lie within `tolerance` of the requested
///   preferences.
///
/// An empty result is a normal outcome.
pub fn eligible_cities<'a>(
    catalog: &'a CityCatalog,
    year: AcademicYear,
    goals: &[LearningFocus],
    constraints: &Constraints,
    tolerance: u8,
) -> Vec<&'a City> {
    catalog
        .iter()
        .filter(|city| is_eligible(city, year, goals, constraints, tolerance))
        .collect()
}

/// Whether a single city passes every eligibility check.
pub fn is_eligible(
    city: &City,
    year: AcademicYear,
    goals: &[LearningFocus],
    constraints: &Constraints,
    tolerance: u8,
) -> bool {
    city.is_ideal_for(year)
        && goals.iter().any(|g| city.has_focus(*g))
        && (constraints.regions.is_empty() || constraints.regions.contains(&city.region))
        && city
            .urban_rural_index
            .abs_diff(constraints.urban_rural_preference)
            <= tolerance
        && city
            .heritage_contemporary_index
            .abs_diff(constraints.heritage_contemporary_preference)
            <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Region;

    fn fixture() -> CityCatalog {
        CityCatalog::new(vec![
            City::new("a", "A", Region::North)
                .with_ideal_years(&[AcademicYear::First])
                .with_learning_focus(&[LearningFocus::ArchitecturalPrinciples])
                .with_indices(3, 3),
            City::new("b", "B", Region::South)
                .with_ideal_years(&[AcademicYear::First, AcademicYear::Second])
                .with_learning_focus(&[
                    LearningFocus::ArchitecturalPrinciples,
                    LearningFocus::BuildingServices,
                ])
                .with_indices(5, 1),
            City::new("c", "C", Region::North)
                .with_ideal_years(&[AcademicYear::Second])
                .with_learning_focus(&[LearningFocus::ArchitecturalPrinciples])
                .with_indices(3, 3),
            City::new("d", "D", Region::West)
                .with_ideal_years(&[AcademicYear::First])
                .with_learning_focus(&[LearningFocus::HeritageConservation])
                .with_indices(3, 3),
        ])
        .unwrap()
    }

    fn ids(cities: &[&City]) -> Vec<String> {
        cities.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_year_and_goal_filter() {
        let catalog = fixture();
        let out = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[LearningFocus::ArchitecturalPrinciples],
            &Constraints::default(),
            2,
        );
        assert_eq!(ids(&out), vec!["a", "b"]);
    }

    #[test]
    fn test_any_goal_matches() {
        let catalog = fixture();
        let out = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[
                LearningFocus::HeritageConservation,
                LearningFocus::BuildingServices,
            ],
            &Constraints::default(),
            2,
        );
        assert_eq!(ids(&out), vec!["b", "d"]);
    }

    #[test]
    fn test_region_filter() {
        let catalog = fixture();
        let constraints = Constraints::default().with_regions(&[Region::South]);
        let out = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[LearningFocus::ArchitecturalPrinciples],
            &constraints,
            2,
        );
        assert_eq!(ids(&out), vec!["b"]);
    }

    #[test]
    fn test_preference_tolerance() {
        let catalog = fixture();
        // b has indices (5, 1): urban gap 3 from 2, heritage gap 0
        let constraints = Constraints::default()
            .with_urban_rural_preference(2)
            .with_heritage_contemporary_preference(1);
        let out = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[LearningFocus::ArchitecturalPrinciples],
            &constraints,
            2,
        );
        // a: gaps (1, 2) passes; b: urban gap 3 fails
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn test_tolerance_boundary_inclusive() {
        let city = City::new("x", "X", Region::East)
            .with_ideal_years(&[AcademicYear::Third])
            .with_learning_focus(&[LearningFocus::ConstructionPractices])
            .with_indices(5, 1);
        let constraints = Constraints::default()
            .with_urban_rural_preference(3)
            .with_heritage_contemporary_preference(3);
        let goals = [LearningFocus::ConstructionPractices];
        assert!(is_eligible(&city, AcademicYear::Third, &goals, &constraints, 2));
        assert!(!is_eligible(&city, AcademicYear::Third, &goals, &constraints, 1));
    }

    #[test]
    fn test_empty_goals_match_nothing() {
        let catalog = fixture();
        let out = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[],
            &Constraints::default(),
            2,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_catalog_untouched() {
        let catalog = fixture();
        let before = catalog.cities().to_vec();
        let _ = eligible_cities(
            &catalog,
            AcademicYear::First,
            &[LearningFocus::ArchitecturalPrinciples],
            &Constraints::default(),
            2,
        );
        assert_eq!(catalog.cities(), before.as_slice());
    }
}
