//! Candidate scoring.
//!
//! A candidate is rated by four criteria, each producing a value in
//! [0, 100]; [`Score`] combines them with fixed weights
//! (40 / 30 / 20 / 10). Criteria are pure functions of the candidate and
//! the [`ScoringContext`]: no randomness, no hidden state.

use crate::catalog::{AcademicYear, City, LearningFocus};

use super::circuit::{Candidate, Score};
use super::request::Constraints;

/// Request-side inputs shared by every criterion.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'r> {
    pub academic_year: AcademicYear,
    pub learning_goals: &'r [LearningFocus],
    pub constraints: &'r Constraints,
    pub duration: u32,
}

/// A rule that rates a candidate on one dimension.
///
/// Higher is better. Implementations should stay within [0, 100]; the
/// final [`Score`] clamps regardless.
pub trait ScoringCriterion: Send + Sync {
    /// Returns the name of this criterion.
    fn name(&self) -> &str;

    /// Rates the candidate.
    fn score(&self, candidate: &Candidate<'_>, ctx: &ScoringContext<'_>) -> f64;
}

/// The four score components, in weight order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    AcademicMatch,
    TravelEfficiency,
    PedagogicalProgression,
    UserPreference,
}

impl Component {
    fn slot(self) -> usize {
        match self {
            Self::AcademicMatch => 0,
            Self::TravelEfficiency => 1,
            Self::PedagogicalProgression => 2,
            Self::UserPreference => 3,
        }
    }
}

/// Computes [`Score`]s from four criteria.
///
/// # Examples
///
/// ```ignore
/// let scorer = Scorer::new();
/// let score = scorer.score(&candidate, &ctx);
/// assert!(score.total() <= 100.0);
/// ```
pub struct Scorer {
    criteria: [Box<dyn ScoringCriterion>; 4],
}

impl Scorer {
    /// Creates a scorer with the standard criteria.
    pub fn new() -> Self {
        Self {
            criteria: [
                Box::new(AcademicMatch),
                Box::new(TravelEfficiency),
                Box::new(PedagogicalProgression),
                Box::new(UserPreference),
            ],
        }
    }

    /// Replaces the criterion used for one component.
    pub fn with_criterion<C: ScoringCriterion + 'static>(
        mut self,
        component: Component,
        criterion: C,
    ) -> Self {
        self.criteria[component.slot()] = Box::new(criterion);
        self
    }

    /// Returns the names of the criteria in component order.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    /// Scores a candidate.
    pub fn score(&self, candidate: &Candidate<'_>, ctx: &ScoringContext<'_>) -> Score {
        let [academic, travel, progression, preference] = &self.criteria;
        Score::new(
            academic.score(candidate, ctx),
            travel.score(candidate, ctx),
            progression.score(candidate, ctx),
            preference.score(candidate, ctx),
        )
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Standard criteria
// ============================================================================

/// Goal coverage (70%) blended with year suitability (30%).
///
/// A goal is fully covered once two cities offer it.
pub struct AcademicMatch;

impl ScoringCriterion for AcademicMatch {
    fn name(&self) -> &str {
        "AcademicMatch"
    }

    fn score(&self, candidate: &Candidate<'_>, ctx: &ScoringContext<'_>) -> f64 {
        let cities = candidate.cities();
        if cities.is_empty() {
            return 0.0;
        }
        let year_match = cities
            .iter()
            .filter(|c| c.is_ideal_for(ctx.academic_year))
            .count() as f64
            / cities.len() as f64
            * 100.0;

        if ctx.learning_goals.is_empty() {
            return year_match;
        }
        let coverage: f64 = ctx
            .learning_goals
            .iter()
            .map(|goal| {
                let offering = cities.iter().filter(|c| c.has_focus(*goal)).count();
                offering.min(2) as f64 / 2.0
            })
            .sum::<f64>()
            / ctx.learning_goals.len() as f64
            * 100.0;

        coverage * 0.7 + year_match * 0.3
    }
}

/// Regional clustering, fit between suggested days and duration, and
/// reachability by the preferred travel modes.
pub struct TravelEfficiency;

impl ScoringCriterion for TravelEfficiency {
    fn name(&self) -> &str {
        "TravelEfficiency"
    }

    fn score(&self, candidate: &Candidate<'_>, ctx: &ScoringContext<'_>) -> f64 {
        let cities = candidate.cities();
        let mut score = 100.0;
        match candidate.regions().len() {
            1 => score += 10.0,
            n if n > 3 => score -= 30.0,
            _ => {}
        }

        let duration = ctx.duration.max(1) as f64;
        let suggested: u32 = cities.iter().map(|c| c.suggested_days).sum();
        let duration_match = 100.0 * (1.0 - (suggested as f64 - duration).abs() / duration);
        score = score * 0.6 + duration_match * 0.4;

        let modes = &ctx.constraints.preferred_modes;
        if !modes.is_empty() && cities.iter().any(|c| !c.reachable_by_any(modes)) {
            score -= 20.0;
        }
        score.clamp(0.0, 100.0)
    }
}

/// Heritage-to-contemporary ordering and breadth of focus tags.
///
/// Base 70. Adds 15 when no city's heritage index falls more than two
/// points below its predecessor, or when the last heritage-leaning city
/// sits in the first half of the sequence. Adds up to 15 more for focus
/// diversity, saturating at four distinct tags.
pub struct PedagogicalProgression;

impl ScoringCriterion for PedagogicalProgression {
    fn name(&self) -> &str {
        "PedagogicalProgression"
    }

    fn score(&self, candidate: &Candidate<'_>, _ctx: &ScoringContext<'_>) -> f64 {
        let cities = candidate.cities();
        let mut score = 70.0;

        let no_sharp_regression = cities.windows(2).all(|w| {
            w[1].heritage_contemporary_index + 2 >= w[0].heritage_contemporary_index
        });
        let last_heritage = cities
            .iter()
            .rposition(|c| c.is_heritage_leaning())
            .unwrap_or(0);
        if no_sharp_regression || last_heritage * 2 < cities.len() {
            score += 15.0;
        }

        let distinct = candidate.focus_coverage().len() as f64;
        score += (distinct / 4.0).min(1.0) * 15.0;

        score.min(100.0)
    }
}

/// Closeness of the average indices to the requested preferences.
///
/// Two halves of up to 50 points each: urban-rural and
/// heritage-contemporary.
pub struct UserPreference;

impl ScoringCriterion for UserPreference {
    fn name(&self) -> &str {
        "UserPreference"
    }

    fn score(&self, candidate: &Candidate<'_>, ctx: &ScoringContext<'_>) -> f64 {
        let cities = candidate.cities();
        if cities.is_empty() {
            return 0.0;
        }
        let urban = preference_term(
            average(cities, |c| c.urban_rural_index),
            ctx.constraints.urban_rural_preference,
        );
        let heritage = preference_term(
            average(cities, |c| c.heritage_contemporary_index),
            ctx.constraints.heritage_contemporary_preference,
        );
        urban + heritage
    }
}

fn average(cities: &[&City], index: impl Fn(&City) -> u8) -> f64 {
    cities.iter().map(|c| index(c) as f64).sum::<f64>() / cities.len() as f64
}

fn preference_term(avg: f64, preference: u8) -> f64 {
    (50.0 * (1.0 - (avg - preference as f64).abs() / 5.0)).clamp(0.0, 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Region, TravelMode};

    use LearningFocus::*;

    fn city(id: &str, region: Region) -> City {
        City::new(id, id, region)
            .with_ideal_years(&[AcademicYear::First])
            .with_suggested_days(2)
            .with_travel_modes(&[TravelMode::Train])
    }

    fn ctx<'r>(
        goals: &'r [LearningFocus],
        constraints: &'r Constraints,
        duration: u32,
    ) -> ScoringContext<'r> {
        ScoringContext {
            academic_year: AcademicYear::First,
            learning_goals: goals,
            constraints,
            duration,
        }
    }

    // ---- AcademicMatch ----

    #[test]
    fn test_academic_full_coverage() {
        let a = city("a", Region::North).with_learning_focus(&[ArchitecturalPrinciples]);
        let b = city("b", Region::North).with_learning_focus(&[ArchitecturalPrinciples]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        let s = AcademicMatch.score(&cand, &ctx(&[ArchitecturalPrinciples], &c, 4));
        assert!((s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_academic_partial_coverage_and_year() {
        let a = city("a", Region::North).with_learning_focus(&[ArchitecturalPrinciples]);
        let b = city("b", Region::North)
            .with_learning_focus(&[BuildingServices])
            .with_ideal_years(&[AcademicYear::Third]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        // AP covered by 1 city -> 0.5, BS by 1 -> 0.5: coverage 50
        // year match 1 of 2 -> 50
        let s = AcademicMatch.score(
            &cand,
            &ctx(&[ArchitecturalPrinciples, BuildingServices], &c, 4),
        );
        assert!((s - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_academic_without_goals_uses_year_only() {
        let a = city("a", Region::North);
        let b = city("b", Region::North).with_ideal_years(&[AcademicYear::Second]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        let s = AcademicMatch.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 50.0).abs() < 1e-9);
    }

    // ---- TravelEfficiency ----

    #[test]
    fn test_travel_single_region_exact_duration() {
        let a = city("a", Region::South);
        let b = city("b", Region::South);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        // 110 * 0.6 + 100 * 0.4 = 106 -> clamped
        let s = TravelEfficiency.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_travel_many_regions_penalized() {
        let cities = [
            city("a", Region::North),
            city("b", Region::South),
            city("c", Region::East),
            city("d", Region::West),
        ];
        let cand = Candidate::new(cities.iter().collect());
        let c = Constraints::default();
        // 70 * 0.6 + 100 * 0.4 = 82
        let s = TravelEfficiency.score(&cand, &ctx(&[], &c, 8));
        assert!((s - 82.0).abs() < 1e-9);
    }

    #[test]
    fn test_travel_duration_mismatch() {
        let a = city("a", Region::North);
        let b = city("b", Region::West);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        // suggested 4, duration 8: match 50 -> 60 + 20
        let s = TravelEfficiency.score(&cand, &ctx(&[], &c, 8));
        assert!((s - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_travel_mode_penalty_only_with_preferences() {
        let a = city("a", Region::North);
        let b = city("b", Region::West).with_travel_modes(&[TravelMode::Flight]);
        let cand = Candidate::new(vec![&a, &b]);

        let none = Constraints::default();
        let base = TravelEfficiency.score(&cand, &ctx(&[], &none, 4));
        assert!((base - 100.0).abs() < 1e-9);

        let train = Constraints::default().with_preferred_modes(&[TravelMode::Train]);
        let penalized = TravelEfficiency.score(&cand, &ctx(&[], &train, 4));
        assert!((penalized - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_travel_never_negative() {
        let a = city("a", Region::North).with_suggested_days(40);
        let b = city("b", Region::West).with_suggested_days(40);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default().with_preferred_modes(&[TravelMode::Road]);
        let s = TravelEfficiency.score(&cand, &ctx(&[], &c, 2));
        assert!(s.abs() < 1e-9);
    }

    // ---- PedagogicalProgression ----

    #[test]
    fn test_progression_heritage_first() {
        let a = city("a", Region::North)
            .with_indices(3, 1)
            .with_learning_focus(&[HeritageConservation, ArchitecturalPrinciples]);
        let b = city("b", Region::North)
            .with_indices(3, 5)
            .with_learning_focus(&[BuildingServices, ByeLawsRegulations]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        // 70 + 15 + 15 (four distinct tags)
        let s = PedagogicalProgression.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_progression_sharp_regression_late_heritage() {
        let a = city("a", Region::North)
            .with_indices(3, 5)
            .with_learning_focus(&[BuildingServices]);
        let b = city("b", Region::North)
            .with_indices(3, 1)
            .with_learning_focus(&[BuildingServices]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        // drop of 4 and heritage city last: no ordering bonus; 1 tag -> 3.75
        let s = PedagogicalProgression.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 73.75).abs() < 1e-9);
    }

    #[test]
    fn test_progression_without_heritage_cities_gets_bonus() {
        let a = city("a", Region::North)
            .with_indices(3, 5)
            .with_learning_focus(&[BuildingServices]);
        let b = city("b", Region::North)
            .with_indices(3, 3)
            .with_learning_focus(&[BuildingServices]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        let s = PedagogicalProgression.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 88.75).abs() < 1e-9);
    }

    // ---- UserPreference ----

    #[test]
    fn test_preference_exact_match() {
        let a = city("a", Region::North).with_indices(4, 2);
        let b = city("b", Region::North).with_indices(4, 2);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default()
            .with_urban_rural_preference(4)
            .with_heritage_contemporary_preference(2);
        let s = UserPreference.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_preference_distance() {
        let a = city("a", Region::North).with_indices(5, 1);
        let b = city("b", Region::North).with_indices(5, 1);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default()
            .with_urban_rural_preference(1)
            .with_heritage_contemporary_preference(1);
        // urban: 50 * (1 - 4/5) = 10, heritage: 50
        let s = UserPreference.score(&cand, &ctx(&[], &c, 4));
        assert!((s - 60.0).abs() < 1e-9);
    }

    // ---- Scorer ----

    struct Fixed(f64);
    impl ScoringCriterion for Fixed {
        fn name(&self) -> &str {
            "Fixed"
        }
        fn score(&self, _c: &Candidate<'_>, _ctx: &ScoringContext<'_>) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_scorer_names() {
        assert_eq!(
            Scorer::new().criterion_names(),
            vec![
                "AcademicMatch",
                "TravelEfficiency",
                "PedagogicalProgression",
                "UserPreference"
            ]
        );
    }

    #[test]
    fn test_scorer_weights_components() {
        let scorer = Scorer::new()
            .with_criterion(Component::AcademicMatch, Fixed(100.0))
            .with_criterion(Component::TravelEfficiency, Fixed(50.0))
            .with_criterion(Component::PedagogicalProgression, Fixed(0.0))
            .with_criterion(Component::UserPreference, Fixed(10.0));
        let a = city("a", Region::North);
        let b = city("b", Region::North);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default();
        let s = scorer.score(&cand, &ctx(&[], &c, 4));
        // 40 + 15 + 0 + 1
        assert!((s.total() - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_scorer_is_idempotent() {
        let a = city("a", Region::North)
            .with_indices(2, 1)
            .with_learning_focus(&[HeritageConservation]);
        let b = city("b", Region::East)
            .with_indices(5, 4)
            .with_learning_focus(&[SpatialOrganization, BuildingServices]);
        let cand = Candidate::new(vec![&a, &b]);
        let c = Constraints::default().with_preferred_modes(&[TravelMode::Road]);
        let goals = [HeritageConservation, SpatialOrganization];
        let scorer = Scorer::new();
        let first = scorer.score(&cand, &ctx(&goals, &c, 5));
        let second = scorer.score(&cand, &ctx(&goals, &c, 5));
        assert_eq!(first.total().to_bits(), second.total().to_bits());
        assert_eq!(first, second);
    }
}
