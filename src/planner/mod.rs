//! Circuit planning pipeline.
//!
//! Turns a [`CircuitRequest`] into a short ranked list of [`Circuit`]s
//! drawn from a [`CityCatalog`](crate::catalog::CityCatalog).
//!
//! # Pipeline
//!
//! 1. **Eligibility**: keep cities that suit the year, offer a requested
//!    goal, lie in a permitted region and sit close to the requested
//!    urban-rural and heritage-contemporary preferences.
//! 2. **Generation**: build a handful of candidates by regional clustering
//!    and greedy diversity selection, optionally anchored at a starting
//!    city.
//! 3. **Scoring**: rate each candidate on four weighted criteria through
//!    a [`Scorer`] of pluggable [`ScoringCriterion`]s.
//! 4. **Planning**: synthesize a day-by-day itinerary and an academic
//!    justification.
//! 5. **Ranking**: stable sort by total score, keep the best.
//!
//! # Key Types
//!
//! - [`CircuitPlanner`]: runs the pipeline
//! - [`PlannerConfig`]: result caps, city bounds, tolerance, seed
//! - [`CircuitRequest`] / [`Constraints`]: caller input
//! - [`Circuit`] / [`Score`] / [`DayPlanEntry`]: output records
//!
//! Saved circuits are edited through [`remove_city`], [`move_city`],
//! [`replace_city`] and [`remove_goal`], which re-run scoring and planning
//! on the edited circuit.

mod circuit;
mod config;
mod customize;
mod eligibility;
mod generator;
mod itinerary;
mod justification;
mod ranker;
mod request;
mod scoring;
mod templates;

pub use circuit::{
    Candidate, Circuit, CircuitStatus, DayPlanEntry, Score, ACADEMIC_WEIGHT, PREFERENCE_WEIGHT,
    PROGRESSION_WEIGHT, TRAVEL_WEIGHT,
};
pub use config::{PlannerConfig, MAX_CANDIDATES, MAX_RESULTS};
pub use customize::{
    find_alternatives, move_city, remove_city, remove_goal, replace_city, Customization,
    MAX_ALTERNATIVES,
};
pub use eligibility::{eligible_cities, is_eligible};
pub use generator::{diversity_select, generate_candidates, target_city_count};
pub use itinerary::{allocate_days, DayPlanSynthesizer};
pub use justification::compose_justification;
pub use ranker::CircuitPlanner;
pub use request::{CircuitRequest, Constraints};
pub use scoring::{
    AcademicMatch, Component, PedagogicalProgression, Scorer, ScoringContext, ScoringCriterion,
    TravelEfficiency, UserPreference,
};
