//! Circuit planner: runs the full pipeline for a request.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::{AcademicYear, CityCatalog};
use crate::error::{CircuitError, RequestError, Result};

use super::circuit::{
    circuit_name, new_circuit_id, Candidate, Circuit, CircuitStatus, DayPlanEntry, Score,
};
use super::config::PlannerConfig;
use super::eligibility::eligible_cities;
use super::generator::generate_candidates;
use super::itinerary::DayPlanSynthesizer;
use super::justification::compose_justification;
use super::request::CircuitRequest;
use super::scoring::{Scorer, ScoringContext};

/// A candidate with everything derived from it.
struct Evaluated<'a> {
    candidate: Candidate<'a>,
    score: Score,
    day_plan: Vec<DayPlanEntry>,
    justification: String,
}

/// Recommends study-tour circuits from a read-only catalog.
///
/// The pipeline is eligibility, candidate generation, then scoring with
/// day plan and justification per candidate, then a stable descending
/// sort on the total score. The catalog is never modified.
///
/// # Examples
///
/// ```
/// use archcircuit::catalog::{AcademicYear, CityCatalog, LearningFocus};
/// use archcircuit::planner::{CircuitPlanner, CircuitRequest, PlannerConfig};
///
/// let catalog = CityCatalog::builtin();
/// let planner = CircuitPlanner::new(&catalog, PlannerConfig::default()).unwrap();
/// let request = CircuitRequest::new(AcademicYear::First, 5)
///     .with_learning_goals(&[LearningFocus::ArchitecturalPrinciples]);
///
/// let circuits = planner.plan(&request).unwrap();
/// assert!(!circuits.is_empty());
/// assert!(circuits.len() <= 5);
/// ```
pub struct CircuitPlanner<'c> {
    catalog: &'c CityCatalog,
    config: PlannerConfig,
    scorer: Scorer,
}

impl<'c> CircuitPlanner<'c> {
    /// Creates a planner with the standard scorer.
    ///
    /// Fails with [`CircuitError::InvalidConfig`] when the config does not
    /// validate.
    pub fn new(catalog: &'c CityCatalog, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            scorer: Scorer::new(),
        })
    }

    /// Replaces the scorer.
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn catalog(&self) -> &'c CityCatalog {
        self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns up to `max_results` circuits, best first.
    ///
    /// A request that matches nothing yields `Ok(vec![])`. Only a malformed
    /// request is an error.
    pub fn plan(&self, request: &CircuitRequest) -> Result<Vec<Circuit>> {
        request.validate()?;
        let year = request
            .academic_year
            .ok_or(RequestError::MissingAcademicYear)?;

        let eligible = eligible_cities(
            self.catalog,
            year,
            &request.learning_goals,
            &request.constraints,
            self.config.preference_tolerance,
        );
        debug!(eligible = eligible.len(), %year, "filtered catalog");

        let candidates = generate_candidates(
            &eligible,
            request.duration,
            &request.constraints,
            request.starting_city_name(),
            &self.config,
        );

        let ctx = ScoringContext {
            academic_year: year,
            learning_goals: &request.learning_goals,
            constraints: &request.constraints,
            duration: request.duration,
        };
        let mut ranked = self.evaluate_all(candidates, &ctx);
        // stable: equal totals keep generation order
        ranked.sort_by(|a, b| b.score.total().total_cmp(&a.score.total()));
        ranked.truncate(self.config.max_results);

        let now = Utc::now();
        let circuits: Vec<Circuit> = ranked
            .into_iter()
            .map(|e| self.build_circuit(e, request, year, now))
            .collect();

        info!(
            returned = circuits.len(),
            best = circuits.first().map(|c| c.score.total()),
            "planned circuits"
        );
        Ok(circuits)
    }

    /// Rebuilds `circuit` around a new city sequence.
    ///
    /// Score, day plan and justification are recomputed from the circuit's
    /// own year, goals, constraints and duration. Identity, name, status
    /// and `created_at` are kept; `updated_at` is refreshed.
    pub fn reassemble(&self, circuit: &Circuit, city_ids: &[String]) -> Result<Circuit> {
        let cities = city_ids
            .iter()
            .map(|id| {
                self.catalog
                    .get(id)
                    .ok_or_else(|| CircuitError::NotFound(format!("city '{id}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        let candidate = Candidate::new(cities);
        if candidate.len() < self.config.min_cities {
            return Err(CircuitError::Customization(format!(
                "a circuit needs at least {} cities",
                self.config.min_cities
            )));
        }

        let ctx = ScoringContext {
            academic_year: circuit.academic_year,
            learning_goals: &circuit.learning_goals,
            constraints: &circuit.constraints,
            duration: circuit.duration,
        };
        let evaluated = self.evaluate(candidate, &ctx);
        Ok(Circuit {
            cities: evaluated.candidate.ids(),
            day_plan: evaluated.day_plan,
            justification: evaluated.justification,
            score: evaluated.score,
            updated_at: Utc::now(),
            ..circuit.clone()
        })
    }

    fn evaluate_all<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        ctx: &ScoringContext<'_>,
    ) -> Vec<Evaluated<'a>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if self.config.parallel {
                return candidates
                    .into_par_iter()
                    .map(|c| self.evaluate(c, ctx))
                    .collect();
            }
        }
        candidates
            .into_iter()
            .map(|c| self.evaluate(c, ctx))
            .collect()
    }

    fn evaluate<'a>(&self, candidate: Candidate<'a>, ctx: &ScoringContext<'_>) -> Evaluated<'a> {
        let score = self.scorer.score(&candidate, ctx);
        let day_plan = DayPlanSynthesizer::new(self.config.seed).synthesize(
            candidate.cities(),
            ctx.learning_goals,
            ctx.academic_year,
            ctx.duration,
        );
        let justification =
            compose_justification(&candidate, ctx.learning_goals, ctx.academic_year);
        Evaluated {
            candidate,
            score,
            day_plan,
            justification,
        }
    }

    fn build_circuit(
        &self,
        evaluated: Evaluated<'_>,
        request: &CircuitRequest,
        year: AcademicYear,
        now: DateTime<Utc>,
    ) -> Circuit {
        let names: Vec<&str> = evaluated
            .candidate
            .cities()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        Circuit {
            id: new_circuit_id(),
            name: circuit_name(&names),
            academic_year: year,
            semester: request.semester,
            duration: request.duration,
            learning_goals: request.learning_goals.clone(),
            starting_city: request.starting_city_name().map(str::to_string),
            cities: evaluated.candidate.ids(),
            day_plan: evaluated.day_plan,
            justification: evaluated.justification,
            status: CircuitStatus::Draft,
            created_at: now,
            updated_at: now,
            constraints: request.constraints.clone(),
            score: evaluated.score,
        }
    }
}
