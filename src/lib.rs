//! Rule-based study tour planner for architecture education.
//!
//! Recommends multi-city study circuits for architecture students from a
//! read-only catalog of cities:
//!
//! - **Catalog**: closed enumerations for regions, travel modes, learning
//!   focus areas and academic years, plus validated [`City`](catalog::City)
//!   records and a built-in reference dataset.
//! - **Planner**: eligibility filtering, candidate generation by regional
//!   clustering and diversity selection, weighted four-part scoring,
//!   day-by-day itineraries and academic justifications.
//! - **Customization**: remove, reorder or replace cities in a saved
//!   circuit, with coverage and travel warnings.
//! - **Store**: the persistence contract for saved circuits and an
//!   in-memory implementation.
//!
//! # Determinism
//!
//! Given the same catalog, request and [`PlannerConfig`](planner::PlannerConfig)
//! seed, planning produces the same ranked circuits, day plans and scores.
//! Only circuit ids and timestamps differ between runs.
//!
//! # Quick Start
//!
//! ```
//! use archcircuit::catalog::{AcademicYear, CityCatalog, LearningFocus};
//! use archcircuit::planner::{CircuitPlanner, CircuitRequest, PlannerConfig};
//!
//! let catalog = CityCatalog::builtin();
//! let planner = CircuitPlanner::new(&catalog, PlannerConfig::default()).unwrap();
//!
//! let request = CircuitRequest::new(AcademicYear::Second, 6)
//!     .with_learning_goals(&[LearningFocus::HeritageConservation]);
//! for circuit in planner.plan(&request).unwrap() {
//!     println!("{} ({:.2})", circuit.name, circuit.score.total());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod planner;
pub mod random;
pub mod store;
