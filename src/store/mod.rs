//! Persistence of saved circuits.
//!
//! The planner never stores anything itself; it only produces circuits
//! that a caller may hand to a [`CircuitStore`]. Stores return saved
//! records unchanged, apart from the explicit edits made through
//! [`CircuitStore::duplicate`] and [`CircuitStore::update_status`].

mod in_memory;

pub use in_memory::InMemoryCircuitStore;

use crate::error::Result;
use crate::planner::{Circuit, CircuitStatus};

/// Storage backend for circuits, keyed by circuit id.
pub trait CircuitStore: Send + Sync {
    /// Backend name.
    fn name(&self) -> &str;

    /// Looks a circuit up by id.
    fn get(&self, id: &str) -> Result<Option<Circuit>>;

    /// Saves a circuit, replacing any previous record with the same id.
    fn save(&self, circuit: Circuit) -> Result<()>;

    /// Deletes a circuit. Returns whether anything was removed.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Saves and returns a copy of a stored circuit, with a new id,
    /// " (Copy)" name suffix, Draft status and fresh timestamps.
    fn duplicate(&self, id: &str) -> Result<Option<Circuit>>;

    /// All circuits in the order they were first saved.
    fn list(&self) -> Result<Vec<Circuit>>;

    /// Moves a stored circuit forward in its lifecycle and saves it.
    ///
    /// Fails with `NotFound` for an unknown id and `InvalidTransition`
    /// for a backward move.
    fn update_status(&self, id: &str, status: CircuitStatus) -> Result<Circuit>;
}
