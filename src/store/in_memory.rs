//! In-memory store, for tests and single-session use.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{CircuitError, Result};
use crate::planner::{Circuit, CircuitStatus};

use super::CircuitStore;

/// Keeps circuits in a `Vec` behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryCircuitStore {
    circuits: RwLock<Vec<Circuit>>,
}

impl InMemoryCircuitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers only ever replace whole records, so a poisoned lock still
    // holds valid data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Circuit>> {
        self.circuits.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Circuit>> {
        self.circuits.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CircuitStore for InMemoryCircuitStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn get(&self, id: &str) -> Result<Option<Circuit>> {
        Ok(self.read().iter().find(|c| c.id == id).cloned())
    }

    fn save(&self, circuit: Circuit) -> Result<()> {
        let mut circuits = self.write();
        debug!(id = %circuit.id, "saving circuit");
        match circuits.iter_mut().find(|c| c.id == circuit.id) {
            Some(existing) => *existing = circuit,
            None => circuits.push(circuit),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut circuits = self.write();
        let before = circuits.len();
        circuits.retain(|c| c.id != id);
        Ok(circuits.len() < before)
    }

    fn duplicate(&self, id: &str) -> Result<Option<Circuit>> {
        let mut circuits = self.write();
        let Some(copy) = circuits.iter().find(|c| c.id == id).map(Circuit::duplicate) else {
            return Ok(None);
        };
        circuits.push(copy.clone());
        Ok(Some(copy))
    }

    fn list(&self) -> Result<Vec<Circuit>> {
        Ok(self.read().clone())
    }

    fn update_status(&self, id: &str, status: CircuitStatus) -> Result<Circuit> {
        let mut circuits = self.write();
        let slot = circuits
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CircuitError::NotFound(format!("circuit '{id}'")))?;
        let advanced = slot.clone().advance(status)?;
        *slot = advanced.clone();
        Ok(advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AcademicYear, CityCatalog, LearningFocus};
    use crate::planner::{CircuitPlanner, CircuitRequest, PlannerConfig};

    fn circuits(n: usize) -> Vec<Circuit> {
        let catalog = CityCatalog::builtin();
        let planner = CircuitPlanner::new(&catalog, PlannerConfig::default()).unwrap();
        let request = CircuitRequest::new(AcademicYear::Second, 6).with_learning_goals(&[
            LearningFocus::HeritageConservation,
            LearningFocus::ClimateResponsiveness,
        ]);
        let mut out = planner.plan(&request).unwrap();
        assert!(out.len() >= n);
        out.truncate(n);
        out
    }

    #[test]
    fn test_save_and_get_unchanged() {
        let store = InMemoryCircuitStore::new();
        let circuit = circuits(1).remove(0);
        store.save(circuit.clone()).unwrap();
        assert_eq!(store.get(&circuit.id).unwrap(), Some(circuit));
        assert_eq!(store.get("circuit-missing").unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_in_place() {
        let store = InMemoryCircuitStore::new();
        let mut saved = circuits(2);
        for c in &saved {
            store.save(c.clone()).unwrap();
        }
        saved[0].name = "Renamed".into();
        store.save(saved[0].clone()).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Renamed");
        assert_eq!(listed[1].id, saved[1].id);
    }

    #[test]
    fn test_delete() {
        let store = InMemoryCircuitStore::new();
        let circuit = circuits(1).remove(0);
        store.save(circuit.clone()).unwrap();
        assert!(store.delete(&circuit.id).unwrap());
        assert!(!store.delete(&circuit.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_saves_copy() {
        let store = InMemoryCircuitStore::new();
        let circuit = circuits(1).remove(0);
        store.save(circuit.clone()).unwrap();

        let copy = store.duplicate(&circuit.id).unwrap().unwrap();
        assert_ne!(copy.id, circuit.id);
        assert!(copy.name.ends_with(" (Copy)"));
        assert_eq!(copy.status(), CircuitStatus::Draft);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&circuit.id).unwrap(), Some(circuit));
        assert!(store.duplicate("circuit-missing").unwrap().is_none());
    }

    #[test]
    fn test_update_status() {
        let store = InMemoryCircuitStore::new();
        let circuit = circuits(1).remove(0);
        store.save(circuit.clone()).unwrap();

        let approved = store
            .update_status(&circuit.id, CircuitStatus::Approved)
            .unwrap();
        assert_eq!(approved.status(), CircuitStatus::Approved);
        assert_eq!(
            store.get(&circuit.id).unwrap().unwrap().status(),
            CircuitStatus::Approved
        );

        let err = store
            .update_status(&circuit.id, CircuitStatus::Draft)
            .unwrap_err();
        assert!(matches!(err, CircuitError::InvalidTransition { .. }));
        // failed transition leaves the record alone
        assert_eq!(
            store.get(&circuit.id).unwrap().unwrap().status(),
            CircuitStatus::Approved
        );
    }

    #[test]
    fn test_update_status_unknown_id() {
        let store = InMemoryCircuitStore::new();
        let err = store
            .update_status("circuit-missing", CircuitStatus::Approved)
            .unwrap_err();
        assert!(matches!(err, CircuitError::NotFound(_)));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let store: Box<dyn CircuitStore> = Box::new(InMemoryCircuitStore::new());
        assert_eq!(store.name(), "in_memory");
        assert!(store.list().unwrap().is_empty());
    }
}
