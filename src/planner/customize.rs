//! Editing saved circuits.
//!
//! Edits never touch the input circuit. Each one produces a new
//! [`Circuit`] re-assembled by the [`CircuitPlanner`], so the day plan,
//! score and justification always describe the edited city sequence.
//! Edits that are allowed but worth a second look come back with
//! human-readable warnings.

use crate::catalog::{AcademicYear, City, CityCatalog, LearningFocus};
use crate::error::{CircuitError, Result};

use super::circuit::Circuit;
use super::ranker::CircuitPlanner;

/// Maximum number of alternatives suggested for one city.
pub const MAX_ALTERNATIVES: usize = 5;

/// The outcome of an edit.
#[derive(Debug, Clone)]
pub struct Customization {
    pub circuit: Circuit,
    pub warnings: Vec<String>,
}

/// Cities that could stand in for `city_id` in a circuit for `year`.
///
/// A city qualifies when it is ideal for the year and shares at least one
/// focus tag with the original. Same-region matches come first, then the
/// rest, each group in catalog order.
pub fn find_alternatives<'a>(
    catalog: &'a CityCatalog,
    city_id: &str,
    year: AcademicYear,
) -> Result<Vec<&'a City>> {
    let current = catalog
        .get(city_id)
        .ok_or_else(|| CircuitError::NotFound(format!("city '{city_id}'")))?;

    let (mut near, far): (Vec<&City>, Vec<&City>) = catalog
        .iter()
        .filter(|c| c.id != current.id)
        .filter(|c| c.is_ideal_for(year))
        .filter(|c| c.learning_focus.iter().any(|f| current.has_focus(*f)))
        .partition(|c| c.region == current.region);
    near.extend(far);
    near.truncate(MAX_ALTERNATIVES);
    Ok(near)
}

/// Removes a city from the circuit.
///
/// Refuses to go below the planner's minimum city count. Warns when the
/// removed city offered any of the circuit's learning goals.
pub fn remove_city(
    planner: &CircuitPlanner<'_>,
    circuit: &Circuit,
    city_id: &str,
) -> Result<Customization> {
    position_in(circuit, city_id)?;
    let remaining: Vec<String> = circuit
        .cities
        .iter()
        .filter(|id| id.as_str() != city_id)
        .cloned()
        .collect();
    let min = planner.config().min_cities;
    if remaining.len() < min {
        return Err(CircuitError::Customization(format!(
            "circuit must have at least {min} cities"
        )));
    }

    let mut warnings = Vec::new();
    if let Some(city) = planner.catalog().get(city_id) {
        let affected: Vec<&str> = circuit
            .learning_goals
            .iter()
            .filter(|g| city.has_focus(**g))
            .map(|g| g.label())
            .collect();
        if !affected.is_empty() {
            warnings.push(format!(
                "Removing {} may reduce coverage of: {}",
                city.name,
                affected.join(", ")
            ));
        }
    }

    Ok(Customization {
        circuit: planner.reassemble(circuit, &remaining)?,
        warnings,
    })
}

/// Moves a city to position `to` (0-based) in the visiting order.
pub fn move_city(
    planner: &CircuitPlanner<'_>,
    circuit: &Circuit,
    city_id: &str,
    to: usize,
) -> Result<Customization> {
    let from = position_in(circuit, city_id)?;
    if to >= circuit.cities.len() {
        return Err(CircuitError::Customization(format!(
            "position {to} is outside a circuit of {} cities",
            circuit.cities.len()
        )));
    }
    let mut order = circuit.cities.clone();
    let moved = order.remove(from);
    order.insert(to, moved);

    let warnings = if from == to {
        Vec::new()
    } else {
        vec!["City order changed - review travel efficiency".to_string()]
    };
    Ok(Customization {
        circuit: planner.reassemble(circuit, &order)?,
        warnings,
    })
}

/// Swaps `city_id` for `replacement`, keeping its position.
///
/// The replacement must be a catalog city not already in the circuit.
/// Warns when it is not ideal for the circuit's academic year.
pub fn replace_city(
    planner: &CircuitPlanner<'_>,
    circuit: &Circuit,
    city_id: &str,
    replacement: &str,
) -> Result<Customization> {
    let at = position_in(circuit, city_id)?;
    let city = planner
        .catalog()
        .get(replacement)
        .ok_or_else(|| CircuitError::NotFound(format!("city '{replacement}'")))?;
    if circuit.cities.iter().any(|id| id == replacement) {
        return Err(CircuitError::Customization(format!(
            "{} is already part of the circuit",
            city.name
        )));
    }

    let mut warnings = Vec::new();
    if !city.is_ideal_for(circuit.academic_year) {
        warnings.push(format!(
            "{} is not recommended for {} students",
            city.name, circuit.academic_year
        ));
    }

    let mut order = circuit.cities.clone();
    order[at] = city.id.clone();
    Ok(Customization {
        circuit: planner.reassemble(circuit, &order)?,
        warnings,
    })
}

/// Drops a learning goal from the circuit.
///
/// The cities stay as they are; score, justification and daily focus are
/// recomputed against the remaining goals. At least one goal must remain.
pub fn remove_goal(
    planner: &CircuitPlanner<'_>,
    circuit: &Circuit,
    goal: LearningFocus,
) -> Result<Customization> {
    if !circuit.learning_goals.contains(&goal) {
        return Err(CircuitError::NotFound(format!(
            "learning goal '{}' in circuit '{}'",
            goal.label(),
            circuit.id
        )));
    }
    if circuit.learning_goals.len() <= 1 {
        return Err(CircuitError::Customization(
            "circuit must keep at least one learning goal".into(),
        ));
    }

    let narrowed = Circuit {
        learning_goals: circuit
            .learning_goals
            .iter()
            .copied()
            .filter(|g| *g != goal)
            .collect(),
        ..circuit.clone()
    };
    Ok(Customization {
        circuit: planner.reassemble(&narrowed, &circuit.cities)?,
        warnings: vec![format!("Removed learning goal: {}", goal.label())],
    })
}

fn position_in(circuit: &Circuit, city_id: &str) -> Result<usize> {
    circuit
        .cities
        .iter()
        .position(|id| id == city_id)
        .ok_or_else(|| {
            CircuitError::NotFound(format!("city '{city_id}' in circuit '{}'", circuit.id))
        })
}
