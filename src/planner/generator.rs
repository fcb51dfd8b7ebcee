//! Candidate generation.
//!
//! Builds a short, curated list of city sequences instead of enumerating
//! every subset of the eligible pool:
//!
//! 1. one regional candidate per region of interest that holds enough
//!    eligible cities (regional clustering keeps travel coherent);
//! 2. one cross-region candidate drawn from the whole pool;
//! 3. one candidate anchored at the starting city, drawing from its own
//!    and nearby regions.
//!
//! Every candidate is assembled by diversity selection: a greedy pass
//! that repeatedly takes the city adding the most learning-focus tags not
//! yet covered. Ties go to the earlier city in catalog order.

use tracing::{debug, warn};

use crate::catalog::{City, Region};

use super::circuit::Candidate;
use super::config::PlannerConfig;
use super::request::Constraints;

/// Number of cities each candidate should hold for `duration` days.
///
/// `ceil(duration / 2)` clamped to `[min_cities, min(max_cities, pool)]`.
/// Returns `None` when the pool is smaller than `min_cities`, since no
/// valid candidate can be built.
pub fn target_city_count(
    duration: u32,
    pool_size: usize,
    min_cities: usize,
    max_cities: usize,
) -> Option<usize> {
    let upper = max_cities.min(pool_size);
    if upper < min_cities {
        return None;
    }
    let wanted = (duration as usize).div_ceil(2);
    Some(wanted.clamp(min_cities, upper))
}

/// Generates up to `config.max_candidates` distinct candidates.
///
/// `eligible` must be in catalog order. A starting city is only honoured
/// when it is part of the eligible pool.
pub fn generate_candidates<'a>(
    eligible: &[&'a City],
    duration: u32,
    constraints: &Constraints,
    starting_city: Option<&str>,
    config: &PlannerConfig,
) -> Vec<Candidate<'a>> {
    let Some(target) =
        target_city_count(duration, eligible.len(), config.min_cities, config.max_cities)
    else {
        debug!(
            eligible = eligible.len(),
            "too few eligible cities to build a candidate"
        );
        return Vec::new();
    };

    let start = starting_city.and_then(|name| {
        let found = eligible
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()));
        if found.is_none() {
            warn!(starting_city = name, "starting city is not in the eligible pool");
        }
        found
    });

    let mut raw: Vec<Vec<&'a City>> = Vec::new();

    let regions: &[Region] = if constraints.regions.is_empty() {
        &Region::MAINLAND
    } else {
        &constraints.regions
    };
    for &region in regions {
        let regional: Vec<&'a City> = eligible
            .iter()
            .copied()
            .filter(|c| c.region == region)
            .collect();
        if regional.len() >= target {
            let seed = start.filter(|s| s.region == region);
            raw.push(diversity_select(&regional, target, seed));
        }
    }

    raw.push(diversity_select(eligible, target, start));

    if let Some(start) = start {
        raw.push(diversity_select(&anchored_pool(start, eligible), target, Some(start)));
    }

    let generated = raw.len();
    let mut candidates: Vec<Candidate<'a>> = Vec::new();
    for cities in raw {
        let candidate = Candidate::new(cities);
        if candidate.len() < config.min_cities {
            continue;
        }
        if candidates.iter().any(|c| c.same_sequence(&candidate)) {
            continue;
        }
        candidates.push(candidate);
    }
    candidates.truncate(config.max_candidates);

    debug!(
        target,
        generated,
        kept = candidates.len(),
        "generated circuit candidates"
    );
    candidates
}

/// The starting city, then same-region cities, then cities from nearby
/// regions, each group in catalog order.
fn anchored_pool<'a>(start: &'a City, eligible: &[&'a City]) -> Vec<&'a City> {
    let nearby = start.region.nearby();
    let others = || eligible.iter().copied().filter(|c| c.id != start.id);
    std::iter::once(start)
        .chain(others().filter(|c| c.region == start.region))
        .chain(others().filter(|c| nearby.contains(&c.region)))
        .collect()
}

/// Greedy diversity selection over `pool`.
///
/// Starts from `seed` when it is part of the pool, then repeatedly adds
/// the city that contributes the most uncovered focus tags until `count`
/// cities are selected or the pool runs out.
pub fn diversity_select<'a>(
    pool: &[&'a City],
    count: usize,
    seed: Option<&'a City>,
) -> Vec<&'a City> {
    let (mut selected, mut remaining) = match seed {
        Some(s) if pool.iter().any(|c| c.id == s.id) => (
            vec![s],
            pool.iter().copied().filter(|c| c.id != s.id).collect(),
        ),
        _ => (Vec::new(), pool.to_vec()),
    };

    while selected.len() < count {
        match select_step(&selected, &remaining) {
            Some((next_selected, next_remaining)) => {
                selected = next_selected;
                remaining = next_remaining;
            }
            None => break,
        }
    }
    selected
}

/// One selection step. Returns the extended selection and the reduced
/// pool, or `None` when the pool is empty.
fn select_step<'a>(
    selected: &[&'a City],
    remaining: &[&'a City],
) -> Option<(Vec<&'a City>, Vec<&'a City>)> {
    let best = best_contributor(selected, remaining)?;
    let mut next_selected = selected.to_vec();
    next_selected.push(remaining[best]);
    let next_remaining = remaining
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != best)
        .map(|(_, c)| *c)
        .collect();
    Some((next_selected, next_remaining))
}

/// Index of the remaining city adding the most new focus tags; the
/// earliest wins ties.
fn best_contributor(selected: &[&City], remaining: &[&City]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, city) in remaining.iter().enumerate() {
        let gain = city
            .learning_focus
            .iter()
            .filter(|f| !selected.iter().any(|s| s.has_focus(**f)))
            .count();
        match best {
            Some((_, g)) if gain <= g => {}
            _ => best = Some((i, gain)),
        }
    }
    best.map(|(i, _)| i)
}
