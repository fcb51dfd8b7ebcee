//! Day plan synthesis.
//!
//! Expands an ordered city sequence into a contiguous day-by-day plan.
//! Each city receives `min(suggested_days, days_left)` days; once the
//! duration is spent, later cities receive none.
//!
//! Within a city:
//!
//! - the first day opens with an arrival and orientation line;
//! - morning and afternoon activities cycle through the city's focus tags
//!   that match the requested goals;
//! - evenings are reflection sessions, except the final day in a city that
//!   is followed by another city, which ends with travel.
//!
//! Which sentence is taken from a pool is decided by an RNG seeded from
//! the configured seed, the year, the city and the slot, so output is
//! reproducible and independent of the order cities are processed in.

use rand::Rng;

use crate::catalog::{AcademicYear, City, LearningFocus};
use crate::random::{create_rng, derive_seed, str_key};

use super::circuit::DayPlanEntry;
use super::templates;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Morning = 1,
    Afternoon = 2,
    Evening = 3,
}

/// Builds day plans from city sequences.
#[derive(Debug, Clone, Copy)]
pub struct DayPlanSynthesizer {
    seed: u64,
}

impl DayPlanSynthesizer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Synthesizes the plan. Never exceeds `duration` days.
    pub fn synthesize(
        &self,
        cities: &[&City],
        goals: &[LearningFocus],
        year: AcademicYear,
        duration: u32,
    ) -> Vec<DayPlanEntry> {
        let allocation = allocate_days(cities, duration);
        let last_visited = allocation.iter().rposition(|&days| days > 0);

        let mut plan = Vec::with_capacity(allocation.iter().sum::<u32>() as usize);
        for (idx, (city, &days)) in cities.iter().zip(&allocation).enumerate() {
            let relevant = city.focus_within(goals);
            let focus_labels: Vec<LearningFocus> = relevant.iter().copied().take(2).collect();
            let moves_on = last_visited.is_some_and(|last| idx < last);

            for d in 0..days {
                let day = plan.len() as u32 + 1;
                let morning = if d == 0 {
                    templates::arrival_morning(&city.name)
                } else {
                    match cycle(&relevant, d) {
                        Some(focus) => {
                            self.pick(templates::morning(focus), year, city, day, Slot::Morning)
                        }
                        None => templates::GENERIC_MORNING.to_string(),
                    }
                };
                let afternoon = match cycle(&relevant, d + 1) {
                    Some(focus) => {
                        self.pick(templates::afternoon(focus), year, city, day, Slot::Afternoon)
                    }
                    None => templates::GENERIC_AFTERNOON.to_string(),
                };
                let evening = if d + 1 == days && moves_on {
                    templates::TRAVEL_TO_NEXT_CITY.to_string()
                } else {
                    self.pick(&templates::REFLECTION, year, city, day, Slot::Evening)
                };

                plan.push(DayPlanEntry {
                    day,
                    city: city.name.clone(),
                    morning,
                    afternoon,
                    evening,
                    learning_focus: focus_labels.clone(),
                });
            }
        }
        plan
    }

    fn pick(&self, pool: &[&str], year: AcademicYear, city: &City, day: u32, slot: Slot) -> String {
        let seed = derive_seed(
            self.seed,
            &[
                year.number() as u64,
                str_key(&city.id),
                day as u64,
                slot as u64,
            ],
        );
        let mut rng = create_rng(seed);
        pool[rng.random_range(0..pool.len())].to_string()
    }
}

/// Days given to each city, in sequence order.
pub fn allocate_days(cities: &[&City], duration: u32) -> Vec<u32> {
    let mut left = duration;
    cities
        .iter()
        .map(|city| {
            let days = city.suggested_days.min(left);
            left -= days;
            days
        })
        .collect()
}

fn cycle(tags: &[LearningFocus], index: u32) -> Option<LearningFocus> {
    if tags.is_empty() {
        None
    } else {
        Some(tags[index as usize % tags.len()])
    }
}
