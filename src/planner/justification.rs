//! Academic justification paragraphs.

use crate::catalog::{AcademicYear, LearningFocus};

use super::circuit::Candidate;

/// Composes the justification for a candidate.
///
/// The paragraph names the year and up to three requested goals the
/// candidate covers, frames the regional spread, and closes with a
/// sentence chosen by whether heritage-leaning or contemporary-leaning
/// cities dominate.
pub fn compose_justification(
    candidate: &Candidate<'_>,
    goals: &[LearningFocus],
    year: AcademicYear,
) -> String {
    let coverage = candidate.focus_coverage();
    let matched: Vec<&str> = goals
        .iter()
        .filter(|g| coverage.contains(g))
        .take(3)
        .map(|g| g.label())
        .collect();

    let mut text = format!(
        "This circuit is designed for {} year architecture students",
        year.ordinal()
    );
    if matched.is_empty() {
        text.push_str(". ");
    } else {
        text.push_str(&format!(", focusing on {}. ", matched.join(", ")));
    }

    match candidate.regions().as_slice() {
        [region] => text.push_str(&format!(
            "The circuit is concentrated in the {region} region, ensuring travel efficiency \
             and allowing deeper engagement with regional architectural typologies. "
        )),
        regions => text.push_str(&format!(
            "The circuit spans {} regions, providing exposure to diverse architectural \
             responses to climate, culture, and context. ",
            regions.len()
        )),
    }

    let cities = candidate.cities();
    let heritage = cities.iter().filter(|c| c.is_heritage_leaning()).count();
    let contemporary = cities.iter().filter(|c| c.is_contemporary_leaning()).count();
    text.push_str(match heritage.cmp(&contemporary) {
        std::cmp::Ordering::Greater => {
            "The emphasis on heritage architecture aligns with understanding fundamental \
             principles and historical precedents."
        }
        std::cmp::Ordering::Less => {
            "The focus on contemporary architecture enables students to understand current \
             practice, building technologies, and regulatory frameworks."
        }
        std::cmp::Ordering::Equal => {
            "The balance between heritage and contemporary architecture provides a \
             comprehensive understanding of architectural evolution."
        }
    });
    text
}
