//! Activity text pools for the itinerary.

use crate::catalog::LearningFocus;

/// Fallback when a day has no relevant focus tag.
pub const GENERIC_MORNING: &str = "Site visit and documentation";
pub const GENERIC_AFTERNOON: &str = "Continued site documentation";

pub const TRAVEL_TO_NEXT_CITY: &str = "Travel to next city";

/// Evening reflection and synthesis activities.
pub const REFLECTION: [&str; 6] = [
    "Group discussion: Synthesizing observations and learnings",
    "Pin-up session: Sharing documentation and sketches",
    "Reflective journaling and sketch compilation",
    "Faculty-led discussion on key takeaways",
    "Peer review of documentation work",
    "Preparation for next day's site visits",
];

pub fn arrival_morning(city: &str) -> String {
    format!("Arrive in {city}. Orientation and site briefing.")
}

/// Morning activities for a focus area.
pub fn morning(focus: LearningFocus) -> &'static [&'static str; 3] {
    use LearningFocus::*;
    match focus {
        ArchitecturalPrinciples => &[
            "Measured drawing session: Documenting proportion and scale",
            "Sketching exercise: Analyzing composition and form",
            "Site analysis: Understanding context and site response",
        ],
        SpatialOrganization => &[
            "Space planning study: Analyzing circulation and hierarchy",
            "Functional zoning documentation",
            "Spatial sequence analysis and documentation",
        ],
        ClimateResponsiveness => &[
            "Passive design strategies documentation",
            "Orientation and ventilation study",
            "Material and climate response analysis",
        ],
        BuildingServices => &[
            "MEP systems documentation",
            "Services integration study",
            "Building systems analysis",
        ],
        ByeLawsRegulations => &[
            "Site visit: FSI and setback documentation",
            "Regulatory compliance study",
            "Building codes and approval process discussion",
        ],
        ConstructionPractices => &[
            "Active construction site visit",
            "Material assembly and joinery documentation",
            "Construction methodology study",
        ],
        HeritageConservation => &[
            "Heritage site documentation and measured drawing",
            "Conservation techniques study",
            "Historical architectural analysis",
        ],
    }
}

/// Afternoon activities for a focus area.
pub fn afternoon(focus: LearningFocus) -> &'static [&'static str; 3] {
    use LearningFocus::*;
    match focus {
        ArchitecturalPrinciples => &[
            "Detailed documentation: Proportional systems and geometric analysis",
            "Comparative study of multiple buildings",
            "Contextual analysis and site mapping",
        ],
        SpatialOrganization => &[
            "Spatial experience walkthrough and documentation",
            "Diagram development: Circulation and zoning",
            "User observation and behavioral mapping",
        ],
        ClimateResponsiveness => &[
            "Climate data collection and analysis",
            "Vernacular building techniques study",
            "Environmental performance assessment",
        ],
        BuildingServices => &[
            "Technical systems deep dive",
            "Services coordination study",
            "Sustainable systems analysis",
        ],
        ByeLawsRegulations => &[
            "Discussion with local architect on regulatory frameworks",
            "Case study: Development control regulations",
            "Site planning and bye-law compliance analysis",
        ],
        ConstructionPractices => &[
            "Discussion with site engineer / contractor",
            "Construction sequence documentation",
            "Quality control and site management observation",
        ],
        HeritageConservation => &[
            "Architectural photography and analysis",
            "Historical research and contextual study",
            "Material degradation and conservation study",
        ],
    }
}
