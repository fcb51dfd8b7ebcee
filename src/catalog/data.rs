//! Built-in reference dataset.

use super::types::{AcademicYear, City, LearningFocus, Region, TravelMode};

use AcademicYear::{First as Y1, Second as Y2, Third as Y3};
use LearningFocus::{
    ArchitecturalPrinciples as AP, BuildingServices as BS, ByeLawsRegulations as BL,
    ClimateResponsiveness as CR, ConstructionPractices as CP, HeritageConservation as HC,
    SpatialOrganization as SO,
};
use TravelMode::{Flight, Road, Train};

const ALL_MODES: &[TravelMode] = &[Train, Road, Flight];

pub(super) fn builtin_cities() -> Vec<City> {
    vec![
        // ---- North ----
        City::new("chandigarh", "Chandigarh", Region::North)
            .with_categories(&["Planned City", "Modernist"])
            .with_ideal_years(&[Y1, Y2, Y3])
            .with_learning_focus(&[AP, SO, BL])
            .with_suggested_days(3)
            .with_indices(4, 4)
            .with_travel_modes(ALL_MODES),
        City::new("new-delhi", "New Delhi", Region::North)
            .with_categories(&["Capital", "Mixed"])
            .with_ideal_years(&[Y1, Y2, Y3])
            .with_learning_focus(&[HC, BL, BS, SO])
            .with_suggested_days(3)
            .with_indices(5, 3)
            .with_travel_modes(ALL_MODES),
        City::new("agra", "Agra", Region::North)
            .with_categories(&["Heritage", "Mughal"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[HC, AP])
            .with_suggested_days(2)
            .with_indices(4, 1)
            .with_travel_modes(&[Train, Road]),
        City::new("fatehpur-sikri", "Fatehpur Sikri", Region::North)
            .with_categories(&["Heritage", "Mughal"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[AP, SO, HC])
            .with_suggested_days(1)
            .with_indices(2, 1)
            .with_travel_modes(&[Road]),
        City::new("jaipur", "Jaipur", Region::North)
            .with_categories(&["Planned City", "Heritage"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[AP, SO, CR, HC])
            .with_suggested_days(3)
            .with_indices(4, 2)
            .with_travel_modes(ALL_MODES),
        City::new("varanasi", "Varanasi", Region::North)
            .with_categories(&["Sacred Landscape", "Ghats"])
            .with_ideal_years(&[Y1, Y3])
            .with_learning_focus(&[SO, HC])
            .with_suggested_days(2)
            .with_indices(4, 1)
            .with_travel_modes(ALL_MODES)
            .with_risk_note("Crowded riverfront during festival season"),
        City::new("shimla", "Shimla", Region::North)
            .with_categories(&["Hill Station", "Colonial"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, CP, HC])
            .with_suggested_days(2)
            .with_indices(3, 2)
            .with_travel_modes(&[Train, Road])
            .with_risk_note("Landslide-prone roads during monsoon"),
        // ---- West ----
        City::new("ahmedabad", "Ahmedabad", Region::West)
            .with_categories(&["Modernist", "Pol Houses"])
            .with_ideal_years(&[Y1, Y2, Y3])
            .with_learning_focus(&[AP, CR, SO, HC])
            .with_suggested_days(3)
            .with_indices(5, 3)
            .with_travel_modes(ALL_MODES),
        City::new("udaipur", "Udaipur", Region::West)
            .with_categories(&["Lake City", "Palaces"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[AP, CR, HC])
            .with_suggested_days(2)
            .with_indices(3, 2)
            .with_travel_modes(ALL_MODES),
        City::new("jaisalmer", "Jaisalmer", Region::West)
            .with_categories(&["Desert", "Fort City"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[CR, HC])
            .with_suggested_days(2)
            .with_indices(2, 1)
            .with_travel_modes(&[Train, Road])
            .with_risk_note("Extreme heat from April to June"),
        City::new("mumbai", "Mumbai", Region::West)
            .with_categories(&["Metropolis", "Art Deco"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[BS, BL, CP, SO])
            .with_suggested_days(3)
            .with_indices(5, 5)
            .with_travel_modes(ALL_MODES)
            .with_risk_note("Heavy monsoon rain from June to September"),
        City::new("pune", "Pune", Region::West)
            .with_categories(&["Institutional", "IT Corridor"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[BS, CP, BL])
            .with_suggested_days(2)
            .with_indices(4, 4)
            .with_travel_modes(ALL_MODES),
        City::new("panaji", "Panaji", Region::West)
            .with_categories(&["Indo-Portuguese", "Coastal"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, HC, CP])
            .with_suggested_days(2)
            .with_indices(3, 3)
            .with_travel_modes(ALL_MODES),
        City::new("bhuj", "Bhuj", Region::West)
            .with_categories(&["Vernacular", "Post-Earthquake Reconstruction"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[CR, CP])
            .with_suggested_days(2)
            .with_indices(1, 2)
            .with_travel_modes(&[Train, Road])
            .with_risk_note("Limited connectivity to outlying villages"),
        // ---- South ----
        City::new("bengaluru", "Bengaluru", Region::South)
            .with_categories(&["Metropolis", "Tech Campus"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[BS, BL, CP])
            .with_suggested_days(3)
            .with_indices(5, 5)
            .with_travel_modes(ALL_MODES),
        City::new("chennai", "Chennai", Region::South)
            .with_categories(&["Coastal", "Metropolis"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, BS, BL])
            .with_suggested_days(2)
            .with_indices(5, 4)
            .with_travel_modes(ALL_MODES)
            .with_risk_note("Cyclone season from October to December"),
        City::new("auroville", "Auroville", Region::South)
            .with_categories(&["Experimental Township", "Earth Architecture"])
            .with_ideal_years(&[Y1, Y2, Y3])
            .with_learning_focus(&[CR, CP, AP])
            .with_suggested_days(2)
            .with_indices(2, 4)
            .with_travel_modes(&[Road]),
        City::new("hampi", "Hampi", Region::South)
            .with_categories(&["Ruins", "Temple Town"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[HC, AP, SO])
            .with_suggested_days(2)
            .with_indices(1, 1)
            .with_travel_modes(&[Train, Road]),
        City::new("kochi", "Kochi", Region::South)
            .with_categories(&["Port City", "Colonial"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, HC, CP])
            .with_suggested_days(2)
            .with_indices(4, 3)
            .with_travel_modes(ALL_MODES),
        City::new("madurai", "Madurai", Region::South)
            .with_categories(&["Temple Town", "Concentric Plan"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[SO, HC, AP])
            .with_suggested_days(2)
            .with_indices(4, 1)
            .with_travel_modes(ALL_MODES),
        City::new("hyderabad", "Hyderabad", Region::South)
            .with_categories(&["Metropolis", "Qutb Shahi"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[BS, BL, HC])
            .with_suggested_days(2)
            .with_indices(5, 4)
            .with_travel_modes(ALL_MODES),
        // ---- East ----
        City::new("kolkata", "Kolkata", Region::East)
            .with_categories(&["Colonial", "Metropolis"])
            .with_ideal_years(&[Y1, Y2, Y3])
            .with_learning_focus(&[HC, SO, BL])
            .with_suggested_days(3)
            .with_indices(5, 2)
            .with_travel_modes(ALL_MODES),
        City::new("bhubaneswar", "Bhubaneswar", Region::East)
            .with_categories(&["Temple City", "Planned Capital"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[AP, HC, SO])
            .with_suggested_days(2)
            .with_indices(4, 2)
            .with_travel_modes(ALL_MODES),
        City::new("konark", "Konark", Region::East)
            .with_categories(&["Temple", "World Heritage"])
            .with_ideal_years(&[Y1])
            .with_learning_focus(&[AP, HC])
            .with_suggested_days(1)
            .with_indices(1, 1)
            .with_travel_modes(&[Road]),
        City::new("santiniketan", "Santiniketan", Region::East)
            .with_categories(&["Campus", "Vernacular"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[CR, CP, AP])
            .with_suggested_days(2)
            .with_indices(1, 2)
            .with_travel_modes(&[Train, Road]),
        // ---- Northeast ----
        City::new("shillong", "Shillong", Region::Northeast)
            .with_categories(&["Hill Station", "Timber Construction"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, CP])
            .with_suggested_days(2)
            .with_indices(3, 2)
            .with_travel_modes(&[Road, Flight])
            .with_risk_note("Heavy rainfall can close mountain roads"),
        City::new("guwahati", "Guwahati", Region::Northeast)
            .with_categories(&["River City", "Gateway"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, SO, BL])
            .with_suggested_days(2)
            .with_indices(4, 3)
            .with_travel_modes(ALL_MODES),
        City::new("majuli", "Majuli", Region::Northeast)
            .with_categories(&["River Island", "Stilt Houses"])
            .with_ideal_years(&[Y1, Y2])
            .with_learning_focus(&[CR, CP, HC])
            .with_suggested_days(2)
            .with_indices(1, 1)
            .with_travel_modes(&[Road])
            .with_risk_note("Ferry access suspended during monsoon flooding"),
        // ---- Islands ----
        City::new("port-blair", "Port Blair", Region::Islands)
            .with_categories(&["Island Capital", "Colonial"])
            .with_ideal_years(&[Y2, Y3])
            .with_learning_focus(&[CR, HC])
            .with_suggested_days(2)
            .with_indices(3, 2)
            .with_travel_modes(&[Flight])
            .with_risk_note("Flight-only access; weather-dependent schedules"),
        City::new("swaraj-dweep", "Swaraj Dweep", Region::Islands)
            .with_categories(&["Island", "Coastal Ecology"])
            .with_ideal_years(&[Y3])
            .with_learning_focus(&[CR, CP])
            .with_suggested_days(2)
            .with_indices(1, 3)
            .with_travel_modes(&[Flight]),
    ]
}
