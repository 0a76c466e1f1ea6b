use anyhow::Result;
use serde::Serialize;

use schoolspace::config::Config;
use schoolspace::domain::policies::{facility, CampusStandard, RegulatoryProfile};
use schoolspace::{CampusType, CodeEdition};

use crate::cli::ColorWhen;
use crate::commands::project_root::current_project_root;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::DataEvent};
use crate::ui::views::tables::render_tables;

/// Campus-independent constants as one JSON payload
#[derive(Debug, Serialize)]
struct Constants {
    sped_sf_per_student: u32,
    wc_ratio: u64,
    lavatory_ratio: u64,
    drinking_fountain_ratio: u64,
    standard_stall_sf: u64,
    accessible_stall_sf: u64,
    urinal_sf: u64,
    lavatory_sf: u64,
    restroom_circulation: f64,
    cafeteria_credit_fraction: f64,
    net_to_gross_min: f64,
    net_to_gross_max: f64,
}

impl Constants {
    fn current() -> Self {
        use facility::{fixture_ratio, restroom_area};
        Self {
            sped_sf_per_student: facility::SPED_SF_PER_STUDENT,
            wc_ratio: fixture_ratio::WATER_CLOSET,
            lavatory_ratio: fixture_ratio::LAVATORY,
            drinking_fountain_ratio: fixture_ratio::DRINKING_FOUNTAIN,
            standard_stall_sf: restroom_area::STANDARD_STALL,
            accessible_stall_sf: restroom_area::ACCESSIBLE_STALL,
            urinal_sf: restroom_area::URINAL,
            lavatory_sf: restroom_area::LAVATORY,
            restroom_circulation: restroom_area::CIRCULATION,
            cafeteria_credit_fraction: facility::CAFETERIA_CREDIT_FRACTION,
            net_to_gross_min: facility::NET_TO_GROSS_MIN,
            net_to_gross_max: facility::NET_TO_GROSS_MAX,
        }
    }
}

pub fn cmd_tables(json: bool, color: Option<ColorWhen>, verbose: u8) -> Result<()> {
    if json {
        let standards: Vec<&CampusStandard> = CampusType::ALL
            .iter()
            .map(|campus| CampusStandard::for_campus(*campus))
            .collect();
        let profiles: Vec<&RegulatoryProfile> = CodeEdition::ALL
            .iter()
            .map(|edition| RegulatoryProfile::for_edition(*edition))
            .collect();

        emit_event(&DataEvent::new("tables", "campus_standards", standards))?;
        emit_event(&DataEvent::new("tables", "code_profiles", profiles))?;
        emit_event(&DataEvent::new("tables", "constants", Constants::current()))?;
        return Ok(());
    }

    let config = Config::load_or_default(current_project_root().as_deref());
    let ui = UiContext::new(json, verbose, color, &config);
    print!("{}", render_tables(ui.color, ui.unicode));
    Ok(())
}
