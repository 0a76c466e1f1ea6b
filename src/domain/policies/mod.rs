//! Regulatory Tables
//!
//! Immutable lookup data the calculators read. Tables are keyed by the
//! enumerated value objects; `verify_tables` checks their internal
//! consistency once at start-up.

mod campus_standard;
mod code_profile;
pub mod facility;

pub use campus_standard::{CampusStandard, FlexibilityAreas, ScienceAreas, SupportBenchmarks};
pub use code_profile::RegulatoryProfile;

use crate::domain::value_objects::{CampusType, CodeEdition};
use crate::error::{SchoolspaceError, SchoolspaceResult};

/// Check the tables for values no calculation could use safely.
pub fn verify_tables() -> SchoolspaceResult<()> {
    for campus in CampusType::ALL {
        let s = CampusStandard::for_campus(campus);
        let fail = |message: &str| SchoolspaceError::InvalidTable {
            table: format!("campus standard '{}'", campus.as_str()),
            message: message.to_string(),
        };
        if s.default_class_size == 0 || s.default_class_size > s.max_class_size {
            return Err(fail("default class size must be within 1..=max"));
        }
        if s.science_max_class_size == 0 {
            return Err(fail("science class size must be positive"));
        }
        if !(facility::NET_TO_GROSS_MIN..=facility::NET_TO_GROSS_MAX).contains(&s.net_to_gross) {
            return Err(fail("net-to-gross factor outside the override bounds"));
        }
        if campus.is_secondary() && s.science.separate_lab.is_none() {
            return Err(fail("secondary campuses need a separate-lab area"));
        }
    }

    for edition in CodeEdition::ALL {
        let p = RegulatoryProfile::for_edition(edition);
        if !(0.0..=1.0).contains(&p.urinal_substitution_max) {
            return Err(SchoolspaceError::InvalidTable {
                table: format!("code profile '{}'", p.label),
                message: "urinal substitution must be a fraction".to_string(),
            });
        }
    }

    Ok(())
}
