//! Domain Value Objects
//!
//! Enumerated keys of the regulatory tables. Every lookup is a `match`
//! over one of these, so an unknown key cannot reach the core.

mod campus_type;
mod code_edition;
mod compliance_method;
mod flexibility;
mod science_config;

pub use campus_type::CampusType;
pub use code_edition::CodeEdition;
pub use compliance_method::ComplianceMethod;
pub use flexibility::FlexibilityLevel;
pub use science_config::ScienceConfig;
