//! Schoolspace - minimum space program estimator for K-12 campuses
//!
//! Sizes the instructional rooms, support spaces and plumbing fixtures a
//! campus needs under TAC §61.1040 and the IBC plumbing chapter, from a
//! handful of design criteria (campus type, enrollment, flexibility level,
//! code edition).

pub mod application;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{compute, ProgramRequest};
pub use config::Config;
pub use domain::entities::{
    AdvancedParameters, CalculationResult, ComplianceSummary, PlumbingDetail, RoomLineItem,
    SupportLineItem,
};
pub use domain::policies::verify_tables;
pub use domain::value_objects::{
    CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel, ScienceConfig,
};
pub use error::{SchoolspaceError, SchoolspaceResult};
