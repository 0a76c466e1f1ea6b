//! Domain Entities
//!
//! Inputs the caller owns (`AdvancedParameters`) and the line items and
//! totals the calculators produce. Outputs are built fresh on every
//! computation and never mutated afterwards.

mod advanced;
mod plumbing;
mod result;
mod room;
mod support;

pub use advanced::AdvancedParameters;
pub use plumbing::{ClusterLayout, PlumbingDetail, PlumbingFixtureSet, RestroomLayout};
pub use result::{CalculationResult, ComplianceSummary};
pub use room::RoomLineItem;
pub use support::SupportLineItem;
