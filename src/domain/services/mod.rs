//! Domain Services
//!
//! The calculators. Each is a set of pure functions over the regulatory
//! tables; none reads another's output except `aggregation`, which
//! combines all three.

pub mod aggregation;
pub mod plumbing;
pub mod room_program;
pub mod support;

pub use aggregation::{aggregate, gross_sf, resolve_net_to_gross, ProgramContext};
pub use plumbing::plan_plumbing;
pub use room_program::{plan_rooms, RoomProgram};
pub use support::{cafeteria_credit_applies, plan_support, SupportProgram};
