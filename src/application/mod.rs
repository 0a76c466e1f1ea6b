//! Application Layer
//!
//! Use cases that orchestrate the domain calculators for a caller.
//!
//! ## Use Cases
//!
//! - `compute` - Resolve a `ProgramRequest` into a `CalculationResult`

pub mod compute;

pub use compute::{compute, ProgramRequest};
