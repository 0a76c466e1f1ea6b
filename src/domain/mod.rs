//! Domain Layer
//!
//! The space-program core: pure arithmetic over immutable tables, no I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Enumerated table keys (CampusType, CodeEdition, ...)
//! - `policies/` - Regulatory tables (campus standards, code profiles)
//! - `entities/` - Inputs and line items (AdvancedParameters, RoomLineItem, ...)
//! - `services/` - Room, plumbing, support and aggregation calculators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Nothing here touches the file system or terminal
//! 2. **Pure Functions** - Identical inputs always produce identical output
//! 3. **Ceiling at every step** - Each count and area is rounded up where it
//!    is derived, never once at the end

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
