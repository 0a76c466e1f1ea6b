//! AdvancedParameters entity - scheduling and special-program tuning

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ScienceConfig;

const FALLBACK_UTILIZATION: f64 = 0.85;
const FALLBACK_SPED_PCT: f64 = 0.12;

/// Caller-owned tuning inputs for the room program
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancedParameters {
    /// Class periods per day (secondary campuses only)
    pub periods_per_day: u32,
    /// Fraction of periods a room is scheduled, in `[0.5, 1]`
    pub utilization: f64,
    /// Fraction of enrollment served in special-education rooms, in `[0, 0.5]`
    pub sped_pct: f64,
    /// Students per special-education room
    pub sped_room_cap: u32,
    pub science_config: ScienceConfig,
    pub elective_rooms: u32,
}

impl AdvancedParameters {
    /// Copy with every field pulled into its documented range.
    ///
    /// Non-finite fractions fall back to the defaults (0.85 utilization,
    /// 0.12 SpEd) before clamping.
    pub fn sanitized(&self) -> Self {
        let utilization = if self.utilization.is_finite() {
            self.utilization
        } else {
            FALLBACK_UTILIZATION
        };
        let sped_pct = if self.sped_pct.is_finite() {
            self.sped_pct
        } else {
            FALLBACK_SPED_PCT
        };

        Self {
            periods_per_day: self.periods_per_day.max(1),
            utilization: utilization.clamp(0.5, 1.0),
            sped_pct: sped_pct.clamp(0.0, 0.5),
            sped_room_cap: self.sped_room_cap.max(1),
            science_config: self.science_config,
            elective_rooms: self.elective_rooms,
        }
    }

    /// Effective room turns per day: periods × utilization
    pub fn room_turns(&self) -> f64 {
        self.periods_per_day as f64 * self.utilization
    }
}
