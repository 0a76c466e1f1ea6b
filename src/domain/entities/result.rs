//! CalculationResult entity - the complete space program

use serde::Serialize;

use super::{PlumbingDetail, RoomLineItem, SupportLineItem};
use crate::domain::value_objects::{CampusType, CodeEdition, ComplianceMethod};

/// Instructional area measured against the aggregate standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub meets_aggregate: bool,
    /// Instructional minus aggregate area; negative is a deficit
    pub surplus_sf: i64,
}

impl ComplianceSummary {
    pub fn evaluate(total_instructional_sf: u64, aggregate_sf: u64) -> Self {
        Self {
            meets_aggregate: total_instructional_sf >= aggregate_sf,
            surplus_sf: total_instructional_sf as i64 - aggregate_sf as i64,
        }
    }
}

/// Output of one full program computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub campus: CampusType,
    pub enrollment: u64,
    pub code_edition: CodeEdition,
    pub method: ComplianceMethod,
    pub class_size: u32,
    /// Area-per-student for the selected flexibility level
    pub sf_per_student: u32,
    pub rooms: Vec<RoomLineItem>,
    pub library_sf: u64,
    pub gym_sf: u64,
    pub total_instructional_sf: u64,
    pub aggregate_sf: u64,
    pub support: Vec<SupportLineItem>,
    pub total_support_sf: u64,
    pub plumbing: Option<PlumbingDetail>,
    pub net_sf: u64,
    pub net_to_gross: f64,
    pub gross_sf: u64,
    pub staff_count: u64,
    pub cafeteria_sf: u64,
    pub cafeteria_instructional_credit: u64,
    pub compliance: ComplianceSummary,
}

impl CalculationResult {
    /// Well-defined result for a program with no students
    pub fn empty(
        campus: CampusType,
        code_edition: CodeEdition,
        method: ComplianceMethod,
        class_size: u32,
        sf_per_student: u32,
        net_to_gross: f64,
    ) -> Self {
        Self {
            campus,
            enrollment: 0,
            code_edition,
            method,
            class_size,
            sf_per_student,
            rooms: Vec::new(),
            library_sf: 0,
            gym_sf: 0,
            total_instructional_sf: 0,
            aggregate_sf: 0,
            support: Vec::new(),
            total_support_sf: 0,
            plumbing: None,
            net_sf: 0,
            net_to_gross,
            gross_sf: 0,
            staff_count: 0,
            cafeteria_sf: 0,
            cafeteria_instructional_credit: 0,
            compliance: ComplianceSummary::evaluate(0, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enrollment == 0
    }

    /// Instructional area plus library and gym
    pub fn instructional_with_shared_sf(&self) -> u64 {
        self.total_instructional_sf + self.library_sf + self.gym_sf
    }

    pub fn total_rooms(&self) -> u64 {
        self.rooms.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_reports_signed_surplus() {
        let short = ComplianceSummary::evaluate(900, 1000);
        assert!(!short.meets_aggregate);
        assert_eq!(short.surplus_sf, -100);

        let exact = ComplianceSummary::evaluate(1000, 1000);
        assert!(exact.meets_aggregate);
        assert_eq!(exact.surplus_sf, 0);
    }

    #[test]
    fn empty_result_has_no_line_items() {
        let r = CalculationResult::empty(
            CampusType::High,
            CodeEdition::Ibc2021,
            ComplianceMethod::Quantitative,
            25,
            32,
            1.40,
        );
        assert!(r.is_empty());
        assert!(r.rooms.is_empty());
        assert!(r.support.is_empty());
        assert_eq!(r.net_sf, 0);
        assert_eq!(r.gross_sf, 0);
        assert!(r.compliance.meets_aggregate);
    }
}
