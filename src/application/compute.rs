//! Compute Use Case
//!
//! Turns one `ProgramRequest` snapshot into a `CalculationResult`. This is
//! the single entry point into the domain calculators; it resolves the
//! caller-side defaults (class size, advanced parameters, net-to-gross)
//! and then runs room, support and plumbing sizing before aggregating.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::{AdvancedParameters, CalculationResult};
use crate::domain::policies::{facility, CampusStandard, RegulatoryProfile};
use crate::domain::services::{
    aggregate, plan_plumbing, plan_rooms, plan_support, resolve_net_to_gross, ProgramContext,
};
use crate::domain::value_objects::{CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel};

/// Every input of one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRequest {
    pub campus: CampusType,
    /// Maximum instructional capacity; zero or negative yields an empty program
    pub enrollment: i64,
    pub flexibility: FlexibilityLevel,
    /// Requested class size; the campus default when `None`
    pub class_size: Option<u32>,
    pub advanced: AdvancedParameters,
    pub method: ComplianceMethod,
    /// Count half the cafeteria as instructional (qualitative method only)
    pub cafeteria_credit: bool,
    pub code_edition: CodeEdition,
    /// Override of the campus net-to-gross factor, clamped to [1.1, 1.7]
    pub net_to_gross: Option<f64>,
}

impl ProgramRequest {
    /// Request with the campus defaults for everything but enrollment
    pub fn new(campus: CampusType, enrollment: i64) -> Self {
        Self {
            campus,
            enrollment,
            flexibility: FlexibilityLevel::default(),
            class_size: None,
            advanced: CampusStandard::for_campus(campus).default_advanced(),
            method: ComplianceMethod::default(),
            cafeteria_credit: false,
            code_edition: CodeEdition::default(),
            net_to_gross: None,
        }
    }

    pub fn with_flexibility(mut self, level: FlexibilityLevel) -> Self {
        self.flexibility = level;
        self
    }

    pub fn with_class_size(mut self, class_size: u32) -> Self {
        self.class_size = Some(class_size);
        self
    }

    pub fn with_advanced(mut self, advanced: AdvancedParameters) -> Self {
        self.advanced = advanced;
        self
    }

    pub fn with_method(mut self, method: ComplianceMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_cafeteria_credit(mut self, requested: bool) -> Self {
        self.cafeteria_credit = requested;
        self
    }

    pub fn with_code_edition(mut self, edition: CodeEdition) -> Self {
        self.code_edition = edition;
        self
    }

    pub fn with_net_to_gross(mut self, factor: f64) -> Self {
        self.net_to_gross = Some(factor);
        self
    }

    /// Class size after defaulting and clamping to `[1, campus max]`
    pub fn effective_class_size(&self) -> u32 {
        let standard = CampusStandard::for_campus(self.campus);
        match self.class_size {
            Some(size) => standard.clamp_class_size(size),
            None => standard.default_class_size,
        }
    }
}

/// Compute the full space program for one request.
///
/// Never fails: out-of-range numbers are clamped (enrollment to
/// `facility::MAX_ENROLLMENT`), and a non-positive enrollment produces
/// `CalculationResult::empty`.
pub fn compute(request: &ProgramRequest) -> CalculationResult {
    let standard = CampusStandard::for_campus(request.campus);
    let profile = RegulatoryProfile::for_edition(request.code_edition);
    let class_size = request.effective_class_size();
    let sf_per_student = standard.sf_per_student(request.flexibility);
    let net_to_gross = resolve_net_to_gross(standard, request.net_to_gross);

    if let Some(requested) = request.net_to_gross {
        if requested != net_to_gross {
            warn!(requested, used = net_to_gross, "net-to-gross override clamped");
        }
    }

    if request.enrollment <= 0 {
        debug!(enrollment = request.enrollment, "no enrollment, returning empty program");
        return CalculationResult::empty(
            request.campus,
            request.code_edition,
            request.method,
            class_size,
            sf_per_student,
            net_to_gross,
        );
    }

    let enrollment = request.enrollment.unsigned_abs().min(facility::MAX_ENROLLMENT);
    if enrollment != request.enrollment.unsigned_abs() {
        warn!(
            requested = request.enrollment,
            used = enrollment,
            "enrollment clamped to the supported maximum"
        );
    }
    let advanced = request.advanced.sanitized();
    if advanced != request.advanced {
        warn!(?advanced, "advanced parameters clamped to their valid ranges");
    }

    let staff_count = standard.staff_count(enrollment);
    debug!(
        campus = request.campus.as_str(),
        enrollment,
        class_size,
        sf_per_student,
        staff_count,
        "computing space program"
    );

    let rooms = plan_rooms(standard, enrollment, request.flexibility, class_size, &advanced);
    let support = plan_support(
        standard,
        enrollment,
        staff_count,
        request.method,
        request.cafeteria_credit,
        request.code_edition,
    );
    let plumbing = plan_plumbing(enrollment, staff_count, profile);

    let ctx = ProgramContext {
        standard,
        enrollment,
        edition: request.code_edition,
        method: request.method,
        class_size,
        sf_per_student,
        staff_count,
        net_to_gross,
    };
    let result = aggregate(&ctx, rooms, support, plumbing);

    debug!(
        instructional_sf = result.total_instructional_sf,
        support_sf = result.total_support_sf,
        net_sf = result.net_sf,
        gross_sf = result.gross_sf,
        meets_aggregate = result.compliance.meets_aggregate,
        "space program computed"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_uses_campus_defaults() {
        let request = ProgramRequest::new(CampusType::High, 1000);
        assert_eq!(request.effective_class_size(), 25);
        assert_eq!(request.advanced.periods_per_day, 7);
        assert_eq!(request.advanced.utilization, 0.80);
        assert_eq!(request.code_edition, CodeEdition::Ibc2021);
    }

    #[test]
    fn class_size_is_clamped_by_the_request() {
        let request = ProgramRequest::new(CampusType::Elementary, 100).with_class_size(40);
        assert_eq!(request.effective_class_size(), 22);
        let request = ProgramRequest::new(CampusType::Elementary, 100).with_class_size(0);
        assert_eq!(request.effective_class_size(), 1);
    }

    #[test]
    fn negative_enrollment_is_empty() {
        let result = compute(&ProgramRequest::new(CampusType::Middle, -5));
        assert!(result.is_empty());
        assert!(result.plumbing.is_none());
        assert_eq!(result.net_to_gross, 1.38);
    }

    #[test]
    fn huge_enrollment_is_clamped_to_the_supported_maximum() {
        let result = compute(&ProgramRequest::new(CampusType::Elementary, i64::MAX));
        let capped = compute(&ProgramRequest::new(
            CampusType::Elementary,
            facility::MAX_ENROLLMENT as i64,
        ));

        assert_eq!(result, capped);
        assert_eq!(result.enrollment, facility::MAX_ENROLLMENT);
        assert_eq!(result.aggregate_sf, facility::MAX_ENROLLMENT * 36);
        assert_eq!(
            result.compliance.meets_aggregate,
            result.compliance.surplus_sf >= 0
        );
        assert!(result.gross_sf > result.net_sf);
    }

    #[test]
    fn net_sums_every_part() {
        let result = compute(&ProgramRequest::new(CampusType::Middle, 640));
        assert_eq!(
            result.net_sf,
            result.total_instructional_sf + result.library_sf + result.gym_sf + result.total_support_sf
        );
        assert_eq!(result.support.len(), 7);
    }

    #[test]
    fn request_round_trips_through_json() {
        let request = ProgramRequest::new(CampusType::Middle, 640)
            .with_flexibility(FlexibilityLevel::L3)
            .with_net_to_gross(1.5);
        let json = serde_json::to_string(&request).unwrap();
        let parsed: ProgramRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
