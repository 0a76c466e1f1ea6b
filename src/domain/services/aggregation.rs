//! Aggregation of the three calculators into one program
//!
//! Net area = instructional + library + gym + support (restrooms included).
//! Gross area = ⌈net × net-to-gross⌉.

use super::room_program::RoomProgram;
use super::support::SupportProgram;
use crate::domain::entities::{CalculationResult, ComplianceSummary, PlumbingDetail, SupportLineItem};
use crate::domain::policies::facility::{library_area, NET_TO_GROSS_MAX, NET_TO_GROSS_MIN};
use crate::domain::policies::CampusStandard;
use crate::domain::value_objects::{CodeEdition, ComplianceMethod};

/// Inputs every part of the program shares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramContext<'a> {
    pub standard: &'a CampusStandard,
    pub enrollment: u64,
    pub edition: CodeEdition,
    pub method: ComplianceMethod,
    pub class_size: u32,
    pub sf_per_student: u32,
    pub staff_count: u64,
    pub net_to_gross: f64,
}

/// Campus default unless an override is given; overrides are clamped to
/// `[1.1, 1.7]` and non-finite overrides are ignored.
pub fn resolve_net_to_gross(standard: &CampusStandard, requested: Option<f64>) -> f64 {
    match requested {
        Some(factor) if factor.is_finite() => factor.clamp(NET_TO_GROSS_MIN, NET_TO_GROSS_MAX),
        _ => standard.net_to_gross,
    }
}

pub fn gross_sf(net_sf: u64, net_to_gross: f64) -> u64 {
    (net_sf as f64 * net_to_gross).ceil() as u64
}

/// Support line items for the student and staff restrooms
pub fn restroom_line_items(plumbing: &PlumbingDetail, edition: CodeEdition) -> [SupportLineItem; 2] {
    let code = format!("IBC {edition} §2902.1 / TAS");
    let student = &plumbing.student;
    let staff = &plumbing.staff;

    [
        SupportLineItem::new(
            "Student Restrooms",
            student.sf,
            format!(
                "{} clusters · {}M/{}F WC · TAS accessible",
                student.clusters, student.wc_male, student.wc_female
            ),
            code.clone(),
        ),
        SupportLineItem::new(
            "Staff Restrooms",
            staff.sf,
            format!(
                "{} cluster(s) · {}M/{}F WC · Separate",
                staff.clusters, staff.wc_male, staff.wc_female
            ),
            code,
        ),
    ]
}

/// Combine the room, support and plumbing outputs into the final result.
pub fn aggregate(
    ctx: &ProgramContext<'_>,
    rooms: RoomProgram,
    support: SupportProgram,
    plumbing: PlumbingDetail,
) -> CalculationResult {
    let library_sf = library_area(ctx.enrollment);
    let gym_sf = ctx.standard.gym_area;

    let total_instructional_sf =
        rooms.total_instructional_sf + support.cafeteria_instructional_credit;

    let mut support_items = support.items;
    support_items.extend(restroom_line_items(&plumbing, ctx.edition));
    let total_support_sf = support_items.iter().map(|s| s.sf).sum();

    let net_sf = total_instructional_sf + library_sf + gym_sf + total_support_sf;

    CalculationResult {
        campus: ctx.standard.campus,
        enrollment: ctx.enrollment,
        code_edition: ctx.edition,
        method: ctx.method,
        class_size: ctx.class_size,
        sf_per_student: ctx.sf_per_student,
        rooms: rooms.rooms,
        library_sf,
        gym_sf,
        total_instructional_sf,
        aggregate_sf: rooms.aggregate_sf,
        support: support_items,
        total_support_sf,
        plumbing: Some(plumbing),
        net_sf,
        net_to_gross: ctx.net_to_gross,
        gross_sf: gross_sf(net_sf, ctx.net_to_gross),
        staff_count: ctx.staff_count,
        cafeteria_sf: support.cafeteria_sf,
        cafeteria_instructional_credit: support.cafeteria_instructional_credit,
        compliance: ComplianceSummary::evaluate(total_instructional_sf, rooms.aggregate_sf),
    }
}
