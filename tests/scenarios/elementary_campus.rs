//! Scenario: a 750-student elementary campus at the default settings.

use schoolspace::{compute, CalculationResult, CampusType, FlexibilityLevel, ProgramRequest};

fn room_count(result: &CalculationResult, space_type: &str) -> u64 {
    result
        .rooms
        .iter()
        .find(|r| r.space_type == space_type)
        .map(|r| r.count)
        .unwrap_or_else(|| panic!("missing room line '{space_type}'"))
}

fn elementary_750() -> CalculationResult {
    compute(
        &ProgramRequest::new(CampusType::Elementary, 750).with_flexibility(FlexibilityLevel::L2),
    )
}

#[test]
fn scenario_elementary_rooms_and_aggregate() {
    let result = elementary_750();

    assert_eq!(result.class_size, 22);
    assert_eq!(result.sf_per_student, 36);
    assert_eq!(room_count(&result, "General Classrooms (Homerooms)"), 35);
    assert_eq!(room_count(&result, "Science Combo Classroom/Labs"), 12);
    assert_eq!(room_count(&result, "Elective Rooms (Art, Music, etc.)"), 2);
    assert_eq!(room_count(&result, "Special Education Classrooms"), 8);
    assert_eq!(result.aggregate_sf, 27_000);
}

#[test]
fn scenario_elementary_totals() {
    let result = elementary_750();

    // 27,720 homerooms + 15,000 science + 1,584 electives + 4,320 SpEd
    assert_eq!(result.total_instructional_sf, 48_624);
    assert_eq!(result.library_sf, 3_750);
    assert_eq!(result.gym_sf, 3_000);
    assert_eq!(result.staff_count, 75);

    let support: Vec<u64> = result.support.iter().map(|s| s.sf).collect();
    assert_eq!(support, vec![1_875, 1_125, 9_000, 600, 2_250, 1_507, 416]);
    assert_eq!(result.total_support_sf, 16_773);

    assert_eq!(result.net_sf, 72_147);
    assert_eq!(result.net_to_gross, 1.35);
    assert_eq!(result.gross_sf, 97_399);

    assert!(result.compliance.meets_aggregate);
    assert_eq!(result.compliance.surplus_sf, 21_624);
}

#[test]
fn scenario_elementary_plumbing() {
    let plumbing = elementary_750().plumbing.expect("plumbing for a non-empty campus");

    assert_eq!((plumbing.student.wc_male, plumbing.student.wc_female), (8, 8));
    assert_eq!(plumbing.student.clusters, 3);
    assert_eq!(plumbing.student.sf, 1_507);
    assert_eq!(plumbing.staff.sf, 416);
    assert_eq!(plumbing.drinking_fountains, 9);
    assert_eq!(plumbing.total_sf, 1_923);
    assert!(plumbing.gender_neutral);
}

#[test]
fn scenario_no_enrollment_is_empty() {
    let result = compute(&ProgramRequest::new(CampusType::Elementary, 0));

    assert!(result.rooms.is_empty());
    assert!(result.support.is_empty());
    assert_eq!(result.net_sf, 0);
    assert_eq!(result.gross_sf, 0);
    assert!(result.plumbing.is_none());
    assert!(result.is_empty());
}
