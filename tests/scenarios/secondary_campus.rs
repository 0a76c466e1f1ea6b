//! Scenario: middle and high campuses scheduled by periods and utilization.

use schoolspace::{compute, CampusType, ProgramRequest, ScienceConfig};

fn count(result: &schoolspace::CalculationResult, space_type: &str) -> Option<u64> {
    result
        .rooms
        .iter()
        .find(|r| r.space_type == space_type)
        .map(|r| r.count)
}

#[test]
fn scenario_middle_school_core_subjects() {
    // 36 sections / (7 periods x 85%) = 6.05 -> 7 rooms per subject
    let result = compute(&ProgramRequest::new(CampusType::Middle, 900));

    for subject in [
        "Math Classrooms",
        "ELA Classrooms",
        "Social Studies Classrooms",
        "Science Combo Classroom/Labs",
    ] {
        assert_eq!(count(&result, subject), Some(7), "{subject}");
    }
    assert_eq!(count(&result, "Elective Rooms (CTE, Fine Arts, etc.)"), Some(4));
    assert_eq!(count(&result, "Special Education Classrooms"), Some(9));
    assert_eq!(result.aggregate_sf, 28_800);
    assert_eq!(result.total_instructional_sf, 36_228);
    assert_eq!(result.staff_count, 72);
}

#[test]
fn scenario_middle_school_restrooms() {
    let plumbing = compute(&ProgramRequest::new(CampusType::Middle, 900))
        .plumbing
        .expect("plumbing");

    assert_eq!(plumbing.student.wc_male, 9);
    assert_eq!(plumbing.student.clusters, 4);
    assert_eq!(plumbing.student.layout.male.urinals, 2);
    assert_eq!(plumbing.student.sf, 2_009);
    assert_eq!(plumbing.staff.wc_male, 2);
    assert_eq!(plumbing.staff.sf, 416);
}

#[test]
fn scenario_high_school_separate_labs() {
    // 48 sections / (7 periods x 80%) = 8.57 -> 9 labs, paired with 18 classrooms
    let mut request = ProgramRequest::new(CampusType::High, 1200);
    request.advanced.science_config = ScienceConfig::Separate;
    let result = compute(&request);

    assert_eq!(count(&result, "Science Laboratories"), Some(9));
    assert_eq!(count(&result, "Science Classrooms (paired)"), Some(18));
    assert_eq!(count(&result, "Science Combo Classroom/Labs"), None);
    assert_eq!(result.gym_sf, 7_500);
    assert_eq!(result.net_to_gross, 1.40);
}

#[test]
fn scenario_elementary_ignores_separate_science() {
    let mut request = ProgramRequest::new(CampusType::Elementary, 750);
    request.advanced.science_config = ScienceConfig::Separate;
    let result = compute(&request);

    assert_eq!(count(&result, "Science Combo Classroom/Labs"), Some(12));
    assert_eq!(count(&result, "Science Laboratories"), None);
}

#[test]
fn scenario_class_size_above_maximum_is_clamped() {
    let result = compute(&ProgramRequest::new(CampusType::High, 1200).with_class_size(40));
    assert_eq!(result.class_size, 25);
}
