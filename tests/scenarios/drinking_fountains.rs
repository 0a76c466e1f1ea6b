//! Scenario: drinking fountains under the 2021 exemption threshold.

use schoolspace::{compute, CampusType, CodeEdition, ProgramRequest};

#[test]
fn scenario_hundred_students_are_not_exempt() {
    for campus in CampusType::ALL {
        let result = compute(
            &ProgramRequest::new(campus, 100).with_code_edition(CodeEdition::Ibc2021),
        );
        let occupants = result.enrollment + result.staff_count;
        let plumbing = result.plumbing.expect("plumbing");

        assert!(occupants > 30, "{campus:?}");
        assert_eq!(plumbing.drinking_fountains, occupants.div_ceil(100), "{campus:?}");
        assert!(plumbing.drinking_fountains >= 1);
    }
}

#[test]
fn scenario_tiny_campus_is_exempt_only_where_the_edition_allows() {
    // 20 students + 2 staff = 22 occupants
    let exempt = compute(
        &ProgramRequest::new(CampusType::Elementary, 20).with_code_edition(CodeEdition::Ibc2021),
    );
    assert_eq!(exempt.plumbing.expect("plumbing").drinking_fountains, 0);

    let required = compute(
        &ProgramRequest::new(CampusType::Elementary, 20).with_code_edition(CodeEdition::Ibc2012),
    );
    assert_eq!(required.plumbing.expect("plumbing").drinking_fountains, 1);
}
