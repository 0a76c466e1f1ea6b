//! Scenario: half the cafeteria counted as instructional space.

use schoolspace::{compute, CampusType, ComplianceMethod, ProgramRequest};

fn elementary(method: ComplianceMethod, credit: bool) -> ProgramRequest {
    ProgramRequest::new(CampusType::Elementary, 750)
        .with_method(method)
        .with_cafeteria_credit(credit)
}

#[test]
fn scenario_qualitative_credit_adds_half_the_cafeteria() {
    let credited = compute(&elementary(ComplianceMethod::Qualitative, true));
    let plain = compute(&elementary(ComplianceMethod::Qualitative, false));

    assert_eq!(credited.cafeteria_sf, 9_000);
    assert_eq!(credited.cafeteria_instructional_credit, 4_500);
    assert_eq!(
        credited.total_instructional_sf - plain.total_instructional_sf,
        4_500
    );
    assert_eq!(plain.cafeteria_instructional_credit, 0);
}

#[test]
fn scenario_credit_is_ignored_under_quantitative() {
    let requested = compute(&elementary(ComplianceMethod::Quantitative, true));
    let plain = compute(&elementary(ComplianceMethod::Quantitative, false));

    assert_eq!(requested.cafeteria_instructional_credit, 0);
    assert_eq!(requested.total_instructional_sf, plain.total_instructional_sf);
}

#[test]
fn scenario_credit_cites_the_qualitative_rule() {
    let credited = compute(&elementary(ComplianceMethod::Qualitative, true));
    let cafeteria = credited
        .support
        .iter()
        .find(|s| s.space_type.starts_with("Cafeteria"))
        .expect("cafeteria line");

    assert_eq!(cafeteria.code, "§61.1040(i)(2)");
    // The cafeteria stays in support; the credit is counted on top.
    assert_eq!(cafeteria.sf, 9_000);
}
