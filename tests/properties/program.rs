//! Property tests for the full program computation.

use proptest::prelude::*;

use schoolspace::domain::policies::CampusStandard;
use schoolspace::{
    compute, AdvancedParameters, CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel,
    ProgramRequest, ScienceConfig,
};

fn campus() -> impl Strategy<Value = CampusType> {
    proptest::sample::select(CampusType::ALL.to_vec())
}

fn flexibility() -> impl Strategy<Value = FlexibilityLevel> {
    proptest::sample::select(FlexibilityLevel::ALL.to_vec())
}

fn method() -> impl Strategy<Value = ComplianceMethod> {
    prop_oneof![
        Just(ComplianceMethod::Quantitative),
        Just(ComplianceMethod::Qualitative)
    ]
}

/// Any fraction, including the non-finite ones a caller might pass through
fn fraction() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1.0f64..2.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn advanced() -> impl Strategy<Value = AdvancedParameters> {
    (
        0u32..12,
        fraction(),
        fraction(),
        0u32..30,
        prop_oneof![Just(ScienceConfig::Combo), Just(ScienceConfig::Separate)],
        0u32..20,
    )
        .prop_map(
            |(periods_per_day, utilization, sped_pct, sped_room_cap, science_config, elective_rooms)| {
                AdvancedParameters {
                    periods_per_day,
                    utilization,
                    sped_pct,
                    sped_room_cap,
                    science_config,
                    elective_rooms,
                }
            },
        )
}

fn request() -> impl Strategy<Value = ProgramRequest> {
    (
        campus(),
        -500i64..20_000,
        flexibility(),
        proptest::option::of(0u32..40),
        advanced(),
        method(),
        any::<bool>(),
        proptest::sample::select(CodeEdition::ALL.to_vec()),
        proptest::option::of(0.0f64..3.0),
    )
        .prop_map(
            |(campus, enrollment, flexibility, class_size, advanced, method, credit, edition, ntg)| {
                ProgramRequest {
                    campus,
                    enrollment,
                    flexibility,
                    class_size,
                    advanced,
                    method,
                    cafeteria_credit: credit,
                    code_edition: edition,
                    net_to_gross: ntg,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Identical requests give identical results.
    #[test]
    fn property_compute_is_idempotent(request in request()) {
        prop_assert_eq!(compute(&request), compute(&request));
    }

    /// PROPERTY: Totals add up, and gross is net marked up by the factor.
    #[test]
    fn property_totals_are_consistent(request in request()) {
        let result = compute(&request);

        let rooms: u64 = result.rooms.iter().map(|r| r.total_sf()).sum();
        prop_assert_eq!(
            result.total_instructional_sf,
            rooms + result.cafeteria_instructional_credit
        );

        let support: u64 = result.support.iter().map(|s| s.sf).sum();
        prop_assert_eq!(result.total_support_sf, support);
        prop_assert_eq!(
            result.net_sf,
            result.total_instructional_sf + result.library_sf + result.gym_sf + result.total_support_sf
        );
        prop_assert!(result.gross_sf >= result.net_sf);
        prop_assert!((1.1..=1.7).contains(&result.net_to_gross));
        prop_assert_eq!(
            result.compliance.meets_aggregate,
            result.total_instructional_sf >= result.aggregate_sf
        );
    }

    /// PROPERTY: Non-positive enrollment always yields the empty program.
    #[test]
    fn property_non_positive_enrollment_is_empty(
        request in request(),
        enrollment in i64::MIN..=0,
    ) {
        let result = compute(&ProgramRequest { enrollment, ..request });

        prop_assert!(result.rooms.is_empty());
        prop_assert!(result.support.is_empty());
        prop_assert!(result.plumbing.is_none());
        prop_assert_eq!(result.total_instructional_sf, 0);
        prop_assert_eq!(result.total_support_sf, 0);
        prop_assert_eq!(result.net_sf, 0);
        prop_assert_eq!(result.gross_sf, 0);
    }

    /// PROPERTY: Elementary homerooms are ⌈N/S⌉ rooms of S × area-per-student.
    #[test]
    fn property_elementary_homeroom_formula(
        enrollment in 1i64..10_000,
        class_size in 1u32..=22,
        level in flexibility(),
    ) {
        let request = ProgramRequest::new(CampusType::Elementary, enrollment)
            .with_class_size(class_size)
            .with_flexibility(level);
        let result = compute(&request);

        let homerooms = result
            .rooms
            .iter()
            .find(|r| r.space_type.contains("Homerooms"))
            .expect("homeroom line");
        let sf_per_student = CampusStandard::for_campus(CampusType::Elementary).sf_per_student(level);

        prop_assert_eq!(homerooms.count, (enrollment as u64).div_ceil(class_size as u64));
        prop_assert_eq!(
            homerooms.total_sf(),
            homerooms.count * class_size as u64 * sf_per_student as u64
        );
    }

    /// PROPERTY: Net-to-gross overrides are clamped into [1.1, 1.7], never rejected.
    #[test]
    fn property_net_to_gross_override_is_clamped(factor in -10.0f64..10.0) {
        let result = compute(&ProgramRequest::new(CampusType::Middle, 900).with_net_to_gross(factor));
        prop_assert_eq!(result.net_to_gross, factor.clamp(1.1, 1.7));
    }

    /// PROPERTY: The cafeteria credit never counts under the quantitative method.
    #[test]
    fn property_quantitative_ignores_cafeteria_credit(request in request()) {
        let request = ProgramRequest {
            method: ComplianceMethod::Quantitative,
            cafeteria_credit: true,
            ..request
        };
        prop_assert_eq!(compute(&request).cafeteria_instructional_credit, 0);
    }
}
