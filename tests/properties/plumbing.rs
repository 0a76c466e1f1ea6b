//! Property tests for plumbing fixture sizing.

use proptest::prelude::*;

use schoolspace::domain::policies::RegulatoryProfile;
use schoolspace::domain::services::plan_plumbing;
use schoolspace::domain::services::plumbing::{drinking_fountains, staff_fixtures, student_fixtures};
use schoolspace::CodeEdition;

fn edition() -> impl Strategy<Value = CodeEdition> {
    proptest::sample::select(CodeEdition::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Student fixtures never decrease as enrollment grows.
    #[test]
    fn property_student_fixtures_monotonic(students in 0u64..20_000, extra in 0u64..500) {
        let smaller = student_fixtures(students, 0.67);
        let larger = student_fixtures(students + extra, 0.67);

        prop_assert!(larger.wc_male >= smaller.wc_male);
        prop_assert!(larger.wc_female >= smaller.wc_female);
        prop_assert!(larger.lav_male >= smaller.lav_male);
        prop_assert!(larger.lav_female >= smaller.lav_female);
    }

    /// PROPERTY: Staff fixtures never decrease as head-count grows.
    #[test]
    fn property_staff_fixtures_monotonic(staff in 0u64..2_000, extra in 0u64..200) {
        let smaller = staff_fixtures(staff, 0.5);
        let larger = staff_fixtures(staff + extra, 0.5);

        prop_assert!(larger.wc_male >= smaller.wc_male);
        prop_assert!(larger.lav_male >= smaller.lav_male);
    }

    /// PROPERTY: Drinking fountains never decrease with occupants, for every edition.
    #[test]
    fn property_drinking_fountains_monotonic(
        edition in edition(),
        occupants in 0u64..20_000,
        extra in 0u64..500,
    ) {
        let profile = RegulatoryProfile::for_edition(edition);
        prop_assert!(
            drinking_fountains(occupants + extra, profile) >= drinking_fountains(occupants, profile)
        );
    }

    /// PROPERTY: Clusters hold at least the required water closets.
    #[test]
    fn property_cluster_layout_covers_requirement(students in 1u64..20_000, staff in 1u64..2_000) {
        let detail = plan_plumbing(students, staff, RegulatoryProfile::for_edition(CodeEdition::Ibc2021));

        for set in [detail.student, detail.staff] {
            let male = set.layout.male;
            let female = set.layout.female;
            prop_assert!((male.accessible_stalls + male.standard_stalls) * set.clusters >= set.wc_male);
            prop_assert!((female.accessible_stalls + female.standard_stalls) * set.clusters >= set.wc_female);
            prop_assert!(male.lavatories * set.clusters >= set.lav_male);
            prop_assert_eq!(female.urinals, 0);
        }
        prop_assert!(detail.student.clusters >= 2);
        prop_assert_eq!(detail.total_sf, detail.student.sf + detail.staff.sf);
    }
}

#[test]
fn drinking_fountain_threshold_boundary_for_every_edition() {
    for edition in CodeEdition::ALL {
        let profile = RegulatoryProfile::for_edition(edition);
        let threshold = profile.drinking_fountain_exempt_threshold as u64;

        assert_eq!(drinking_fountains(threshold, profile), 0, "{edition:?}");
        assert_eq!(
            drinking_fountains(threshold + 1, profile),
            (threshold + 1).div_ceil(100),
            "{edition:?}"
        );
    }
}
