//! Support (non-instructional) space program
//!
//! Every line item is enrollment × a per-student benchmark, rounded up on
//! its own.

use crate::domain::entities::SupportLineItem;
use crate::domain::policies::facility::CAFETERIA_CREDIT_FRACTION;
use crate::domain::policies::CampusStandard;
use crate::domain::value_objects::{CodeEdition, ComplianceMethod};

/// Support line items and the cafeteria credit they may carry
#[derive(Debug, Clone, PartialEq)]
pub struct SupportProgram {
    pub items: Vec<SupportLineItem>,
    pub cafeteria_sf: u64,
    /// Cafeteria area counted as instructional; zero unless granted
    pub cafeteria_instructional_credit: u64,
}

impl SupportProgram {
    pub fn total_sf(&self) -> u64 {
        self.items.iter().map(|i| i.sf).sum()
    }
}

/// Whether the cafeteria credit applies.
///
/// Only the qualitative method recognizes the credit; the request flag is
/// ignored under the quantitative method.
pub fn cafeteria_credit_applies(method: ComplianceMethod, requested: bool) -> bool {
    method.is_qualitative() && requested
}

pub fn plan_support(
    standard: &CampusStandard,
    enrollment: u64,
    staff_count: u64,
    method: ComplianceMethod,
    cafeteria_credit_requested: bool,
    edition: CodeEdition,
) -> SupportProgram {
    let bench = &standard.support;
    let area = |per_student: f64| (enrollment as f64 * per_student).ceil() as u64;

    let cafeteria_sf = area(bench.cafeteria);
    let credited = cafeteria_credit_applies(method, cafeteria_credit_requested);
    let cafeteria_instructional_credit = if credited {
        (cafeteria_sf as f64 * CAFETERIA_CREDIT_FRACTION).ceil() as u64
    } else {
        0
    };

    let items = vec![
        SupportLineItem::new(
            "Administration & Front Office",
            area(bench.admin),
            "Principal, AP, registrar, counselors, nurse, reception, conference",
            "District Ed. Specs.",
        ),
        SupportLineItem::new(
            "Teacher Workrooms & Lounges",
            area(bench.teacher_work),
            format!("{staff_count} staff — planning rooms, workrooms, break areas"),
            "District Ed. Specs.",
        ),
        SupportLineItem::new(
            "Cafeteria / Kitchen / Serving",
            cafeteria_sf,
            "Kitchen, serving lines, dining (~1/3 student body per lunch)",
            if credited {
                "§61.1040(i)(2)"
            } else {
                "Non-instructional"
            },
        ),
        SupportLineItem::new(
            "Custodial & Storage",
            area(bench.custodial),
            "Custodial closets, receiving dock, central/IT storage",
            "IBC / District Std.",
        ),
        SupportLineItem::new(
            "Mechanical / Electrical / Telecom",
            area(bench.mechanical),
            "HVAC, electrical rooms, MDF/IDF, fire riser",
            format!("IBC {edition} / IMC"),
        ),
    ];

    SupportProgram {
        items,
        cafeteria_sf,
        cafeteria_instructional_credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CampusType;

    fn elementary() -> &'static CampusStandard {
        CampusStandard::for_campus(CampusType::Elementary)
    }

    #[test]
    fn elementary_750_benchmarks() {
        let program = plan_support(
            elementary(),
            750,
            75,
            ComplianceMethod::Quantitative,
            false,
            CodeEdition::Ibc2021,
        );
        let areas: Vec<u64> = program.items.iter().map(|i| i.sf).collect();
        assert_eq!(areas, vec![1875, 1125, 9000, 600, 2250]);
        assert_eq!(program.total_sf(), 14_850);
        assert_eq!(program.items[1].note, "75 staff — planning rooms, workrooms, break areas");
        assert_eq!(program.items[4].code, "IBC 2021 / IMC");
    }

    #[test]
    fn quantitative_method_never_grants_credit() {
        let program = plan_support(
            elementary(),
            750,
            75,
            ComplianceMethod::Quantitative,
            true,
            CodeEdition::Ibc2021,
        );
        assert_eq!(program.cafeteria_instructional_credit, 0);
        assert_eq!(program.items[2].code, "Non-instructional");
    }

    #[test]
    fn qualitative_credit_is_half_the_cafeteria() {
        let program = plan_support(
            elementary(),
            750,
            75,
            ComplianceMethod::Qualitative,
            true,
            CodeEdition::Ibc2021,
        );
        assert_eq!(program.cafeteria_sf, 9000);
        assert_eq!(program.cafeteria_instructional_credit, 4500);
        assert_eq!(program.items[2].code, "§61.1040(i)(2)");
    }

    #[test]
    fn odd_cafeteria_credit_rounds_up() {
        // high school: 101 * 9 = 909 -> credit ceil(454.5) = 455
        let program = plan_support(
            CampusStandard::for_campus(CampusType::High),
            101,
            8,
            ComplianceMethod::Qualitative,
            true,
            CodeEdition::Ibc2018,
        );
        assert_eq!(program.cafeteria_sf, 909);
        assert_eq!(program.cafeteria_instructional_credit, 455);
    }
}
