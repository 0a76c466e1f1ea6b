//! Caveat text
//!
//! Fixed strings every presentation of a result must carry. The core only
//! guarantees they are available; rendering them is up to the caller.

use crate::domain::value_objects::ComplianceMethod;

/// Shown beneath every computed program
pub const DISCLAIMER: &str = "Estimated minimums for early feasibility. Science lab safety \
(chemical storage (F), fume hoods (D), eye/face wash (G), safety showers (H), emergency \
shut-offs (J) per §61.1040(g)(2)) not sized by this tool. Local amendments may modify IBC \
requirements — verify with AHJ. Does not replace licensed architect or engineer services.";

/// Rule the program is measured against
pub const RULE_CITATION: &str = "TAC Title 19, Part 2, Ch. 61, Subchapter CC · Texas Accessibility Standards";

/// One-paragraph explanation of how a compliance method counts space
pub fn method_note(method: ComplianceMethod) -> &'static str {
    match method {
        ComplianceMethod::Quantitative => {
            "Quantitative method per §61.1040(h): instructional rooms must meet or exceed \
             enrollment × area-per-student for the selected flexibility level. Cafeteria \
             space never counts as instructional."
        }
        ComplianceMethod::Qualitative => {
            "Qualitative method per §61.1040(i): the educational program justifies the space. \
             Half of the cafeteria may be counted as instructional per §61.1040(i)(2)."
        }
    }
}
