//! Compliance method value object

use serde::{Deserialize, Serialize};

/// Regulatory accounting method for instructional space
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceMethod {
    /// Aggregate area-per-student test, §61.1040(h)
    #[default]
    Quantitative,
    /// Educational-program narrative, §61.1040(i); allows the cafeteria credit
    Qualitative,
}

impl ComplianceMethod {
    pub fn is_qualitative(&self) -> bool {
        matches!(self, ComplianceMethod::Qualitative)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplianceMethod::Quantitative => "Quantitative",
            ComplianceMethod::Qualitative => "Qualitative",
        }
    }

    /// Governing subsection of the facility rule
    pub fn citation(&self) -> &'static str {
        match self {
            ComplianceMethod::Quantitative => "§61.1040(h)",
            ComplianceMethod::Qualitative => "§61.1040(i)",
        }
    }
}

impl std::fmt::Display for ComplianceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
