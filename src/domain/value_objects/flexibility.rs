//! Instructional flexibility level - drives area-per-student

use serde::{Deserialize, Serialize};

/// One of the four instructional-delivery postures
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum FlexibilityLevel {
    #[serde(rename = "L1")]
    #[value(name = "L1", alias = "l1")]
    L1,
    #[default]
    #[serde(rename = "L2")]
    #[value(name = "L2", alias = "l2")]
    L2,
    #[serde(rename = "L3")]
    #[value(name = "L3", alias = "l3")]
    L3,
    #[serde(rename = "L4")]
    #[value(name = "L4", alias = "l4")]
    L4,
}

impl FlexibilityLevel {
    pub const ALL: [FlexibilityLevel; 4] = [
        FlexibilityLevel::L1,
        FlexibilityLevel::L2,
        FlexibilityLevel::L3,
        FlexibilityLevel::L4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FlexibilityLevel::L1 => "Level 1",
            FlexibilityLevel::L2 => "Level 2",
            FlexibilityLevel::L3 => "Level 3",
            FlexibilityLevel::L4 => "Level 4",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FlexibilityLevel::L1 => {
                "Fixed teacher presentation, attached desk/chairs, teacher-centric, minimal flexibility"
            }
            FlexibilityLevel::L2 => {
                "Fixed presentation, detached furniture, moderate digital access, limited outdoor visibility"
            }
            FlexibilityLevel::L3 => {
                "Multiple presentation spaces, flexible mobile furniture, high digital access, outdoor proximity"
            }
            FlexibilityLevel::L4 => {
                "Mobile presentation spaces, direct outdoor access, reconfigurable walls, anytime/anywhere philosophy"
            }
        }
    }
}

impl std::fmt::Display for FlexibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
