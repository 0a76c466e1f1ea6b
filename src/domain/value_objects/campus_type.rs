//! Campus type value object - which grade band a building serves

use serde::{Deserialize, Serialize};

/// Grade band of the campus being programmed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CampusType {
    /// Elementary school (PK-5), self-contained homerooms
    #[default]
    Elementary,
    /// Middle school (6-8), departmentalized
    Middle,
    /// High school (9-12), departmentalized
    High,
}

impl CampusType {
    /// Every campus type, in table order
    pub const ALL: [CampusType; 3] = [CampusType::Elementary, CampusType::Middle, CampusType::High];

    /// Returns true for departmentalized (middle and high) campuses
    pub fn is_secondary(&self) -> bool {
        !matches!(self, CampusType::Elementary)
    }

    /// Short identifier used in config files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            CampusType::Elementary => "elementary",
            CampusType::Middle => "middle",
            CampusType::High => "high",
        }
    }

    /// Human-readable label including the grade span
    pub fn display_name(&self) -> &'static str {
        match self {
            CampusType::Elementary => "Elementary (PK–5)",
            CampusType::Middle => "Middle School (6–8)",
            CampusType::High => "High School (9–12)",
        }
    }
}

impl std::fmt::Display for CampusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
