//! Science lab configuration value object

use serde::{Deserialize, Serialize};

/// How science instruction space is laid out on secondary campuses
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScienceConfig {
    /// Combined classroom/laboratory rooms
    #[default]
    Combo,
    /// Stand-alone laboratories, each paired with two classrooms
    Separate,
}

impl std::fmt::Display for ScienceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScienceConfig::Combo => write!(f, "combo"),
            ScienceConfig::Separate => write!(f, "separate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        let config: ScienceConfig = serde_json::from_str("\"separate\"").unwrap();
        assert_eq!(config, ScienceConfig::Separate);
    }
}
