//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::ProgramRequest;
use crate::domain::entities::AdvancedParameters;
use crate::domain::policies::CampusStandard;
use crate::domain::value_objects::{
    CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel, ScienceConfig,
};
use crate::error::SchoolspaceResult;

use super::loader::{self, ConfigWarning};

/// Enrollment used when neither flags nor config name one
pub const DEFAULT_ENROLLMENT: i64 = 750;

/// `[program]` section: the design criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default)]
    pub campus: Option<CampusType>,
    #[serde(default)]
    pub enrollment: Option<i64>,
    #[serde(default)]
    pub flexibility: Option<FlexibilityLevel>,
    #[serde(default)]
    pub class_size: Option<u32>,
    #[serde(default)]
    pub method: Option<ComplianceMethod>,
    #[serde(default)]
    pub cafeteria_credit: Option<bool>,
    #[serde(default)]
    pub code_edition: Option<CodeEdition>,
    #[serde(default)]
    pub net_to_gross: Option<f64>,
}

/// `[advanced]` section: overrides of the campus default parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedConfig {
    #[serde(default)]
    pub periods_per_day: Option<u32>,
    #[serde(default)]
    pub utilization: Option<f64>,
    #[serde(default)]
    pub sped_pct: Option<f64>,
    #[serde(default)]
    pub sped_room_cap: Option<u32>,
    #[serde(default)]
    pub science_config: Option<ScienceConfig>,
    #[serde(default)]
    pub elective_rooms: Option<u32>,
}

impl AdvancedConfig {
    /// Overlay the set fields onto `base`
    pub fn apply(&self, base: AdvancedParameters) -> AdvancedParameters {
        AdvancedParameters {
            periods_per_day: self.periods_per_day.unwrap_or(base.periods_per_day),
            utilization: self.utilization.unwrap_or(base.utilization),
            sped_pct: self.sped_pct.unwrap_or(base.sped_pct),
            sped_room_cap: self.sped_room_cap.unwrap_or(base.sped_room_cap),
            science_config: self.science_config.unwrap_or(base.science_config),
            elective_rooms: self.elective_rooms.unwrap_or(base.elective_rooms),
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub program: ProgramConfig,

    #[serde(default)]
    pub advanced: AdvancedConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SchoolspaceResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SchoolspaceResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SCHOOLSPACE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn campus(&self) -> CampusType {
        self.program.campus.unwrap_or_default()
    }

    /// Build a request from this configuration.
    ///
    /// Advanced parameters start from the campus defaults; only the keys
    /// present in `[advanced]` replace them.
    pub fn to_request(&self) -> ProgramRequest {
        let campus = self.campus();
        let p = &self.program;
        let defaults = CampusStandard::for_campus(campus).default_advanced();

        ProgramRequest {
            campus,
            enrollment: p.enrollment.unwrap_or(DEFAULT_ENROLLMENT),
            flexibility: p.flexibility.unwrap_or_default(),
            class_size: p.class_size,
            advanced: self.advanced.apply(defaults),
            method: p.method.unwrap_or_default(),
            cafeteria_credit: p.cafeteria_credit.unwrap_or(false),
            code_edition: p.code_edition.unwrap_or_default(),
            net_to_gross: p.net_to_gross,
        }
    }
}
