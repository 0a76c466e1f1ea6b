//! Per-campus area and staffing standards
//!
//! Area-per-student values follow 19 TAC §61.1040; class-size limits follow
//! TEC §25.112; support benchmarks are typical district educational
//! specifications.

use serde::Serialize;

use crate::domain::entities::AdvancedParameters;
use crate::domain::value_objects::{CampusType, FlexibilityLevel, ScienceConfig};

/// Area per student for each flexibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlexibilityAreas {
    pub l1: u32,
    pub l2: u32,
    pub l3: u32,
    pub l4: u32,
}

impl FlexibilityAreas {
    pub fn get(&self, level: FlexibilityLevel) -> u32 {
        match level {
            FlexibilityLevel::L1 => self.l1,
            FlexibilityLevel::L2 => self.l2,
            FlexibilityLevel::L3 => self.l3,
            FlexibilityLevel::L4 => self.l4,
        }
    }
}

/// Science area per student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScienceAreas {
    pub combo: u32,
    /// Stand-alone laboratory; `None` where the campus only builds combo labs
    pub separate_lab: Option<u32>,
}

/// Support-space area per enrolled student
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportBenchmarks {
    pub admin: f64,
    pub teacher_work: f64,
    pub cafeteria: f64,
    pub custodial: f64,
    pub mechanical: f64,
}

/// Area, class-size and staffing standard for one campus type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CampusStandard {
    pub campus: CampusType,
    pub default_class_size: u32,
    pub max_class_size: u32,
    pub science_max_class_size: u32,
    pub area_per_student: FlexibilityAreas,
    pub gym_area: u64,
    pub science: ScienceAreas,
    pub staff_ratio: f64,
    pub support: SupportBenchmarks,
    pub net_to_gross: f64,
}

const ELEMENTARY: CampusStandard = CampusStandard {
    campus: CampusType::Elementary,
    default_class_size: 22,
    max_class_size: 22,
    science_max_class_size: 25,
    area_per_student: FlexibilityAreas {
        l1: 36,
        l2: 36,
        l3: 42,
        l4: 42,
    },
    gym_area: 3000,
    science: ScienceAreas {
        combo: 50,
        separate_lab: None,
    },
    staff_ratio: 0.10,
    support: SupportBenchmarks {
        admin: 2.5,
        teacher_work: 1.5,
        cafeteria: 12.0,
        custodial: 0.8,
        mechanical: 3.0,
    },
    net_to_gross: 1.35,
};

const MIDDLE: CampusStandard = CampusStandard {
    campus: CampusType::Middle,
    default_class_size: 25,
    max_class_size: 25,
    science_max_class_size: 28,
    area_per_student: FlexibilityAreas {
        l1: 32,
        l2: 32,
        l3: 36,
        l4: 36,
    },
    gym_area: 4800,
    science: ScienceAreas {
        combo: 58,
        separate_lab: Some(42),
    },
    staff_ratio: 0.08,
    support: SupportBenchmarks {
        admin: 2.0,
        teacher_work: 1.2,
        cafeteria: 10.0,
        custodial: 0.7,
        mechanical: 2.8,
    },
    net_to_gross: 1.38,
};

const HIGH: CampusStandard = CampusStandard {
    campus: CampusType::High,
    default_class_size: 25,
    max_class_size: 25,
    science_max_class_size: 28,
    area_per_student: FlexibilityAreas {
        l1: 32,
        l2: 32,
        l3: 36,
        l4: 36,
    },
    gym_area: 7500,
    science: ScienceAreas {
        combo: 58,
        separate_lab: Some(42),
    },
    staff_ratio: 0.07,
    support: SupportBenchmarks {
        admin: 1.8,
        teacher_work: 1.0,
        cafeteria: 9.0,
        custodial: 0.6,
        mechanical: 2.5,
    },
    net_to_gross: 1.40,
};

impl CampusStandard {
    pub fn for_campus(campus: CampusType) -> &'static CampusStandard {
        match campus {
            CampusType::Elementary => &ELEMENTARY,
            CampusType::Middle => &MIDDLE,
            CampusType::High => &HIGH,
        }
    }

    pub fn sf_per_student(&self, level: FlexibilityLevel) -> u32 {
        self.area_per_student.get(level)
    }

    /// Clamp a requested class size into `[1, max_class_size]`
    pub fn clamp_class_size(&self, requested: u32) -> u32 {
        requested.clamp(1, self.max_class_size)
    }

    /// Staff head-count, rounded up
    pub fn staff_count(&self, enrollment: u64) -> u64 {
        (enrollment as f64 * self.staff_ratio).ceil() as u64
    }

    /// Advanced parameters a new program on this campus starts from
    pub fn default_advanced(&self) -> AdvancedParameters {
        match self.campus {
            CampusType::Elementary => AdvancedParameters {
                periods_per_day: 1,
                utilization: 0.85,
                sped_pct: 0.12,
                sped_room_cap: 12,
                science_config: ScienceConfig::Combo,
                elective_rooms: 2,
            },
            CampusType::Middle => AdvancedParameters {
                periods_per_day: 7,
                utilization: 0.85,
                sped_pct: 0.12,
                sped_room_cap: 12,
                science_config: ScienceConfig::Combo,
                elective_rooms: 4,
            },
            CampusType::High => AdvancedParameters {
                periods_per_day: 7,
                utilization: 0.80,
                sped_pct: 0.12,
                sped_room_cap: 12,
                science_config: ScienceConfig::Combo,
                elective_rooms: 6,
            },
        }
    }
}
