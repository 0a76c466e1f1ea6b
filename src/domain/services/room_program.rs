//! Instructional room program
//!
//! Elementary campuses size one self-contained homeroom per class section.
//! Secondary campuses schedule each core subject's sections across the
//! day, so rooms = sections ÷ (periods × utilization), rounded up.

use crate::domain::entities::{AdvancedParameters, RoomLineItem};
use crate::domain::policies::facility::SPED_SF_PER_STUDENT;
use crate::domain::policies::CampusStandard;
use crate::domain::value_objects::{CampusType, FlexibilityLevel, ScienceConfig};

const CORE_SUBJECTS: [&str; 3] = [
    "Math Classrooms",
    "ELA Classrooms",
    "Social Studies Classrooms",
];

/// Instructional rooms and the totals derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct RoomProgram {
    pub rooms: Vec<RoomLineItem>,
    /// Sum of count × area over every room line
    pub total_instructional_sf: u64,
    /// Enrollment × area-per-student; a comparison baseline only
    pub aggregate_sf: u64,
}

/// Build the instructional room program.
///
/// `class_size` is expected to be clamped by the caller; a zero is treated
/// as one so the section count stays finite.
pub fn plan_rooms(
    standard: &CampusStandard,
    enrollment: u64,
    level: FlexibilityLevel,
    class_size: u32,
    advanced: &AdvancedParameters,
) -> RoomProgram {
    let sf_per_student = standard.sf_per_student(level);
    let class_size = class_size.max(1);

    let mut rooms = match standard.campus {
        CampusType::Elementary => elementary_rooms(standard, enrollment, class_size, sf_per_student, advanced),
        CampusType::Middle | CampusType::High => {
            secondary_rooms(standard, enrollment, class_size, sf_per_student, advanced)
        }
    };
    rooms.push(special_education_rooms(enrollment, advanced));

    let total_instructional_sf = rooms.iter().map(RoomLineItem::total_sf).sum();

    RoomProgram {
        rooms,
        total_instructional_sf,
        aggregate_sf: enrollment * sf_per_student as u64,
    }
}

fn elementary_rooms(
    standard: &CampusStandard,
    enrollment: u64,
    class_size: u32,
    sf_per_student: u32,
    advanced: &AdvancedParameters,
) -> Vec<RoomLineItem> {
    let homerooms = enrollment.div_ceil(class_size as u64);
    let science_max = standard.science_max_class_size;
    let combo_sf = standard.science.combo;

    vec![
        RoomLineItem::new("General Classrooms (Homerooms)", homerooms, class_size, sf_per_student)
            .with_note("Self-contained homerooms")
            .with_code("§61.1040(h)(1)(A)"),
        RoomLineItem::new("Science Combo Classroom/Labs", homerooms.div_ceil(3), science_max, combo_sf)
            .with_note(format!("{combo_sf} SF/student, max {science_max}"))
            .with_code("§61.1040(g)(2)(A)(i)"),
        RoomLineItem::new(
            "Elective Rooms (Art, Music, etc.)",
            advanced.elective_rooms as u64,
            class_size,
            sf_per_student,
        )
        .with_note("Specials rotation rooms")
        .with_code("§61.1040(h)(1)(F)"),
    ]
}

fn secondary_rooms(
    standard: &CampusStandard,
    enrollment: u64,
    class_size: u32,
    sf_per_student: u32,
    advanced: &AdvancedParameters,
) -> Vec<RoomLineItem> {
    let sections = enrollment.div_ceil(class_size as u64);
    let rooms_per_subject = (sections as f64 / advanced.room_turns()).ceil() as u64;
    let schedule_note = format!(
        "{} sec. ÷ ({} per. × {:.0}% util.)",
        sections,
        advanced.periods_per_day,
        advanced.utilization * 100.0
    );

    let mut rooms: Vec<RoomLineItem> = CORE_SUBJECTS
        .iter()
        .map(|subject| {
            RoomLineItem::new(*subject, rooms_per_subject, class_size, sf_per_student)
                .with_note(schedule_note.clone())
                .with_code("§61.1040(h)(1)(A)")
        })
        .collect();

    // Science sections schedule the same way as the core subjects.
    let science_rooms = rooms_per_subject;
    let science_max = standard.science_max_class_size;

    match (advanced.science_config, standard.science.separate_lab) {
        (ScienceConfig::Separate, Some(lab_sf)) => {
            rooms.push(
                RoomLineItem::new("Science Laboratories", science_rooms, science_max, lab_sf)
                    .with_note(format!("{lab_sf} SF/student, max {science_max}"))
                    .with_code("§61.1040(g)(2)(B)"),
            );
            rooms.push(
                RoomLineItem::new(
                    "Science Classrooms (paired)",
                    science_rooms * 2,
                    class_size,
                    sf_per_student,
                )
                .with_note("2:1 classroom-to-lab ratio max")
                .with_code("§61.1040(g)(2)(C)"),
            );
        }
        (ScienceConfig::Combo, _) | (ScienceConfig::Separate, None) => {
            let combo_sf = standard.science.combo;
            rooms.push(
                RoomLineItem::new("Science Combo Classroom/Labs", science_rooms, science_max, combo_sf)
                    .with_note(format!("{combo_sf} SF/student, max {science_max}"))
                    .with_code("§61.1040(g)(2)(A)"),
            );
        }
    }

    rooms.push(
        RoomLineItem::new(
            "Elective Rooms (CTE, Fine Arts, etc.)",
            advanced.elective_rooms as u64,
            class_size,
            sf_per_student,
        )
        .with_note("User-defined elective spaces")
        .with_code("§61.1040(h)(1)(F)"),
    );

    rooms
}

fn special_education_rooms(enrollment: u64, advanced: &AdvancedParameters) -> RoomLineItem {
    let sped_students = (enrollment as f64 * advanced.sped_pct).ceil() as u64;
    let cap = advanced.sped_room_cap.max(1);
    let count = sped_students.div_ceil(cap as u64).max(1);

    RoomLineItem::new("Special Education Classrooms", count, cap, SPED_SF_PER_STUDENT)
        .with_note(format!(
            "{} SpEd ({:.0}%), {} SF/student min",
            sped_students,
            advanced.sped_pct * 100.0,
            SPED_SF_PER_STUDENT
        ))
        .with_code("§61.1040(g)(2)(K)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(campus: CampusType) -> &'static CampusStandard {
        CampusStandard::for_campus(campus)
    }

    fn find<'a>(program: &'a RoomProgram, space_type: &str) -> &'a RoomLineItem {
        program
            .rooms
            .iter()
            .find(|r| r.space_type == space_type)
            .unwrap_or_else(|| panic!("missing room line '{space_type}'"))
    }

    #[test]
    fn elementary_750_students_level_two() {
        let s = standard(CampusType::Elementary);
        let program = plan_rooms(s, 750, FlexibilityLevel::L2, 22, &s.default_advanced());

        let homerooms = find(&program, "General Classrooms (Homerooms)");
        assert_eq!(homerooms.count, 35);
        assert_eq!(homerooms.sf_per_room, 22 * 36);

        let science = find(&program, "Science Combo Classroom/Labs");
        assert_eq!(science.count, 12);
        assert_eq!(science.sf_per_room, 25 * 50);

        let electives = find(&program, "Elective Rooms (Art, Music, etc.)");
        assert_eq!(electives.count, 2);

        // ceil(750 * 0.12) = 90 students -> 8 rooms of 12
        let sped = find(&program, "Special Education Classrooms");
        assert_eq!(sped.count, 8);
        assert_eq!(sped.sf_per_room, 12 * 45);
        assert_eq!(sped.note, "90 SpEd (12%), 45 SF/student min");

        assert_eq!(program.aggregate_sf, 27_000);
        assert_eq!(
            program.total_instructional_sf,
            35 * 792 + 12 * 1250 + 2 * 792 + 8 * 540
        );
    }

    #[test]
    fn elementary_ignores_separate_science_config() {
        let s = standard(CampusType::Elementary);
        let advanced = AdvancedParameters {
            science_config: ScienceConfig::Separate,
            ..s.default_advanced()
        };
        let program = plan_rooms(s, 300, FlexibilityLevel::L1, 22, &advanced);
        assert!(program
            .rooms
            .iter()
            .all(|r| r.space_type != "Science Laboratories"));
        assert_eq!(find(&program, "Science Combo Classroom/Labs").count, 5);
    }

    #[test]
    fn secondary_core_subjects_share_room_count() {
        let s = standard(CampusType::Middle);
        let program = plan_rooms(s, 900, FlexibilityLevel::L2, 25, &s.default_advanced());

        // 36 sections / (7 * 0.85 = 5.95) = 6.05 -> 7 rooms
        for subject in CORE_SUBJECTS {
            let line = find(&program, subject);
            assert_eq!(line.count, 7);
            assert_eq!(line.note, "36 sec. ÷ (7 per. × 85% util.)");
        }
        assert_eq!(find(&program, "Science Combo Classroom/Labs").count, 7);
        assert_eq!(find(&program, "Science Combo Classroom/Labs").sf_per_room, 28 * 58);
    }

    #[test]
    fn separate_labs_pair_two_classrooms_each() {
        let s = standard(CampusType::High);
        let advanced = AdvancedParameters {
            science_config: ScienceConfig::Separate,
            ..s.default_advanced()
        };
        let program = plan_rooms(s, 1200, FlexibilityLevel::L3, 25, &advanced);

        // 48 sections / (7 * 0.8) = 8.57 -> 9
        let labs = find(&program, "Science Laboratories");
        assert_eq!(labs.count, 9);
        assert_eq!(labs.sf_per_room, 28 * 42);
        let paired = find(&program, "Science Classrooms (paired)");
        assert_eq!(paired.count, 18);
        assert_eq!(paired.sf_per_room, 25 * 36);
    }

    #[test]
    fn special_education_always_has_a_room() {
        let s = standard(CampusType::High);
        let advanced = AdvancedParameters {
            sped_pct: 0.0,
            ..s.default_advanced()
        };
        let program = plan_rooms(s, 50, FlexibilityLevel::L1, 25, &advanced);
        assert_eq!(find(&program, "Special Education Classrooms").count, 1);
    }

    #[test]
    fn zero_class_size_does_not_panic() {
        let s = standard(CampusType::Elementary);
        let program = plan_rooms(s, 10, FlexibilityLevel::L1, 0, &s.default_advanced());
        assert_eq!(find(&program, "General Classrooms (Homerooms)").count, 10);
    }
}
