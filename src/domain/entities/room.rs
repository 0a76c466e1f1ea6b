//! RoomLineItem entity - one instructional space type in the program

use serde::Serialize;

/// A group of identical instructional rooms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomLineItem {
    pub space_type: String,
    pub count: u64,
    pub sf_per_room: u64,
    /// Area-per-student basis the room size was derived from
    pub sf_per_student: u32,
    /// Per-room student cap
    pub max_students: u32,
    pub note: String,
    /// Regulatory citation, carried verbatim for display
    pub code: String,
}

impl RoomLineItem {
    pub fn new(
        space_type: impl Into<String>,
        count: u64,
        max_students: u32,
        sf_per_student: u32,
    ) -> Self {
        Self {
            space_type: space_type.into(),
            count,
            sf_per_room: max_students as u64 * sf_per_student as u64,
            sf_per_student,
            max_students,
            note: String::new(),
            code: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Area of all rooms of this type
    pub fn total_sf(&self) -> u64 {
        self.count * self.sf_per_room
    }
}
