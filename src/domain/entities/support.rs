//! SupportLineItem entity - non-instructional space

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportLineItem {
    pub space_type: String,
    pub sf: u64,
    pub note: String,
    pub code: String,
}

impl SupportLineItem {
    pub fn new(
        space_type: impl Into<String>,
        sf: u64,
        note: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            space_type: space_type.into(),
            sf,
            note: note.into(),
            code: code.into(),
        }
    }
}
