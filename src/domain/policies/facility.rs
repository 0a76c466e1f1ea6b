//! Campus-independent sizing rules: library, special education, restrooms

/// Minimum area per special-education student
pub const SPED_SF_PER_STUDENT: u32 = 45;

/// Persons per required fixture
pub mod fixture_ratio {
    pub const WATER_CLOSET: u64 = 50;
    pub const LAVATORY: u64 = 50;
    pub const DRINKING_FOUNTAIN: u64 = 100;
}

/// Floor area per restroom fixture, in square feet
pub mod restroom_area {
    pub const STANDARD_STALL: u64 = 35;
    pub const ACCESSIBLE_STALL: u64 = 65;
    pub const URINAL: u64 = 15;
    pub const LAVATORY: u64 = 12;
    /// Multiplier for circulation inside the toilet room
    pub const CIRCULATION: f64 = 1.35;
}

/// Fraction of cafeteria area that may count as instructional space
pub const CAFETERIA_CREDIT_FRACTION: f64 = 0.5;

/// Bounds for a caller-supplied net-to-gross factor
pub const NET_TO_GROSS_MIN: f64 = 1.1;
pub const NET_TO_GROSS_MAX: f64 = 1.7;

/// Largest enrollment sized; larger requests are clamped to it
pub const MAX_ENROLLMENT: u64 = 1_000_000;

/// Library area for the given enrollment
///
/// 1,400 SF covers the first 100 students; each further student adds
/// 4 SF up to 500, 3 SF up to 2,000 and 2 SF beyond.
pub fn library_area(enrollment: u64) -> u64 {
    match enrollment {
        0..=100 => 1400,
        101..=500 => 1400 + 4 * (enrollment - 100),
        501..=2000 => 3000 + 3 * (enrollment - 500),
        _ => 7500 + 2 * (enrollment - 2000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_flat_up_to_one_hundred() {
        assert_eq!(library_area(1), 1400);
        assert_eq!(library_area(100), 1400);
    }

    #[test]
    fn library_tiers_are_continuous() {
        assert_eq!(library_area(101), 1404);
        assert_eq!(library_area(500), 3000);
        assert_eq!(library_area(501), 3003);
        assert_eq!(library_area(2000), 7500);
        assert_eq!(library_area(2001), 7502);
    }

    #[test]
    fn library_for_750_students() {
        assert_eq!(library_area(750), 3750);
    }
}
