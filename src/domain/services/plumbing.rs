//! Plumbing fixture and restroom sizing
//!
//! Students and staff are sized as separate populations. Each population
//! is split evenly by sex (rounded up independently), fixtures are
//! derived per sex, and the fixtures are distributed over restroom
//! clusters to estimate floor area.

use crate::domain::entities::{ClusterLayout, PlumbingDetail, PlumbingFixtureSet, RestroomLayout};
use crate::domain::policies::facility::{fixture_ratio, restroom_area};
use crate::domain::policies::RegulatoryProfile;

/// Students served per restroom cluster
const STUDENTS_PER_CLUSTER: u64 = 250;
/// Staff served per restroom cluster
const STAFF_PER_CLUSTER: u64 = 40;

/// Size every restroom fixture for the building.
pub fn plan_plumbing(students: u64, staff: u64, profile: &RegulatoryProfile) -> PlumbingDetail {
    let student = student_fixtures(students, profile.urinal_substitution_max);
    let staff_set = staff_fixtures(staff, profile.staff_urinal_substitution_max());

    PlumbingDetail {
        student,
        staff: staff_set,
        drinking_fountains: drinking_fountains(students + staff, profile),
        total_sf: student.sf + staff_set.sf,
        gender_neutral: profile.gender_neutral_provisions,
    }
}

/// Half of a population, rounded up
pub fn per_sex(count: u64) -> u64 {
    count.div_ceil(2)
}

/// Student fixtures: one water closet and one lavatory per 50 per sex.
pub fn student_fixtures(students: u64, urinal_cap: f64) -> PlumbingFixtureSet {
    let per_sex = per_sex(students);
    let wc = per_sex.div_ceil(fixture_ratio::WATER_CLOSET);
    let lav = per_sex.div_ceil(fixture_ratio::LAVATORY);
    let clusters = students.div_ceil(STUDENTS_PER_CLUSTER).max(2);

    fixture_set(wc, wc, lav, lav, clusters, urinal_cap)
}

/// Staff fixtures use the tiered business-occupancy ratios.
pub fn staff_fixtures(staff: u64, urinal_cap: f64) -> PlumbingFixtureSet {
    let per_sex = per_sex(staff);
    let wc = staff_water_closets(per_sex);
    let lav = staff_lavatories(per_sex);
    let clusters = staff.div_ceil(STAFF_PER_CLUSTER).max(1);

    fixture_set(wc, wc, lav, lav, clusters, urinal_cap)
}

/// 1 per 25 for the first 25, then 1 per 50.
pub fn staff_water_closets(per_sex: u64) -> u64 {
    if per_sex <= 25 {
        per_sex.div_ceil(25)
    } else {
        1 + (per_sex - 25).div_ceil(50)
    }
}

/// 1 per 40 for the first 40, then 1 per 80.
pub fn staff_lavatories(per_sex: u64) -> u64 {
    if per_sex <= 40 {
        per_sex.div_ceil(40)
    } else {
        1 + (per_sex - 40).div_ceil(80)
    }
}

/// Drinking fountains, zero at or below the edition's exemption load.
pub fn drinking_fountains(occupants: u64, profile: &RegulatoryProfile) -> u64 {
    if occupants <= profile.drinking_fountain_exempt_threshold as u64 {
        0
    } else {
        occupants.div_ceil(fixture_ratio::DRINKING_FOUNTAIN)
    }
}

fn fixture_set(
    wc_male: u64,
    wc_female: u64,
    lav_male: u64,
    lav_female: u64,
    clusters: u64,
    urinal_cap: f64,
) -> PlumbingFixtureSet {
    let layout = ClusterLayout {
        male: restroom_layout(wc_male, lav_male, clusters, Some(urinal_cap)),
        female: restroom_layout(wc_female, lav_female, clusters, None),
    };

    PlumbingFixtureSet {
        wc_male,
        wc_female,
        lav_male,
        lav_female,
        clusters,
        layout,
        sf: restroom_sf(&layout, clusters),
    }
}

/// One restroom's share of the fixtures.
///
/// Each restroom keeps exactly one accessible stall. Urinals, where
/// allowed, are the capped fraction of the per-cluster water closets.
fn restroom_layout(
    water_closets: u64,
    lavatories: u64,
    clusters: u64,
    urinal_cap: Option<f64>,
) -> RestroomLayout {
    let wc_per_cluster = water_closets.div_ceil(clusters);
    let urinals = match urinal_cap {
        Some(cap) => (wc_per_cluster as f64 * cap).floor() as u64,
        None => 0,
    };

    RestroomLayout {
        accessible_stalls: 1,
        standard_stalls: wc_per_cluster.saturating_sub(1),
        urinals,
        lavatories: lavatories.div_ceil(clusters),
    }
}

fn fixture_area(room: &RestroomLayout) -> u64 {
    room.accessible_stalls * restroom_area::ACCESSIBLE_STALL
        + room.standard_stalls * restroom_area::STANDARD_STALL
        + room.urinals * restroom_area::URINAL
        + room.lavatories * restroom_area::LAVATORY
}

fn restroom_sf(layout: &ClusterLayout, clusters: u64) -> u64 {
    let per_cluster = fixture_area(&layout.male) + fixture_area(&layout.female);
    (per_cluster as f64 * restroom_area::CIRCULATION * clusters as f64).ceil() as u64
}
